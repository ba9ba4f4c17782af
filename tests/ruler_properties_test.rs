//! Properties of the ruler model and widget that must hold for any valid
//! configuration.

mod common;

use common::{record, ruler_view, run_animation};
use ruler::domain::{format_value, RulerConfig};
use ruler::error::ArgumentError;
use ruler::input::Gesture;
use ruler::widgets::{RulerView, Viewport};

fn configs() -> Vec<(f64, f64, f64)> {
    vec![
        (0.0, 200.0, 1.0),
        (0.0, 0.0, 1.0),
        (-50.0, 50.0, 0.25),
        (10.0, 20.0, 3.0),
        (0.0, 1.0, 0.1),
        (0.0, 0.3, 0.1),
        (1.5, 99.5, 7.0),
    ]
}

#[test]
fn test_tick_count_formula() {
    for (min, max, interval) in configs() {
        let config = RulerConfig::new(min, max, interval).unwrap();
        let expected = (((max - min) / interval) + 1e-9).floor() as usize + 1;
        assert_eq!(config.tick_count(), expected, "{} {} {}", min, max, interval);
        assert!(config.tick_count() >= 1);
        assert_eq!(
            config.content_extent(),
            (config.tick_count() - 1) as f32 * config.tick_spacing()
        );
    }
}

#[test]
fn test_decimal_steps_keep_last_tick() {
    assert_eq!(RulerConfig::new(0.0, 0.3, 0.1).unwrap().tick_count(), 4);
    assert_eq!(RulerConfig::new(0.0, 1.0, 0.1).unwrap().tick_count(), 11);
}

#[test]
fn test_set_selected_value_rounds_and_clamps() {
    for (min, max, interval) in configs() {
        let config = RulerConfig::new(min, max, interval).unwrap();
        let last = config.last_index();
        let mut view = RulerView::new(config);

        let samples = [min, max, (min + max) / 2.0, min + interval * 0.49, max - interval * 0.51];
        for value in samples {
            if value < min || value > max {
                continue;
            }
            view.set_selected_value(value).unwrap();
            let expected = (((value - min) / interval).round() as usize).min(last);
            assert_eq!(view.selected_index(), expected, "value {}", value);
        }
    }
}

#[test]
fn test_out_of_range_value_is_rejected() {
    let mut view = ruler_view();
    view.set_selected_index(33);
    let calls = record(&mut view);

    for value in [-0.001, 200.5, f64::NAN] {
        let err = view.set_selected_value(value).unwrap_err();
        assert!(matches!(err, ArgumentError::SelectedValueOutOfRange { .. }));
    }
    assert_eq!(view.selected_index(), 33);
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_decimal_places_validation() {
    let mut view = ruler_view();
    for places in 0..=3 {
        assert!(view.set_decimal_places(places).is_ok());
    }
    assert_eq!(
        view.set_decimal_places(4),
        Err(ArgumentError::DecimalPlacesOutOfRange { value: 4 })
    );
    assert_eq!(view.config().decimal_places(), 3);
}

#[test]
fn test_drag_release_always_snaps_exactly() {
    for distance in [-250.0, -31.0, -9.5, 0.0, 4.0, 10.0, 10.01, 47.3, 999.0, 5_000.0] {
        let mut view = ruler_view();
        view.set_selected_index(100);
        view.handle_gesture(Gesture::Down);
        view.handle_gesture(Gesture::Scroll { distance });
        view.handle_gesture(Gesture::Up);
        run_animation(&mut view);

        let expected = view.selected_index() as f32 * 20.0 - view.half_extent();
        assert_eq!(view.offset(), expected, "distance {}", distance);
    }
}

#[test]
fn test_overscroll_is_damped_and_springs_back() {
    let mut view = ruler_view();
    view.handle_gesture(Gesture::Down);
    view.handle_gesture(Gesture::Scroll { distance: -200.0 });
    // A quarter of the drag once past the first tick.
    assert_eq!(view.offset(), -150.0);
    assert_eq!(view.selected_index(), 0);

    view.handle_gesture(Gesture::Fling { velocity_y: 4_000.0 });
    view.handle_gesture(Gesture::Up);
    run_animation(&mut view);
    assert_eq!(view.offset(), -100.0);
}

#[test]
fn test_changing_max_clamps_selection() {
    let mut view = ruler_view();
    view.set_selected_index(180);
    let calls = record(&mut view);

    view.set_max_value(150.0).unwrap();
    assert_eq!(view.config().tick_count(), 151);
    assert_eq!(view.selected_index(), 150);
    assert_eq!(*calls.borrow(), vec![(150, 150.0)]);

    // Raising it again keeps the selection where it is.
    view.set_max_value(300.0).unwrap();
    assert_eq!(view.selected_index(), 150);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_changing_interval_recomputes_geometry() {
    let mut view = ruler_view();
    view.set_selected_index(40);
    view.set_interval_value(2.0).unwrap();
    assert_eq!(view.config().tick_count(), 101);
    assert_eq!(view.selected_index(), 40);
    assert_eq!(view.selected_value(), 80.0);
    assert_eq!(view.offset(), 40.0 * 20.0 - 100.0);
}

#[test]
fn test_setters_reject_invalid_geometry() {
    let mut view = ruler_view();
    assert!(view.set_min_value(500.0).is_err());
    assert!(view.set_interval_value(-1.0).is_err());
    assert!(view.set_tick_spacing(0.0).is_err());
    assert_eq!(view.min_value(), 0.0);
    assert_eq!(view.interval_value(), 1.0);
    assert_eq!(view.config().tick_spacing(), 20.0);
}

#[test]
fn test_format_examples() {
    assert_eq!(format_value(3.14159, 2), "3.14");
    assert_eq!(format_value(7.6, 0), "8");
    assert_eq!(format_value(2.5, 0), "3");
    assert_eq!(format_value(12.0, 3), "12.000");
}

#[test]
fn test_resize_keeps_selection_centred() {
    let mut view = ruler_view();
    view.set_selected_index(77);
    for height in [50.0, 333.0, 1_000.0] {
        view.set_viewport(Viewport::new(80.0, height));
        assert_eq!(view.selected_index(), 77);
        assert_eq!(view.offset(), 77.0 * 20.0 - height / 2.0);
    }
}
