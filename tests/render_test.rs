//! Drawing the ruler through a ratatui test terminal.

mod common;

use common::{down, move_to};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use ruler::domain::RulerConfig;
use ruler::widgets::{RulerView, RulerWidget};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(30, 10)).unwrap()
}

fn draw(terminal: &mut Terminal<TestBackend>, view: &mut RulerView, row_height: f32) {
    terminal
        .draw(|frame| frame.render_stateful_widget(RulerWidget::new(row_height), frame.area(), view))
        .unwrap();
}

fn row_text(buf: &Buffer, row: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, row)].symbol().to_string())
        .collect()
}

fn unit_config() -> RulerConfig {
    RulerConfig::new(0.0, 200.0, 1.0)
        .unwrap()
        .with_tick_spacing(1.0)
        .unwrap()
}

#[test]
fn test_custom_labels_replace_numbers() {
    let mut terminal = terminal();
    let mut view = RulerView::new(unit_config());
    view.set_text_labels(
        ["alpha", "beta", "gamma", "delta"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );
    draw(&mut terminal, &mut view, 1.0);
    view.set_selected_index(5);
    draw(&mut terminal, &mut view, 1.0);

    let buf = terminal.backend().buffer();
    let top = row_text(buf, 0);
    assert_eq!(top, "  ─── ────── alpha  alpha     ");

    let centre = row_text(buf, 5);
    assert!(centre.starts_with("▶ ─── ────   gamma"));
    assert_eq!(buf[(13, 5)].fg, Color::Red);
    assert!(!centre.contains("alpha"));
}

#[test]
fn test_display_cap_hides_ticks_past_cap() {
    let mut terminal = terminal();
    let config = unit_config().with_display_cap(Some(3));
    let mut view = RulerView::new(config);
    draw(&mut terminal, &mut view, 1.0);

    let buf = terminal.backend().buffer();
    for row in 6..=8 {
        assert_eq!(buf[(2, row)].symbol(), "─", "row {row}");
    }
    assert_eq!(row_text(buf, 9).trim(), "");
}

#[test]
fn test_thick_lines() {
    let mut terminal = terminal();
    let mut view = RulerView::new(unit_config().with_line_width(3.0));
    draw(&mut terminal, &mut view, 1.0);

    let buf = terminal.backend().buffer();
    assert_eq!(buf[(2, 5)].symbol(), "━");
    assert_eq!(buf[(6, 6)].symbol(), "━");
}

#[test]
fn test_drag_moves_highlight() {
    let mut terminal = terminal();
    let config = RulerConfig::new(0.0, 200.0, 1.0)
        .unwrap()
        .with_tick_spacing(5.0)
        .unwrap();
    let mut view = RulerView::new(config);
    draw(&mut terminal, &mut view, 5.0);
    assert_eq!(view.half_extent(), 25.0);

    view.handle_gesture_event(down(25.0, 0));
    view.handle_gesture_event(move_to(0.0, 16));
    assert_eq!(view.selected_index(), 5);
    draw(&mut terminal, &mut view, 5.0);

    let buf = terminal.backend().buffer();
    let centre = row_text(buf, 5);
    assert_eq!(centre.chars().nth(13), Some('5'));
    assert_eq!(buf[(13, 5)].fg, Color::Red);
    assert_eq!(buf[(13, 0)].symbol(), "0");
    assert_eq!(buf[(13, 0)].fg, Color::White);
}
