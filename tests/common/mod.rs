//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use ruler::domain::RulerConfig;
use ruler::input::GestureEvent;
use ruler::widgets::{RulerView, Viewport};

pub const FRAME: Duration = Duration::from_millis(16);

/// Calls received by a recording listener.
pub type Calls = Rc<RefCell<Vec<(usize, f64)>>>;

/// 0..=200 step 1 at 20px per tick in a 200px tall viewport.
pub fn ruler_view() -> RulerView {
    let config = RulerConfig::new(0.0, 200.0, 1.0)
        .unwrap()
        .with_tick_spacing(20.0)
        .unwrap();
    let mut view = RulerView::new(config);
    view.set_viewport(Viewport::new(100.0, 200.0));
    view
}

pub fn record(view: &mut RulerView) -> Calls {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    view.set_listener(move |_: &RulerView, index: usize, value: f64| {
        sink.borrow_mut().push((index, value));
    });
    calls
}

/// Tick the view until its animation stops. Returns the frames run.
pub fn run_animation(view: &mut RulerView) -> usize {
    let mut frames = 0;
    while view.is_animating() {
        view.tick(FRAME);
        frames += 1;
        assert!(frames < 10_000, "animation never finished");
    }
    frames
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

pub fn down(y: f32, t: u64) -> GestureEvent {
    GestureEvent::Down { y, time: ms(t) }
}

pub fn move_to(y: f32, t: u64) -> GestureEvent {
    GestureEvent::Move { y, time: ms(t) }
}

pub fn up(y: f32, t: u64) -> GestureEvent {
    GestureEvent::Up { y, time: ms(t) }
}
