//! Host application state.
//!
//! [`App`] is the single owner of the [`RulerView`]. It plays the part of
//! the hosting screen: it listens for selection changes to keep a readout up
//! to date, forwards input, drives animation frames and honours the view's
//! [`HostRequests`].

mod handlers;
mod readout;

pub use readout::Readout;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::error::RulerResult;
use crate::input::MouseMapper;
use crate::widgets::{HostRequests, RulerView};

/// Frames the readout stays highlighted after a tap.
const CLICK_FLASH_FRAMES: u8 = 8;

/// Demo host around one ruler.
pub struct App {
    pub ruler: RulerView,
    readout: Rc<RefCell<Readout>>,
    pub mouse: MouseMapper,
    pub row_height: f32,
    pub frame_interval: Duration,
    /// Set whenever the screen must be drawn again.
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// A gesture currently owns the pointer.
    pub gesture_active: bool,
    pub click_flash: u8,
    pub clicks: u64,
    started: Instant,
}

impl App {
    /// Build the ruler from `config` and select the configured initial value.
    pub fn new(config: &AppConfig) -> RulerResult<Self> {
        let mut ruler = RulerView::new(config.ruler.clone())
            .with_style(config.style.clone())
            .with_gesture_config(config.gesture.clone());
        ruler.set_text_labels(config.labels.clone());

        let readout = Rc::new(RefCell::new(Readout::from_view(&ruler)));
        let sink = Rc::clone(&readout);
        ruler.set_listener(move |ruler: &RulerView, index: usize, value: f64| {
            sink.borrow_mut().update(ruler, index, value);
        });

        if let Some(value) = config.initial_value {
            ruler.set_selected_value(value)?;
        }

        Ok(Self {
            ruler,
            readout,
            mouse: MouseMapper::new(Rect::default(), config.row_height),
            row_height: config.row_height,
            frame_interval: Duration::from_millis(config.frame_interval_ms),
            needs_redraw: true,
            should_quit: false,
            gesture_active: false,
            click_flash: 0,
            clicks: 0,
            started: Instant::now(),
        })
    }

    /// Latest selection as reported to the listener.
    pub fn readout(&self) -> Readout {
        self.readout.borrow().clone()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Time since start, the clock gesture events are stamped with.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Record where the ruler was laid out so mouse rows map onto it.
    pub fn set_ruler_area(&mut self, area: Rect) {
        if self.mouse.area() != area {
            self.mouse.set_area(area);
        }
    }

    /// Act on what the view asked for.
    pub fn apply(&mut self, requests: HostRequests) {
        if requests.redraw {
            self.needs_redraw = true;
        }
        self.gesture_active =
            requests.disallow_intercept || (self.gesture_active && self.mouse.is_pressed());
        if requests.click_feedback {
            self.clicks += 1;
            self.click_flash = CLICK_FLASH_FRAMES;
            self.needs_redraw = true;
        }
    }

    /// One frame of the host loop.
    pub fn on_frame(&mut self, dt: Duration) {
        if self.mouse.is_pressed() {
            let requests = self.ruler.poll_gestures(self.elapsed());
            self.apply(requests);
        }
        if self.ruler.is_animating() {
            let requests = self.ruler.tick(dt);
            self.apply(requests);
        }
        if self.click_flash > 0 {
            self.click_flash -= 1;
            self.needs_redraw = true;
        }
    }
}
