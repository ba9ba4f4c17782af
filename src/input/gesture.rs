//! Single-pointer gesture classification.
//!
//! [`GestureDetector`] turns raw [`GestureEvent`]s into [`Gesture`]s:
//!
//! ```text
//! Down ──► Pressed ──(moved > slop)──► Dragging ──Up──► Fling? + Up
//!             │
//!             ├──(tap timeout)────► ShowPress
//!             ├──(long-press timeout)► LongPress (moves and tap suppressed)
//!             └──Up──► SingleTapUp + Up
//! ```
//!
//! Timestamps come with the events, so the detector never reads a clock.
//! Hosts that want show-press/long-press while the pointer rests call
//! [`GestureDetector::poll`] from their frame loop.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::velocity::VelocityTracker;

/// Raw pointer input. `time` is monotonic from any fixed origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Down { y: f32, time: Duration },
    Move { y: f32, time: Duration },
    Up { y: f32, time: Duration },
    Cancel,
}

/// Classified gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Pointer pressed.
    Down,
    /// Pointer held still past the tap timeout.
    ShowPress,
    /// Pointer held still past the long-press timeout.
    LongPress,
    /// Drag by `distance` px; positive when the pointer moved up.
    Scroll { distance: f32 },
    /// Released without leaving the touch slop.
    SingleTapUp { y: f32 },
    /// Released after a drag faster than the minimum fling velocity.
    /// `velocity_y` is positive when the pointer was moving down.
    Fling { velocity_y: f32 },
    /// Pointer released. Always the last gesture of an `Up` event.
    Up,
    /// Gesture aborted by the host.
    Cancel,
}

/// Thresholds for gesture classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Movement (px) before a press turns into a drag.
    pub touch_slop: f32,
    /// Release velocity (px/s) below which a drag does not fling.
    pub min_fling_velocity: f32,
    /// Release velocity (px/s) is clamped to this.
    pub max_fling_velocity: f32,
    pub tap_timeout_ms: u64,
    pub long_press_timeout_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8_000.0,
            tap_timeout_ms: 100,
            long_press_timeout_ms: 500,
        }
    }
}

impl GestureConfig {
    fn tap_timeout(&self) -> Duration {
        Duration::from_millis(self.tap_timeout_ms)
    }

    fn long_press_timeout(&self) -> Duration {
        Duration::from_millis(self.long_press_timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tracking {
    Idle,
    Pressed {
        down_y: f32,
        down_time: Duration,
        show_press_sent: bool,
        in_long_press: bool,
    },
    Dragging {
        last_y: f32,
    },
}

/// Gesture classifier for one pointer.
#[derive(Debug, Clone)]
pub struct GestureDetector {
    config: GestureConfig,
    tracking: Tracking,
    tracker: VelocityTracker,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            tracking: Tracking::Idle,
            tracker: VelocityTracker::new(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Whether a pointer is currently down.
    pub fn is_tracking(&self) -> bool {
        self.tracking != Tracking::Idle
    }

    /// Whether the current press has turned into a drag.
    pub fn is_dragging(&self) -> bool {
        matches!(self.tracking, Tracking::Dragging { .. })
    }

    /// Classify one pointer event.
    pub fn on_event(&mut self, event: GestureEvent) -> Vec<Gesture> {
        let mut out = Vec::new();
        match event {
            GestureEvent::Down { y, time } => {
                self.tracker.clear();
                self.tracker.add(time, y);
                self.tracking = Tracking::Pressed {
                    down_y: y,
                    down_time: time,
                    show_press_sent: false,
                    in_long_press: false,
                };
                out.push(Gesture::Down);
            }
            GestureEvent::Move { y, time } => {
                self.tracker.add(time, y);
                self.check_timers(time, &mut out);
                self.on_move(y, &mut out);
            }
            GestureEvent::Up { y, time } => {
                self.tracker.add(time, y);
                self.check_timers(time, &mut out);
                self.on_up(y, &mut out);
                self.tracking = Tracking::Idle;
                out.push(Gesture::Up);
            }
            GestureEvent::Cancel => {
                self.tracking = Tracking::Idle;
                self.tracker.clear();
                out.push(Gesture::Cancel);
            }
        }
        out
    }

    /// Fire show-press / long-press timers that expired by `now`.
    pub fn poll(&mut self, now: Duration) -> Vec<Gesture> {
        let mut out = Vec::new();
        self.check_timers(now, &mut out);
        out
    }

    fn on_move(&mut self, y: f32, out: &mut Vec<Gesture>) {
        match self.tracking {
            Tracking::Pressed {
                down_y,
                in_long_press,
                ..
            } => {
                if in_long_press || (y - down_y).abs() <= self.config.touch_slop {
                    return;
                }
                self.tracking = Tracking::Dragging { last_y: y };
                out.push(Gesture::Scroll {
                    distance: down_y - y,
                });
            }
            Tracking::Dragging { last_y } => {
                let distance = last_y - y;
                if distance != 0.0 {
                    self.tracking = Tracking::Dragging { last_y: y };
                    out.push(Gesture::Scroll { distance });
                }
            }
            Tracking::Idle => {}
        }
    }

    fn on_up(&mut self, y: f32, out: &mut Vec<Gesture>) {
        match self.tracking {
            Tracking::Pressed { in_long_press, .. } => {
                if !in_long_press {
                    debug!(y, "single tap");
                    out.push(Gesture::SingleTapUp { y });
                }
            }
            Tracking::Dragging { .. } => {
                let velocity = self.tracker.velocity();
                if velocity.abs() > self.config.min_fling_velocity {
                    // `f32::min`/`max` instead of `clamp`: an unvalidated
                    // config may hold a negative or NaN limit.
                    let max = self.config.max_fling_velocity;
                    let velocity_y = velocity.max(-max).min(max);
                    debug!(velocity_y, "fling gesture");
                    out.push(Gesture::Fling { velocity_y });
                }
            }
            Tracking::Idle => {}
        }
    }

    fn check_timers(&mut self, now: Duration, out: &mut Vec<Gesture>) {
        if let Tracking::Pressed {
            down_time,
            ref mut show_press_sent,
            ref mut in_long_press,
            ..
        } = self.tracking
        {
            let held = now.saturating_sub(down_time);
            if !*show_press_sent && held >= self.config.tap_timeout() {
                *show_press_sent = true;
                out.push(Gesture::ShowPress);
            }
            if !*in_long_press && held >= self.config.long_press_timeout() {
                *in_long_press = true;
                debug!("long press");
                out.push(Gesture::LongPress);
            }
        }
    }
}
