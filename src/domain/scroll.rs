//! Scroll and fling control for the ruler.
//!
//! [`ScrollController`] owns the continuous scroll offset. Offsets are
//! measured so that `offset + half_extent` is the content position under the
//! viewport centre; centring tick `i` therefore means
//! `offset == i * tick_spacing - half_extent`.
//!
//! The valid scroll band is `[-half_extent, content_extent - half_extent]`,
//! i.e. from "tick 0 centred" to "last tick centred". Dragging past it is
//! damped, flinging from outside it is refused, and animation frames that
//! start outside it are cut short.

use std::time::Duration;

use tracing::{debug, trace};

use super::scroller::{Scroller, DEFAULT_SCROLL_DURATION};

/// Drag deltas are divided by this when they would leave the scroll band.
pub const DRAG_OVERSCROLL_RESISTANCE: f32 = 4.0;

/// Pointer release velocity is divided by this to get the fling velocity.
pub const FLING_VELOCITY_DIVISOR: f32 = 3.0;

/// Fling overscroll slack is `half_extent / FLING_OVERSCROLL_DIVISOR`.
pub const FLING_OVERSCROLL_DIVISOR: f32 = 4.0;

/// Scroll position and viewport extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Continuous offset; may sit outside the band while overscrolled.
    pub current_offset: f32,
    /// Half the viewport length.
    pub viewport_half_extent: f32,
    /// True while a fling or settle animation is running.
    pub is_animating: bool,
}

/// Result of one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Nothing was animating.
    Idle,
    /// The offset moved. `aborted` is set when the frame was cut short
    /// because the offset had drifted out of the band.
    Moved { offset: f32, aborted: bool },
    /// A fling just ran out; the owner should settle on a tick.
    FlingFinished,
}

/// Owner of the ruler's scroll offset.
#[derive(Debug, Clone)]
pub struct ScrollController {
    state: ScrollState,
    content_extent: f32,
    scroller: Scroller,
    flinging: bool,
}

impl ScrollController {
    /// Create a controller with tick 0 centred.
    pub fn new(content_extent: f32, half_extent: f32) -> Self {
        Self {
            state: ScrollState {
                current_offset: -half_extent,
                viewport_half_extent: half_extent,
                is_animating: false,
            },
            content_extent,
            scroller: Scroller::new(),
            flinging: false,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.state.current_offset
    }

    pub fn half_extent(&self) -> f32 {
        self.state.viewport_half_extent
    }

    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    /// Whether a fling is in progress (including the frame that ends it).
    pub fn is_flinging(&self) -> bool {
        self.flinging
    }

    /// Whether [`ScrollController::step`] still has work to do.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// Lowest offset inside the band (tick 0 centred).
    pub fn min_offset(&self) -> f32 {
        -self.state.viewport_half_extent
    }

    /// Highest offset inside the band (last tick centred).
    pub fn max_offset(&self) -> f32 {
        self.content_extent - self.state.viewport_half_extent
    }

    /// Whether `offset` lies outside the scroll band.
    pub fn is_out_of_band(&self, offset: f32) -> bool {
        offset < self.min_offset() || offset > self.max_offset()
    }

    pub fn set_content_extent(&mut self, content_extent: f32) {
        self.content_extent = content_extent;
    }

    pub fn set_half_extent(&mut self, half_extent: f32) {
        self.state.viewport_half_extent = half_extent;
    }

    /// Jump to `offset`, cancelling any animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.cancel();
        self.state.current_offset = offset;
    }

    /// Begin a drag: cancel in-flight animation and clear the fling flag.
    pub fn start_drag(&mut self) {
        self.cancel();
    }

    /// Scroll by a drag distance, damped when the result leaves the band.
    ///
    /// Returns the new offset.
    pub fn apply_drag_delta(&mut self, dy: f32) -> f32 {
        let proposed = self.state.current_offset + dy;
        let applied = if self.is_out_of_band(proposed) {
            dy / DRAG_OVERSCROLL_RESISTANCE
        } else {
            dy
        };
        self.state.current_offset += applied;
        trace!(dy, applied, offset = self.state.current_offset, "drag");
        self.state.current_offset
    }

    /// Start a fling for a pointer release velocity (px/s, positive when
    /// the pointer moves towards larger y).
    ///
    /// Refused, returning `false`, when the offset is already outside the
    /// band.
    pub fn start_fling(&mut self, velocity_y: f32) -> bool {
        let offset = self.state.current_offset;
        if self.is_out_of_band(offset) {
            debug!(offset, "fling refused outside scroll band");
            return false;
        }

        let velocity = -velocity_y / FLING_VELOCITY_DIVISOR;
        let slack = self.state.viewport_half_extent / FLING_OVERSCROLL_DIVISOR;
        let (min, max) = (self.min_offset(), self.max_offset());
        self.scroller.fling(offset, velocity, min, max, slack);
        self.flinging = true;
        self.state.is_animating = true;
        debug!(
            velocity,
            target = self.scroller.final_position(),
            "fling started"
        );
        true
    }

    /// Animate to `target` over the default settle duration.
    pub fn settle(&mut self, target: f32) {
        self.flinging = false;
        self.scroller
            .start_scroll_to(self.state.current_offset, target, DEFAULT_SCROLL_DURATION);
        self.state.is_animating = true;
        debug!(from = self.state.current_offset, target, "settle");
    }

    /// Advance the running animation by `dt`.
    pub fn step(&mut self, dt: Duration) -> StepOutcome {
        if self.scroller.compute_offset(dt) {
            let aborted = self.is_out_of_band(self.state.current_offset);
            if aborted {
                self.scroller.abort_animation();
            }
            self.state.current_offset = self.scroller.current();
            self.state.is_animating = !self.scroller.is_finished() || self.flinging;
            StepOutcome::Moved {
                offset: self.state.current_offset,
                aborted,
            }
        } else if self.flinging {
            self.flinging = false;
            self.state.is_animating = false;
            StepOutcome::FlingFinished
        } else {
            self.state.is_animating = false;
            StepOutcome::Idle
        }
    }

    fn cancel(&mut self) {
        if !self.scroller.is_finished() {
            self.scroller.force_finished();
        }
        self.flinging = false;
        self.state.is_animating = false;
    }
}
