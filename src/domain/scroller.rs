//! Deceleration model driving ruler animations.
//!
//! A [`Scroller`] animates a single scalar position. It supports two motions:
//!
//! - **Scroll**: move from a start position to an exact target over a fixed
//!   duration with a decelerating ease (`1 - (1 - t)^2`). Used to settle on
//!   a tick.
//! - **Fling**: start with a velocity and slow down at a constant rate. The
//!   stopping point is bounded to `[min - over, max + over]`; when the free
//!   stopping point lies beyond that band the deceleration is raised so the
//!   motion ends exactly on the band edge.
//!
//! Time is supplied by the caller through [`Scroller::compute_offset`], which
//! keeps the model deterministic and independent of any clock.

use std::time::Duration;

/// Default duration of a settle scroll.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(250);

/// Constant deceleration applied to flings, in pixels per second squared.
pub const FLING_DECELERATION: f32 = 2_400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Scroll { delta: f32 },
    Fling { velocity: f32, deceleration: f32 },
}

/// Animated scalar position.
#[derive(Debug, Clone)]
pub struct Scroller {
    start: f32,
    current: f32,
    final_position: f32,
    elapsed: Duration,
    duration: Duration,
    motion: Motion,
    finished: bool,
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}

impl Scroller {
    /// Create a finished scroller resting at 0.
    pub fn new() -> Self {
        Self {
            start: 0.0,
            current: 0.0,
            final_position: 0.0,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            motion: Motion::Scroll { delta: 0.0 },
            finished: true,
        }
    }

    /// Whether the current motion has completed (or none was started).
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the active (or last) motion is a fling.
    pub fn is_fling(&self) -> bool {
        matches!(self.motion, Motion::Fling { .. })
    }

    /// Position computed by the last [`Scroller::compute_offset`].
    pub fn current(&self) -> f32 {
        self.current
    }

    /// Where the current motion will come to rest.
    pub fn final_position(&self) -> f32 {
        self.final_position
    }

    /// Total duration of the current motion.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Animate from `start` to exactly `target` over `duration`.
    pub fn start_scroll_to(&mut self, start: f32, target: f32, duration: Duration) {
        self.start = start;
        self.current = start;
        self.final_position = target;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.motion = Motion::Scroll {
            delta: target - start,
        };
        self.finished = false;
    }

    /// Start a decelerating fling from `start` with `velocity` (px/s).
    ///
    /// The rest position never leaves `[min - over, max + over]`.
    pub fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32, over: f32) {
        self.start = start;
        self.current = start;
        self.elapsed = Duration::ZERO;

        if velocity == 0.0 || !velocity.is_finite() {
            self.settle_at(start);
            return;
        }

        let speed = velocity.abs();
        let direction = velocity.signum();
        let free_distance = speed * speed / (2.0 * FLING_DECELERATION);

        let limit = if direction > 0.0 {
            (max + over) - start
        } else {
            start - (min - over)
        };

        if limit <= 0.0 {
            self.settle_at(start);
            return;
        }

        let (distance, deceleration) = if free_distance > limit {
            (limit, speed * speed / (2.0 * limit))
        } else {
            (free_distance, FLING_DECELERATION)
        };

        self.final_position = start + direction * distance;
        self.duration = Duration::from_secs_f32(speed / deceleration);
        self.motion = Motion::Fling {
            velocity,
            deceleration,
        };
        self.finished = false;
    }

    /// Advance the motion by `dt`.
    ///
    /// Returns `false` when there was nothing to animate; returns `true` for
    /// every frame that produced a position, including the final one.
    pub fn compute_offset(&mut self, dt: Duration) -> bool {
        if self.finished {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.current = self.final_position;
            self.finished = true;
            return true;
        }

        let t = self.elapsed.as_secs_f32();
        self.current = match self.motion {
            Motion::Scroll { delta } => {
                let progress = t / self.duration.as_secs_f32();
                let eased = 1.0 - (1.0 - progress) * (1.0 - progress);
                self.start + delta * eased
            }
            Motion::Fling {
                velocity,
                deceleration,
            } => self.start + velocity * t - velocity.signum() * deceleration * t * t / 2.0,
        };
        true
    }

    /// Stop and jump to the final position.
    pub fn abort_animation(&mut self) {
        self.current = self.final_position;
        self.finished = true;
    }

    /// Stop where the motion currently is.
    pub fn force_finished(&mut self) {
        self.final_position = self.current;
        self.finished = true;
    }

    fn settle_at(&mut self, position: f32) {
        self.current = position;
        self.final_position = position;
        self.duration = Duration::ZERO;
        self.motion = Motion::Fling {
            velocity: 0.0,
            deceleration: FLING_DECELERATION,
        };
        self.finished = true;
    }
}
