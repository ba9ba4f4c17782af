//! Pointer velocity estimation.
//!
//! Keeps the most recent pointer samples and estimates the release velocity
//! from the samples inside a short time horizon, so that a drag that paused
//! before release does not fling.

use std::collections::VecDeque;
use std::time::Duration;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON: Duration = Duration::from_millis(100);

/// Maximum number of retained samples.
const MAX_SAMPLES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    time: Duration,
    y: f32,
}

/// Vertical velocity tracker.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Record a pointer position at `time`.
    pub fn add(&mut self, time: Duration, y: f32) {
        if let Some(last) = self.samples.back() {
            if time < last.time {
                // Out-of-order timestamps restart tracking.
                self.samples.clear();
            }
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time, y });
    }

    /// Velocity in px/s over the samples within the horizon of the newest
    /// one. Zero when fewer than two usable samples exist.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples.back() else {
            return 0.0;
        };

        let oldest = self
            .samples
            .iter()
            .find(|s| newest.time.saturating_sub(s.time) <= HORIZON);

        match oldest {
            Some(oldest) if newest.time > oldest.time => {
                let dt = (newest.time - oldest.time).as_secs_f32();
                (newest.y - oldest.y) / dt
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_empty_tracker_has_no_velocity() {
        let tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_single_sample_has_no_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.add(ms(10), 50.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_constant_motion() {
        let mut tracker = VelocityTracker::new();
        for i in 0..6 {
            tracker.add(ms(i * 10), i as f32 * 20.0);
        }
        // 20px per 10ms.
        assert!((tracker.velocity() - 2_000.0).abs() < 0.5);
    }

    #[test]
    fn test_upward_motion_is_negative() {
        let mut tracker = VelocityTracker::new();
        tracker.add(ms(0), 300.0);
        tracker.add(ms(50), 200.0);
        assert!((tracker.velocity() + 2_000.0).abs() < 0.5);
    }

    #[test]
    fn test_pause_before_release_drops_velocity() {
        let mut tracker = VelocityTracker::new();
        tracker.add(ms(0), 0.0);
        tracker.add(ms(20), 100.0);
        tracker.add(ms(500), 100.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn test_old_samples_outside_horizon_ignored() {
        let mut tracker = VelocityTracker::new();
        tracker.add(ms(0), 0.0);
        tracker.add(ms(400), 1_000.0);
        tracker.add(ms(450), 1_050.0);
        assert!((tracker.velocity() - 1_000.0).abs() < 0.5);
    }

    #[test]
    fn test_clear() {
        let mut tracker = VelocityTracker::new();
        tracker.add(ms(0), 0.0);
        tracker.add(ms(10), 10.0);
        tracker.clear();
        assert_eq!(tracker.velocity(), 0.0);
    }
}
