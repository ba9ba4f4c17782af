//! Ruler geometry and value model.
//!
//! [`RulerConfig`] holds the numeric parameters of a ruler and derives
//! everything else from them: how many ticks exist, how far the content
//! extends in pixels, and how indices map to values.
//!
//! ```text
//!   index:   0    1    2    3   ...  tick_count-1
//!   value:  min  min+i min+2i        <= max
//!   pixel:   0   sp   2sp   3sp      content_extent
//! ```

use serde::{Deserialize, Serialize};

use super::format::{format_value, MAX_DECIMAL_PLACES};
use crate::error::ArgumentError;

/// Slack applied before flooring `(max - min) / interval`, so ranges such as
/// `0.0..=0.3` step `0.1` keep their last tick despite binary rounding.
const TICK_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest `(max - min) / interval` a ruler accepts. Keeps every index
/// representable as `usize` and `i64` on all targets.
pub const MAX_TICK_STEPS: f64 = i32::MAX as f64;

/// Numeric parameters of a ruler.
///
/// Invariants (enforced by every constructor and setter):
/// `max_value >= min_value`, `interval_value > 0`, `tick_spacing > 0`,
/// `decimal_places <= 3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    min_value: f64,
    max_value: f64,
    interval_value: f64,
    /// Pixel distance between adjacent ticks.
    tick_spacing: f32,
    line_width: f32,
    decimal_places: u8,
    /// Highest index painted with the visible tick color. `None` means the
    /// last tick.
    display_cap: Option<usize>,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 200.0,
            interval_value: 1.0,
            tick_spacing: 5.0,
            line_width: 1.0,
            decimal_places: 0,
            display_cap: None,
        }
    }
}

impl RulerConfig {
    /// Create a config for `[min, max]` stepped by `interval`, other
    /// parameters at their defaults.
    pub fn new(min: f64, max: f64, interval: f64) -> Result<Self, ArgumentError> {
        let config = Self {
            min_value: min,
            max_value: max,
            interval_value: interval,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style tick spacing.
    pub fn with_tick_spacing(mut self, spacing: f32) -> Result<Self, ArgumentError> {
        self.set_tick_spacing(spacing)?;
        Ok(self)
    }

    /// Builder-style decimal places.
    pub fn with_decimal_places(mut self, places: u32) -> Result<Self, ArgumentError> {
        self.set_decimal_places(places)?;
        Ok(self)
    }

    /// Builder-style line width.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.0);
        self
    }

    /// Builder-style display cap.
    pub fn with_display_cap(mut self, cap: Option<usize>) -> Self {
        self.display_cap = cap;
        self
    }

    /// Check every invariant. Used after deserialization.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        check_bounds(self.min_value, self.max_value)?;
        check_interval(self.interval_value)?;
        check_spacing(self.tick_spacing)?;
        check_steps(self.min_value, self.max_value, self.interval_value)?;
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ArgumentError::DecimalPlacesOutOfRange {
                value: self.decimal_places as u32,
            });
        }
        Ok(())
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn interval_value(&self) -> f64 {
        self.interval_value
    }

    pub fn tick_spacing(&self) -> f32 {
        self.tick_spacing
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    pub fn display_cap(&self) -> Option<usize> {
        self.display_cap
    }

    /// Set the minimum value. Fails if it would exceed the maximum.
    pub fn set_min_value(&mut self, min: f64) -> Result<(), ArgumentError> {
        check_bounds(min, self.max_value)?;
        check_steps(min, self.max_value, self.interval_value)?;
        self.min_value = min;
        Ok(())
    }

    /// Set the maximum value. Fails if it would fall below the minimum.
    pub fn set_max_value(&mut self, max: f64) -> Result<(), ArgumentError> {
        check_bounds(self.min_value, max)?;
        check_steps(self.min_value, max, self.interval_value)?;
        self.max_value = max;
        Ok(())
    }

    /// Set both bounds at once.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), ArgumentError> {
        check_bounds(min, max)?;
        check_steps(min, max, self.interval_value)?;
        self.min_value = min;
        self.max_value = max;
        Ok(())
    }

    pub fn set_interval_value(&mut self, interval: f64) -> Result<(), ArgumentError> {
        check_interval(interval)?;
        check_steps(self.min_value, self.max_value, interval)?;
        self.interval_value = interval;
        Ok(())
    }

    pub fn set_tick_spacing(&mut self, spacing: f32) -> Result<(), ArgumentError> {
        check_spacing(spacing)?;
        self.tick_spacing = spacing;
        Ok(())
    }

    /// Set the number of decimals used by [`RulerConfig::format`].
    pub fn set_decimal_places(&mut self, places: u32) -> Result<(), ArgumentError> {
        if places > MAX_DECIMAL_PLACES as u32 {
            return Err(ArgumentError::DecimalPlacesOutOfRange { value: places });
        }
        self.decimal_places = places as u8;
        Ok(())
    }

    pub fn set_display_cap(&mut self, cap: Option<usize>) {
        self.display_cap = cap;
    }

    /// Number of ticks: `floor((max - min) / interval) + 1`, never below 1.
    pub fn tick_count(&self) -> usize {
        let steps = (self.max_value - self.min_value) / self.interval_value;
        (steps + TICK_COUNT_TOLERANCE)
            .floor()
            .clamp(0.0, MAX_TICK_STEPS) as usize
            + 1
    }

    /// Index of the last tick.
    pub fn last_index(&self) -> usize {
        self.tick_count() - 1
    }

    /// Pixel length of the content: `(tick_count - 1) * tick_spacing`.
    pub fn content_extent(&self) -> f32 {
        self.last_index() as f32 * self.tick_spacing
    }

    /// Value represented by `index`.
    pub fn value_at(&self, index: usize) -> f64 {
        index as f64 * self.interval_value + self.min_value
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains_value(&self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }

    /// Nearest index for `value`, clamped to the tick range.
    pub fn index_for_value(&self, value: f64) -> usize {
        let raw = ((value - self.min_value) / self.interval_value).round();
        self.clamp_index(raw as i64)
    }

    /// Clamp any index into `[0, tick_count - 1]`.
    pub fn clamp_index(&self, index: i64) -> usize {
        index.clamp(0, self.last_index() as i64) as usize
    }

    /// Highest index painted as a visible tick.
    pub fn display_cap_index(&self) -> usize {
        self.display_cap.unwrap_or_else(|| self.last_index())
    }

    /// Pixel offset of `index` measured from tick 0.
    pub fn position_of(&self, index: usize) -> f32 {
        index as f32 * self.tick_spacing
    }

    /// Format a value with this ruler's decimal places.
    pub fn format(&self, value: f64) -> String {
        format_value(value, self.decimal_places)
    }
}

fn check_bounds(min: f64, max: f64) -> Result<(), ArgumentError> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(ArgumentError::InvalidBounds { min, max });
    }
    Ok(())
}

fn check_interval(interval: f64) -> Result<(), ArgumentError> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(ArgumentError::InvalidInterval { value: interval });
    }
    Ok(())
}

fn check_steps(min: f64, max: f64, interval: f64) -> Result<(), ArgumentError> {
    let steps = (max - min) / interval;
    // An infinite span such as `-1e308..1e308` is rejected too.
    if steps.is_nan() || steps > MAX_TICK_STEPS {
        return Err(ArgumentError::TooManyTicks { min, max, interval });
    }
    Ok(())
}

fn check_spacing(spacing: f32) -> Result<(), ArgumentError> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(ArgumentError::InvalidTickSpacing { value: spacing });
    }
    Ok(())
}
