//! Argument validation errors.
//!
//! These are raised at the widget's call boundary when a host passes a value
//! the ruler cannot represent. State is never modified when one of these is
//! returned.

use std::fmt;

/// Invalid argument passed to a ruler setter.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// Decimal places must lie in `[0, 3]`.
    DecimalPlacesOutOfRange { value: u32 },

    /// Selected value must lie in `[min, max]`.
    SelectedValueOutOfRange { value: f64, min: f64, max: f64 },

    /// `max` must not be smaller than `min`.
    InvalidBounds { min: f64, max: f64 },

    /// Interval between adjacent ticks must be positive and finite.
    InvalidInterval { value: f64 },

    /// Tick spacing must be positive and finite.
    InvalidTickSpacing { value: f32 },

    /// `(max - min) / interval` is beyond the supported number of ticks.
    TooManyTicks { min: f64, max: f64, interval: f64 },
}

impl ArgumentError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ArgumentError::DecimalPlacesOutOfRange { .. } => {
                "Decimal places must be between 0 and 3.".to_string()
            }
            ArgumentError::SelectedValueOutOfRange { min, max, .. } => {
                format!("Pick a value between {} and {}.", min, max)
            }
            ArgumentError::InvalidBounds { .. } => {
                "The maximum value must not be below the minimum value.".to_string()
            }
            ArgumentError::InvalidInterval { .. } => {
                "The interval between ticks must be greater than zero.".to_string()
            }
            ArgumentError::InvalidTickSpacing { .. } => {
                "The tick spacing must be greater than zero.".to_string()
            }
            ArgumentError::TooManyTicks { .. } => {
                "The range is too large for this interval. Narrow it or use a larger interval."
                    .to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ArgumentError::DecimalPlacesOutOfRange { .. } => "E_ARG_DECIMALS",
            ArgumentError::SelectedValueOutOfRange { .. } => "E_ARG_SELECTED_VALUE",
            ArgumentError::InvalidBounds { .. } => "E_ARG_BOUNDS",
            ArgumentError::InvalidInterval { .. } => "E_ARG_INTERVAL",
            ArgumentError::InvalidTickSpacing { .. } => "E_ARG_TICK_SPACING",
            ArgumentError::TooManyTicks { .. } => "E_ARG_TOO_MANY_TICKS",
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::DecimalPlacesOutOfRange { value } => {
                write!(
                    f,
                    "decimal places beyond expected, only [0,3] supported but got {}",
                    value
                )
            }
            ArgumentError::SelectedValueOutOfRange { value, min, max } => {
                write!(
                    f,
                    "expected selected value in [{},{}], but the selected value is {}",
                    min, max, value
                )
            }
            ArgumentError::InvalidBounds { min, max } => {
                write!(f, "max value {} is smaller than min value {}", max, min)
            }
            ArgumentError::InvalidInterval { value } => {
                write!(f, "interval value must be positive, got {}", value)
            }
            ArgumentError::InvalidTickSpacing { value } => {
                write!(f, "tick spacing must be positive, got {}", value)
            }
            ArgumentError::TooManyTicks { min, max, interval } => {
                write!(
                    f,
                    "range [{},{}] with interval {} has more ticks than supported",
                    min, max, interval
                )
            }
        }
    }
}

impl std::error::Error for ArgumentError {}
