//! Fixed-decimal formatting for ruler labels and readouts.

/// Largest number of decimal places a ruler can display.
pub const MAX_DECIMAL_PLACES: u8 = 3;

/// Places used when an unsupported count reaches the formatter.
const FALLBACK_DECIMAL_PLACES: u8 = 1;

/// Format `value` with exactly `decimal_places` digits after the point.
///
/// Rounding is half-up (ties move away from zero), so `0.5` with no decimals
/// renders as `"1"` and `2.25` with one decimal as `"2.3"`. Counts above
/// [`MAX_DECIMAL_PLACES`] fall back to a single decimal.
pub fn format_value(value: f64, decimal_places: u8) -> String {
    let places = if decimal_places > MAX_DECIMAL_PLACES {
        FALLBACK_DECIMAL_PLACES
    } else {
        decimal_places
    };

    let scale = 10f64.powi(places as i32);
    // Nudge by a few ulps so binary representations like 2.675 still round up.
    let scaled = value * scale;
    let nudge = scaled.signum() * scaled.abs() * f64::EPSILON * 4.0;
    let mut rounded = (scaled + nudge).round() / scale;
    if rounded == 0.0 {
        // Avoid "-0".
        rounded = 0.0;
    }

    format!("{:.*}", places as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_places() {
        assert_eq!(format_value(3.14159, 2), "3.14");
    }

    #[test]
    fn test_zero_places_rounds_up() {
        assert_eq!(format_value(7.6, 0), "8");
        assert_eq!(format_value(0.5, 0), "1");
        assert_eq!(format_value(2.5, 0), "3");
    }

    #[test]
    fn test_half_up_on_binary_tie() {
        assert_eq!(format_value(2.675, 2), "2.68");
        assert_eq!(format_value(1.005, 2), "1.01");
    }

    #[test]
    fn test_pads_trailing_zeros() {
        assert_eq!(format_value(5.0, 3), "5.000");
        assert_eq!(format_value(5.1, 1), "5.1");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_value(-1.25, 1), "-1.3");
        assert_eq!(format_value(-0.04, 1), "0.0");
    }

    #[test]
    fn test_unsupported_places_fall_back_to_one() {
        assert_eq!(format_value(12.345, 7), "12.3");
    }
}
