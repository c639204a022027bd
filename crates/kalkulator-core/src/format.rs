//! Result formatting.

/// Render a finite result for display.
///
/// Values with no fractional part are shown in integer form (`6`, not `6.0`),
/// negative zero included. Everything else uses the shortest decimal that
/// round-trips to the same `f64`.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_result(6.0), "6");
        assert_eq!(format_result(-12.0), "-12");
        assert_eq!(format_result(1e20), "100000000000000000000");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_result(-0.0), "0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(-0.125), "-0.125");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_small_values_stay_decimal() {
        assert_eq!(format_result(1e-7), "0.0000001");
    }
}
