//! Operand screening and parsing.
//!
//! An operand is whatever the user typed into a number field. It is accepted
//! only if, after trimming, it is a plain decimal literal: optional sign,
//! digits with an optional fractional part, and an optional exponent.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::CalcError;

lazy_static! {
    /// Plain decimal literal. `inf`, `nan`, separators and commas never match.
    static ref DECIMAL_PATTERN: Regex = Regex::new(
        r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$"
    ).unwrap();
}

/// Check if an operand is empty or whitespace only.
pub fn is_blank(operand: &str) -> bool {
    operand.trim().is_empty()
}

/// Check if an operand is a well-formed decimal literal.
pub fn is_decimal(operand: &str) -> bool {
    DECIMAL_PATTERN.is_match(operand.trim())
}

/// Parse an operand into a finite `f64`.
///
/// Blank input is reported as [`CalcError::EmptyInput`]; anything that is not a
/// decimal literal, or that overflows when parsed, as [`CalcError::InvalidNumber`].
pub fn parse_operand(operand: &str) -> Result<f64, CalcError> {
    let trimmed = operand.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    if !DECIMAL_PATTERN.is_match(trimmed) {
        trace!(operand = trimmed, "operand rejected by decimal screen");
        return Err(CalcError::InvalidNumber);
    }

    let value: f64 = trimmed.parse().map_err(|_| CalcError::InvalidNumber)?;
    if !value.is_finite() {
        trace!(operand = trimmed, "operand overflows f64");
        return Err(CalcError::InvalidNumber);
    }

    trace!(operand = trimmed, value, "operand parsed");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" 1 "));
    }

    #[test]
    fn test_accepts_decimal_literals() {
        assert_eq!(parse_operand("42"), Ok(42.0));
        assert_eq!(parse_operand("-3.5"), Ok(-3.5));
        assert_eq!(parse_operand("+7"), Ok(7.0));
        assert_eq!(parse_operand(".5"), Ok(0.5));
        assert_eq!(parse_operand("5."), Ok(5.0));
        assert_eq!(parse_operand("1e3"), Ok(1000.0));
        assert_eq!(parse_operand("2.5E-1"), Ok(0.25));
        assert_eq!(parse_operand("  12  "), Ok(12.0));
    }

    #[test]
    fn test_rejects_non_numbers() {
        for text in ["a", "1,5", "1_000", "1.2.3", "--1", ".", "e5", "1e", "0x10", "12abc"] {
            assert_eq!(parse_operand(text), Err(CalcError::InvalidNumber), "input {:?}", text);
        }
    }

    #[test]
    fn test_rejects_special_float_spellings() {
        for text in ["inf", "-infinity", "NaN", "Infinity"] {
            assert_eq!(parse_operand(text), Err(CalcError::InvalidNumber), "input {:?}", text);
        }
    }

    #[test]
    fn test_rejects_overflowing_literal() {
        assert_eq!(parse_operand("1e400"), Err(CalcError::InvalidNumber));
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(!is_decimal("٣"));
        assert_eq!(parse_operand("٣"), Err(CalcError::InvalidNumber));
    }

    #[test]
    fn test_blank_operand_is_empty_input() {
        assert_eq!(parse_operand(" "), Err(CalcError::EmptyInput));
    }
}
