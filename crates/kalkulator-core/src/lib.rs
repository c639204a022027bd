//! # kalkulator-core
//!
//! Deterministic two-operand arithmetic evaluation.
//!
//! This crate takes two operands exactly as the user typed them plus an
//! operation, and answers with either a display-ready result or a rejection:
//! - Were both numbers entered?
//! - Are they numbers at all?
//! - Can the operation be carried out?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Side-effect free**: Evaluation never touches state outside its arguments
//! 3. **Ordered checks**: blank, then invalid, then division by zero
//!
//! ## Example
//!
//! ```rust
//! use kalkulator_core::{evaluate, CalcError, Operation};
//!
//! assert_eq!(evaluate("5", "2", Operation::Divide).unwrap(), "2.5");
//! assert_eq!(evaluate("5", "0", Operation::Divide), Err(CalcError::DivisionByZero));
//! ```

pub mod calculator;
pub mod format;
pub mod messages;
pub mod operand;
pub mod types;

// Re-export main types at crate root
pub use calculator::Calculator;
pub use format::format_result;
pub use messages::{Locale, LocaleParseError};
pub use operand::{is_blank, is_decimal, parse_operand};
pub use types::{EvaluationReport, EvaluationRequest, Operation, OperationParseError, Outcome};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Reasons an evaluation is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    #[error("Both operands are required")]
    EmptyInput,

    #[error("Operand is not a valid decimal number")]
    InvalidNumber,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is out of range")]
    Overflow,
}

/// Evaluate two raw operands with an operation.
///
/// This is the main entry point for evaluation.
///
/// # Arguments
///
/// * `operand1` - First operand, as typed
/// * `operand2` - Second operand, as typed
/// * `op` - The operation to apply
///
/// # Returns
///
/// The formatted result, or the first rejection that applies:
/// - `EmptyInput` if either operand is blank
/// - `InvalidNumber` if either operand is not a decimal number
/// - `DivisionByZero` for `Divide` with a zero second operand
/// - `Overflow` if the result is not finite
pub fn evaluate(operand1: &str, operand2: &str, op: Operation) -> Result<String, CalcError> {
    let value = compute(operand1, operand2, op)?;
    let rendered = format_result(value);
    debug!(operation = %op, result = %rendered, "evaluation completed");
    Ok(rendered)
}

/// Like [`evaluate`], but returns the raw `f64` instead of the display string.
pub fn compute(operand1: &str, operand2: &str, op: Operation) -> Result<f64, CalcError> {
    // Both fields are checked for blanks before either is parsed.
    if is_blank(operand1) || is_blank(operand2) {
        return Err(CalcError::EmptyInput);
    }

    let a = parse_operand(operand1)?;
    let b = parse_operand(operand2)?;

    op.apply(a, b)
}

/// Evaluate a request and wrap the outcome in a report.
///
/// Rejection messages are rendered in `locale`.
pub fn evaluate_request(request: &EvaluationRequest, locale: Locale) -> EvaluationReport {
    let result = evaluate(&request.operand1, &request.operand2, request.operation);
    EvaluationReport::new(request.clone(), result, locale)
}
