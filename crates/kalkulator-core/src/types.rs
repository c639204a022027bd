//! Core types shared by the evaluator and its shells.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages::Locale;
use crate::CalcError;

/// One of the four arithmetic operations.
///
/// Serialized by name (`add`, `divide`, ...); deserialized with the same
/// grammar as [`FromStr`], so symbols such as `+` or `÷` are accepted too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in button order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The symbol shown on the operation's button.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Human-readable name of the operation.
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Operation::Add, Locale::Pl) => "Dodawanie",
            (Operation::Subtract, Locale::Pl) => "Odejmowanie",
            (Operation::Multiply, Locale::Pl) => "Mnożenie",
            (Operation::Divide, Locale::Pl) => "Dzielenie",
            (Operation::Add, Locale::En) => "Addition",
            (Operation::Subtract, Locale::En) => "Subtraction",
            (Operation::Multiply, Locale::En) => "Multiplication",
            (Operation::Divide, Locale::En) => "Division",
        }
    }

    /// Apply the operation to two already-parsed operands.
    ///
    /// Division by zero (either sign) is rejected before dividing, and any
    /// non-finite result is reported as [`CalcError::Overflow`].
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        let value = match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }

        Ok(value)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned when a string names no known operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct OperationParseError(pub String);

impl FromStr for Operation {
    type Err = OperationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "+" | "add" | "plus" => Ok(Operation::Add),
            "-" | "sub" | "subtract" | "minus" => Ok(Operation::Subtract),
            "×" | "*" | "x" | "mul" | "multiply" | "times" => Ok(Operation::Multiply),
            "÷" | "/" | ":" | "div" | "divide" => Ok(Operation::Divide),
            _ => Err(OperationParseError(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for Operation {
    type Error = OperationParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single evaluation request: two raw operands and an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// First operand, as typed
    #[serde(default)]
    pub operand1: String,

    /// Second operand, as typed
    #[serde(default)]
    pub operand2: String,

    /// Operation to apply
    pub operation: Operation,
}

impl EvaluationRequest {
    pub fn new(operand1: impl Into<String>, operand2: impl Into<String>, operation: Operation) -> Self {
        Self {
            operand1: operand1.into(),
            operand2: operand2.into(),
            operation,
        }
    }
}

/// What an evaluation produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The formatted result
    Value { display: String },

    /// The request was rejected
    Rejected { error: CalcError, message: String },
}

impl Outcome {
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value { .. })
    }

    /// The line a shell shows: the result, or the rejection message.
    pub fn text(&self) -> &str {
        match self {
            Outcome::Value { display } => display,
            Outcome::Rejected { message, .. } => message,
        }
    }
}

/// A request together with its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub request: EvaluationRequest,
    pub outcome: Outcome,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationReport {
    /// Build a report from an evaluation result, rendering rejections in `locale`.
    pub fn new(request: EvaluationRequest, result: Result<String, CalcError>, locale: Locale) -> Self {
        let outcome = match result {
            Ok(display) => Outcome::Value { display },
            Err(error) => Outcome::Rejected {
                error,
                message: error.message(locale).to_string(),
            },
        };

        Self {
            request,
            outcome,
            evaluated_at: Utc::now(),
        }
    }
}
