//! Calculator state owned by a presentation shell.
//!
//! Two text fields, the last result and the operation that produced it.
//! A rejected evaluation leaves every field as it was.

use crate::types::Operation;
use crate::{evaluate, CalcError};

/// Display text before anything has been computed.
pub const EMPTY_DISPLAY: &str = "0";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculator {
    first: String,
    second: String,
    result: Option<String>,
    last_operation: Option<Operation>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    pub fn set_first(&mut self, text: impl Into<String>) {
        self.first = text.into();
    }

    pub fn set_second(&mut self, text: impl Into<String>) {
        self.second = text.into();
    }

    /// The last successful result, if any.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The operation behind the current result.
    pub fn last_operation(&self) -> Option<Operation> {
        self.last_operation
    }

    /// Evaluate the current fields with `op`.
    ///
    /// On success the result and operation are stored and the result is
    /// returned. On rejection nothing changes.
    pub fn apply(&mut self, op: Operation) -> Result<&str, CalcError> {
        let display = evaluate(&self.first, &self.second, op)?;
        self.last_operation = Some(op);
        Ok(self.result.insert(display).as_str())
    }

    /// The result line: the last result, or `"0"`.
    pub fn display(&self) -> &str {
        self.result.as_deref().unwrap_or(EMPTY_DISPLAY)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
