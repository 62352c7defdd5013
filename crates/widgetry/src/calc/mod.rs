//! Calculator widget: expression engine, keypad layout and the powered pad
//!
//! The engine only sees text that passed the character gate, so any
//! letter, unicode symbol or stray punctuation becomes `Error` before
//! tokenizing starts.

pub mod evaluator;
pub mod keypad;
mod operations;
pub mod pad;
pub mod parser;

pub use keypad::{Keypad, KeypadAction, KeypadButton};
pub use operations::{Calculator, Operation};
pub use pad::CalculatorPad;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown in place of a result when evaluation fails
pub const ERROR_DISPLAY: &str = "Error";

/// Characters an expression may contain before evaluation is attempted
pub const ALLOWED_CHARS: &str = "0123456789+-*/().% ";

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division (or modulo) by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN or other)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Character outside the allowed set
    #[error("Disallowed character: '{0}'")]
    DisallowedCharacter(char),
}

/// Rejects any expression containing a character outside [`ALLOWED_CHARS`]
pub fn check_charset(expr: &str) -> CalcResult<()> {
    if expr.is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    match expr.chars().find(|c| !ALLOWED_CHARS.contains(*c)) {
        Some(c) => Err(CalcError::DisallowedCharacter(c)),
        None => Ok(()),
    }
}

/// Gates, parses and evaluates an expression
pub fn evaluate_expression(expr: &str) -> CalcResult<f64> {
    check_charset(expr)?;
    evaluator::Evaluator::new().evaluate_str(expr)
}

/// Formats a result the way the display shows it
///
/// Uses the shortest decimal that round-trips, and never shows `-0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}

/// Evaluates an expression straight to display text, `"Error"` on any failure
#[must_use]
pub fn evaluate_to_display(expr: &str) -> String {
    match evaluate_expression(expr) {
        Ok(value) => format_number(value),
        Err(e) => {
            tracing::debug!(expr, error = %e, "expression rejected");
            ERROR_DISPLAY.to_string()
        }
    }
}
