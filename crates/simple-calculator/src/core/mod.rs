//! Calculator core: the accumulator and everything it needs
//!
//! Nothing in here knows about terminals or HTTP. The shells translate their
//! events into [`Input`] values and render [`Calculator::display`].

mod accumulator;
mod calculator;
pub mod format;
mod operations;

pub use accumulator::{CalculatorState, Input, Transition, ERROR_DISPLAY};
pub use calculator::Calculator;
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// Result was not a finite number
    #[error("Result is too large to display")]
    Overflow,
    /// Display text could not be read back as a number
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    /// Digit input outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// Label that matches no keypad button
    #[error("Unknown button: {0}")]
    UnknownButton(String),
}

impl CalcError {
    /// Message shown to the user in a dialog or alert
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Calculation error: {self}")
    }
}
