//! The accumulator: one running value, one pending operation
//!
//! Every button press is a pure transition from one [`CalculatorState`] to
//! the next. Consecutive operators chain strictly left to right; there is no
//! precedence.

use serde::{Deserialize, Serialize};

use super::format::{format_number, parse_number};
use super::operations::Operation;
use super::{CalcError, CalcResult};

/// Text shown on the display after a failed press
pub const ERROR_DISPLAY: &str = "Error";

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// A binary operator
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Negate the displayed number
    ToggleSign,
    /// Divide the displayed number by 100
    Percent,
}

impl Input {
    /// Maps keypad text to an input
    ///
    /// Accepts the labels printed on the keypad plus the ASCII aliases
    /// `*`, `/` and the typographic minus `−`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            "C" => Some(Self::Clear),
            "±" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => {
                        c.to_digit(10).map(|d| Self::Digit(d as u8))
                    }
                    _ => Operation::from_symbol(label).map(Self::Operator),
                }
            }
        }
    }

    /// Returns the keypad label for this input
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

/// Everything a calculator session remembers between presses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    accumulated: f64,
    pending: Option<Operation>,
    new_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of applying one input under the error policy
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State to carry into the next press
    pub state: CalculatorState,
    /// Text to render; `"Error"` when the press failed
    pub display: String,
    /// The failure, if any. The state has already been reset.
    pub error: Option<CalcError>,
}

impl Transition {
    /// Returns true if the press failed
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl CalculatorState {
    /// Creates the initial state: display "0", nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulated: 0.0,
            pending: None,
            new_entry: true,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the value held from the previous operand
    #[must_use]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Returns the operation waiting for its second operand
    #[must_use]
    pub fn pending(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns true if the next digit starts a fresh number
    #[must_use]
    pub fn is_new_entry(&self) -> bool {
        self.new_entry
    }

    /// Applies one input, propagating failures
    pub fn try_apply(&self, input: Input) -> CalcResult<Self> {
        let mut next = self.clone();
        match input {
            Input::Digit(d) => next.input_digit(d)?,
            Input::Decimal => next.input_decimal_point(),
            Input::Operator(op) => next.set_operation(op)?,
            Input::Equals => next.evaluate()?,
            Input::Clear => next = Self::new(),
            Input::ToggleSign => next.toggle_sign(),
            Input::Percent => next.percentage(),
        }
        Ok(next)
    }

    /// Applies one input under the error policy
    ///
    /// A failed press shows `"Error"` and leaves the session in the initial
    /// state.
    #[must_use]
    pub fn apply(&self, input: Input) -> Transition {
        match self.try_apply(input) {
            Ok(state) => Transition {
                display: state.display.clone(),
                state,
                error: None,
            },
            Err(error) => Transition {
                state: Self::new(),
                display: ERROR_DISPLAY.to_string(),
                error: Some(error),
            },
        }
    }

    fn input_digit(&mut self, digit: u8) -> CalcResult<()> {
        let ch = char::from_digit(u32::from(digit), 10).ok_or(CalcError::InvalidDigit(digit))?;
        if self.new_entry || self.display == "0" {
            self.display = ch.to_string();
            self.new_entry = false;
        } else {
            self.display.push(ch);
        }
        Ok(())
    }

    fn input_decimal_point(&mut self) {
        if self.new_entry {
            self.display = "0.".to_string();
            self.new_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn toggle_sign(&mut self) {
        if let Ok(value) = parse_number(&self.display) {
            self.display = format_number(-value);
        }
    }

    fn percentage(&mut self) {
        if let Ok(value) = parse_number(&self.display) {
            self.display = format_number(value / 100.0);
            self.new_entry = true;
        }
    }

    fn set_operation(&mut self, op: Operation) -> CalcResult<()> {
        if self.pending.is_some() && !self.new_entry {
            self.evaluate()?;
        } else {
            self.accumulated = parse_number(&self.display)?;
        }
        self.pending = Some(op);
        self.new_entry = true;
        Ok(())
    }

    fn evaluate(&mut self) -> CalcResult<()> {
        let Some(op) = self.pending else {
            return Ok(());
        };
        if self.new_entry {
            return Ok(());
        }

        let second = parse_number(&self.display)?;
        let result = op.apply(self.accumulated, second)?;

        self.display = format_number(result);
        self.accumulated = result;
        self.pending = None;
        self.new_entry = true;
        Ok(())
    }
}
