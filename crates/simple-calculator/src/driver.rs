//! One set of press scenarios, run against every front end
//!
//! A [`CalculatorDriver`] presses keypad buttons by label and reads the
//! display back. The `verify_*` functions describe expected behavior once;
//! the desktop and web modules run them against their own drivers.

use crate::core::{CalcError, CalcResult, Calculator, ERROR_DISPLAY};

/// Abstract driver for keypad interactions
///
/// # Example
///
/// ```rust
/// use simple_calculator::core::Calculator;
/// use simple_calculator::driver::{verify_basic_arithmetic, CalculatorDriver};
///
/// let mut calc = Calculator::new();
/// calc.press_sequence(&["1", "2", "+", "3", "="]).unwrap();
/// assert_eq!(CalculatorDriver::display(&calc), "15");
/// verify_basic_arithmetic(&mut calc);
/// ```
pub trait CalculatorDriver {
    /// Presses the button with the given label
    ///
    /// Returns the calculation error if the press failed. An unknown label
    /// yields [`CalcError::UnknownButton`] and leaves the session untouched.
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Returns the text currently on the display
    fn display(&self) -> String;

    /// Returns the user-facing message for the last failed press, if any
    fn last_error(&self) -> Option<String>;

    /// Presses each label in order, stopping at the first failure
    fn press_sequence(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press(label))
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.press_label(label)
            .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        match Self::last_error(self) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn last_error(&self) -> Option<String> {
        self.error_message()
    }
}

// ===== Shared scenarios =====

fn clear<D: CalculatorDriver>(driver: &mut D) {
    let _ = driver.press("C");
    assert_eq!(driver.display(), "0");
}

/// Verifies one operation of each kind
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    clear(driver);
    for (labels, expected) in [
        (&["5", "+", "3", "="][..], "8"),
        (&["9", "-", "4", "="][..], "5"),
        (&["6", "×", "7", "="][..], "42"),
        (&["8", "÷", "2", "="][..], "4"),
    ] {
        assert!(driver.press_sequence(labels).is_ok());
        assert_eq!(driver.display(), expected, "sequence {labels:?}");
        clear(driver);
    }
}

/// Verifies left-to-right chaining without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    clear(driver);
    assert!(driver.press_sequence(&["2", "+", "3", "×"]).is_ok());
    assert_eq!(driver.display(), "5");
    assert!(driver.press_sequence(&["4", "="]).is_ok());
    assert_eq!(driver.display(), "20");
    clear(driver);

    assert!(driver
        .press_sequence(&["1", "0", "-", "3", "+", "7", "="])
        .is_ok());
    assert_eq!(driver.display(), "14");
    clear(driver);
}

/// Verifies the sign toggle, percent and decimal keys
pub fn verify_unary_keys<D: CalculatorDriver>(driver: &mut D) {
    clear(driver);
    assert!(driver.press_sequence(&["6", "±"]).is_ok());
    assert_eq!(driver.display(), "-6");
    clear(driver);

    assert!(driver.press_sequence(&["9", "%"]).is_ok());
    assert_eq!(driver.display(), "0.09");
    clear(driver);

    assert!(driver.press_sequence(&[".", "5", ".", "."]).is_ok());
    assert_eq!(driver.display(), "0.5");
    clear(driver);
}

/// Verifies the divide-by-zero error path and recovery
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    clear(driver);
    let result = driver.press_sequence(&["7", "÷", "0", "="]);
    assert_eq!(result, Err(CalcError::DivisionByZero));
    assert_eq!(driver.display(), ERROR_DISPLAY);
    assert_eq!(
        driver.last_error().as_deref(),
        Some("Calculation error: Cannot divide by zero")
    );

    // State is already reset: the next digit starts fresh
    assert!(driver.press("4").is_ok());
    assert_eq!(driver.display(), "4");
    assert!(driver.last_error().is_none());
    clear(driver);
}

/// Verifies that unknown labels are rejected without side effects
pub fn verify_unknown_button<D: CalculatorDriver>(driver: &mut D) {
    clear(driver);
    assert!(driver.press("3").is_ok());
    assert_eq!(
        driver.press("sqrt"),
        Err(CalcError::UnknownButton("sqrt".to_string()))
    );
    assert_eq!(driver.display(), "3");
    clear(driver);
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_unary_keys(driver);
    verify_error_handling(driver);
    verify_unknown_button(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_driver_press() {
        let mut calc = Calculator::new();
        assert!(CalculatorDriver::press(&mut calc, "7").is_ok());
        assert_eq!(CalculatorDriver::display(&calc), "7");
    }

    #[test]
    fn test_core_driver_press_sequence_stops_on_error() {
        let mut calc = Calculator::new();
        let result = calc.press_sequence(&["1", "÷", "0", "=", "5"]);
        assert_eq!(result, Err(CalcError::DivisionByZero));
        // "5" was never pressed
        assert_eq!(CalculatorDriver::display(&calc), "Error");
    }

    #[test]
    fn test_core_driver_last_error() {
        let mut calc = Calculator::new();
        let _ = calc.press_sequence(&["1", "÷", "0", "="]);
        assert!(CalculatorDriver::last_error(&calc)
            .is_some_and(|m| m.starts_with("Calculation error:")));
    }

    #[test]
    fn test_unified_basic_arithmetic() {
        verify_basic_arithmetic(&mut Calculator::new());
    }

    #[test]
    fn test_unified_chaining() {
        verify_chaining(&mut Calculator::new());
    }

    #[test]
    fn test_unified_unary_keys() {
        verify_unary_keys(&mut Calculator::new());
    }

    #[test]
    fn test_unified_error_handling() {
        verify_error_handling(&mut Calculator::new());
    }

    #[test]
    fn test_unified_unknown_button() {
        verify_unknown_button(&mut Calculator::new());
    }

    #[test]
    fn test_all_scenarios() {
        run_all_scenarios(&mut Calculator::new());
    }
}
