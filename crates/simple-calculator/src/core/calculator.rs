//! Mutable calculator session used by the front ends

use tracing::{debug, warn};

use super::accumulator::{CalculatorState, Input};
use super::CalcError;

/// A calculator session: current state plus what the display shows
///
/// The display differs from the state's own display text only right after a
/// failed press, when it reads `"Error"` while the state is already reset.
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    display: String,
    last_error: Option<CalcError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(CalculatorState::new())
    }

    /// Resumes a session from a stored state
    #[must_use]
    pub fn from_state(state: CalculatorState) -> Self {
        Self {
            display: state.display().to_string(),
            state,
            last_error: None,
        }
    }

    /// Applies one press and returns the new display text
    pub fn press(&mut self, input: Input) -> &str {
        let transition = self.state.apply(input);

        match &transition.error {
            Some(error) => warn!(?input, %error, "calculation failed, state reset"),
            None => debug!(?input, display = %transition.display, "press"),
        }

        self.state = transition.state;
        self.display = transition.display;
        self.last_error = transition.error;
        &self.display
    }

    /// Applies a press given by its keypad label
    ///
    /// Returns `None` without touching the state if the label is unknown.
    pub fn press_label(&mut self, label: &str) -> Option<&str> {
        let input = Input::from_label(label)?;
        Some(self.press(input))
    }

    /// Returns the text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the underlying state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Consumes the session and returns its state
    #[must_use]
    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Returns the error raised by the most recent press
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns the user-facing message for the most recent error
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.last_error.as_ref().map(CalcError::user_message)
    }
}
