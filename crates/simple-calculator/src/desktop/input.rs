//! Keyboard mapping for the desktop shell

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Input, Operation};

/// What the window is currently accepting input for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keypad is live
    #[default]
    Keypad,
    /// The error dialog is open; only dismiss and quit are honored
    Dialog,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(Input),
    /// Close the error dialog
    Dismiss,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action for the given mode
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent, mode: Mode) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match mode {
            Mode::Dialog => match code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => KeyAction::Dismiss,
                KeyCode::Char('q') => KeyAction::Quit,
                _ => KeyAction::None,
            },
            Mode::Keypad => Self::keypad_action(code),
        }
    }

    fn keypad_action(code: KeyCode) -> KeyAction {
        let input = match code {
            KeyCode::Char(c @ '0'..='9') => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .map(Input::Digit),
            KeyCode::Char('.' | ',') => Some(Input::Decimal),
            KeyCode::Char('+') => Some(Input::Operator(Operation::Add)),
            KeyCode::Char('-') => Some(Input::Operator(Operation::Subtract)),
            KeyCode::Char('*' | 'x' | 'X') => Some(Input::Operator(Operation::Multiply)),
            KeyCode::Char('/') => Some(Input::Operator(Operation::Divide)),
            KeyCode::Char('%') => Some(Input::Percent),
            KeyCode::Char('=') | KeyCode::Enter => Some(Input::Equals),
            KeyCode::Char('c' | 'C') | KeyCode::Esc | KeyCode::Delete => Some(Input::Clear),
            KeyCode::Char('n' | 'N' | '_') => Some(Input::ToggleSign),
            KeyCode::Char('q') => return KeyAction::Quit,
            _ => None,
        };
        input.map_or(KeyAction::None, KeyAction::Press)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn keypad(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(key(code), Mode::Keypad)
    }

    fn dialog(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(key(code), Mode::Dialog)
    }

    #[test]
    fn test_digit_keys() {
        for (c, d) in ('0'..='9').zip(0u8..) {
            assert_eq!(
                keypad(KeyCode::Char(c)),
                KeyAction::Press(Input::Digit(d))
            );
        }
    }

    #[test]
    fn test_operator_keys() {
        let cases = [
            ('+', Operation::Add),
            ('-', Operation::Subtract),
            ('*', Operation::Multiply),
            ('x', Operation::Multiply),
            ('/', Operation::Divide),
        ];
        for (c, op) in cases {
            assert_eq!(
                keypad(KeyCode::Char(c)),
                KeyAction::Press(Input::Operator(op))
            );
        }
    }

    #[test]
    fn test_equals_keys() {
        assert_eq!(keypad(KeyCode::Enter), KeyAction::Press(Input::Equals));
        assert_eq!(keypad(KeyCode::Char('=')), KeyAction::Press(Input::Equals));
    }

    #[test]
    fn test_clear_keys() {
        for code in [KeyCode::Esc, KeyCode::Delete, KeyCode::Char('c')] {
            assert_eq!(keypad(code), KeyAction::Press(Input::Clear));
        }
    }

    #[test]
    fn test_unary_keys() {
        assert_eq!(keypad(KeyCode::Char('%')), KeyAction::Press(Input::Percent));
        assert_eq!(
            keypad(KeyCode::Char('n')),
            KeyAction::Press(Input::ToggleSign)
        );
        assert_eq!(
            keypad(KeyCode::Char('_')),
            KeyAction::Press(Input::ToggleSign)
        );
        assert_eq!(keypad(KeyCode::Char('.')), KeyAction::Press(Input::Decimal));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(keypad(KeyCode::Char('q')), KeyAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            InputHandler::new().handle_key(ctrl_c, Mode::Keypad),
            KeyAction::Quit
        );
        assert_eq!(
            InputHandler::new().handle_key(ctrl_c, Mode::Dialog),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(keypad(KeyCode::Char('^')), KeyAction::None);
        assert_eq!(keypad(KeyCode::Tab), KeyAction::None);
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(
            InputHandler::new().handle_key(ctrl_x, Mode::Keypad),
            KeyAction::None
        );
    }

    #[test]
    fn test_dialog_only_dismisses() {
        assert_eq!(dialog(KeyCode::Enter), KeyAction::Dismiss);
        assert_eq!(dialog(KeyCode::Esc), KeyAction::Dismiss);
        assert_eq!(dialog(KeyCode::Char(' ')), KeyAction::Dismiss);
        assert_eq!(dialog(KeyCode::Char('5')), KeyAction::None);
        assert_eq!(dialog(KeyCode::Char('+')), KeyAction::None);
    }

    #[test]
    fn test_mode_default_is_keypad() {
        assert_eq!(Mode::default(), Mode::Keypad);
    }
}
