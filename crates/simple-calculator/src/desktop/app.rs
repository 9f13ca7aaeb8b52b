//! Desktop application state

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction, Mode};
use super::ui;
use crate::core::{CalcError, CalcResult, Calculator, Input};
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;

/// Calculator window state
#[derive(Debug)]
pub struct DesktopApp {
    calculator: Calculator,
    keypad: Keypad,
    input_handler: InputHandler,
    /// Message of the open error dialog
    dialog: Option<String>,
    should_quit: bool,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopApp {
    /// Creates a window in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
            keypad: Keypad::new(),
            input_handler: InputHandler::new(),
            dialog: None,
            should_quit: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns the calculator session
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the message of the open error dialog
    #[must_use]
    pub fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }

    /// Returns the current input mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.dialog.is_some() {
            Mode::Dialog
        } else {
            Mode::Keypad
        }
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a keypad button
    ///
    /// Ignored while the error dialog is open.
    pub fn press(&mut self, input: Input) {
        if self.dialog.is_some() {
            return;
        }
        self.keypad.highlight_input(input);
        self.calculator.press(input);
        self.dialog = self.calculator.error_message();
    }

    /// Closes the error dialog
    pub fn dismiss_dialog(&mut self) {
        if self.dialog.take().is_some() {
            debug!("error dialog dismissed");
        }
    }

    /// Applies a mapped key action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(input) => self.press(input),
            KeyAction::Dismiss => self.dismiss_dialog(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a key event
    ///
    /// Any key clears the previous press highlight.
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.keypad.release_all();
        let action = self.input_handler.handle_key(event, self.mode());
        self.handle_action(action);
    }

    /// Handles a mouse event over a frame of the given size
    ///
    /// Button-down and scroll events clear the previous press highlight;
    /// pointer motion and button release leave it showing.
    pub fn handle_mouse(&mut self, event: MouseEvent, frame: Rect) {
        if !matches!(
            event.kind,
            MouseEventKind::Moved | MouseEventKind::Up(_) | MouseEventKind::Drag(_)
        ) {
            self.keypad.release_all();
        }
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.dialog.is_some() {
            self.dismiss_dialog();
            return;
        }
        let keypad_area = ui::keypad_area(frame);
        let hit = ui::hit_test(&self.keypad, keypad_area, event.column, event.row)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.input);
        if let Some(input) = hit {
            self.press(input);
        }
    }
}

impl CalculatorDriver for DesktopApp {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let input =
            Input::from_label(label).ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        // A user has to close the dialog before pressing on
        self.dismiss_dialog();
        Self::press(self, input);
        match self.calculator.last_error() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn last_error(&self) -> Option<String> {
        self.calculator.error_message()
    }
}
