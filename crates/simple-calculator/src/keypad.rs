//! The calculator keypad shared by both front ends
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```
//!
//! The "0" key spans two columns, so the grid holds 19 buttons.

use crate::core::{Input, Operation};

/// Visual role of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Digit,
    /// Clear, sign toggle and percent
    Function,
    /// Binary operators and equals
    Operator,
}

impl ButtonKind {
    /// CSS class used by the web page
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Function => "function",
            Self::Operator => "operator",
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button; also the dispatch key
    pub label: &'static str,
    /// The press this button produces
    pub input: Input,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column of the leftmost cell (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Visual role
    pub kind: ButtonKind,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, input: Input, row: usize, col: usize) -> Self {
        let kind = match input {
            Input::Digit(_) | Input::Decimal => ButtonKind::Digit,
            Input::Clear | Input::ToggleSign | Input::Percent => ButtonKind::Function,
            Input::Operator(_) | Input::Equals => ButtonKind::Operator,
        };
        Self {
            label,
            input,
            row,
            col,
            span: 1,
            kind,
            pressed: false,
        }
    }

    fn digit(d: u8, row: usize, col: usize) -> Self {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        Self::new(DIGITS[usize::from(d % 10)], Input::Digit(d % 10), row, col)
    }

    fn operator(op: Operation, row: usize, col: usize) -> Self {
        Self::new(op.symbol(), Input::Operator(op), row, col)
    }

    fn wide(mut self, span: usize) -> Self {
        self.span = span;
        self
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The fixed 5×4 calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C ± % ÷
            KeypadButton::new("C", Input::Clear, 0, 0),
            KeypadButton::new("±", Input::ToggleSign, 0, 1),
            KeypadButton::new("%", Input::Percent, 0, 2),
            KeypadButton::operator(Operation::Divide, 0, 3),
            // Row 2: 7 8 9 ×
            KeypadButton::digit(7, 1, 0),
            KeypadButton::digit(8, 1, 1),
            KeypadButton::digit(9, 1, 2),
            KeypadButton::operator(Operation::Multiply, 1, 3),
            // Row 3: 4 5 6 -
            KeypadButton::digit(4, 2, 0),
            KeypadButton::digit(5, 2, 1),
            KeypadButton::digit(6, 2, 2),
            KeypadButton::operator(Operation::Subtract, 2, 3),
            // Row 4: 1 2 3 +
            KeypadButton::digit(1, 3, 0),
            KeypadButton::digit(2, 3, 1),
            KeypadButton::digit(3, 3, 2),
            KeypadButton::operator(Operation::Add, 3, 3),
            // Row 5: 0 (wide) . =
            KeypadButton::digit(0, 4, 0).wide(2),
            KeypadButton::new(".", Input::Decimal, 4, 2),
            KeypadButton::new("=", Input::Equals, 4, 3),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Returns the index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button producing an input
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Finds a button by its label or a label alias
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        Input::from_label(label).and_then(|input| self.find_button_by_input(input))
    }

    /// Highlights the button for an input, releasing all others
    pub fn highlight_input(&mut self, input: Input) {
        self.release_all();
        if let Some(idx) = self.find_button_by_input(input) {
            self.press_button(idx);
        }
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Iterates over the rows, each as a slice of buttons left to right
    pub fn rows(&self) -> impl Iterator<Item = Vec<&KeypadButton>> {
        (0..self.rows).map(move |row| self.buttons.iter().filter(|b| b.row == row).collect())
    }
}
