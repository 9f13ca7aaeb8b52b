//! Simple Calculator: a four-function keypad calculator
//!
//! The calculator is an accumulator: one running value, one pending
//! operation and the text on the display. Operators chain strictly left to
//! right, so `3 + 4 × 2 =` shows `14`.
//!
//! The core is a pure state transition over button presses. Two shells sit
//! on top of it:
//!
//! - `desktop`: a keypad window in the terminal (`ratatui` + `crossterm`)
//! - `web`: a server-rendered page with one form post per button (`axum`)
//!
//! # Example
//!
//! ```rust
//! use simple_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["5", "+", "3", "="] {
//!     calc.press_label(label);
//! }
//! assert_eq!(calc.display(), "8");
//!
//! // A failed press shows "Error" and starts over
//! for label in ["7", "÷", "0", "="] {
//!     calc.press_label(label);
//! }
//! assert_eq!(calc.display(), "Error");
//! assert_eq!(calc.state(), &CalculatorState::new());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "desktop")]
pub mod desktop;

#[cfg(feature = "web")]
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_number, parse_number};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, Input, Operation, Transition,
        ERROR_DISPLAY,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};

    #[cfg(feature = "desktop")]
    pub use crate::desktop::DesktopApp;

    #[cfg(feature = "web")]
    pub use crate::web::{WebConfig, WebDriver};
}
