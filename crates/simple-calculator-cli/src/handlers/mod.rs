//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains the execution logic for one subcommand
//! plus the pure helpers it is built from.

pub mod desktop;
pub mod press;
pub mod serve;

pub use desktop::execute_desktop;
pub use press::{execute_press, format_display, run_presses};
pub use serve::{build_web_config, execute_serve};
