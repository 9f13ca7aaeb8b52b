//! Desktop command handler - opens the terminal keypad

use tracing::info;

use crate::error::CliResult;

/// Execute the desktop command
///
/// Takes over the terminal until the user quits.
pub fn execute_desktop() -> CliResult<()> {
    info!("opening terminal keypad");
    simple_calculator::desktop::run()?;
    Ok(())
}
