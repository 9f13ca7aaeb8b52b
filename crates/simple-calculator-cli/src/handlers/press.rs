//! Press command handler - drives the calculator headlessly

use console::style;
use simple_calculator::core::{CalcError, Calculator};
use simple_calculator::driver::CalculatorDriver;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::PressArgs;

/// Presses each label in order on a fresh calculator
///
/// Stops at the first failed press. The returned calculator shows what the
/// display read at that point, so a failure still leaves `"Error"` on it.
pub fn run_presses(labels: &[String]) -> (Calculator, CliResult<()>) {
    let mut calc = Calculator::new();
    for label in labels {
        if let Err(err) = CalculatorDriver::press(&mut calc, label) {
            let err = match err {
                CalcError::UnknownButton(label) => {
                    CliError::invalid_argument(format!("unknown button '{label}'"))
                }
                other => CliError::Calculation(other),
            };
            return (calc, Err(err));
        }
        debug!(%label, display = %calc.display(), "pressed");
    }
    (calc, Ok(()))
}

/// Formats the display line for stdout
#[must_use]
pub fn format_display(display: &str, colored: bool) -> String {
    if !colored {
        return display.to_string();
    }
    if display == simple_calculator::core::ERROR_DISPLAY {
        style(display).red().bold().to_string()
    } else {
        style(display).bold().to_string()
    }
}

/// Execute the press command
///
/// Prints the final display. A calculation failure prints `Error` and is
/// returned so the process exits non-zero. An unknown label prints nothing.
pub fn execute_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let (calc, result) = run_presses(&args.labels);
    if matches!(result, Err(CliError::InvalidArgument { .. })) {
        return result;
    }
    println!("{}", format_display(calc.display(), config.color.should_color()));
    result
}
