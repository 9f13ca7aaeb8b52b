//! simcalc: the Simple Calculator from the command line
//!
//! ## Usage
//!
//! ```bash
//! simcalc desktop                 # Keypad in the terminal
//! simcalc serve --port 8080       # Keypad page at http://127.0.0.1:8080
//! simcalc press 3 + 4 × 2 =       # Prints 14
//! ```

use clap::Parser;
use simple_calculator_cli::{handlers, logging, Cli, CliConfig, CliResult, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    logging::init(&config, matches!(cli.command, Commands::Desktop));

    match cli.command {
        Commands::Desktop => handlers::execute_desktop(),
        Commands::Serve(args) => handlers::execute_serve(&args),
        Commands::Press(args) => handlers::execute_press(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_log_format(cli.log_format.into())
}
