//! Serve command handler - runs the web shell

use std::time::Duration;

use simple_calculator::web::{self, WebConfig};
use tracing::info;

use crate::error::{CliError, CliResult};
use crate::ServeArgs;

/// Build the web shell config from CLI args
#[must_use]
pub fn build_web_config(args: &ServeArgs) -> WebConfig {
    WebConfig::builder()
        .host(&args.host)
        .port(args.port)
        .session_ttl(Duration::from_secs(args.session_ttl))
        .max_sessions(args.max_sessions)
        .build()
}

/// Execute the serve command
///
/// Blocks until Ctrl+C.
pub fn execute_serve(args: &ServeArgs) -> CliResult<()> {
    let config = build_web_config(args);
    eprintln!("Serving Simple Calculator at {}", config.url());
    eprintln!("Press Ctrl+C to stop");

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server(format!("Failed to create runtime: {e}")))?;
    rt.block_on(async { web::serve(&config).await })
        .map_err(|e| CliError::server(format!("{}: {e}", config.bind_address())))?;

    info!("web shell stopped");
    Ok(())
}
