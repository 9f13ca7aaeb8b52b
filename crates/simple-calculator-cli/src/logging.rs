//! Logging setup for the `simcalc` binary
//!
//! Logs go to stderr. `RUST_LOG` takes precedence over the `-v`/`-q` flags:
//!
//! ```bash
//! RUST_LOG=debug simcalc serve
//! RUST_LOG=simple_calculator=debug,tower_http=debug simcalc serve
//! ```

use std::sync::Once;

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{CliConfig, LogFormat};

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Builds the filter: `RUST_LOG` if set, else the config's default level
fn build_filter(default: &str) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default)
    }
}

/// Initialize logging
///
/// Only the first call takes effect. `interactive` is true when the terminal
/// keypad will own the screen.
pub fn init(config: &CliConfig, interactive: bool) {
    INIT.call_once(|| {
        let filter = build_filter(config.default_filter(interactive));
        let ansi = config.color.should_color();

        let layer = match config.log_format {
            LogFormat::Text => tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(CompactTime)
                .with_ansi(ansi)
                .with_filter(filter)
                .boxed(),
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_filter(filter)
                .boxed(),
        };

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::registry().with(layer).try_init();
    });
}
