//! Tracing subscriber setup

use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "warn";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the process-wide tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default filter. Output goes to stderr
/// so calendar output on stdout stays clean. Safe to call more than once.
pub fn init_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
