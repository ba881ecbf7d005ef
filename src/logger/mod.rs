//! Tracing subscriber initialization.
//!
//! The configured level acts as the default filter; a `RUST_LOG` environment
//! variable, when set, takes precedence for finer-grained control.

use tracing_subscriber::EnvFilter;

use crate::config::LoggerSettings;

/// Initializes the global tracing subscriber from logger settings.
///
/// # Errors
/// Fails when the level cannot be parsed into a filter or when a global
/// subscriber has already been installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {e}", settings.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.colored);

    let result = if settings.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logger: {e}"))
}
