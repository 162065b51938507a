//! Tracing initialization.
//!
//! Sets up tracing-subscriber with an env filter and a fmt layer on
//! stderr, leaving stdout to the progress bar and the report.

pub mod trial;

use crate::error::{Error, Result};

/// Configuration for telemetry initialization.
pub struct TelemetryConfig {
    /// Filter used when `RUST_LOG` is unset (e.g. "warn", "primebench=debug").
    pub default_filter: String,
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the default filter does not parse or a global
/// subscriber was already set.
pub fn init_telemetry(config: TelemetryConfig) -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_filter).map_err(|e| {
            Error::Config(format!("bad log filter '{}': {e}", config.default_filter))
        })?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| Error::Other(format!("failed to init tracing subscriber: {e}")))
}
