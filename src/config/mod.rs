//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast if a value is present but malformed.
//! Everything has a default, so an empty environment is a valid one.

use crate::error::{Error, Result};
use std::time::Duration;

const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 100;
const DEFAULT_PROGRESS_WIDTH: usize = 40;

#[derive(Debug, Clone)]
pub struct Config {
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// How often the trial driver samples queue progress.
    pub progress_interval: Duration,
    /// Width of the progress bar in cells.
    pub progress_width: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        let interval_ms = positive_var(
            "PRIMEBENCH_PROGRESS_INTERVAL_MS",
            DEFAULT_PROGRESS_INTERVAL_MS,
        )?;
        let width = positive_var("PRIMEBENCH_PROGRESS_WIDTH", DEFAULT_PROGRESS_WIDTH as u64)?;

        Ok(Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            progress_interval: Duration::from_millis(interval_ms),
            progress_width: width as usize,
        })
    }
}

fn positive_var(name: &str, default: u64) -> Result<u64> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(Error::Config(format!("{name} must be greater than zero"))),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::Config(format!(
            "{name} must be a positive integer, got '{raw}'"
        ))),
    }
}
