//! `tracing` subscriber set-up for the binary.

use tracing_subscriber::EnvFilter;

use crate::error::DeskError;

/// Builds the event filter: `RUST_LOG` when set and non-blank, otherwise
/// `default_level`.
///
/// # Errors
///
/// Returns [`DeskError::Logging`] when the directives cannot be parsed.
pub fn filter(default_level: &str) -> Result<EnvFilter, DeskError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_level.to_owned());
    EnvFilter::try_new(&directives).map_err(|err| DeskError::Logging(err.to_string()))
}

/// Installs a global formatter writing to standard error.
///
/// # Errors
///
/// Returns [`DeskError::Logging`] when the filter is invalid or a global
/// subscriber is already installed.
pub fn init(default_level: &str) -> Result<(), DeskError> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(default_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| DeskError::Logging(err.to_string()))
}
