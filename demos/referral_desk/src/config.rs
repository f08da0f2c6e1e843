//! Layered configuration for the referral desk.
//!
//! Values are merged lowest to highest precedence:
//!
//! 1. built-in defaults;
//! 2. a TOML file (`--config PATH`, or `referral_desk.toml` when present);
//! 3. environment variables prefixed with `REFERRAL_DESK_`;
//! 4. command-line overrides.
//!
//! The merged result is range-checked before it is returned.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{cli::ConfigOverrides, error::DeskError};

/// Prefix for environment overrides, e.g. `REFERRAL_DESK_LOG_LEVEL`.
pub const ENV_PREFIX: &str = "REFERRAL_DESK_";
/// File consulted when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "referral_desk.toml";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Settings shared by the desk's services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Shortest accepted password.
    pub min_password_length: usize,
    /// Email domains granted the admin role.
    pub admin_domains: Vec<String>,
    /// Email domains granted the specialist role.
    pub specialist_domains: Vec<String>,
    /// Lifetime of a password-reset token, in seconds.
    pub reset_token_ttl_secs: u64,
    /// Default `tracing` level when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            admin_domains: vec!["medrefer.admin".to_owned()],
            specialist_domains: vec!["medrefer.specialists".to_owned()],
            reset_token_ttl_secs: 900,
            log_level: "info".to_owned(),
        }
    }
}

impl DeskConfig {
    /// Checks merged values are within range.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> Result<(), DeskError> {
        if self.min_password_length < 6 {
            return Err(DeskError::InvalidConfig {
                key: "min_password_length",
                message: format!("must be at least 6, got {}", self.min_password_length),
            });
        }
        if self.reset_token_ttl_secs == 0 {
            return Err(DeskError::InvalidConfig {
                key: "reset_token_ttl_secs",
                message: "must be greater than zero".to_owned(),
            });
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(DeskError::InvalidConfig {
                key: "log_level",
                message: format!("unknown level '{}'", self.log_level),
            });
        }
        Ok(())
    }
}

/// Loads and validates the configuration.
///
/// # Errors
///
/// Returns [`DeskError::MissingConfig`] when `config_path` names a missing
/// file, [`DeskError::Config`] when a layer cannot be parsed, and
/// [`DeskError::InvalidConfig`] when a merged value is out of range.
pub fn load(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<DeskConfig, DeskError> {
    let file = match config_path {
        Some(path) if !path.is_file() => {
            return Err(DeskError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        Some(path) => Toml::file(path),
        None => Toml::file(DEFAULT_CONFIG_FILE),
    };
    let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
        .merge(file)
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(Box::new)?;
    config.validate()?;
    debug!(?config, "configuration loaded");
    Ok(config)
}
