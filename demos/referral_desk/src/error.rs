//! Error types for the referral desk.
//!
//! `DeskError` covers start-up failures that stop the binary. Input problems
//! are described by `ValidationError`, which services attach as the cause of
//! an `Outcome::Error` rather than returning it.
use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent the desk from starting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeskError {
    /// Figment could not gather or deserialise the configuration layers.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file '{}' not found", path.display())]
    MissingConfig {
        /// Path passed via `--config`.
        path: PathBuf,
    },

    /// A merged configuration value is out of range.
    #[error("invalid configuration for '{key}': {message}")]
    InvalidConfig {
        /// Offending configuration key.
        key: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Input rejected by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was blank.
    #[error("{field} is required")]
    Required {
        /// Field label shown to the user.
        field: &'static str,
    },
    /// The email address is malformed.
    #[error("'{value}' is not a valid email address")]
    Email {
        /// Rejected input.
        value: String,
    },
    /// The phone number is malformed.
    #[error("'{value}' is not a valid phone number")]
    Phone {
        /// Rejected input.
        value: String,
    },
    /// The password is shorter than the configured minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Configured minimum length.
        min: usize,
    },
    /// The password lacks a letter or a digit.
    #[error("password must contain a letter and a digit")]
    PasswordTooWeak,
    /// The urgency is not one of the known levels.
    #[error("unknown urgency '{value}' (expected routine, urgent or emergency)")]
    Urgency {
        /// Rejected input.
        value: String,
    },
}
