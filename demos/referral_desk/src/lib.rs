//! Referral intake and sign-in services.
//!
//! Services in this crate report expected failures (bad credentials,
//! malformed input, unknown tokens) as [`outcome::Outcome::Error`] values
//! instead of `Err`, so callers branch on the outcome rather than on
//! propagated errors. Only configuration and start-up problems use
//! [`error::DeskError`].

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod validation;
