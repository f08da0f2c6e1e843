//! Command-line surface of the `referral-desk` binary.

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

pub use commands::execute;

/// Validate referrals and exercise the sign-in flow from the terminal.
#[derive(Debug, Parser)]
#[command(name = "referral-desk", version, about)]
pub struct Cli {
    /// Configuration file to load instead of `referral_desk.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Values that take precedence over every other configuration layer.
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Command-line configuration overrides; unset flags leave lower layers intact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args, Serialize)]
pub struct ConfigOverrides {
    /// Shortest accepted password.
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_password_length: Option<usize>,

    /// Lifetime of password-reset tokens, in seconds.
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_token_ttl_secs: Option<u64>,

    /// Default log level when `RUST_LOG` is unset.
    #[arg(long, global = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

/// Actions supported by the binary.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate a referral and print the normalised result.
    ValidateReferral(ReferralArgs),
    /// Register an account, sign in and resolve the issued session.
    DemoAuth(DemoAuthArgs),
}

/// Fields of a referral as typed on the command line.
#[derive(Debug, Clone, Args)]
pub struct ReferralArgs {
    /// Patient's full name.
    #[arg(long)]
    pub patient: String,
    /// Patient contact email.
    #[arg(long)]
    pub email: String,
    /// Patient contact phone.
    #[arg(long)]
    pub phone: String,
    /// Requested specialty.
    #[arg(long)]
    pub specialty: String,
    /// routine, urgent or emergency.
    #[arg(long, default_value = "routine")]
    pub urgency: String,
    /// Notes for the specialist.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Credentials for the sign-in walkthrough.
#[derive(Debug, Clone, Args)]
pub struct DemoAuthArgs {
    /// Email address to register.
    #[arg(long)]
    pub email: String,
    /// Password to register and sign in with.
    #[arg(long)]
    pub password: String,
}
