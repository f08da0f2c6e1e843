//! `referral-desk` entry point: load configuration, install logging, run the
//! requested command and print its outcome.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;

use referral_desk::{
    cli::{Cli, execute},
    config, logging,
};

/// Exit status when a command finishes with an error or loading outcome.
const OUTCOME_FAILED: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref(), &cli.overrides)?;
    logging::init(&config.log_level)?;

    let outcome = execute(&cli.command, &config).await;
    writeln!(io::stdout().lock(), "{outcome}")?;
    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(OUTCOME_FAILED)
    })
}
