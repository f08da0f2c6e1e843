//! Command execution.
//!
//! Each command reduces to a single `Outcome<String>` that `main` prints in
//! its `Display` form.

use outcome::Outcome;
use tracing::info;

use super::{Command, DemoAuthArgs, ReferralArgs};
use crate::{
    auth::{AuthPolicy, AuthService},
    config::DeskConfig,
    validation::{self, ReferralForm},
};

/// Runs `command` against `config`.
pub async fn execute(command: &Command, config: &DeskConfig) -> Outcome<String> {
    match command {
        Command::ValidateReferral(args) => validate_referral(args),
        Command::DemoAuth(args) => demo_auth(args, config).await,
    }
}

fn validate_referral(args: &ReferralArgs) -> Outcome<String> {
    let form = ReferralForm {
        patient_name: args.patient.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        specialty: args.specialty.clone(),
        urgency: args.urgency.clone(),
        notes: args.notes.clone(),
    };
    validation::referral(&form).map(|referral| referral.to_string())
}

async fn demo_auth(args: &DemoAuthArgs, config: &DeskConfig) -> Outcome<String> {
    let mut service = AuthService::new(AuthPolicy::from(config));
    let registered = service
        .register(&args.email, &args.password)
        .on_success(|account| info!(email = %account.email, "registered"))
        .log_failure("register");
    let login = &mut service;
    let session = registered
        .and_then(|_| async move { login.login_async(&args.email, &args.password).await })
        .await
        .log_failure("login");
    session
        .and_then_sync(|session| service.authenticate(&session.token))
        .map(|account| format!("{} signed in as {}", account.email, account.role))
}
