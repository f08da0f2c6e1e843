//! In-memory sign-in service.
//!
//! Accounts, sessions and password-reset tokens live in process memory; there
//! is no persistence. Every operation returns an [`Outcome`] so that wrong
//! passwords, unknown tokens and weak passwords reach the caller as data.

mod password;

use std::{
    collections::HashMap,
    fmt,
    time::{Duration, SystemTime},
};

use outcome::{OptionOutcomeExt, Outcome};
use tracing::{debug, info};

use crate::{config::DeskConfig, validation};

use self::password::{PasswordDigest, fresh_token};

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Access level derived from the account's email domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Manages the directory and other accounts.
    Admin,
    /// Receives referrals.
    Specialist,
    /// Sends referrals; the default.
    Referrer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Admin => "admin",
            Self::Specialist => "specialist",
            Self::Referrer => "referrer",
        })
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Normalised email address; unique per service.
    pub email: String,
    /// Role derived at registration.
    pub role: Role,
}

/// A signed-in account and its bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token.
    pub token: String,
    /// The signed-in account.
    pub account: Account,
}

/// A single-use password-reset token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetToken {
    /// Opaque token to present to [`AuthService::reset_password`].
    pub token: String,
    /// Account the token resets.
    pub email: String,
    /// When the token was issued.
    pub issued_at: SystemTime,
}

/// Rules the service enforces, usually taken from [`DeskConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPolicy {
    /// Shortest accepted password.
    pub min_password_length: usize,
    /// Email domains whose accounts become [`Role::Admin`].
    pub admin_domains: Vec<String>,
    /// Email domains whose accounts become [`Role::Specialist`].
    pub specialist_domains: Vec<String>,
    /// How long a reset token stays valid.
    pub reset_token_ttl: Duration,
}

impl From<&DeskConfig> for AuthPolicy {
    fn from(config: &DeskConfig) -> Self {
        Self {
            min_password_length: config.min_password_length,
            admin_domains: config.admin_domains.clone(),
            specialist_domains: config.specialist_domains.clone(),
            reset_token_ttl: Duration::from_secs(config.reset_token_ttl_secs),
        }
    }
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self::from(&DeskConfig::default())
    }
}

impl AuthPolicy {
    /// Maps an email address to a role by its domain, case-insensitively.
    #[must_use]
    pub fn derive_role(&self, email: &str) -> Role {
        let domain = email
            .rsplit_once('@')
            .map(|(_, domain)| domain.to_ascii_lowercase())
            .unwrap_or_default();
        let listed = |domains: &[String]| domains.iter().any(|d| d.eq_ignore_ascii_case(&domain));
        if listed(&self.admin_domains) {
            Role::Admin
        } else if listed(&self.specialist_domains) {
            Role::Specialist
        } else {
            Role::Referrer
        }
    }
}

#[derive(Debug)]
struct Credential {
    account: Account,
    digest: PasswordDigest,
}

#[derive(Debug)]
struct PendingReset {
    email: String,
    issued_at: SystemTime,
    used: bool,
}

/// Registers accounts and issues sessions and reset tokens.
#[derive(Debug, Default)]
pub struct AuthService {
    policy: AuthPolicy,
    credentials: HashMap<String, Credential>,
    sessions: HashMap<String, String>,
    resets: HashMap<String, PendingReset>,
}

impl AuthService {
    /// Creates an empty service enforcing `policy`.
    #[must_use]
    pub fn new(policy: AuthPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The rules this service enforces.
    #[must_use]
    pub const fn policy(&self) -> &AuthPolicy {
        &self.policy
    }

    /// Creates an account after validating the email and password.
    pub fn register(&mut self, email: &str, password: &str) -> Outcome<Account> {
        let min = self.policy.min_password_length;
        validation::email(email)
            .zip(validation::password(password, min))
            .and_then_sync(|(address, secret)| {
                if self.credentials.contains_key(&address) {
                    return Outcome::error(format!("an account for {address} already exists"));
                }
                let account = Account {
                    role: self.policy.derive_role(&address),
                    email: address.clone(),
                };
                self.credentials.insert(
                    address,
                    Credential {
                        account: account.clone(),
                        digest: PasswordDigest::new(&secret),
                    },
                );
                info!(email = %account.email, role = %account.role, "account registered");
                Outcome::success(account)
            })
    }

    /// Checks credentials and opens a session.
    ///
    /// Unknown emails and wrong passwords produce the same message.
    pub fn login(&mut self, email: &str, password: &str) -> Outcome<Session> {
        let address = email.trim().to_lowercase();
        let Some(credential) = self
            .credentials
            .get(&address)
            .filter(|credential| credential.digest.matches(password))
        else {
            debug!(email = %address, "rejected sign-in attempt");
            return Outcome::error(INVALID_CREDENTIALS);
        };
        let session = Session {
            token: fresh_token(),
            account: credential.account.clone(),
        };
        self.sessions.insert(session.token.clone(), address);
        debug!(email = %session.account.email, "session opened");
        Outcome::success(session)
    }

    /// Validates the email format first, then signs in asynchronously.
    pub async fn login_async(&mut self, email: &str, password: &str) -> Outcome<Session> {
        validation::email(email)
            .and_then(|address| async move { self.login(&address, password) })
            .await
    }

    /// Resolves a bearer token to its account.
    pub fn authenticate(&self, token: &str) -> Outcome<Account> {
        self.sessions
            .get(token)
            .and_then(|email| self.credentials.get(email))
            .map(|credential| credential.account.clone())
            .ok_or_error("session expired or unknown")
    }

    /// Ends the session identified by `token`.
    pub fn logout(&mut self, token: &str) -> Outcome<()> {
        self.sessions
            .remove(token)
            .map(|_| ())
            .ok_or_error("session expired or unknown")
    }

    /// Issues a single-use reset token for an existing account.
    pub fn request_password_reset(&mut self, email: &str, now: SystemTime) -> Outcome<ResetToken> {
        self.prune_resets(now);
        let address = email.trim().to_lowercase();
        if !self.credentials.contains_key(&address) {
            return Outcome::error(format!("no account registered for {address}"));
        }
        let token = ResetToken {
            token: fresh_token(),
            email: address.clone(),
            issued_at: now,
        };
        self.resets.insert(
            token.token.clone(),
            PendingReset {
                email: address,
                issued_at: now,
                used: false,
            },
        );
        info!(email = %token.email, "password reset requested");
        Outcome::success(token)
    }

    /// Replaces the password for the account behind `token`.
    ///
    /// Fails for unknown, used or expired tokens and for passwords that do
    /// not satisfy the policy. A successful reset consumes the token and
    /// closes the account's open sessions. Tokens past their lifetime are
    /// dropped afterwards, so an expired token is reported as expired once
    /// and as unknown from then on.
    pub fn reset_password(&mut self, token: &str, new_password: &str, now: SystemTime) -> Outcome<()> {
        let outcome = self.consume_reset(token, new_password, now);
        self.prune_resets(now);
        outcome
    }

    fn consume_reset(&mut self, token: &str, new_password: &str, now: SystemTime) -> Outcome<()> {
        let ttl = self.policy.reset_token_ttl;
        let Some(pending) = self.resets.get_mut(token) else {
            return Outcome::error("invalid reset token");
        };
        if pending.used {
            return Outcome::error("reset token already used");
        }
        let age = now.duration_since(pending.issued_at).unwrap_or_default();
        if age > ttl {
            return Outcome::error("reset token expired");
        }
        let email = pending.email.clone();
        validation::password(new_password, self.policy.min_password_length)
            .and_then_sync(|secret| {
                let Some(credential) = self.credentials.get_mut(&email) else {
                    return Outcome::error(format!("no account registered for {email}"));
                };
                credential.digest = PasswordDigest::new(&secret);
                if let Some(pending) = self.resets.get_mut(token) {
                    pending.used = true;
                }
                self.sessions.retain(|_, owner| *owner != email);
                info!(%email, "password reset");
                Outcome::success(())
            })
    }

    /// Forgets reset tokens older than the configured lifetime, used or not.
    fn prune_resets(&mut self, now: SystemTime) {
        let ttl = self.policy.reset_token_ttl;
        let before = self.resets.len();
        self.resets
            .retain(|_, pending| now.duration_since(pending.issued_at).unwrap_or_default() <= ttl);
        let dropped = before - self.resets.len();
        if dropped > 0 {
            debug!(dropped, "expired reset tokens discarded");
        }
    }
}

#[cfg(test)]
mod tests;
