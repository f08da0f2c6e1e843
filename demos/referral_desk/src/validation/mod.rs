//! Input validators returning [`Outcome`] values.
//!
//! Each validator normalises its input on success (trimmed, lower-cased
//! email, digits-only phone number, …) and otherwise yields an error whose
//! cause is the matching [`ValidationError`].

use std::{fmt, str::FromStr};

use outcome::{IntoOutcome, Outcome};

use crate::error::ValidationError;

/// Fewest digits accepted in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;
/// Most digits accepted in a phone number (E.164 limit).
pub const MAX_PHONE_DIGITS: usize = 15;

/// Accepts any non-blank value, returning it trimmed.
pub fn required(field: &'static str, raw: &str) -> Outcome<String> {
    check_required(field, raw).into_outcome()
}

/// Accepts an email address, returning it trimmed and lower-cased.
pub fn email(raw: &str) -> Outcome<String> {
    check_email(raw).into_outcome()
}

/// Accepts a phone number, returning its digits with any leading `+`.
pub fn phone(raw: &str) -> Outcome<String> {
    check_phone(raw).into_outcome()
}

/// Accepts a password of at least `min_len` characters containing a letter
/// and a digit. The password is returned unchanged.
pub fn password(raw: &str, min_len: usize) -> Outcome<String> {
    check_password(raw, min_len).into_outcome()
}

fn check_required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_owned())
}

fn check_email(raw: &str) -> Result<String, ValidationError> {
    let candidate = raw.trim().to_lowercase();
    let reject = || ValidationError::Email {
        value: raw.trim().to_owned(),
    };
    let Some((local, domain)) = candidate.split_once('@') else {
        return Err(reject());
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");
    if local.is_empty()
        || domain.contains('@')
        || !domain_ok
        || candidate.chars().any(char::is_whitespace)
    {
        return Err(reject());
    }
    Ok(candidate)
}

fn check_phone(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let (plus, rest) = trimmed
        .strip_prefix('+')
        .map_or(("", trimmed), |rest| ("+", rest));
    let digits: String = rest
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')' | '.'))
        .collect();
    let in_range = (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len());
    if !in_range || !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(ValidationError::Phone {
            value: trimmed.to_owned(),
        });
    }
    Ok(format!("{plus}{digits}"))
}

fn check_password(raw: &str, min_len: usize) -> Result<String, ValidationError> {
    if raw.chars().count() < min_len {
        return Err(ValidationError::PasswordTooShort { min: min_len });
    }
    let has_letter = raw.chars().any(char::is_alphabetic);
    let has_digit = raw.chars().any(|ch| ch.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(ValidationError::PasswordTooWeak);
    }
    Ok(raw.to_owned())
}

/// How quickly the receiving specialist must respond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    /// Standard scheduling.
    #[default]
    Routine,
    /// Within days.
    Urgent,
    /// Same day.
    Emergency,
}

impl FromStr for Urgency {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "routine" => Ok(Self::Routine),
            "urgent" => Ok(Self::Urgent),
            "emergency" => Ok(Self::Emergency),
            _ => Err(ValidationError::Urgency {
                value: raw.trim().to_owned(),
            }),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Routine => "routine",
            Self::Urgent => "urgent",
            Self::Emergency => "emergency",
        })
    }
}

/// Raw referral input as typed by the referrer.
#[derive(Debug, Clone, Default)]
pub struct ReferralForm {
    /// Patient's full name.
    pub patient_name: String,
    /// Patient contact email.
    pub email: String,
    /// Patient contact phone.
    pub phone: String,
    /// Requested specialty, e.g. "cardiology".
    pub specialty: String,
    /// Urgency level; blank means routine.
    pub urgency: String,
    /// Free-text notes for the specialist.
    pub notes: Option<String>,
}

/// A referral whose fields have all been validated and normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Referral {
    /// Patient's full name, trimmed.
    pub patient_name: String,
    /// Lower-cased email address.
    pub email: String,
    /// Normalised phone number.
    pub phone: String,
    /// Lower-cased specialty.
    pub specialty: String,
    /// Parsed urgency.
    pub urgency: Urgency,
    /// Notes, dropped when blank.
    pub notes: Option<String>,
}

impl fmt::Display for Referral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} referral to {} for {} <{}, {}>",
            self.urgency, self.specialty, self.patient_name, self.email, self.phone
        )
    }
}

/// Validates every field of `form`, reporting the first failure in field
/// order.
pub fn referral(form: &ReferralForm) -> Outcome<Referral> {
    let urgency = if form.urgency.trim().is_empty() {
        Outcome::success(Urgency::default())
    } else {
        form.urgency.parse::<Urgency>().into_outcome()
    };
    required("patient name", &form.patient_name)
        .zip(email(&form.email))
        .zip(phone(&form.phone))
        .zip(required("specialty", &form.specialty))
        .zip(urgency)
        .map(
            |((((patient_name, email), phone), specialty), urgency)| Referral {
                patient_name,
                email,
                phone,
                specialty: specialty.to_lowercase(),
                urgency,
                notes: form
                    .notes
                    .as_deref()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(str::to_owned),
            },
        )
        .log_failure("referral intake")
}
