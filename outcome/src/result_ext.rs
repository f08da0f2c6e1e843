//! Extensions for moving between `Result`/`Option` and [`Outcome`].
//!
//! These helpers replace repetitive `match` blocks when a service wraps a
//! fallible library call and wants to hand its caller an `Outcome` rather
//! than an error to propagate.
//!
//! - Use [`IntoOutcome::into_outcome`] to keep the error's own text as the
//!   failure message.
//! - Use [`IntoOutcome::into_outcome_with`] to give the caller a friendlier
//!   message while keeping the original error as the cause.
//! - Use [`OptionOutcomeExt::ok_or_error`] for lookups that return `Option`.
//!
//! # Examples
//!
//! ```
//! use outcome::{IntoOutcome, Outcome};
//!
//! let parsed: Outcome<u16> = "8080".parse::<u16>().into_outcome();
//! assert_eq!(parsed, Outcome::success(8080));
//!
//! let rejected: Outcome<u16> = "eighty".parse::<u16>().into_outcome_with("invalid port");
//! assert_eq!(rejected.error_message(), Some("invalid port"));
//! assert!(rejected.cause().is_some());
//! ```

use crate::{Failure, Outcome};

/// Converts a `Result<T, E>` into an [`Outcome<T>`].
pub trait IntoOutcome<T> {
    /// `Ok(v)` becomes `Success(v)`; `Err(e)` becomes an error whose message
    /// is `e.to_string()` and whose cause is `e`.
    fn into_outcome(self) -> Outcome<T>;

    /// As [`IntoOutcome::into_outcome`], with `message` replacing the
    /// error's text.
    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_outcome(self) -> Outcome<T> {
        self.map_or_else(
            |err| Outcome::Error(Failure::new(err.to_string()).with_cause(err)),
            Outcome::Success,
        )
    }

    fn into_outcome_with(self, message: impl Into<String>) -> Outcome<T> {
        self.map_or_else(
            |err| Outcome::Error(Failure::new(message).with_cause(err)),
            Outcome::Success,
        )
    }
}

/// Converts an `Option<T>` into an [`Outcome<T>`].
pub trait OptionOutcomeExt<T> {
    /// `Some(v)` becomes `Success(v)`; `None` becomes an error with `message`.
    fn ok_or_error(self, message: impl Into<String>) -> Outcome<T>;
}

impl<T> OptionOutcomeExt<T> for Option<T> {
    fn ok_or_error(self, message: impl Into<String>) -> Outcome<T> {
        self.map_or_else(|| Outcome::error(message), Outcome::Success)
    }
}
