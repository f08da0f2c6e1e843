//! The [`Outcome`] enum, its constructors and query accessors.

mod collect;
mod combinators;
mod display;
mod failure;
mod hooks;
mod unwrap;

use std::backtrace::Backtrace;

pub use failure::Failure;

use crate::Cause;

/// Result of an operation that may have succeeded, failed or still be
/// in flight.
///
/// Equality and hashing are structural: two outcomes are equal when they are
/// the same variant and carry equal payloads.
///
/// An outcome is not [`UnwindSafe`](std::panic::UnwindSafe), because a
/// failure's cause is an arbitrary shared error that may have interior
/// mutability. Wrap the closure in [`AssertUnwindSafe`](std::panic::AssertUnwindSafe)
/// when catching a panic from [`Outcome::unwrap`]:
///
/// ```
/// use std::panic::{AssertUnwindSafe, catch_unwind};
///
/// use outcome::Outcome;
///
/// let pending: Outcome<u8> = Outcome::loading();
/// assert!(catch_unwind(AssertUnwindSafe(|| pending.unwrap())).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "state", content = "value", rename_all = "snake_case")
)]
#[must_use = "an outcome may be an error that should be inspected"]
pub enum Outcome<T> {
    /// The operation completed and produced a value.
    Success(T),
    /// The operation failed with a described [`Failure`].
    Error(Failure),
    /// The operation has not completed yet.
    Loading,
}

/// Discriminant of an [`Outcome`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum State {
    /// See [`Outcome::Success`].
    Success,
    /// See [`Outcome::Error`].
    Error,
    /// See [`Outcome::Loading`].
    Loading,
}

impl State {
    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Loading => "loading",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> Outcome<T> {
    /// Wraps `value` as a successful outcome.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Builds an error outcome from a human-readable message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome: Outcome<u8> = Outcome::error("patient not found");
    /// assert_eq!(outcome.error_message(), Some("patient not found"));
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(Failure::new(message))
    }

    /// Builds an error outcome carrying an underlying cause.
    pub fn error_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Error(Failure::new(message).with_cause(cause))
    }

    /// Wraps an existing [`Failure`].
    pub const fn failure(failure: Failure) -> Self {
        Self::Error(failure)
    }

    /// The pending sentinel.
    pub const fn loading() -> Self {
        Self::Loading
    }

    /// Reports which variant this outcome is.
    #[must_use]
    pub const fn state(&self) -> State {
        match self {
            Self::Success(_) => State::Success,
            Self::Error(_) => State::Error,
            Self::Loading => State::Loading,
        }
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` for [`Outcome::Loading`].
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Borrows the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) | Self::Loading => None,
        }
    }

    /// Consumes the outcome and returns the success value, if any.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) | Self::Loading => None,
        }
    }

    /// Borrows the failure payload, if any.
    #[must_use]
    pub const fn failure_ref(&self) -> Option<&Failure> {
        match self {
            Self::Error(failure) => Some(failure),
            Self::Success(_) | Self::Loading => None,
        }
    }

    /// The failure message, present only for [`Outcome::Error`].
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.failure_ref().map(Failure::message)
    }

    /// The failure cause, present only for an [`Outcome::Error`] built with one.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.failure_ref().and_then(Failure::cause)
    }

    /// The captured trace, present only for an [`Outcome::Error`] built with one.
    #[must_use]
    pub fn trace(&self) -> Option<&Backtrace> {
        self.failure_ref().and_then(Failure::trace)
    }

    /// Converts `&Outcome<T>` into `Outcome<&T>`, cloning any failure.
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Error(failure) => Outcome::Error(failure.clone()),
            Self::Loading => Outcome::Loading,
        }
    }

    /// Splits a success value from a non-success state re-typed for `U`.
    ///
    /// Every combinator funnels through here so that errors keep their
    /// message, cause and trace when the payload type changes.
    pub(crate) fn into_residual<U>(self) -> Result<T, Outcome<U>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(failure) => Err(Outcome::Error(failure)),
            Self::Loading => Err(Outcome::Loading),
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::Error(failure)
    }
}

#[cfg(test)]
mod tests;
