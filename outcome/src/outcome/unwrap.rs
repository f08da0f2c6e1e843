//! Extracting the success value.

use super::Outcome;
use crate::OutcomeError;

impl<T> Outcome<T> {
    /// Returns the success value.
    ///
    /// Calling this on anything but a success is a programming error, not an
    /// expected failure path. Use [`Outcome::into_result`] or one of the
    /// defaulting variants when the state is not known.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is `Error` or `Loading`. The panic message
    /// names the state and, for `Error`, the failure message.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(err) => invalid_state("called `Outcome::unwrap()` on", &err),
        }
    }

    /// Returns the success value, panicking with `msg` otherwise.
    ///
    /// # Panics
    ///
    /// Panics when the outcome is `Error` or `Loading`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.into_result() {
            Ok(value) => value,
            Err(err) => invalid_state(msg, &err),
        }
    }

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Error(_) | Self::Loading => default,
        }
    }

    /// Returns the success value or the lazily computed `default()`.
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Error(_) | Self::Loading => default(),
        }
    }

    /// Returns the success value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Converts into a [`Result`] without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::Failed`] for `Error` and
    /// [`OutcomeError::Pending`] for `Loading`.
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(failure) => Err(OutcomeError::Failed(failure)),
            Self::Loading => Err(OutcomeError::Pending),
        }
    }
}

#[track_caller]
#[cold]
fn invalid_state(context: &str, err: &OutcomeError) -> ! {
    tracing::debug!(state = %err.state(), error = %err, "unwrapping non-success outcome");
    panic!("{context} a non-success value: {err}")
}
