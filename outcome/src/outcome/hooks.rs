//! Side-effect hooks that hand the outcome back unchanged.

use super::Outcome;
use crate::Cause;

impl<T> Outcome<T> {
    /// Calls `op` with the success value, if any.
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::success(7).on_success(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(outcome, Outcome::success(7));
    /// ```
    pub fn on_success<F>(self, op: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            op(value);
        }
        self
    }

    /// Calls `op` with the failure message and cause, if this is an error.
    pub fn on_error<F>(self, op: F) -> Self
    where
        F: FnOnce(&str, Option<&Cause>),
    {
        if let Self::Error(failure) = &self {
            op(failure.message(), failure.cause());
        }
        self
    }

    /// Calls `op` if the outcome is still loading.
    pub fn on_loading<F>(self, op: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_loading() {
            op();
        }
        self
    }

    /// Emits a `warn` event for an error, tagged with `context`.
    pub fn log_failure(self, context: &str) -> Self {
        self.on_error(|message, cause| match cause {
            Some(cause) => tracing::warn!(context, %message, %cause, "operation failed"),
            None => tracing::warn!(context, %message, "operation failed"),
        })
    }
}
