//! Transformation combinators.
//!
//! Every combinator passes `Error` and `Loading` through unchanged in kind
//! and never calls the supplied closure for them. A closure that panics is
//! therefore only observable on the success path.

use super::Outcome;

impl<T> Outcome<T> {
    /// Applies `op` to the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).map(|x| x * 2), Outcome::success(84));
    /// let failed: Outcome<i32> = Outcome::error("e");
    /// assert_eq!(failed.map(|x| x * 2).error_message(), Some("e"));
    /// ```
    pub fn map<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.into_residual() {
            Ok(value) => Outcome::Success(op(value)),
            Err(residual) => residual,
        }
    }

    /// Returns `op(value)` for a success and `default` otherwise.
    pub fn map_or<U, F>(self, default: U, op: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Error(_) | Self::Loading => default,
        }
    }

    /// Like [`Outcome::map_or`] with a lazily computed fallback.
    ///
    /// `default` runs at most once, and only for `Error` or `Loading`.
    pub fn map_or_else<U, D, F>(self, default: D, op: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Error(_) | Self::Loading => default(),
        }
    }

    /// Chains an asynchronous continuation onto a success.
    ///
    /// The continuation is started only after this outcome is known to be a
    /// success. `Error` and `Loading` resolve immediately on first poll.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn demo() {
    /// use outcome::Outcome;
    ///
    /// let doubled = Outcome::success(21)
    ///     .and_then(|x| async move { Outcome::success(x * 2) })
    ///     .await;
    /// assert_eq!(doubled, Outcome::success(42));
    /// # }
    /// ```
    pub async fn and_then<U, F, Fut>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.into_residual() {
            Ok(value) => op(value).await,
            Err(residual) => residual,
        }
    }

    /// Synchronous counterpart of [`Outcome::and_then`].
    pub fn and_then_sync<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.into_residual() {
            Ok(value) => op(value),
            Err(residual) => residual,
        }
    }

    /// Rewrites the failure message, keeping its cause and trace.
    ///
    /// `Success` and `Loading` pass through untouched.
    pub fn map_error<F>(self, op: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        match self {
            Self::Error(failure) => {
                let message = op(failure.message());
                Self::Error(failure.remessage(message))
            }
            other => other,
        }
    }

    /// Pairs two successes.
    ///
    /// When either side is not a success, the first non-success in argument
    /// order is returned.
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self.into_residual(), other.into_residual()) {
            (Ok(left), Ok(right)) => Outcome::Success((left, right)),
            (Err(residual), _) | (Ok(_), Err(residual)) => residual,
        }
    }
}
