//! [`OutcomeError`] and its helpers.

use thiserror::Error;

use crate::{Failure, State};

/// Non-success state surfaced by [`Outcome::into_result`](crate::Outcome::into_result).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// The outcome carried an expected failure.
    #[error(transparent)]
    Failed(#[from] Failure),

    /// The outcome had not resolved yet.
    #[error("outcome is still loading")]
    Pending,
}

impl OutcomeError {
    /// The [`State`] the outcome was in.
    #[must_use]
    pub const fn state(&self) -> State {
        match self {
            Self::Failed(_) => State::Error,
            Self::Pending => State::Loading,
        }
    }

    /// The failure payload, when there is one.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Pending => None,
        }
    }
}
