//! Payload of [`Outcome::Error`](super::Outcome::Error).

use std::{
    backtrace::Backtrace,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::Cause;

const UNSPECIFIED: &str = "unspecified failure";

/// Description of an expected failure.
///
/// The message is always non-empty. The optional cause and trace are carried
/// opaquely for diagnostics; equality compares the message and the rendered
/// cause only.
///
/// Causes are not required to be
/// [`RefUnwindSafe`](std::panic::RefUnwindSafe), so neither `Failure` nor
/// [`Outcome`](super::Outcome) is unwind safe.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "FailureRepr", into = "FailureRepr")
)]
pub struct Failure {
    message: String,
    cause: Option<Arc<Cause>>,
    trace: Option<Arc<Backtrace>>,
}

impl Failure {
    /// Creates a failure with the given message.
    ///
    /// A blank message is replaced with `"unspecified failure"` so that
    /// [`Failure::message`] is never empty.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let mut text: String = message.into();
        if text.trim().is_empty() {
            tracing::warn!("failure constructed without a message");
            UNSPECIFIED.clone_into(&mut text);
        }
        Self {
            message: text,
            cause: None,
            trace: None,
        }
    }

    /// Attaches the underlying error.
    #[must_use]
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(cause))
    }

    /// Attaches an already shared cause.
    #[must_use]
    pub fn with_shared_cause(mut self, cause: Arc<Cause>) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Attaches a backtrace.
    #[must_use]
    pub fn with_trace(mut self, trace: Backtrace) -> Self {
        self.trace = Some(Arc::new(trace));
        self
    }

    /// Captures a backtrace at the call site, honouring `RUST_BACKTRACE`.
    #[must_use]
    pub fn capture_trace(self) -> Self {
        self.with_trace(Backtrace::capture())
    }

    /// The human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying error, if one was attached.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_deref()
    }

    /// The captured backtrace, if one was attached.
    #[must_use]
    pub fn trace(&self) -> Option<&Backtrace> {
        self.trace.as_deref()
    }

    /// Replaces the message, keeping cause and trace.
    #[must_use]
    pub(crate) fn remessage(self, message: String) -> Self {
        Self {
            message: Self::new(message).message,
            ..self
        }
    }

    fn cause_text(&self) -> Option<String> {
        self.cause.as_ref().map(ToString::to_string)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.cause_text() == other.cause_text()
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message.hash(state);
        self.cause_text().hash(state);
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Cause reconstructed from its rendered text after deserialisation.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct RenderedCause(String);

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FailureRepr {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}

#[cfg(feature = "serde")]
impl From<Failure> for FailureRepr {
    fn from(failure: Failure) -> Self {
        let cause = failure.cause_text();
        Self {
            message: failure.message,
            cause,
        }
    }
}

#[cfg(feature = "serde")]
impl From<FailureRepr> for Failure {
    fn from(repr: FailureRepr) -> Self {
        let failure = Self::new(repr.message);
        match repr.cause {
            Some(text) => failure.with_cause(RenderedCause(text)),
            None => failure,
        }
    }
}
