use std::fmt;

use super::Outcome;

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Error(failure) => write!(f, "Error({failure})"),
            Self::Loading => f.write_str("Loading()"),
        }
    }
}
