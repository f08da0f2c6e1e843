//! Error type returned when leaving the `Outcome` world.

mod types;

pub use types::OutcomeError;
