//! Test helpers shared across crates in the workspace.
//!
//! - [`crate::env`] serialises environment mutation behind RAII guards.
//! - [`crate::logs`] captures `tracing` output so tests can assert on it.

pub mod env;
pub mod logs;
