//! Extensions for outcomes whose payload is a collection.
//!
//! Each operation acts on the success payload and passes `Error` and
//! `Loading` through unchanged in kind. An empty collection or a missing key
//! is still a success.

mod mapping;
mod sequence;

pub use mapping::OutcomeMapExt;
pub use sequence::OutcomeSeqExt;
