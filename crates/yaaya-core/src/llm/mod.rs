//! Text-generation abstractions for YAAYA.
//!
//! - `TextGenerator`: RPITIT trait for concrete generation backends
//! - `BoxTextGenerator`: object-safe wrapper for dynamic dispatch
//! - `GenerationWrapper`: sampling defaults, continuation extraction, and
//!   the explicit `GenerationOutcome` the chat service matches on

pub mod box_provider;
pub mod provider;
pub mod wrapper;

pub use box_provider::BoxTextGenerator;
pub use provider::TextGenerator;
pub use wrapper::{GenerationOutcome, GenerationWrapper};

#[cfg(test)]
pub(crate) mod testing;
