//! Per-session conversation history.
//!
//! `SessionStore` is the capability trait the chat service works against;
//! `InMemorySessionStore` is the process-local implementation backed by a
//! concurrent map. Nothing here survives a restart.

pub mod memory;
pub mod store;

pub use memory::InMemorySessionStore;
pub use store::SessionStore;
