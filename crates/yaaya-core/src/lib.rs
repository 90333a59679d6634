//! Business logic and capability traits for YAAYA.
//!
//! This crate defines the "ports" the infrastructure layer implements
//! (`TextGenerator`) alongside the in-process pieces that need no IO: the
//! session store, the intent rules, prompt rendering, and the chat service
//! that ties them together. It depends only on `yaaya-types` -- never on
//! `yaaya-infra` or any HTTP crate.

pub mod chat;
pub mod intent;
pub mod llm;
pub mod session;
