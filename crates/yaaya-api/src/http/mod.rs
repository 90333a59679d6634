//! HTTP layer for YAAYA.
//!
//! Serves the chat page and its script, the `/chat` JSON endpoint, and a
//! health probe. Sessions ride on a signed cookie.

pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
