//! Chat orchestration for YAAYA.
//!
//! `ChatService` runs one exchange end to end: validate, preempt fixed
//! questions, render the prompt, generate or fall back, record history.

pub mod prompt;
pub mod service;

pub use prompt::PromptBuilder;
pub use service::{ChatReply, ChatService, ReplySource};
