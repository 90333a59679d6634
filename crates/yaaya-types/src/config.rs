//! Tuning configuration for the chat service.
//!
//! `ChatConfig` represents the optional TOML file that controls history
//! limits, prompt labels, and sampling parameters. Process settings (port,
//! model id, secret key) come from the command line / environment instead.

use serde::{Deserialize, Serialize};

use crate::llm::GenerationParams;

/// Chat tuning knobs. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Maximum turns kept per session (oldest trimmed first).
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,

    /// How many recent turns are rendered into the prompt.
    #[serde(default = "default_context_turns")]
    pub context_turns: usize,

    /// Idle time after which a session is forgotten.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// Speaker label for the assistant; also the trailing prompt cue.
    #[serde(default = "default_assistant_label")]
    pub assistant_label: String,

    #[serde(default = "default_user_label")]
    pub user_label: String,

    /// HTTP timeout for one generation call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub generation: GenerationParams,
}

fn default_history_cap() -> usize {
    10
}

fn default_context_turns() -> usize {
    5
}

fn default_session_ttl_secs() -> u64 {
    3600
}

fn default_assistant_label() -> String {
    "YAAYA".to_string()
}

fn default_user_label() -> String {
    "User".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_cap: default_history_cap(),
            context_turns: default_context_turns(),
            session_ttl_secs: default_session_ttl_secs(),
            assistant_label: default_assistant_label(),
            user_label: default_user_label(),
            request_timeout_secs: default_request_timeout_secs(),
            generation: GenerationParams::default(),
        }
    }
}
