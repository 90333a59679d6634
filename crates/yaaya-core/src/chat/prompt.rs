//! Prompt rendering from session history.
//!
//! The prompt is a plain transcript, one `Label: text` line per turn,
//! followed by the new user message and a trailing assistant cue:
//!
//! ```text
//! User: hello
//! YAAYA: Hello there!
//! User: what is rust?
//! YAAYA:
//! ```

use yaaya_types::chat::{MessageRole, Turn};
use yaaya_types::config::ChatConfig;

#[derive(Debug, Clone)]
pub struct PromptBuilder {
    user_label: String,
    assistant_label: String,
    context_turns: usize,
}

impl PromptBuilder {
    pub fn new(
        user_label: impl Into<String>,
        assistant_label: impl Into<String>,
        context_turns: usize,
    ) -> Self {
        Self {
            user_label: user_label.into(),
            assistant_label: assistant_label.into(),
            context_turns,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(
            config.user_label.clone(),
            config.assistant_label.clone(),
            config.context_turns,
        )
    }

    /// How many prior turns are rendered ahead of the new message.
    pub fn context_turns(&self) -> usize {
        self.context_turns
    }

    /// The trailing cue, e.g. `"YAAYA:"`.
    pub fn cue(&self) -> String {
        format!("{}:", self.assistant_label)
    }

    /// Labels that open a new turn; generation is cut at the first one.
    pub fn speaker_labels(&self) -> Vec<String> {
        vec![format!("{}:", self.user_label), self.cue()]
    }

    fn label(&self, role: MessageRole) -> &str {
        match role {
            MessageRole::User => &self.user_label,
            MessageRole::Assistant => &self.assistant_label,
        }
    }

    /// Render the last `context_turns` of `history` plus `message`.
    pub fn build(&self, history: &[Turn], message: &str) -> String {
        let skip = history.len().saturating_sub(self.context_turns);
        let mut lines: Vec<String> = history[skip..]
            .iter()
            .map(|turn| format!("{}: {}", self.label(turn.role), turn.text))
            .collect();
        lines.push(format!("{}: {}", self.user_label, message));
        lines.push(self.cue());
        lines.join("\n")
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}
