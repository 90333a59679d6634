//! Chat service running one exchange end to end.
//!
//! Steps, in order:
//! 1. reject empty input
//! 2. creator questions short-circuit to the fixed reply
//! 3. render the prompt from recent history plus the new message
//! 4. generate, falling back to the rule-based reply on any non-reply outcome
//! 5. record both turns, trimmed to the cap
//! 6. return the reply
//!
//! Generation failures are logged and absorbed here; callers only ever see
//! `ChatError` for bad input or a vanished session.

use tracing::{debug, info, warn};

use yaaya_types::chat::{SessionHandle, SessionId, Turn};
use yaaya_types::error::ChatError;

use crate::intent::{Intent, IntentClassifier};
use crate::llm::{GenerationOutcome, GenerationWrapper};
use crate::session::SessionStore;

use super::prompt::PromptBuilder;

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// A rule preempted generation.
    Intent(Intent),
    /// Model continuation.
    Model,
    /// Rule table used because generation was unavailable, failed, or empty.
    /// Carries the matched intent, `None` for the default reply.
    RuleFallback(Option<Intent>),
}

/// Result of a successful exchange.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub session: SessionHandle,
    pub reply: String,
    pub source: ReplySource,
}

/// Orchestrates an exchange over a [`SessionStore`].
///
/// Generic over the store so the in-memory map can be swapped without
/// touching the exchange logic.
pub struct ChatService<S: SessionStore> {
    store: S,
    classifier: IntentClassifier,
    prompt: PromptBuilder,
    generation: GenerationWrapper,
}

impl<S: SessionStore> ChatService<S> {
    pub fn new(
        store: S,
        classifier: IntentClassifier,
        prompt: PromptBuilder,
        generation: GenerationWrapper,
    ) -> Self {
        Self {
            store,
            classifier,
            prompt,
            generation,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn generation(&self) -> &GenerationWrapper {
        &self.generation
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// Resolve or create the caller's session without sending a message.
    pub async fn open_session(&self, session_id: Option<SessionId>) -> SessionHandle {
        self.store.get_or_create(session_id).await
    }

    /// Run one exchange for `message` in the given session.
    pub async fn handle(
        &self,
        session_id: Option<SessionId>,
        message: &str,
    ) -> Result<ChatReply, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let session = self.store.get_or_create(session_id).await;

        let (reply, source) = if self.classifier.matches(Intent::Creator, message) {
            (
                self.classifier.classify(message).reply.to_string(),
                ReplySource::Intent(Intent::Creator),
            )
        } else if !self.generation.is_enabled() {
            self.rule_reply(message)
        } else {
            let history = self
                .store
                .read_recent(&session.id, self.prompt.context_turns())
                .await?;
            let prompt = self.prompt.build(&history, message);

            match self.generation.generate(&prompt).await {
                GenerationOutcome::Reply(text) => (text, ReplySource::Model),
                GenerationOutcome::Empty => {
                    debug!(session_id = %session.id, "Empty generation, using rules");
                    self.rule_reply(message)
                }
                GenerationOutcome::Failed(err) => {
                    warn!(session_id = %session.id, error = %err, "Generation failed, using rules");
                    self.rule_reply(message)
                }
                GenerationOutcome::Disabled => self.rule_reply(message),
            }
        };

        self.store
            .append_exchange(&session.id, Turn::user(message), Turn::assistant(reply.as_str()))
            .await?;

        info!(
            session_id = %session.id,
            created = session.created,
            source = ?source,
            "Chat exchange recorded"
        );

        Ok(ChatReply {
            session,
            reply,
            source,
        })
    }

    fn rule_reply(&self, message: &str) -> (String, ReplySource) {
        let classification = self.classifier.classify(message);
        (
            classification.reply.to_string(),
            ReplySource::RuleFallback(classification.intent),
        )
    }
}
