//! Scripted generator for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use yaaya_types::llm::{GenerationRequest, GenerationResponse, LlmError};

use super::provider::TextGenerator;

enum Script {
    /// Echo the prompt followed by this text, like a causal LM would.
    Echo(String),
    /// Like `Echo`, after sleeping for the given delay.
    SlowEcho(Duration, String),
    Fail,
}

pub(crate) struct ScriptedGenerator {
    script: Script,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<GenerationRequest>>>,
}

impl ScriptedGenerator {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn echoing(continuation: &str) -> Self {
        Self::with_script(Script::Echo(continuation.to_string()))
    }

    pub(crate) fn slow(delay: Duration, continuation: &str) -> Self {
        Self::with_script(Script::SlowEcho(delay, continuation.to_string()))
    }

    pub(crate) fn failing() -> Self {
        Self::with_script(Script::Fail)
    }

    pub(crate) fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub(crate) fn last_request(&self) -> Arc<Mutex<Option<GenerationRequest>>> {
        Arc::clone(&self.last_request)
    }
}

impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-1"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.script {
            Script::Echo(continuation) => Ok(GenerationResponse {
                generated_text: format!("{}{}", request.prompt, continuation),
                model: request.model.clone(),
            }),
            Script::SlowEcho(delay, continuation) => {
                tokio::time::sleep(*delay).await;
                Ok(GenerationResponse {
                    generated_text: format!("{}{}", request.prompt, continuation),
                    model: request.model.clone(),
                })
            }
            Script::Fail => Err(LlmError::Provider {
                message: "model exploded".to_string(),
            }),
        }
    }
}
