//! Generation wrapper: one prompt in, one explicit outcome out.
//!
//! The wrapper owns the sampling parameters and the optional generator.
//! It never raises: every path ends in a [`GenerationOutcome`] variant that
//! the caller matches on to decide whether to fall back to the rules.

use tracing::{Instrument, debug, info_span};

use yaaya_types::llm::{GenerationParams, GenerationRequest, LlmError};

use super::box_provider::BoxTextGenerator;

/// Result of one generation attempt.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// Non-empty continuation extracted from the model output.
    Reply(String),
    /// The model answered but nothing usable was left after extraction.
    Empty,
    /// The backend call failed.
    Failed(LlmError),
    /// No generator is configured (rule-based mode).
    Disabled,
}

/// Adapter around an optional [`BoxTextGenerator`].
#[derive(Debug)]
pub struct GenerationWrapper {
    generator: Option<BoxTextGenerator>,
    params: GenerationParams,
    /// Trailing cue the prompt ends with, e.g. `"YAAYA:"`.
    cue: String,
    /// Speaker labels that mark the model starting a new turn.
    stop_labels: Vec<String>,
}

impl GenerationWrapper {
    pub fn new(
        generator: Option<BoxTextGenerator>,
        params: GenerationParams,
        cue: impl Into<String>,
        stop_labels: Vec<String>,
    ) -> Self {
        Self {
            generator,
            params,
            cue: cue.into(),
            stop_labels,
        }
    }

    /// A wrapper with no generator; every call yields `Disabled`.
    pub fn disabled() -> Self {
        Self::new(None, GenerationParams::default(), "", Vec::new())
    }

    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Model id of the configured generator, if any.
    pub fn model(&self) -> Option<&str> {
        self.generator.as_ref().map(|g| g.model())
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Run the generator on `prompt` and extract the assistant continuation.
    pub async fn generate(&self, prompt: &str) -> GenerationOutcome {
        let Some(generator) = &self.generator else {
            return GenerationOutcome::Disabled;
        };

        let request = GenerationRequest {
            model: generator.model().to_string(),
            prompt: prompt.to_string(),
            params: self.params.clone(),
        };

        let span = info_span!(
            "gen_ai.generate",
            gen_ai.system = generator.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.params.max_new_tokens,
            gen_ai.request.temperature = request.params.temperature,
            gen_ai.request.top_k = request.params.top_k,
            gen_ai.request.top_p = request.params.top_p,
        );

        match generator.generate(&request).instrument(span).await {
            Ok(response) => {
                let text = extract_continuation(
                    &response.generated_text,
                    prompt,
                    &self.cue,
                    &self.stop_labels,
                );
                if text.is_empty() {
                    debug!(model = %response.model, "Generation produced no continuation");
                    GenerationOutcome::Empty
                } else {
                    GenerationOutcome::Reply(text)
                }
            }
            Err(err) => GenerationOutcome::Failed(err),
        }
    }
}

/// Pull the assistant's reply out of raw model output.
///
/// 1. If the output echoes the prompt, drop that prefix.
/// 2. Otherwise keep what follows the last `cue`.
/// 3. Cut at the first speaker label (the model inventing the next turn).
/// 4. Trim whitespace.
pub fn extract_continuation(
    generated: &str,
    prompt: &str,
    cue: &str,
    stop_labels: &[String],
) -> String {
    let continuation = match generated.strip_prefix(prompt) {
        Some(rest) => rest,
        None if !cue.is_empty() => generated
            .rsplit_once(cue)
            .map(|(_, after)| after)
            .unwrap_or(generated),
        None => generated,
    };

    let end = stop_labels
        .iter()
        .filter(|label| !label.is_empty())
        .filter_map(|label| continuation.find(label.as_str()))
        .min()
        .unwrap_or(continuation.len());

    continuation[..end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::ScriptedGenerator;

    fn labels() -> Vec<String> {
        vec!["User:".to_string(), "YAAYA:".to_string()]
    }

    fn wrapper(generator: ScriptedGenerator) -> GenerationWrapper {
        GenerationWrapper::new(
            Some(BoxTextGenerator::new(generator)),
            GenerationParams::default(),
            "YAAYA:",
            labels(),
        )
    }

    #[test]
    fn test_extract_strips_echoed_prompt() {
        let prompt = "User: hi\nYAAYA:";
        let generated = "User: hi\nYAAYA: Hello friend!";
        assert_eq!(
            extract_continuation(generated, prompt, "YAAYA:", &labels()),
            "Hello friend!"
        );
    }

    #[test]
    fn test_extract_without_echo_uses_last_cue() {
        let generated = "blah YAAYA: first YAAYA:  second ";
        assert_eq!(
            extract_continuation(generated, "unrelated", "YAAYA:", &labels()),
            "second"
        );
    }

    #[test]
    fn test_extract_cuts_at_next_speaker() {
        let prompt = "User: hi\nYAAYA:";
        let generated = "User: hi\nYAAYA: Sure thing.\nUser: and then?\nYAAYA: more";
        assert_eq!(
            extract_continuation(generated, prompt, "YAAYA:", &labels()),
            "Sure thing."
        );
    }

    #[test]
    fn test_extract_plain_continuation() {
        assert_eq!(
            extract_continuation("  just text \n", "prompt", "YAAYA:", &labels()),
            "just text"
        );
    }

    #[tokio::test]
    async fn test_disabled_wrapper() {
        let wrapper = GenerationWrapper::disabled();
        assert!(!wrapper.is_enabled());
        assert!(wrapper.model().is_none());
        assert!(matches!(
            wrapper.generate("User: hi\nYAAYA:").await,
            GenerationOutcome::Disabled
        ));
    }

    #[tokio::test]
    async fn test_reply_outcome() {
        let wrapper = wrapper(ScriptedGenerator::echoing(" Nice to meet you."));
        match wrapper.generate("User: hi\nYAAYA:").await {
            GenerationOutcome::Reply(text) => assert_eq!(text, "Nice to meet you."),
            other => panic!("expected reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_outcome() {
        let wrapper = wrapper(ScriptedGenerator::echoing("   \nUser: what?"));
        assert!(matches!(
            wrapper.generate("User: hi\nYAAYA:").await,
            GenerationOutcome::Empty
        ));
    }

    #[tokio::test]
    async fn test_failed_outcome() {
        let generator = ScriptedGenerator::failing();
        let calls = generator.calls();
        let wrapper = wrapper(generator);
        assert!(matches!(
            wrapper.generate("User: hi\nYAAYA:").await,
            GenerationOutcome::Failed(LlmError::Provider { .. })
        ));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_carries_params() {
        let generator = ScriptedGenerator::echoing("ok");
        let last = generator.last_request();
        let wrapper = wrapper(generator);
        wrapper.generate("User: hi\nYAAYA:").await;

        let request = last.lock().unwrap().clone().unwrap();
        assert_eq!(request.model, "scripted-1");
        assert_eq!(request.prompt, "User: hi\nYAAYA:");
        assert_eq!(request.params, GenerationParams::default());
    }
}
