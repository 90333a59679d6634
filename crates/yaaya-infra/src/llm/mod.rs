//! Text-generation provider implementations.
//!
//! Contains the concrete [`TextGenerator`](yaaya_core::llm::TextGenerator)
//! backends and the factory ([`create_generator`]) that picks one from
//! [`GeneratorSettings`], or none at all when rule-based mode is requested.

pub mod hf_inference;

use std::time::Duration;

use secrecy::SecretString;

use yaaya_core::llm::BoxTextGenerator;
use yaaya_types::llm::{GenerationParams, GenerationRequest, LlmError};

use self::hf_inference::HfInferenceGenerator;

/// Model ids that switch generation off.
const RULE_BASED_MODELS: &[&str] = &["", "none", "off", "rule-based", "rules"];

/// Everything needed to construct a generator.
pub struct GeneratorSettings {
    pub model: String,
    pub base_url: String,
    pub api_token: Option<SecretString>,
    pub timeout: Duration,
}

/// Whether `model` names rule-based mode rather than a real model.
pub fn is_rule_based_model(model: &str) -> bool {
    let model = model.trim().to_lowercase();
    RULE_BASED_MODELS.contains(&model.as_str())
}

/// Build the generator described by `settings`.
///
/// Returns `Ok(None)` for rule-based mode.
///
/// # Errors
///
/// Returns an error if the settings cannot produce a working client (bad
/// URL, empty model). Callers treat that as "model failed to load".
pub fn create_generator(settings: &GeneratorSettings) -> Result<Option<BoxTextGenerator>, LlmError> {
    if is_rule_based_model(&settings.model) {
        return Ok(None);
    }

    let generator = HfInferenceGenerator::new(
        &settings.base_url,
        settings.model.trim(),
        settings.api_token.clone(),
        settings.timeout,
    )?;
    Ok(Some(BoxTextGenerator::new(generator)))
}

/// Send a tiny prompt to check the generator answers at all.
///
/// Returns the raw generated text on success.
pub async fn test_generator_connection(generator: &BoxTextGenerator) -> Result<String, LlmError> {
    let request = GenerationRequest {
        model: generator.model().to_string(),
        prompt: "Hello".to_string(),
        params: GenerationParams {
            max_new_tokens: 5,
            ..GenerationParams::default()
        },
    };
    let response = generator.generate(&request).await?;
    Ok(response.generated_text)
}
