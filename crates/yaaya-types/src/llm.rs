//! Text-generation request/response types for YAAYA.
//!
//! These types model a plain prompt-in, text-out generation call: the prompt
//! is already rendered by the caller, and the provider returns the generated
//! text (which may or may not echo the prompt).

use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_do_sample")]
    pub do_sample: bool,
}

fn default_max_new_tokens() -> u32 {
    60
}

fn default_temperature() -> f64 {
    0.8
}

fn default_top_k() -> u32 {
    50
}

fn default_top_p() -> f64 {
    0.95
}

fn default_do_sample() -> bool {
    true
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            do_sample: default_do_sample(),
        }
    }
}

/// Request to a text-generation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub params: GenerationParams,
}

/// Response from a text-generation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Raw generated text. Providers that echo the prompt include it here.
    pub generated_text: String,
    pub model: String,
}

/// Errors from text-generation provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("model '{model}' is still loading")]
    ModelLoading {
        model: String,
        estimated_secs: Option<f64>,
    },

    #[error("model '{0}' not found")]
    ModelNotFound(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("request timed out")]
    Timeout,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_params_default() {
        let params = GenerationParams::default();
        assert_eq!(params.max_new_tokens, 60);
        assert!((params.temperature - 0.8).abs() < f64::EPSILON);
        assert_eq!(params.top_k, 50);
        assert!((params.top_p - 0.95).abs() < f64::EPSILON);
        assert!(params.do_sample);
    }

    #[test]
    fn test_generation_params_partial_toml() {
        let params: GenerationParams = toml::from_str("temperature = 0.5").unwrap();
        assert!((params.temperature - 0.5).abs() < f64::EPSILON);
        assert_eq!(params.top_k, 50);
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::ModelLoading {
            model: "distilgpt2".to_string(),
            estimated_secs: Some(20.0),
        };
        assert_eq!(err.to_string(), "model 'distilgpt2' is still loading");

        let err = LlmError::Provider {
            message: "HTTP 500".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 500");
    }
}
