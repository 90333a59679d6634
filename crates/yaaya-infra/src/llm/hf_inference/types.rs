//! Hugging Face inference API types.
//!
//! These are wire structures for the text-generation task. They are NOT the
//! generic generation types from yaaya-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `POST /models/{model}`.
#[derive(Debug, Clone, Serialize)]
pub struct HfGenerationRequest {
    pub inputs: String,
    pub parameters: HfParameters,
    pub options: HfOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct HfParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub do_sample: bool,
    /// Keep the prompt in the output; extraction strips it downstream.
    pub return_full_text: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HfOptions {
    /// Fail fast with 503 instead of blocking while a cold model loads.
    pub wait_for_model: bool,
    pub use_cache: bool,
}

/// One generated sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct HfGeneration {
    pub generated_text: String,
}

/// Success payload. The hosted API returns a list; some self-hosted servers
/// return a bare object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HfGenerationResponse {
    Many(Vec<HfGeneration>),
    One(HfGeneration),
}

impl HfGenerationResponse {
    /// Text of the first sequence, if any.
    pub fn into_first_text(self) -> Option<String> {
        match self {
            HfGenerationResponse::Many(list) => list.into_iter().next().map(|g| g.generated_text),
            HfGenerationResponse::One(one) => Some(one.generated_text),
        }
    }
}

/// Error payload, e.g. `{"error": "Model distilgpt2 is currently loading", "estimated_time": 20.0}`.
#[derive(Debug, Clone, Deserialize)]
pub struct HfErrorBody {
    pub error: String,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
