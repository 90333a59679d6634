//! HfInferenceGenerator -- concrete [`TextGenerator`] for the Hugging Face
//! inference protocol.
//!
//! Sends `POST {base_url}/models/{model}` with the prompt and sampling
//! parameters, and maps HTTP failures onto [`LlmError`] variants. The
//! optional API token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use yaaya_core::llm::TextGenerator;
use yaaya_types::llm::{GenerationRequest, GenerationResponse, LlmError};

use super::types::{HfErrorBody, HfGenerationRequest, HfGenerationResponse, HfOptions, HfParameters};

/// Hosted Hugging Face inference endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Text generator speaking the Hugging Face inference protocol.
pub struct HfInferenceGenerator {
    client: reqwest::Client,
    api_token: Option<SecretString>,
    base_url: String,
    model: String,
}

impl HfInferenceGenerator {
    /// Create a generator for `model` at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::InvalidConfig`] if the model id is empty, the base
    /// URL does not parse, or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        model: impl Into<String>,
        api_token: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let model = model.into();
        if model.trim().is_empty() {
            return Err(LlmError::InvalidConfig("model id is empty".to_string()));
        }

        reqwest::Url::parse(base_url)
            .map_err(|e| LlmError::InvalidConfig(format!("invalid base URL '{base_url}': {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    fn to_hf_request(request: &GenerationRequest) -> HfGenerationRequest {
        let params = &request.params;
        HfGenerationRequest {
            inputs: request.prompt.clone(),
            parameters: HfParameters {
                max_new_tokens: params.max_new_tokens,
                temperature: params.temperature,
                top_k: params.top_k,
                top_p: params.top_p,
                do_sample: params.do_sample,
                return_full_text: true,
            },
            options: HfOptions {
                wait_for_model: false,
                use_cache: false,
            },
        }
    }

    fn map_status(&self, status: reqwest::StatusCode, body: &str) -> LlmError {
        let parsed: Option<HfErrorBody> = serde_json::from_str(body).ok();
        match status.as_u16() {
            401 | 403 => LlmError::AuthenticationFailed,
            404 => LlmError::ModelNotFound(self.model.clone()),
            429 => LlmError::RateLimited {
                retry_after_ms: None,
            },
            503 => LlmError::ModelLoading {
                model: self.model.clone(),
                estimated_secs: parsed.and_then(|b| b.estimated_time),
            },
            _ => LlmError::Provider {
                message: match parsed {
                    Some(b) => format!("HTTP {status}: {}", b.error),
                    None => format!("HTTP {status}: {body}"),
                },
            },
        }
    }
}

// No Debug derive: keeps the token field out of any formatted output.

impl TextGenerator for HfInferenceGenerator {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let body = Self::to_hf_request(request);

        let mut builder = self.client.post(self.url()).json(&body);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout
            } else {
                LlmError::Provider {
                    message: format!("HTTP request failed: {e}"),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(self.map_status(status, &error_body));
        }

        let payload: HfGenerationResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let generated_text = payload.into_first_text().ok_or_else(|| {
            LlmError::Deserialization("response contained no generations".to_string())
        })?;

        Ok(GenerationResponse {
            generated_text,
            model: self.model.clone(),
        })
    }
}
