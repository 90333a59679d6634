//! TextGenerator trait definition.
//!
//! This is the core abstraction every generation backend implements.
//! Uses RPITIT for `generate`; `BoxTextGenerator` provides the object-safe
//! form for runtime selection.

use yaaya_types::llm::{GenerationRequest, GenerationResponse, LlmError};

/// Trait for text-generation backends (hosted inference APIs, local servers).
///
/// Implementations live in yaaya-infra (e.g., `HfInferenceGenerator`).
pub trait TextGenerator: Send + Sync {
    /// Human-readable provider name (e.g., "huggingface").
    fn name(&self) -> &str;

    /// Model identifier requests are sent to.
    fn model(&self) -> &str;

    /// Generate a continuation for the request's prompt.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, LlmError>> + Send;
}
