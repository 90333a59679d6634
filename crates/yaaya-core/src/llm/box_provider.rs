//! BoxTextGenerator -- object-safe dynamic dispatch wrapper for TextGenerator.
//!
//! 1. Define an object-safe `TextGeneratorDyn` trait with boxed futures
//! 2. Blanket-impl `TextGeneratorDyn` for all `T: TextGenerator`
//! 3. `BoxTextGenerator` wraps `Box<dyn TextGeneratorDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use yaaya_types::llm::{GenerationRequest, GenerationResponse, LlmError};

use super::provider::TextGenerator;

/// Object-safe version of [`TextGenerator`] with boxed futures.
pub trait TextGeneratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, LlmError>> + Send + 'a>>;
}

impl<T: TextGenerator> TextGeneratorDyn for T {
    fn name(&self) -> &str {
        TextGenerator::name(self)
    }

    fn model(&self) -> &str {
        TextGenerator::model(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased text generator for runtime provider selection.
///
/// Since `TextGenerator` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxTextGenerator` exposes the same methods and delegates to the
/// inner `TextGeneratorDyn` trait object.
pub struct BoxTextGenerator {
    inner: Box<dyn TextGeneratorDyn + Send + Sync>,
}

impl BoxTextGenerator {
    /// Wrap a concrete `TextGenerator` in a type-erased box.
    pub fn new<T: TextGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn model(&self) -> &str {
        self.inner.model()
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        self.inner.generate_boxed(request).await
    }
}

impl std::fmt::Debug for BoxTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxTextGenerator")
            .field("name", &self.name())
            .field("model", &self.model())
            .finish()
    }
}
