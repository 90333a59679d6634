//! Application state wiring the chat pipeline together.
//!
//! `ChatService` is generic over its session store; AppState pins it to the
//! in-memory implementation and owns the cookie signing key.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use tracing::{info, warn};

use yaaya_core::chat::{ChatService, PromptBuilder};
use yaaya_core::intent::IntentClassifier;
use yaaya_core::llm::{BoxTextGenerator, GenerationWrapper};
use yaaya_core::session::InMemorySessionStore;
use yaaya_infra::config::load_chat_config;
use yaaya_infra::llm::{GeneratorSettings, create_generator};
use yaaya_types::config::ChatConfig;

use crate::cli::Settings;
use crate::http::session::CookieKey;

/// Signing key used when `SECRET_KEY` is not provided.
const DEV_SECRET_KEY: &str = "yaaya-dev-secret-change-me";

pub type ConcreteChatService = ChatService<InMemorySessionStore>;

/// Shared state for HTTP handlers and CLI commands.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub cookie_key: Arc<CookieKey>,
}

impl AppState {
    /// Load tuning, pick the generation mode, and wire the chat service.
    ///
    /// A model that cannot be set up is not fatal: the service runs in
    /// rule-based mode instead.
    pub async fn init(settings: &Settings) -> anyhow::Result<Self> {
        let config = load_chat_config(settings.config.as_deref()).await;

        let generator_settings = GeneratorSettings {
            model: settings.model.clone(),
            base_url: settings.inference_url.clone(),
            api_token: settings
                .hf_token
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(SecretString::from),
            timeout: Duration::from_secs(config.request_timeout_secs),
        };
        let generator = match create_generator(&generator_settings) {
            Ok(Some(generator)) => {
                info!(
                    provider = generator.name(),
                    model = generator.model(),
                    "Text generation enabled"
                );
                Some(generator)
            }
            Ok(None) => {
                info!("Text generation disabled, answering from rules only");
                None
            }
            Err(e) => {
                warn!(model = %settings.model, error = %e, "Could not load model, using rule-based replies");
                None
            }
        };

        let secret_key = match settings.secret_key.as_deref() {
            Some(key) if !key.is_empty() => SecretString::from(key),
            _ => {
                warn!("SECRET_KEY is not set, signing session cookies with the development key");
                SecretString::from(DEV_SECRET_KEY)
            }
        };

        Self::build(config, generator, secret_key)
    }

    /// Wire the state from already-resolved parts.
    pub fn build(
        config: ChatConfig,
        generator: Option<BoxTextGenerator>,
        secret_key: SecretString,
    ) -> anyhow::Result<Self> {
        let prompt = PromptBuilder::from_config(&config);
        let generation = GenerationWrapper::new(
            generator,
            config.generation.clone(),
            prompt.cue(),
            prompt.speaker_labels(),
        );
        let chat_service = ChatService::new(
            InMemorySessionStore::from_config(&config),
            IntentClassifier::standard(),
            prompt,
            generation,
        );
        let cookie_key = CookieKey::new(&secret_key)?;

        Ok(Self {
            chat_service: Arc::new(chat_service),
            cookie_key: Arc::new(cookie_key),
        })
    }

    /// `"model"` when a generator is configured, else `"rule-based"`.
    pub fn mode(&self) -> &'static str {
        if self.chat_service.generation().is_enabled() {
            "model"
        } else {
            "rule-based"
        }
    }
}
