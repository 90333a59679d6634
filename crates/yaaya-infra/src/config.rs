//! Chat tuning configuration loader.
//!
//! Reads an optional TOML file and deserializes it into [`ChatConfig`].
//! Falls back to defaults when no path is given or the file is missing or
//! malformed, so a bad tuning file never keeps the server from starting.

use std::path::Path;

use yaaya_types::config::ChatConfig;

/// Load chat configuration from `path`.
///
/// - `None` or a missing file returns [`ChatConfig::default()`].
/// - A file that fails to read or parse logs a warning and returns the default.
/// - Otherwise returns the parsed config with [`sanitize`] applied.
pub async fn load_chat_config(path: Option<&Path>) -> ChatConfig {
    let Some(config_path) = path else {
        return ChatConfig::default();
    };

    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return ChatConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ChatConfig::default();
        }
    };

    match toml::from_str::<ChatConfig>(&content) {
        Ok(config) => sanitize(config),
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ChatConfig::default()
        }
    }
}

/// Clamp values that would make the service misbehave.
///
/// The history cap must hold at least one exchange, and the prompt cannot
/// draw on more turns than the cap keeps. A session must outlive one
/// generation call, so the TTL is never shorter than the request timeout.
pub fn sanitize(mut config: ChatConfig) -> ChatConfig {
    if config.history_cap < 2 {
        tracing::warn!(history_cap = config.history_cap, "history_cap raised to 2");
        config.history_cap = 2;
    }
    if config.context_turns > config.history_cap {
        config.context_turns = config.history_cap;
    }
    if config.request_timeout_secs == 0 {
        config.request_timeout_secs = 1;
    }
    if config.session_ttl_secs < config.request_timeout_secs {
        tracing::warn!(
            session_ttl_secs = config.session_ttl_secs,
            request_timeout_secs = config.request_timeout_secs,
            "session_ttl_secs raised to the request timeout"
        );
        config.session_ttl_secs = config.request_timeout_secs;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use yaaya_core::session::{InMemorySessionStore, SessionStore};

    #[tokio::test]
    async fn load_chat_config_without_path_returns_default() {
        assert_eq!(load_chat_config(None).await, ChatConfig::default());
    }

    #[tokio::test]
    async fn load_chat_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_chat_config(Some(&tmp.path().join("yaaya.toml"))).await;
        assert_eq!(config, ChatConfig::default());
    }

    #[tokio::test]
    async fn load_chat_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("yaaya.toml");
        tokio::fs::write(
            &config_path,
            r#"
history_cap = 20
context_turns = 8
assistant_label = "Bot"

[generation]
temperature = 0.6
max_new_tokens = 40
"#,
        )
        .await
        .unwrap();

        let config = load_chat_config(Some(&config_path)).await;
        assert_eq!(config.history_cap, 20);
        assert_eq!(config.context_turns, 8);
        assert_eq!(config.assistant_label, "Bot");
        assert_eq!(config.user_label, "User");
        assert_eq!(config.generation.max_new_tokens, 40);
        assert!((config.generation.temperature - 0.6).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn load_chat_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("yaaya.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_chat_config(Some(&config_path)).await;
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn sanitize_clamps_values() {
        let config = sanitize(ChatConfig {
            history_cap: 0,
            context_turns: 9,
            request_timeout_secs: 0,
            session_ttl_secs: 0,
            ..ChatConfig::default()
        });
        assert_eq!(config.history_cap, 2);
        assert_eq!(config.context_turns, 2);
        assert_eq!(config.request_timeout_secs, 1);
        assert_eq!(config.session_ttl_secs, 1);
    }

    #[test]
    fn sanitize_ttl_covers_request_timeout() {
        let config = sanitize(ChatConfig {
            session_ttl_secs: 10,
            request_timeout_secs: 30,
            ..ChatConfig::default()
        });
        assert_eq!(config.session_ttl_secs, 30);
    }

    #[tokio::test]
    async fn load_chat_config_zero_ttl_keeps_sessions_alive() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("yaaya.toml");
        tokio::fs::write(&config_path, "session_ttl_secs = 0\n")
            .await
            .unwrap();

        let config = load_chat_config(Some(&config_path)).await;
        assert!(config.session_ttl_secs >= config.request_timeout_secs);

        let store = InMemorySessionStore::from_config(&config);
        let first = store.get_or_create(None).await;
        let second = store.get_or_create(Some(first.id)).await;
        assert_eq!(second.id, first.id);
        assert!(!second.created);
    }

    #[test]
    fn sanitize_keeps_valid_values() {
        let config = sanitize(ChatConfig::default());
        assert_eq!(config, ChatConfig::default());
    }
}
