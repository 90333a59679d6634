//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the same shape: `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use yaaya_types::error::{ChatError, SessionError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat pipeline errors.
    Chat(ChatError),
    /// Malformed or incomplete request.
    Validation(String),
    NotFound(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Chat(ChatError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, "Message must not be empty".to_string())
            }
            AppError::Chat(ChatError::Session(SessionError::NotFound(id))) => {
                tracing::error!(session_id = %id, "Session vanished mid-exchange");
                (StatusCode::INTERNAL_SERVER_ERROR, "Session expired, please retry".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use yaaya_types::chat::SessionId;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_message_is_bad_request() {
        let (status, body) = render(ChatError::EmptyMessage.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message must not be empty");
    }

    #[tokio::test]
    async fn test_session_error_is_internal() {
        let err: AppError = ChatError::from(SessionError::NotFound(SessionId::new())).into();
        let (status, body) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let (status, body) = render(AppError::NotFound("no such asset".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "no such asset" }));
    }
}
