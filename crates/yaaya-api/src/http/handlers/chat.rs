//! POST /chat - one exchange.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::http::session::{SessionCookie, with_session_cookie};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Missing is treated like empty.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub async fn chat(
    State(state): State<AppState>,
    SessionCookie(session): SessionCookie,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected chat body");
        AppError::Validation("Request body must be JSON like {\"message\": \"...\"}".to_string())
    })?;
    let message = request.message.unwrap_or_default();

    let reply = state.chat_service.handle(session, &message).await?;

    Ok(with_session_cookie(
        &state.cookie_key,
        &reply.session,
        Json(ChatResponse { reply: reply.reply }),
    ))
}
