use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use yaaya_core::session::SessionStore;

use crate::state::AppState;

/// GET /health - liveness plus the active generation mode.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let service = &state.chat_service;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "mode": state.mode(),
        "model": service.generation().model(),
        "sessions": service.store().len(),
    }))
}
