//! Chat page and its embedded assets.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Response};

use crate::http::error::AppError;
use crate::http::session::{SessionCookie, with_session_cookie};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/script.js");

/// GET / - the chat page. Issues a session cookie on first visit.
pub async fn index(State(state): State<AppState>, SessionCookie(session): SessionCookie) -> Response {
    let handle = state.chat_service.open_session(session).await;
    with_session_cookie(&state.cookie_key, &handle, Html(INDEX_HTML))
}

/// GET /static/{*path} - embedded page assets.
pub async fn asset(Path(path): Path<String>) -> Result<Response, AppError> {
    match path.as_str() {
        "script.js" => {
            Ok(([(CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT_JS).into_response())
        }
        other => Err(AppError::NotFound(format!("No asset named '{other}'"))),
    }
}
