use thiserror::Error;

use crate::chat::SessionId;

/// Errors from session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session '{0}' not found")]
    NotFound(SessionId),
}

/// Errors surfaced by the chat service to its callers.
///
/// Generation failures never appear here; they are recovered inside the
/// service and turned into a rule-based reply.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyMessage,

    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::EmptyMessage.to_string(), "message must not be empty");
    }

    #[test]
    fn test_session_error_converts_into_chat_error() {
        let id = SessionId::new();
        let err: ChatError = SessionError::NotFound(id).into();
        assert!(err.to_string().contains(&id.to_string()));
    }
}
