//! SessionStore trait definition.
//!
//! Follows the same RPITIT pattern as the generation trait so the chat
//! service stays generic over the backing store.

use yaaya_types::chat::{SessionHandle, SessionId, Turn};
use yaaya_types::error::SessionError;

/// Storage for short-lived conversation sessions.
///
/// Implementations must keep turns in chronological order and must never
/// hold more than their configured cap of turns per session.
pub trait SessionStore: Send + Sync {
    /// Resolve `id` to a live session, creating a fresh one when the id is
    /// absent, unknown, or expired.
    fn get_or_create(
        &self,
        id: Option<SessionId>,
    ) -> impl std::future::Future<Output = SessionHandle> + Send;

    /// Append a single turn, trimming the oldest turns to honor the cap.
    fn append_turn(
        &self,
        id: &SessionId,
        turn: Turn,
    ) -> impl std::future::Future<Output = Result<(), SessionError>> + Send;

    /// Append a user turn and its reply as one unit.
    ///
    /// Concurrent exchanges on the same session never interleave halves.
    fn append_exchange(
        &self,
        id: &SessionId,
        user: Turn,
        assistant: Turn,
    ) -> impl std::future::Future<Output = Result<(), SessionError>> + Send;

    /// Up to the last `n` turns of a session, oldest first.
    fn read_recent(
        &self,
        id: &SessionId,
        n: usize,
    ) -> impl std::future::Future<Output = Result<Vec<Turn>, SessionError>> + Send;

    /// Number of sessions currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
