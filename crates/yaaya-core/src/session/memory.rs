//! In-memory session store backed by `DashMap`.
//!
//! Each session keeps a `VecDeque` of turns; appends push to the back and
//! trim from the front until the cap holds. Idle sessions expire after the
//! configured TTL and are swept whenever a new session is created.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use yaaya_types::chat::{SessionHandle, SessionId, Turn};
use yaaya_types::config::ChatConfig;
use yaaya_types::error::SessionError;

use super::store::SessionStore;

#[derive(Debug)]
struct SessionState {
    turns: VecDeque<Turn>,
    created_at: DateTime<Utc>,
    last_active_at: DateTime<Utc>,
}

impl SessionState {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            turns: VecDeque::new(),
            created_at: now,
            last_active_at: now,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A clock step backwards yields a negative delta; treat as fresh.
        (now - self.last_active_at)
            .to_std()
            .map(|idle| idle >= ttl)
            .unwrap_or(false)
    }

    fn push(&mut self, turn: Turn, cap: usize) {
        self.turns.push_back(turn);
        while self.turns.len() > cap {
            self.turns.pop_front();
        }
        self.last_active_at = Utc::now();
    }
}

/// Process-local [`SessionStore`].
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, SessionState>,
    history_cap: usize,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(history_cap: usize, ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            history_cap,
            ttl,
        }
    }

    /// Build a store using the history cap and TTL from `config`.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(
            config.history_cap,
            Duration::from_secs(config.session_ttl_secs),
        )
    }

    pub fn history_cap(&self) -> usize {
        self.history_cap
    }

    /// When the session was first created, if it is still held.
    pub fn created_at(&self, id: &SessionId) -> Option<DateTime<Utc>> {
        self.sessions.get(id).map(|s| s.created_at)
    }

    /// Drop every session idle for at least the TTL. Returns how many went.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, state| !state.is_expired(now, self.ttl));
        before.saturating_sub(self.sessions.len())
    }

    fn create(&self) -> SessionHandle {
        let purged = self.purge_expired();
        if purged > 0 {
            debug!(purged, "Swept expired sessions");
        }

        let id = SessionId::new();
        self.sessions.insert(id, SessionState::new(Utc::now()));
        debug!(session_id = %id, "Session created");
        SessionHandle { id, created: true }
    }
}

impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, id: Option<SessionId>) -> SessionHandle {
        let Some(id) = id else {
            return self.create();
        };

        let now = Utc::now();
        // The shard guard must be released before `remove` touches the same shard.
        let expired = match self.sessions.get_mut(&id) {
            Some(mut state) if !state.is_expired(now, self.ttl) => {
                state.last_active_at = now;
                return SessionHandle { id, created: false };
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.sessions.remove(&id);
            debug!(session_id = %id, "Session expired");
        }
        self.create()
    }

    async fn append_turn(&self, id: &SessionId, turn: Turn) -> Result<(), SessionError> {
        let mut state = self
            .sessions
            .get_mut(id)
            .ok_or(SessionError::NotFound(*id))?;
        state.push(turn, self.history_cap);
        Ok(())
    }

    async fn append_exchange(
        &self,
        id: &SessionId,
        user: Turn,
        assistant: Turn,
    ) -> Result<(), SessionError> {
        // The session may have been swept while the reply was generated;
        // put it back rather than lose the exchange.
        let mut state = self.sessions.entry(*id).or_insert_with(|| {
            debug!(session_id = %id, "Session swept mid-exchange, restoring");
            SessionState::new(Utc::now())
        });
        state.push(user, self.history_cap);
        state.push(assistant, self.history_cap);
        Ok(())
    }

    async fn read_recent(&self, id: &SessionId, n: usize) -> Result<Vec<Turn>, SessionError> {
        let state = self.sessions.get(id).ok_or(SessionError::NotFound(*id))?;
        let skip = state.turns.len().saturating_sub(n);
        Ok(state.turns.iter().skip(skip).cloned().collect())
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
