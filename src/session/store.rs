//! Session storage contract and the in-memory backend.

use rustc_hash::FxHashMap;

use super::SessionId;
use crate::core::GameState;

/// Storage the service needs: fetch by id, persist by id, mint new ids.
///
/// States are keyed by their own `id` field.
pub trait SessionStore {
    /// A fresh id not yet in use.
    fn allocate_id(&mut self) -> SessionId;

    /// Current state for a session.
    fn get(&self, id: SessionId) -> Option<&GameState>;

    /// Insert or replace a session's state.
    fn put(&mut self, state: GameState);

    /// Number of stored sessions.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-memory session store. Sessions live until the process exits.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    sessions: FxHashMap<SessionId, GameState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn allocate_id(&mut self) -> SessionId {
        loop {
            let id = SessionId::new();
            if !self.sessions.contains_key(&id) {
                return id;
            }
        }
    }

    fn get(&self, id: SessionId) -> Option<&GameState> {
        self.sessions.get(&id)
    }

    fn put(&mut self, state: GameState) {
        self.sessions.insert(state.id, state);
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
