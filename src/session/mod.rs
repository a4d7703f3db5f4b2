//! Sessions: identity, storage, and the command service.
//!
//! ## Key Types
//!
//! - `SessionId`: Opaque unique ID handed out per new game
//! - `GameSession`: What callers receive back (id + full state)
//! - `SessionStore`: Fetch/persist/allocate contract for storage backends
//! - `GameService`: Runs commands against stored sessions

pub mod service;
pub mod store;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::GameState;

pub use service::GameService;
pub use store::{MemoryStore, SessionStore};

/// Unique identifier for a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A session as returned to callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: SessionId,
    pub game_state: GameState,
}

impl GameSession {
    #[must_use]
    pub fn new(game_state: GameState) -> Self {
        Self {
            id: game_state.id,
            game_state,
        }
    }
}
