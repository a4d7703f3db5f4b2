//! Command service: looks up a session, applies a command, stores the result.
//!
//! The service is the only place that writes to a store. Each call takes
//! `&mut self`, so commands against one session are applied in the order
//! they arrive; a rejected command leaves the stored state as it was.

use tracing::{debug, info};

use super::store::{MemoryStore, SessionStore};
use super::{GameSession, SessionId};
use crate::cards::CardId;
use crate::core::{Command, GameConfig, GameError, GameRng, GameState, Result};
use crate::rules::{CombatEngine, RulesEngine};

/// Runs games for many sessions against one engine.
#[derive(Debug)]
pub struct GameService<S: SessionStore = MemoryStore> {
    engine: CombatEngine,
    store: S,
    seeder: GameRng,
}

impl GameService<MemoryStore> {
    /// Standard content, in-memory sessions.
    pub fn in_memory(config: GameConfig) -> Result<Self> {
        Ok(Self::new(CombatEngine::with_config(config)?, MemoryStore::new()))
    }
}

impl<S: SessionStore> GameService<S> {
    /// Session seeds come from the engine config's master seed, or OS
    /// entropy when none is set.
    pub fn new(engine: CombatEngine, store: S) -> Self {
        let seeder = match engine.config().seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self {
            engine,
            store,
            seeder,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &CombatEngine {
        &self.engine
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a new run under a freshly allocated id.
    pub fn new_game(&mut self) -> GameSession {
        let id = self.store.allocate_id();
        let seed = self.seeder.next_seed();
        let state = self.engine.new_game(id, seed);
        self.store.put(state.clone());

        info!(game = %id, seed, "session created");
        GameSession::new(state)
    }

    /// Current state of a session.
    pub fn session(&self, id: SessionId) -> Result<GameSession> {
        self.current(id).cloned().map(GameSession::new)
    }

    /// Apply a command to a stored session and persist the result.
    pub fn execute(&mut self, id: SessionId, command: &Command) -> Result<GameSession> {
        let current = self.current(id)?;

        let next = match self.engine.apply(current, command) {
            Ok(next) => next,
            Err(err) => {
                debug!(game = %id, ?command, phase = %current.phase, %err, "command rejected");
                return Err(err);
            }
        };

        if next.phase != current.phase {
            info!(
                game = %id,
                from = %current.phase,
                to = %next.phase,
                level = next.current_level,
                turn = next.turn,
                "phase changed"
            );
        }

        self.store.put(next.clone());
        Ok(GameSession::new(next))
    }

    pub fn play_card(&mut self, id: SessionId, card_id: impl Into<CardId>) -> Result<GameSession> {
        self.execute(id, &Command::play_card(card_id))
    }

    pub fn end_turn(&mut self, id: SessionId) -> Result<GameSession> {
        self.execute(id, &Command::EndTurn)
    }

    pub fn select_card(&mut self, id: SessionId, card_id: impl Into<CardId>) -> Result<GameSession> {
        self.execute(id, &Command::select_card(card_id))
    }

    pub fn advance_level(&mut self, id: SessionId) -> Result<GameSession> {
        self.execute(id, &Command::AdvanceLevel)
    }

    fn current(&self, id: SessionId) -> Result<&GameState> {
        self.store.get(id).ok_or(GameError::SessionNotFound(id))
    }
}
