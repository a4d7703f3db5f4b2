//! # deck-duel
//!
//! Turn-based card-battle engine: a player fights a short sequence of
//! enemies with a deck of cards, earning a new card after each win.
//!
//! ## Design Principles
//!
//! 1. **State In, State Out**: Every transition is a function of the
//!    current `GameState` and a `Command`. The run's RNG lives inside the
//!    state, so replaying a command reproduces its result exactly.
//!
//! 2. **All-or-Nothing Commands**: Preconditions are checked before
//!    anything changes. A rejected command returns a `GameError` and the
//!    stored state is untouched.
//!
//! 3. **Content as Data**: Cards, the reward pool, and the enemy roster are
//!    registries the engine is built from, not hardcoded branches.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors, commands, combatants, state
//! - `cards`: Card definitions and the card registry
//! - `effects`: Typed card effects and their resolver
//! - `enemies`: Enemy templates, weighted intents, the level roster
//! - `zones`: Deck, hand, and discard pile
//! - `rules`: `RulesEngine` trait and the `CombatEngine`
//! - `session`: Session ids, storage, and the command service

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod enemies;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Combatant, Command, Enemy, GameConfig, GameError, GameRng, GameRngState, GameState, Phase,
    Player, Result, StatusEffect, StatusEffects, StatusKind,
};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::cards::{Card, CardId, CardRegistry, CardType};

pub use crate::effects::{CardEffect, EffectResolver};

pub use crate::enemies::{EnemyAction, EnemyActionKind, EnemyRoster, EnemyType, EnemyTypeId};

pub use crate::rules::{CombatEngine, GameResult, RulesEngine};

pub use crate::session::{GameService, GameSession, MemoryStore, SessionId, SessionStore};
