//! Core engine types: RNG, configuration, errors, commands, state.
//!
//! This module holds the data the combat rules operate on. The rules
//! themselves live in `rules`; nothing here decides what a card does.

pub mod action;
pub mod combatant;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod status;

pub use action::Command;
pub use combatant::{Combatant, Enemy, Player};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
pub use status::{StatusEffect, StatusEffects, StatusKind};
