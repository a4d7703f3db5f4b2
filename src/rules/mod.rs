//! Game rules: every state transition lives here.
//!
//! `RulesEngine` is the seam callers program against. `CombatEngine`
//! implements it over a card registry and an enemy roster:
//! - `engine`: construction, new games, legal commands, dispatch
//! - `combat`: playing cards, ending turns, the enemy's turn
//! - `progression`: reward selection and level advance
//!
//! Transitions take the current state by reference and return its
//! successor; a rejected command returns an error and touches nothing.

pub mod combat;
pub mod engine;
pub mod progression;

pub use engine::{CombatEngine, GameResult, RulesEngine};
