//! Game state: the single aggregate a session stores.
//!
//! ## GameState
//!
//! Everything about one run:
//! - Player and current enemy
//! - Deck, hand, and discard pile
//! - Phase, turn counter, level progress
//! - Pending reward choices
//! - Combat log
//! - The run's RNG, so every transition is a function of the state alone

use im::Vector;
use serde::{Deserialize, Serialize};

use super::combatant::{Enemy, Player};
use super::rng::GameRng;
use crate::cards::Card;
use crate::session::SessionId;
use crate::zones::ZoneManager;

/// Top-level position of the game state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Player turns against the current enemy.
    Combat,
    /// Final enemy defeated.
    Victory,
    /// Player health reached zero.
    Defeat,
    /// A non-final enemy defeated; waiting for reward and advance.
    LevelComplete,
    /// Reserved for a dedicated reward screen; no transition enters it.
    CardSelection,
}

impl Phase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Combat => "COMBAT",
            Phase::Victory => "VICTORY",
            Phase::Defeat => "DEFEAT",
            Phase::LevelComplete => "LEVEL_COMPLETE",
            Phase::CardSelection => "CARD_SELECTION",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete state of one run.
///
/// The combat log is an `im::Vector` so that cloning a state before a
/// transition does not copy the whole history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub id: SessionId,

    pub player: Player,

    pub enemy: Enemy,

    /// Hand, deck, and discard pile.
    #[serde(flatten)]
    pub zones: ZoneManager,

    pub phase: Phase,

    /// Turn within the current level (starts at 1).
    pub turn: u32,

    /// Append-only combat log.
    pub logs: Vector<String>,

    /// Reward cards on offer after a won encounter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_cards: Option<Vec<Card>>,

    pub current_level: u32,

    pub max_level: u32,

    pub level_complete: bool,

    pub rng: GameRng,
}

impl GameState {
    /// Append a line to the combat log.
    pub fn log(&mut self, line: impl Into<String>) {
        self.logs.push_back(line.into());
    }

    /// The last `n` log lines, oldest first.
    #[must_use]
    pub fn recent_logs(&self, n: usize) -> Vec<&str> {
        let skip = self.logs.len().saturating_sub(n);
        self.logs.iter().skip(skip).map(String::as_str).collect()
    }

    #[must_use]
    pub fn is_final_level(&self) -> bool {
        self.current_level >= self.max_level
    }

    /// True when reward cards are waiting to be chosen.
    #[must_use]
    pub fn has_rewards(&self) -> bool {
        self.available_cards.as_ref().is_some_and(|cards| !cards.is_empty())
    }

    /// True once the run has ended in victory or defeat.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Victory | Phase::Defeat)
    }
}
