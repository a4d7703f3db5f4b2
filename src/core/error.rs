//! Error types shared by the engine and the session layer.

use thiserror::Error;

use super::state::Phase;
use crate::cards::CardId;
use crate::session::SessionId;

/// Everything that can reject a command or fail to load content.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("cannot {command} during the {phase} phase")]
    WrongPhase { command: &'static str, phase: Phase },

    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),

    #[error("not enough energy: card costs {cost}, {available} available")]
    InsufficientEnergy { cost: u32, available: u32 },

    #[error("no reward cards are on offer")]
    NoRewardsAvailable,

    #[error("card {0} is not among the offered rewards")]
    CardNotOffered(CardId),

    #[error("game session {0} not found")]
    SessionNotFound(SessionId),

    #[error("unknown card effect tag: {0}")]
    UnknownEffect(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// True for precondition violations: the command was well-formed but
    /// not legal in the current state.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GameError::WrongPhase { .. }
                | GameError::CardNotInHand(_)
                | GameError::InsufficientEnergy { .. }
                | GameError::NoRewardsAvailable
                | GameError::CardNotOffered(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
