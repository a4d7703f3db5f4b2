//! Commands a client can submit against a game.
//!
//! Each command maps 1:1 to a transition on the combat engine:
//! - `PlayCard` = play one card from hand
//! - `EndTurn` = let the enemy act, then draw a new hand
//! - `SelectCard` = take one of the offered reward cards
//! - `AdvanceLevel` = start the next encounter
//!
//! On the wire commands are tagged by `type`:
//!
//! ```
//! use deck_duel::core::Command;
//!
//! let cmd: Command = serde_json::from_str(r#"{"type":"PLAY_CARD","cardId":"strike"}"#).unwrap();
//! assert_eq!(cmd, Command::play_card("strike"));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A player command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    PlayCard { card_id: CardId },

    EndTurn,

    #[serde(rename_all = "camelCase")]
    SelectCard { card_id: CardId },

    AdvanceLevel,
}

impl Command {
    #[must_use]
    pub fn play_card(card_id: impl Into<CardId>) -> Self {
        Self::PlayCard {
            card_id: card_id.into(),
        }
    }

    #[must_use]
    pub fn select_card(card_id: impl Into<CardId>) -> Self {
        Self::SelectCard {
            card_id: card_id.into(),
        }
    }
}
