//! Zone manager for the player's cards.
//!
//! The `ZoneManager` owns the three ordered piles a deckbuilder cycles
//! through:
//! - **deck**: draw pile, drawn from the front
//! - **hand**: cards playable this turn
//! - **discard pile**: played and end-of-turn cards, shuffled back into the
//!   deck when it runs low
//!
//! Cards only move between piles; the total across all three changes only
//! when a reward card is added.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::rng::GameRng;

/// One of the player's piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Deck,
    Hand,
    DiscardPile,
}

/// Deck, hand, and discard pile.
///
/// ## Usage
///
/// ```
/// use deck_duel::cards::CardRegistry;
/// use deck_duel::core::GameRng;
/// use deck_duel::zones::{Zone, ZoneManager};
///
/// let mut rng = GameRng::new(1);
/// let mut zones = ZoneManager::new(CardRegistry::standard().starter_deck());
/// zones.shuffle_deck(&mut rng);
///
/// assert_eq!(zones.draw(5), 5);
/// assert_eq!(zones.zone_size(Zone::Hand), 5);
/// assert_eq!(zones.zone_size(Zone::Deck), 5);
/// assert_eq!(zones.total_cards(), 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneManager {
    pub hand: Vec<Card>,
    pub deck: Vec<Card>,
    pub discard_pile: Vec<Card>,
}

impl ZoneManager {
    /// Start with every card in the deck, in the given order.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            hand: Vec::new(),
            deck,
            discard_pile: Vec::new(),
        }
    }

    #[must_use]
    pub fn zone(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::DiscardPile => &self.discard_pile,
        }
    }

    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone(zone).len()
    }

    /// Cards across all three piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard_pile.len()
    }

    /// Every owned card: deck, then hand, then discard pile.
    pub fn iter_all(&self) -> impl Iterator<Item = &Card> {
        self.deck.iter().chain(&self.hand).chain(&self.discard_pile)
    }

    /// First card in hand with the given ID.
    #[must_use]
    pub fn find_in_hand(&self, id: &CardId) -> Option<&Card> {
        self.hand.iter().find(|c| &c.id == id)
    }

    /// Move the first matching hand card to the discard pile.
    ///
    /// Returns a copy of the moved card, or `None` if it is not in hand.
    pub fn discard_from_hand(&mut self, id: &CardId) -> Option<Card> {
        let idx = self.hand.iter().position(|c| &c.id == id)?;
        let card = self.hand.remove(idx);
        self.discard_pile.push(card.clone());
        Some(card)
    }

    /// Move the whole hand to the discard pile.
    pub fn discard_hand(&mut self) {
        self.discard_pile.append(&mut self.hand);
    }

    /// Add a card to the bottom of the deck.
    pub fn add_to_deck(&mut self, card: Card) {
        self.deck.push(card);
    }

    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }

    /// Merge the discard pile into the deck and shuffle, if the deck holds
    /// fewer than `threshold` cards.
    ///
    /// Returns whether a reshuffle happened.
    pub fn recycle_if_low(&mut self, threshold: usize, rng: &mut GameRng) -> bool {
        if self.deck.len() >= threshold {
            return false;
        }
        self.deck.append(&mut self.discard_pile);
        self.shuffle_deck(rng);
        true
    }

    /// Draw up to `count` cards from the front of the deck into hand.
    ///
    /// Returns the number drawn.
    pub fn draw(&mut self, count: usize) -> usize {
        let n = count.min(self.deck.len());
        self.hand.extend(self.deck.drain(..n));
        n
    }

    /// Draw `count` cards, shuffling the discard pile back in whenever the
    /// deck empties. Stops early if both are empty.
    pub fn draw_with_recycle(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;
        while drawn < count {
            if self.deck.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.recycle_if_low(1, rng);
            }
            drawn += self.draw(1);
        }
        drawn
    }
}
