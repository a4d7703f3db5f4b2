//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card template the game knows, plus the
//! two card lists built from them: the starter deck and the reward pool.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, CardType};
use crate::effects::CardEffect;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use deck_duel::cards::{CardRegistry, CardId};
///
/// let registry = CardRegistry::standard();
///
/// let strike = registry.get(&CardId::new("strike")).unwrap();
/// assert_eq!(strike.damage, Some(6));
/// assert_eq!(registry.starter_deck().len(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    /// Starter deck composition as (card, copies), in deck order.
    starter: Vec<(CardId, usize)>,
    rewards: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard card set.
    ///
    /// Starter deck: 5 Strike, 4 Defend, 1 Flex. Rewards: Cleave,
    /// Shrug It Off, Inflame.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(
            Card::new("strike", "Strike", CardType::Attack, 1)
                .with_description("Deal 6 damage.")
                .with_damage(6),
        );
        registry.register(
            Card::new("defend", "Defend", CardType::Defense, 1)
                .with_description("Gain 5 Armor.")
                .with_armor(5),
        );
        registry.register(
            Card::new("heavy_blow", "Heavy Blow", CardType::Attack, 2)
                .with_description("Deal 14 damage.")
                .with_damage(14),
        );
        registry.register(
            Card::new("iron_wave", "Iron Wave", CardType::Defense, 2)
                .with_description("Gain 5 Armor. Deal 5 damage.")
                .with_armor(5)
                .with_damage(5),
        );
        registry.register(
            Card::new("flex", "Flex", CardType::Skill, 0)
                .with_description("Gain 2 Strength. At end of turn, lose 2 Strength.")
                .with_effect(CardEffect::Strength { amount: 2 }),
        );
        registry.register(
            Card::new("bash", "Bash", CardType::Attack, 2)
                .with_description("Deal 8 damage. Apply 2 Vulnerable.")
                .with_damage(8)
                .with_effect(CardEffect::Vulnerable { amount: 2 }),
        );
        registry.register(
            Card::new("cleave", "Cleave", CardType::Attack, 1)
                .with_description("Deal 8 damage to ALL enemies.")
                .with_damage(8),
        );
        registry.register(
            Card::new("shrug_it_off", "Shrug It Off", CardType::Skill, 1)
                .with_description("Gain 8 Armor. Draw 1 card.")
                .with_armor(8)
                .with_effect(CardEffect::Draw { count: 1 }),
        );
        registry.register(
            Card::new("inflame", "Inflame", CardType::Skill, 1)
                .with_description("Gain 2 Strength.")
                .with_effect(CardEffect::PermanentStrength { amount: 2 }),
        );

        registry.set_starter_deck([("strike", 5), ("defend", 4), ("flex", 1)]);
        registry.set_reward_pool(["cleave", "shrug_it_off", "inflame"]);

        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.cards.insert(card.id.clone(), card);
    }

    /// Set the starter deck composition.
    ///
    /// Panics if a listed card is not registered.
    pub fn set_starter_deck<I, C>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (C, usize)>,
        C: Into<CardId>,
    {
        self.starter = entries
            .into_iter()
            .map(|(id, copies)| (self.registered(id.into()), copies))
            .collect();
    }

    /// Set the reward pool.
    ///
    /// Panics if a listed card is not registered.
    pub fn set_reward_pool<I, C>(&mut self, ids: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<CardId>,
    {
        self.rewards = ids.into_iter().map(|id| self.registered(id.into())).collect();
    }

    fn registered(&self, id: CardId) -> CardId {
        assert!(self.cards.contains_key(&id), "Card {} is not registered", id);
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Fresh copies of the starter deck, unshuffled.
    #[must_use]
    pub fn starter_deck(&self) -> Vec<Card> {
        self.starter
            .iter()
            .flat_map(|(id, copies)| std::iter::repeat(&self.cards[id]).take(*copies))
            .cloned()
            .collect()
    }

    /// Copies of every card in the reward pool, in pool order.
    #[must_use]
    pub fn reward_pool(&self) -> Vec<Card> {
        self.rewards.iter().map(|id| self.cards[id].clone()).collect()
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}
