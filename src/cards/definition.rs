//! Card definitions - static card data.
//!
//! A `Card` is an immutable template. Deck, hand, and discard slots hold
//! equal-valued copies; two Strikes in hand are interchangeable, and
//! playing "strike" takes the first one found.

use serde::{Deserialize, Serialize};

use crate::effects::CardEffect;

/// Identifier of a card template, e.g. `"strike"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad card category, used for display and sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Attack,
    Defense,
    Skill,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deck_duel::cards::{Card, CardType};
///
/// let bash = Card::new("bash", "Bash", CardType::Attack, 2)
///     .with_damage(8)
///     .with_effect_tag("vulnerable_2")
///     .unwrap();
///
/// assert_eq!(bash.damage, Some(8));
/// assert_eq!(bash.effects.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,

    pub name: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Energy cost.
    pub cost: u32,

    #[serde(default)]
    pub description: String,

    /// Damage dealt to the enemy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,

    /// Armor granted to the player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<u32>,

    /// Extra effects, resolved after damage and armor in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<CardEffect>,
}

impl Card {
    /// Create a card with no damage, armor, or effects.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType, cost: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type,
            cost,
            description: String::new(),
            damage: None,
            armor: None,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    #[must_use]
    pub fn with_armor(mut self, armor: u32) -> Self {
        self.armor = Some(armor);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Add an effect from its tag form, e.g. `"strength_2"`.
    ///
    /// Fails with `UnknownEffect` on a tag no effect understands.
    pub fn with_effect_tag(self, tag: &str) -> crate::core::Result<Self> {
        let effect = tag.parse()?;
        Ok(self.with_effect(effect))
    }
}
