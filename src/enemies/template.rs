//! Enemy templates.
//!
//! An `EnemyType` is the static description of a foe: its health and a
//! weighted table of actions it may announce as its next intent.

use serde::{Deserialize, Serialize};

use crate::core::combatant::Enemy;
use crate::core::rng::GameRng;
use crate::core::status::StatusEffects;

/// Identifier of an enemy template, e.g. `"cultist"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyTypeId(String);

impl EnemyTypeId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EnemyTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of enemy intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnemyActionKind {
    /// Deal damage to the player.
    Attack,
    /// Gain armor.
    Defend,
    /// Telegraph only.
    Charge,
    /// Telegraph only.
    Special,
}

impl std::fmt::Display for EnemyActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnemyActionKind::Attack => "ATTACK",
            EnemyActionKind::Defend => "DEFEND",
            EnemyActionKind::Charge => "CHARGE",
            EnemyActionKind::Special => "SPECIAL",
        };
        f.write_str(name)
    }
}

/// One entry of an enemy's action table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyAction {
    #[serde(rename = "action")]
    pub kind: EnemyActionKind,

    /// Intent text shown to the player.
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<u32>,

    /// Relative selection weight. Zero-weight entries are never chosen.
    pub weight: u32,
}

impl EnemyAction {
    #[must_use]
    pub fn new(kind: EnemyActionKind, description: impl Into<String>, weight: u32) -> Self {
        Self {
            kind,
            description: description.into(),
            damage: None,
            armor: None,
            weight,
        }
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
}

/// Static enemy template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyType {
    pub id: EnemyTypeId,
    pub name: String,
    pub max_health: u32,
    pub actions: Vec<EnemyAction>,
    /// Key of the portrait a client renders for this enemy.
    pub ascii_art: String,
}

impl EnemyType {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_health: u32, ascii_art: impl Into<String>) -> Self {
        Self {
            id: EnemyTypeId::new(id),
            name: name.into(),
            max_health,
            actions: Vec::new(),
            ascii_art: ascii_art.into(),
        }
    }

    #[must_use]
    pub fn with_action(mut self, action: EnemyAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Sum of all action weights, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.actions.iter().fold(0, |acc, a| acc.saturating_add(a.weight))
    }

    /// Pick the next intent by weight.
    ///
    /// Returns `None` only if the table is empty or every weight is zero.
    pub fn choose_action(&self, rng: &mut GameRng) -> Option<&EnemyAction> {
        let weights: Vec<u32> = self.actions.iter().map(|a| a.weight).collect();
        rng.choose_weighted(&weights).map(|i| &self.actions[i])
    }

    /// First table entry of the given kind.
    #[must_use]
    pub fn action_of_kind(&self, kind: EnemyActionKind) -> Option<&EnemyAction> {
        self.actions.iter().find(|a| a.kind == kind)
    }

    /// Spawn a full-health instance with a freshly chosen first intent.
    pub fn spawn(&self, rng: &mut GameRng) -> Enemy {
        let mut enemy = Enemy {
            type_id: self.id.clone(),
            name: self.name.clone(),
            health: self.max_health,
            max_health: self.max_health,
            armor: 0,
            next_action: EnemyActionKind::Attack,
            next_action_description: String::new(),
            status_effects: StatusEffects::new(),
        };
        self.commit_next_action(&mut enemy, rng);
        enemy
    }

    /// Choose the enemy's next intent and reveal it.
    ///
    /// An enemy whose table offers nothing keeps its previous intent.
    pub fn commit_next_action(&self, enemy: &mut Enemy, rng: &mut GameRng) {
        if let Some(action) = self.choose_action(rng) {
            enemy.next_action = action.kind;
            enemy.next_action_description = action.description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute() -> EnemyType {
        EnemyType::new("brute", "Brute", 30, "brute")
            .with_action(EnemyAction::new(EnemyActionKind::Attack, "Hit", 1).with_damage(5))
            .with_action(EnemyAction::new(EnemyActionKind::Defend, "Block", 0).with_armor(4))
            .with_action(EnemyAction::new(EnemyActionKind::Attack, "Big hit", 1).with_damage(20))
    }

    #[test]
    fn test_zero_weight_never_chosen() {
        let brute = brute();
        let mut rng = GameRng::new(1);
        for _ in 0..200 {
            let action = brute.choose_action(&mut rng).unwrap();
            assert_ne!(action.kind, EnemyActionKind::Defend);
        }
        assert_eq!(brute.total_weight(), 2);
    }

    #[test]
    fn test_lookup_first_match() {
        let brute = brute();
        let attack = brute.action_of_kind(EnemyActionKind::Attack).unwrap();
        assert_eq!(attack.damage, Some(5));
        assert!(brute.action_of_kind(EnemyActionKind::Charge).is_none());
    }

    #[test]
    fn test_spawn() {
        let brute = brute();
        let mut rng = GameRng::new(2);
        let enemy = brute.spawn(&mut rng);

        assert_eq!(enemy.health, 30);
        assert_eq!(enemy.max_health, 30);
        assert_eq!(enemy.armor, 0);
        assert!(enemy.status_effects.is_empty());
        assert_eq!(enemy.next_action, EnemyActionKind::Attack);
        assert!(enemy.next_action_description == "Hit" || enemy.next_action_description == "Big hit");
    }

    #[test]
    fn test_empty_table() {
        let idle = EnemyType::new("idle", "Idle", 1, "idle");
        let mut rng = GameRng::new(3);
        assert!(idle.choose_action(&mut rng).is_none());
        assert_eq!(idle.spawn(&mut rng).next_action, EnemyActionKind::Attack);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(brute()).unwrap();
        assert_eq!(json["maxHealth"], 30);
        assert_eq!(json["asciiArt"], "brute");
        assert_eq!(json["actions"][0]["action"], "ATTACK");
        assert_eq!(json["actions"][0]["weight"], 1);
    }
}
