//! Player and enemy vitals.
//!
//! Both sides share the damage model through the [`Combatant`] trait:
//! armor absorbs incoming damage before health, and is then itself reduced
//! by the full incoming amount (not just the absorbed part).

use serde::{Deserialize, Serialize};

use super::status::StatusEffects;
use crate::enemies::{EnemyActionKind, EnemyTypeId};

/// Shared combat behaviour of the player and enemies.
pub trait Combatant {
    fn health(&self) -> u32;
    fn max_health(&self) -> u32;
    fn armor(&self) -> u32;
    fn set_health(&mut self, health: u32);
    fn set_armor(&mut self, armor: u32);
    fn statuses(&self) -> &StatusEffects;
    fn statuses_mut(&mut self) -> &mut StatusEffects;

    /// Apply an incoming hit and return the damage that got through armor.
    ///
    /// Health loss is `max(0, damage - armor)` (health floors at zero);
    /// armor then drops by the raw `damage`, floored at zero.
    fn take_damage(&mut self, damage: u32) -> u32 {
        let armor = self.armor();
        let dealt = damage.saturating_sub(armor);
        self.set_health(self.health().saturating_sub(dealt));
        self.set_armor(armor.saturating_sub(damage));
        dealt
    }

    fn gain_armor(&mut self, amount: u32) {
        self.set_armor(self.armor() + amount);
    }

    /// Restore health up to the maximum. Returns the amount restored.
    fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health();
        self.set_health((before + amount).min(self.max_health()));
        self.health() - before
    }

    fn is_defeated(&self) -> bool {
        self.health() == 0
    }
}

macro_rules! impl_combatant {
    ($ty:ty) => {
        impl Combatant for $ty {
            fn health(&self) -> u32 {
                self.health
            }
            fn max_health(&self) -> u32 {
                self.max_health
            }
            fn armor(&self) -> u32 {
                self.armor
            }
            fn set_health(&mut self, health: u32) {
                self.health = health;
            }
            fn set_armor(&mut self, armor: u32) {
                self.armor = armor;
            }
            fn statuses(&self) -> &StatusEffects {
                &self.status_effects
            }
            fn statuses_mut(&mut self) -> &mut StatusEffects {
                &mut self.status_effects
            }
        }
    };
}

/// The player character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub health: u32,
    pub max_health: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub armor: u32,
    pub status_effects: StatusEffects,
}

impl Player {
    /// A player at full health and energy.
    #[must_use]
    pub fn new(max_health: u32, max_energy: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            energy: max_energy,
            max_energy,
            armor: 0,
            status_effects: StatusEffects::new(),
        }
    }

    pub fn restore_energy(&mut self) {
        self.energy = self.max_energy;
    }
}

/// An enemy instance spawned from an `EnemyType`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enemy {
    pub type_id: EnemyTypeId,
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub armor: u32,
    /// Intent committed last enemy turn, resolved on the next one.
    pub next_action: EnemyActionKind,
    pub next_action_description: String,
    pub status_effects: StatusEffects,
}

impl_combatant!(Player);
impl_combatant!(Enemy);
