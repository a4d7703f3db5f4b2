//! Level roster: which enemy guards which level.

use super::template::{EnemyAction, EnemyActionKind, EnemyType};
use crate::core::error::{GameError, Result};

/// Ordered list of encounters, level 1 first.
#[derive(Clone, Debug)]
pub struct EnemyRoster {
    levels: Vec<EnemyType>,
}

impl EnemyRoster {
    /// Build a roster. Fails if there are no encounters.
    pub fn new(levels: Vec<EnemyType>) -> Result<Self> {
        if levels.is_empty() {
            return Err(GameError::InvalidConfig("enemy roster is empty".into()));
        }
        Ok(Self { levels })
    }

    /// Cultist, Jaw Worm, Gremlin Nob.
    ///
    /// The Cultist picks uniformly among four intents. Its heavy attack
    /// shares the ATTACK kind, so it resolves through the first ATTACK
    /// entry (12 damage) despite what its description promises.
    #[must_use]
    pub fn standard() -> Self {
        let cultist = EnemyType::new("cultist", "Cultist", 48, "cultist")
            .with_action(
                EnemyAction::new(EnemyActionKind::Attack, "⚔️ ATTACK - Will deal 12 damage", 1)
                    .with_damage(12),
            )
            .with_action(
                EnemyAction::new(EnemyActionKind::Defend, "🛡️ DEFEND - Will gain 8 armor", 1)
                    .with_armor(8),
            )
            .with_action(EnemyAction::new(
                EnemyActionKind::Charge,
                "⚡ CHARGE - Building up power...",
                1,
            ))
            .with_action(
                EnemyAction::new(EnemyActionKind::Attack, "⚔️ HEAVY ATTACK - Will deal 18 damage", 1)
                    .with_damage(18),
            );

        let jaw_worm = EnemyType::new("jaw_worm", "Jaw Worm", 60, "jaw_worm")
            .with_action(
                EnemyAction::new(EnemyActionKind::Attack, "⚔️ CHOMP - Will deal 11 damage", 45)
                    .with_damage(11),
            )
            .with_action(
                EnemyAction::new(EnemyActionKind::Defend, "🛡️ BELLOW - Will gain 6 armor", 30)
                    .with_armor(6),
            )
            .with_action(EnemyAction::new(
                EnemyActionKind::Special,
                "🌀 THRASH - Something is coming...",
                25,
            ));

        let gremlin_nob = EnemyType::new("gremlin_nob", "Gremlin Nob", 82, "gremlin_nob")
            .with_action(
                EnemyAction::new(EnemyActionKind::Attack, "⚔️ SKULL BASH - Will deal 16 damage", 50)
                    .with_damage(16),
            )
            .with_action(EnemyAction::new(
                EnemyActionKind::Charge,
                "⚡ BELLOW - Working itself into a rage...",
                30,
            ))
            .with_action(
                EnemyAction::new(EnemyActionKind::Defend, "🛡️ HUNKER - Will gain 10 armor", 20)
                    .with_armor(10),
            );

        Self {
            levels: vec![cultist, jaw_worm, gremlin_nob],
        }
    }

    /// Enemy template for a 1-based level. Levels past the end reuse the
    /// last encounter.
    #[must_use]
    pub fn for_level(&self, level: u32) -> &EnemyType {
        let idx = (level.max(1) as usize - 1).min(self.levels.len() - 1);
        &self.levels[idx]
    }

    /// Number of distinct encounters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyType> {
        self.levels.iter()
    }
}

impl Default for EnemyRoster {
    fn default() -> Self {
        Self::standard()
    }
}
