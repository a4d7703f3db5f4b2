//! Game configuration.
//!
//! `GameConfig` holds the tunable numbers of a run: starting vitals, hand
//! size, level count, rewards, and the fallback magnitudes used when an
//! enemy intent has no entry in its action table. Defaults reproduce the
//! standard game; a TOML file can override any subset.
//!
//! ```
//! use deck_duel::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("max_level = 2\nhand_size = 4").unwrap();
//! assert_eq!(config.max_level, 2);
//! assert_eq!(config.hand_size, 4);
//! assert_eq!(config.player_max_health, 80);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Tunable rules of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player health at the start of a run (also the cap).
    pub player_max_health: u32,

    /// Energy restored at the start of every turn.
    pub player_max_energy: u32,

    /// Cards drawn per turn; also the deck size below which the discard
    /// pile is shuffled back in.
    pub hand_size: usize,

    /// Number of encounters in a run.
    pub max_level: u32,

    /// Health restored when advancing to the next level.
    pub level_heal: u32,

    /// Reward cards offered after each won encounter.
    pub reward_choices: usize,

    /// Damage of an ATTACK intent missing from the enemy's action table.
    pub fallback_attack_damage: u32,

    /// Armor of a DEFEND intent missing from the enemy's action table.
    pub fallback_defend_armor: u32,

    /// Master seed for session seeds. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_max_health: 80,
            player_max_energy: 3,
            hand_size: 5,
            max_level: 3,
            level_heal: 10,
            reward_choices: 3,
            fallback_attack_damage: 12,
            fallback_defend_armor: 8,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the configuration against the number of available encounters.
    pub fn validate(&self, roster_levels: usize) -> Result<()> {
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand_size must be at least 1".into()));
        }
        if self.reward_choices == 0 {
            return Err(GameError::InvalidConfig("reward_choices must be at least 1".into()));
        }
        if self.max_level == 0 {
            return Err(GameError::InvalidConfig("max_level must be at least 1".into()));
        }
        if self.max_level as usize > roster_levels {
            return Err(GameError::InvalidConfig(format!(
                "max_level {} exceeds the {} available encounters",
                self.max_level, roster_levels
            )));
        }
        Ok(())
    }

    /// Set the number of levels.
    #[must_use]
    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = max_level;
        self
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
