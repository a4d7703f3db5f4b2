//! Rules engine trait and the combat engine.
//!
//! The engine never owns a game. Every transition takes the current
//! `GameState` by reference and returns the successor, or a rejection that
//! leaves the caller's state exactly as it was.

use im::Vector;
use tracing::debug;

use crate::cards::CardRegistry;
use crate::core::{
    Command, GameConfig, GameError, GameRng, GameState, Phase, Player, Result,
};
use crate::enemies::EnemyRoster;
use crate::session::SessionId;
use crate::zones::ZoneManager;

/// Result of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Victory,
    Defeat,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_commands`: Return empty vec if nothing can be done
/// - `apply`: Must be deterministic given the state (its RNG included)
/// - `is_terminal`: Return None if the run continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Every command `apply` would accept in this state.
    fn legal_commands(&self, state: &GameState) -> Vec<Command>;

    /// Apply a command, producing the next state.
    fn apply(&self, state: &GameState, command: &Command) -> Result<GameState>;

    /// Check if the run is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

/// The standard combat rules over a card registry and an enemy roster.
#[derive(Clone, Debug)]
pub struct CombatEngine {
    pub(super) config: GameConfig,
    pub(super) cards: CardRegistry,
    pub(super) roster: EnemyRoster,
}

impl CombatEngine {
    /// Build an engine, validating the configuration against the roster.
    pub fn new(config: GameConfig, cards: CardRegistry, roster: EnemyRoster) -> Result<Self> {
        config.validate(roster.len())?;
        Ok(Self {
            config,
            cards,
            roster,
        })
    }

    /// Standard cards and enemies with a custom configuration.
    pub fn with_config(config: GameConfig) -> Result<Self> {
        Self::new(config, CardRegistry::standard(), EnemyRoster::standard())
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    #[must_use]
    pub fn roster(&self) -> &EnemyRoster {
        &self.roster
    }

    /// Start a new run: shuffled starter deck, opening hand, level 1 enemy.
    #[must_use]
    pub fn new_game(&self, id: SessionId, seed: u64) -> GameState {
        let mut rng = GameRng::new(seed);

        let mut zones = ZoneManager::new(self.cards.starter_deck());
        zones.shuffle_deck(&mut rng);
        zones.draw(self.config.hand_size);

        let enemy = self.roster.for_level(1).spawn(&mut rng);
        let opening = format!("Combat begins! Defeat the {} to proceed.", enemy.name);

        let mut state = GameState {
            id,
            player: Player::new(self.config.player_max_health, self.config.player_max_energy),
            enemy,
            zones,
            phase: Phase::Combat,
            turn: 1,
            logs: Vector::new(),
            available_cards: None,
            current_level: 1,
            max_level: self.config.max_level,
            level_complete: false,
            rng,
        };
        state.log(opening);

        debug!(game = %id, seed, enemy = %state.enemy.name, "new game");
        state
    }

    pub(super) fn expect_phase(state: &GameState, allowed: &[Phase], command: &'static str) -> Result<()> {
        if allowed.contains(&state.phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                command,
                phase: state.phase,
            })
        }
    }
}

impl Default for CombatEngine {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            cards: CardRegistry::standard(),
            roster: EnemyRoster::standard(),
        }
    }
}

impl RulesEngine for CombatEngine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_commands(&self, state: &GameState) -> Vec<Command> {
        let mut commands = Vec::new();

        match state.phase {
            Phase::Combat => {
                for card in &state.zones.hand {
                    let command = Command::play_card(card.id.clone());
                    if card.cost <= state.player.energy && !commands.contains(&command) {
                        commands.push(command);
                    }
                }
                commands.push(Command::EndTurn);
            }
            Phase::LevelComplete | Phase::Victory => {
                if let Some(offered) = &state.available_cards {
                    commands.extend(offered.iter().map(|c| Command::select_card(c.id.clone())));
                }
                if state.phase == Phase::LevelComplete {
                    commands.push(Command::AdvanceLevel);
                }
            }
            Phase::Defeat | Phase::CardSelection => {}
        }

        commands
    }

    fn apply(&self, state: &GameState, command: &Command) -> Result<GameState> {
        match command {
            Command::PlayCard { card_id } => self.play_card(state, card_id),
            Command::EndTurn => self.end_turn(state),
            Command::SelectCard { card_id } => self.select_card(state, card_id),
            Command::AdvanceLevel => self.advance_level(state),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match state.phase {
            Phase::Victory => Some(GameResult::Victory),
            Phase::Defeat => Some(GameResult::Defeat),
            _ => None,
        }
    }
}
