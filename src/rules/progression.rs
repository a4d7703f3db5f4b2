//! Between-encounter transitions: taking a reward and moving to the next level.

use tracing::info;

use super::engine::CombatEngine;
use crate::cards::{Card, CardId};
use crate::core::{Combatant, GameError, GameRng, GameState, Phase, Result};

impl CombatEngine {
    /// Add one of the offered reward cards to the deck.
    pub fn select_card(&self, state: &GameState, card_id: &CardId) -> Result<GameState> {
        Self::expect_phase(state, &[Phase::LevelComplete, Phase::Victory], "select a card")?;

        let offered = state
            .available_cards
            .as_ref()
            .filter(|cards| !cards.is_empty())
            .ok_or(GameError::NoRewardsAvailable)?;

        let card = offered
            .iter()
            .find(|c| &c.id == card_id)
            .cloned()
            .ok_or_else(|| GameError::CardNotOffered(card_id.clone()))?;

        let mut next = state.clone();
        next.available_cards = None;
        let line = format!("Added {} to your deck!", card.name);
        next.zones.add_to_deck(card);
        next.log(line);

        if next.phase == Phase::Victory {
            next.log("Demo complete! Refresh to play again.");
        }

        info!(game = %next.id, card = %card_id, level = next.current_level, "reward taken");
        Ok(next)
    }

    /// Leave a completed level and start combat against the next enemy.
    ///
    /// Any reward still on offer is forfeited.
    pub fn advance_level(&self, state: &GameState) -> Result<GameState> {
        Self::expect_phase(state, &[Phase::LevelComplete], "advance")?;

        let mut next = state.clone();
        next.current_level += 1;
        next.level_complete = false;
        next.available_cards = None;

        next.enemy = self.roster.for_level(next.current_level).spawn(&mut next.rng);

        next.player.heal(self.config.level_heal);
        next.player.restore_energy();
        next.player.armor = 0;

        let hand_size = self.config.hand_size;
        next.zones.discard_hand();
        next.zones.recycle_if_low(hand_size, &mut next.rng);
        next.zones.draw(hand_size);

        next.turn = 1;
        next.phase = Phase::Combat;
        let line = format!(
            "Level {}: {} appears! Defeat it to proceed.",
            next.current_level, next.enemy.name
        );
        next.log(line);

        info!(
            game = %next.id,
            level = next.current_level,
            enemy = %next.enemy.name,
            health = next.player.health,
            "level started"
        );
        Ok(next)
    }

    /// Shuffle the reward pool and take the first few.
    pub(super) fn offer_rewards(&self, rng: &mut GameRng) -> Vec<Card> {
        let mut pool = self.cards.reward_pool();
        rng.shuffle(&mut pool);
        pool.truncate(self.config.reward_choices);
        pool
    }
}
