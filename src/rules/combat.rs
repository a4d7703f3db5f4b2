//! Combat transitions: playing cards and ending turns.

use tracing::{debug, info};

use super::engine::CombatEngine;
use crate::cards::CardId;
use crate::core::{Combatant, GameError, GameState, Phase, Result};
use crate::effects::EffectResolver;
use crate::enemies::EnemyActionKind;

impl CombatEngine {
    /// Play a card from hand.
    ///
    /// Rejected outside combat, for a card not in hand, or when the player
    /// cannot pay its cost. Defeating the enemy ends the encounter.
    pub fn play_card(&self, state: &GameState, card_id: &CardId) -> Result<GameState> {
        Self::expect_phase(state, &[Phase::Combat], "play cards")?;

        let card = state
            .zones
            .find_in_hand(card_id)
            .cloned()
            .ok_or_else(|| GameError::CardNotInHand(card_id.clone()))?;

        if state.player.energy < card.cost {
            return Err(GameError::InsufficientEnergy {
                cost: card.cost,
                available: state.player.energy,
            });
        }

        let mut next = state.clone();
        next.zones.discard_from_hand(card_id);
        next.player.energy -= card.cost;
        next.log(format!("You played {}", card.name));

        EffectResolver::resolve_card(&mut next, &card);

        debug!(
            game = %next.id,
            card = %card.id,
            enemy_health = next.enemy.health,
            energy = next.player.energy,
            "card played"
        );

        if next.enemy.is_defeated() {
            self.complete_encounter(&mut next);
        }

        Ok(next)
    }

    /// End the player's turn.
    ///
    /// Player statuses tick down, the enemy resolves its announced intent
    /// and reveals the next one, then (unless the player fell) the hand is
    /// discarded and a fresh one drawn.
    pub fn end_turn(&self, state: &GameState) -> Result<GameState> {
        Self::expect_phase(state, &[Phase::Combat], "end the turn")?;

        let mut next = state.clone();

        for expired in next.player.statuses_mut().decay() {
            next.log(format!("Player loses {}", expired));
        }

        if !next.enemy.is_defeated() {
            self.enemy_turn(&mut next);
        }

        if next.player.is_defeated() {
            next.phase = Phase::Defeat;
            next.log("Defeat! The enemy has bested you.");
            info!(game = %next.id, level = next.current_level, turn = next.turn, "player defeated");
            return Ok(next);
        }

        let hand_size = self.config.hand_size;
        next.zones.discard_hand();
        if next.zones.recycle_if_low(hand_size, &mut next.rng) {
            debug!(game = %next.id, deck = next.zones.deck.len(), "discard pile shuffled into deck");
        }
        next.zones.draw(hand_size);

        next.player.restore_energy();
        next.turn += 1;
        let line = format!("Turn {} begins!", next.turn);
        next.log(line);

        debug!(game = %next.id, turn = next.turn, health = next.player.health, "turn ended");
        Ok(next)
    }

    /// Resolve the committed intent, tick enemy statuses, commit the next.
    fn enemy_turn(&self, state: &mut GameState) {
        let enemy_type = self.roster.for_level(state.current_level);
        let intent = state.enemy.next_action;
        let entry = enemy_type.action_of_kind(intent);
        let name = state.enemy.name.clone();

        match intent {
            EnemyActionKind::Attack => {
                let damage = entry
                    .and_then(|a| a.damage)
                    .unwrap_or(self.config.fallback_attack_damage);
                let dealt = state.player.take_damage(damage);
                state.log(format!("{} attacks for {} damage", name, dealt));
            }
            EnemyActionKind::Defend => {
                let armor = entry
                    .and_then(|a| a.armor)
                    .unwrap_or(self.config.fallback_defend_armor);
                state.enemy.gain_armor(armor);
                state.log(format!("{} gains {} armor", name, armor));
            }
            EnemyActionKind::Charge => {
                state.log(format!("{} is charging up...", name));
            }
            EnemyActionKind::Special => {
                state.log(format!("{} prepares something special...", name));
            }
        }

        for expired in state.enemy.statuses_mut().decay() {
            state.log(format!("{} loses {}", name, expired));
        }

        enemy_type.commit_next_action(&mut state.enemy, &mut state.rng);
    }

    /// The enemy just fell: offer rewards and leave combat.
    fn complete_encounter(&self, state: &mut GameState) {
        let rewards = self.offer_rewards(&mut state.rng);
        state.available_cards = Some(rewards);

        if state.is_final_level() {
            state.phase = Phase::Victory;
            state.log("Victory! Choose a card to add to your deck.");
            info!(game = %state.id, level = state.current_level, "run won");
        } else {
            state.phase = Phase::LevelComplete;
            state.level_complete = true;
            let line = format!(
                "{} defeated! Choose a card to add to your deck, then advance to level {}.",
                state.enemy.name,
                state.current_level + 1
            );
            state.log(line);
            info!(game = %state.id, level = state.current_level, "level complete");
        }
    }
}
