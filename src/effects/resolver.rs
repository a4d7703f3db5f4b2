//! Effect resolution - applying a played card to the game state.
//!
//! Resolution order is fixed: damage, then armor, then each extra effect in
//! the order the card lists them. Every step appends one log line.

use crate::cards::Card;
use crate::core::{Combatant, GameState};

use super::effect::{CardEffect, StatusApplication, Target};

/// Resolves played cards on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply a card's damage, armor, and effects.
    ///
    /// The card must already have been paid for and moved out of hand.
    /// Zero damage or armor counts as absent and logs nothing.
    pub fn resolve_card(state: &mut GameState, card: &Card) {
        if let Some(damage) = card.damage.filter(|&d| d > 0) {
            let dealt = state.enemy.take_damage(damage);
            let line = format!("{} takes {} damage", state.enemy.name, dealt);
            state.log(line);
        }

        if let Some(armor) = card.armor.filter(|&a| a > 0) {
            state.player.gain_armor(armor);
            state.log(format!("Player gains {} armor", armor));
        }

        for effect in &card.effects {
            Self::resolve_effect(state, *effect);
        }
    }

    /// Apply a single extra effect.
    pub fn resolve_effect(state: &mut GameState, effect: CardEffect) {
        match effect {
            CardEffect::Draw { count } => {
                let drawn = state.zones.draw_with_recycle(count as usize, &mut state.rng);
                let noun = if drawn == 1 { "card" } else { "cards" };
                state.log(format!("Player draws {} {}", drawn, noun));
            }
            CardEffect::Strength { .. }
            | CardEffect::PermanentStrength { .. }
            | CardEffect::Vulnerable { .. } => {
                if let Some(application) = effect.status_application() {
                    Self::apply_status(state, application);
                }
            }
        }
    }

    /// Stack a status onto its target and log it.
    fn apply_status(state: &mut GameState, application: StatusApplication) {
        let (owner, statuses) = match application.target {
            Target::Player => ("Player".to_string(), state.player.statuses_mut()),
            Target::Enemy => (state.enemy.name.clone(), state.enemy.statuses_mut()),
        };
        statuses.apply(application.status, application.amount, application.duration);

        let suffix = match (application.target, application.duration) {
            (Target::Player, Some(1)) => " (until end of turn)",
            _ => "",
        };
        state.log(format!(
            "{} gains {} {}{}",
            owner, application.amount, application.status, suffix
        ));
    }
}
