//! Level progression tests: winning encounters, rewards, advancing.

use deck_duel::{
    CardId, CombatEngine, Command, GameConfig, GameError, GameResult, GameState, Phase,
    RulesEngine, SessionId,
};

/// A state where the next Heavy Blow kills the current enemy.
///
/// The first hand card is swapped for a Heavy Blow, so the card count is
/// unchanged.
fn on_the_brink(engine: &CombatEngine, mut state: GameState) -> GameState {
    let heavy_blow = engine.cards().get(&CardId::new("heavy_blow")).cloned().unwrap();
    match state.zones.hand.first_mut() {
        Some(slot) => *slot = heavy_blow,
        None => state.zones.hand.push(heavy_blow),
    }
    state.player.energy = 3;
    state.enemy.health = 10;
    state.enemy.armor = 0;
    state
}

fn win_encounter(engine: &CombatEngine, state: GameState) -> GameState {
    let state = on_the_brink(engine, state);
    engine.apply(&state, &Command::play_card("heavy_blow")).unwrap()
}

// =============================================================================
// Encounter Completion
// =============================================================================

#[test]
fn test_win_on_non_final_level() {
    let engine = CombatEngine::default();
    let state = engine.new_game(SessionId::new(), 4);

    let next = win_encounter(&engine, state);

    assert_eq!(next.phase, Phase::LevelComplete);
    assert!(next.level_complete);
    assert_eq!(next.enemy.health, 0);
    let offered = next.available_cards.as_ref().unwrap();
    assert_eq!(offered.len(), 3);
    let pool: Vec<CardId> = engine.cards().reward_pool().into_iter().map(|c| c.id).collect();
    assert!(offered.iter().all(|c| pool.contains(&c.id)));
    assert_eq!(engine.is_terminal(&next), None);
}

#[test]
fn test_win_on_final_level_bypasses_level_complete() {
    let engine = CombatEngine::default();
    let mut state = engine.new_game(SessionId::new(), 4);
    state.current_level = state.max_level;

    let next = win_encounter(&engine, state);

    assert_eq!(next.phase, Phase::Victory);
    assert!(!next.level_complete);
    assert!(next.has_rewards());
    assert_eq!(engine.is_terminal(&next), Some(GameResult::Victory));
}

#[test]
fn test_rigged_win_keeps_hand() {
    let engine = CombatEngine::default();
    let state = engine.new_game(SessionId::new(), 4);
    let total = state.zones.total_cards();
    let rest: Vec<CardId> = state.zones.hand[1..].iter().map(|c| c.id.clone()).collect();

    let next = win_encounter(&engine, state);

    assert_eq!(next.zones.total_cards(), total);
    let hand: Vec<CardId> = next.zones.hand.iter().map(|c| c.id.clone()).collect();
    assert_eq!(hand, rest);
}

#[test]
fn test_overkill_clamps_health() {
    let engine = CombatEngine::default();
    let mut state = on_the_brink(&engine, engine.new_game(SessionId::new(), 4));
    state.enemy.health = 3;

    let next = engine.play_card(&state, &CardId::new("heavy_blow")).unwrap();
    assert_eq!(next.enemy.health, 0);
}

#[test]
fn test_no_end_turn_after_win() {
    let engine = CombatEngine::default();
    let next = win_encounter(&engine, engine.new_game(SessionId::new(), 4));

    let err = engine.end_turn(&next).unwrap_err();
    assert!(matches!(err, GameError::WrongPhase { phase: Phase::LevelComplete, .. }));
}

// =============================================================================
// Rewards and Advancing
// =============================================================================

#[test]
fn test_select_then_advance() {
    let engine = CombatEngine::default();
    let won = win_encounter(&engine, engine.new_game(SessionId::new(), 6));
    let pick = won.available_cards.as_ref().unwrap()[1].clone();

    let chosen = engine.select_card(&won, &pick.id).unwrap();
    assert_eq!(chosen.phase, Phase::LevelComplete);
    assert_eq!(chosen.zones.total_cards(), won.zones.total_cards() + 1);
    assert_eq!(chosen.recent_logs(1), vec![format!("Added {} to your deck!", pick.name)]);

    let next = engine.advance_level(&chosen).unwrap();
    assert_eq!(next.current_level, 2);
    assert_eq!(next.phase, Phase::Combat);
    assert_eq!(next.enemy.name, "Jaw Worm");
    assert_eq!(next.zones.total_cards(), chosen.zones.total_cards());
    assert!(next.zones.iter_all().any(|c| c.id == pick.id));
}

#[test]
fn test_advance_without_selecting_forfeits_reward() {
    let engine = CombatEngine::default();
    let won = win_encounter(&engine, engine.new_game(SessionId::new(), 6));

    let next = engine.advance_level(&won).unwrap();
    assert!(next.available_cards.is_none());
    assert_eq!(next.zones.total_cards(), won.zones.total_cards());
    assert!(engine.select_card(&next, &CardId::new("bash")).is_err());
}

#[test]
fn test_full_run_reaches_victory() {
    let engine = CombatEngine::default();
    let mut state = engine.new_game(SessionId::new(), 10);

    for level in 1..=3 {
        assert_eq!(state.current_level, level);
        let before = state.zones.total_cards();
        state = win_encounter(&engine, state);
        assert_eq!(state.zones.total_cards(), before);

        let pick = state.available_cards.as_ref().unwrap()[0].id.clone();
        state = engine.select_card(&state, &pick).unwrap();
        assert_eq!(state.zones.total_cards(), before + 1);
        assert_eq!(state.zones.deck.last().map(|c| &c.id), Some(&pick));
        if level < 3 {
            state = engine.advance_level(&state).unwrap();
        }
    }

    assert_eq!(state.phase, Phase::Victory);
    assert_eq!(state.zones.total_cards(), 13);
    assert_eq!(state.recent_logs(1), vec!["Demo complete! Refresh to play again."]);
    assert!(engine.legal_commands(&state).is_empty());
}

#[test]
fn test_level_enemies_in_order() {
    let engine = CombatEngine::default();
    let mut state = engine.new_game(SessionId::new(), 12);
    let mut names = vec![state.enemy.name.clone()];

    for _ in 0..2 {
        state = win_encounter(&engine, state);
        state = engine.advance_level(&state).unwrap();
        assert_eq!(state.enemy.health, state.enemy.max_health);
        names.push(state.enemy.name.clone());
    }

    assert_eq!(names, vec!["Cultist", "Jaw Worm", "Gremlin Nob"]);
}

#[test]
fn test_short_run_config() {
    let engine = CombatEngine::with_config(GameConfig::default().with_max_level(1)).unwrap();
    let state = engine.new_game(SessionId::new(), 3);

    let next = win_encounter(&engine, state);
    assert_eq!(next.phase, Phase::Victory);
}
