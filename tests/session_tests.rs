//! Session service tests: the command boundary callers use.

use deck_duel::{
    CardId, CombatEngine, Command, GameConfig, GameError, GameService, GameSession, GameState,
    MemoryStore, Phase, SessionId, SessionStore,
};

fn service(seed: u64) -> GameService {
    GameService::in_memory(GameConfig::default().with_seed(seed)).unwrap()
}

/// A copy of the session's state one Strike away from winning. The first
/// hand card becomes a Strike so no card is lost.
fn rig_for_win(store_engine: &CombatEngine, session: &GameSession) -> GameState {
    let mut state = session.game_state.clone();
    let strike = store_engine.cards().get(&CardId::new("strike")).cloned().unwrap();
    state.zones.hand[0] = strike;
    state.enemy.health = 1;
    state.enemy.armor = 0;
    state
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_sessions_are_independent() {
    let mut service = service(1);
    let a = service.new_game();
    let b = service.new_game();
    assert_ne!(a.id, b.id);

    service.end_turn(a.id).unwrap();

    assert_eq!(service.session(a.id).unwrap().game_state.turn, 2);
    assert_eq!(service.session(b.id).unwrap(), b);
}

#[test]
fn test_unknown_session_rejected() {
    let mut service = service(1);
    service.new_game();
    let missing = SessionId::new();

    for result in [
        service.play_card(missing, "strike"),
        service.end_turn(missing),
        service.select_card(missing, "bash"),
        service.advance_level(missing),
    ] {
        let err = result.unwrap_err();
        assert!(matches!(err, GameError::SessionNotFound(id) if id == missing));
        assert!(!err.is_rejection());
    }
}

#[test]
fn test_rejected_command_is_not_persisted() {
    let mut service = service(2);
    let session = service.new_game();

    let err = service.select_card(session.id, "bash").unwrap_err();
    assert!(err.is_rejection());
    assert_eq!(err.to_string(), "cannot select a card during the COMBAT phase");
    assert_eq!(service.session(session.id).unwrap(), session);
}

#[test]
fn test_execute_matches_named_methods() {
    let mut a = service(3);
    let mut b = service(3);
    let sa = a.new_game();
    let sb = b.new_game();

    let via_execute = a.execute(sa.id, &Command::EndTurn).unwrap();
    let via_method = b.end_turn(sb.id).unwrap();
    assert_eq!(via_execute.game_state.zones, via_method.game_state.zones);
    assert_eq!(via_execute.game_state.logs, via_method.game_state.logs);
}

// =============================================================================
// Custom Stores
// =============================================================================

/// Store that records every write, to check the service writes once per
/// accepted command and never on rejection.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: usize,
}

impl SessionStore for CountingStore {
    fn allocate_id(&mut self) -> SessionId {
        self.inner.allocate_id()
    }

    fn get(&self, id: SessionId) -> Option<&GameState> {
        self.inner.get(id)
    }

    fn put(&mut self, state: GameState) {
        self.writes += 1;
        self.inner.put(state);
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[test]
fn test_service_over_custom_store() {
    let engine = CombatEngine::with_config(GameConfig::default().with_seed(5)).unwrap();
    let mut service = GameService::new(engine, CountingStore::default());

    let session = service.new_game();
    assert_eq!(service.store().writes, 1);

    service.end_turn(session.id).unwrap();
    assert_eq!(service.store().writes, 2);

    assert!(service.advance_level(session.id).is_err());
    assert_eq!(service.store().writes, 2);
}

#[test]
fn test_reward_flow_through_store() {
    let engine = CombatEngine::with_config(GameConfig::default().with_seed(8)).unwrap();
    let mut store = MemoryStore::new();
    let id = store.allocate_id();
    let state = engine.new_game(id, 8);
    let rigged = rig_for_win(&engine, &GameSession::new(state));
    store.put(rigged);

    let mut service = GameService::new(engine, store);
    let won = service.play_card(id, "strike").unwrap();
    assert_eq!(won.game_state.phase, Phase::LevelComplete);
    assert_eq!(won.game_state.zones.total_cards(), 10);

    let pick = won.game_state.available_cards.as_ref().unwrap()[0].id.clone();
    let chosen = service.select_card(id, pick).unwrap();
    assert!(chosen.game_state.available_cards.is_none());

    let next = service.advance_level(id).unwrap();
    assert_eq!(next.game_state.current_level, 2);
    assert_eq!(next.game_state.phase, Phase::Combat);
}

// =============================================================================
// Wire Shape
// =============================================================================

#[test]
fn test_session_json_shape() {
    let mut service = service(4);
    let session = service.new_game();
    let json = serde_json::to_value(&session).unwrap();

    assert_eq!(json["id"], serde_json::json!(session.id.to_string()));
    let state = &json["gameState"];
    assert_eq!(state["phase"], "COMBAT");
    assert_eq!(state["currentLevel"], 1);
    assert_eq!(state["maxLevel"], 3);
    assert_eq!(state["levelComplete"], false);
    assert_eq!(state["player"]["maxHealth"], 80);
    assert_eq!(state["enemy"]["name"], "Cultist");
    assert_eq!(state["hand"].as_array().map(Vec::len), Some(5));
    assert_eq!(state["deck"].as_array().map(Vec::len), Some(5));
    assert!(state["discardPile"].as_array().unwrap().is_empty());
    assert!(state.get("availableCards").is_none());

    let text = serde_json::to_string(&session).unwrap();
    let back: GameSession = serde_json::from_str(&text).unwrap();
    assert_eq!(back, session);
}

#[test]
fn test_command_json() {
    let command: Command =
        serde_json::from_str(r#"{"type":"PLAY_CARD","cardId":"strike"}"#).unwrap();
    assert_eq!(command, Command::play_card("strike"));

    let command: Command = serde_json::from_str(r#"{"type":"END_TURN"}"#).unwrap();
    assert_eq!(command, Command::EndTurn);
}
