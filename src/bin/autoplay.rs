//! Headless Autoplay
//!
//! Plays a full run with a greedy policy and prints the combat log.

use std::path::PathBuf;

use clap::Parser;
use deck_duel::{Command, GameConfig, GameService, GameSession, RulesEngine};

/// Upper bound on commands per run, in case a policy stalls.
const MAX_COMMANDS: usize = 2_000;

/// Headless Autoplay - greedy bot playing a full run
#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Play a full deck-duel run with a greedy policy")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Game configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final session as JSON instead of the combat log
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut service = GameService::in_memory(config)?;
    let mut session = service.new_game();
    let id = session.id;

    for _ in 0..MAX_COMMANDS {
        let Some(command) = choose(&service, &session) else {
            break;
        };
        session = service.execute(id, &command)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        for line in &session.game_state.logs {
            println!("{line}");
        }
        let state = &session.game_state;
        println!(
            "-- {} at level {}/{} (turn {}, {}/{} HP)",
            state.phase,
            state.current_level,
            state.max_level,
            state.turn,
            state.player.health,
            state.player.max_health
        );
    }

    Ok(())
}

/// Most expensive playable card, else first reward, else advance, else end turn.
fn choose(service: &GameService, session: &GameSession) -> Option<Command> {
    let engine = service.engine();
    let commands = engine.legal_commands(&session.game_state);

    let best_play = commands
        .iter()
        .filter_map(|command| match command {
            Command::PlayCard { card_id } => {
                engine.cards().get(card_id).map(|card| (card.cost, command))
            }
            _ => None,
        })
        .max_by_key(|(cost, _)| *cost)
        .map(|(_, command)| command.clone());

    best_play
        .or_else(|| {
            commands
                .iter()
                .find(|c| matches!(c, Command::SelectCard { .. }))
                .cloned()
        })
        .or_else(|| commands.iter().find(|c| **c == Command::AdvanceLevel).cloned())
        .or_else(|| commands.iter().find(|c| **c == Command::EndTurn).cloned())
}
