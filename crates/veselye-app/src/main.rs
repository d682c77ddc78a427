//! Headless demo host: plays one catch-game session with a simple
//! auto-catcher, takes the quiz once, and asks the chat bot a few questions.
//!
//! Environment:
//! - `RUST_LOG`: log filter (default `info`)
//! - `VESELYE_CONFIG`: path to a JSON `GameConfig`
//! - `VESELYE_SEED`: seed override

use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use veselye_app::ipc;
use veselye_app::state::AppState;
use veselye_core::constants::{PLAYFIELD_HEIGHT, SESSION_DURATION_SECS};
use veselye_core::enums::GameStatus;
use veselye_sim::GameConfig;

/// Bottles are "clicked" once they fall this far into the playfield.
const AUTO_CATCH_DEPTH: f64 = PLAYFIELD_HEIGHT * 0.4;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Veselye arcade v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    info!(
        seed = config.seed,
        width = config.playfield_width,
        height = config.playfield_height,
        "configuration loaded"
    );
    let state = AppState::new().with_game_config(config);

    play_session(&state)?;
    take_quiz(&state)?;
    chat(&state);

    ipc::stop_game(&state)
}

fn load_config() -> Result<GameConfig, String> {
    let mut config = match std::env::var("VESELYE_CONFIG") {
        Ok(path) => GameConfig::load(Path::new(&path))?,
        Err(_) => GameConfig::default(),
    };
    if let Ok(seed) = std::env::var("VESELYE_SEED") {
        config.seed = seed
            .parse()
            .map_err(|e| format!("Invalid VESELYE_SEED {seed:?}: {e}"))?;
    }
    Ok(config)
}

fn play_session(state: &AppState) -> Result<(), String> {
    ipc::start_game(state)?;

    let deadline = Instant::now() + Duration::from_secs(SESSION_DURATION_SECS as u64 + 5);
    let mut seen_running = false;

    while Instant::now() < deadline {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snapshot) = ipc::get_snapshot(state)? else {
            continue;
        };

        match snapshot.status {
            GameStatus::Running => {
                seen_running = true;
                for bottle in &snapshot.bottles {
                    if bottle.position.y >= AUTO_CATCH_DEPTH {
                        ipc::catch_bottle(state, bottle.id)?;
                    }
                }
            }
            GameStatus::Ended if seen_running => {
                if let Some(grade) = snapshot.grade {
                    println!("Игра окончена! Твой счёт: {}", snapshot.score);
                    println!("{}", grade.verdict());
                }
                return Ok(());
            }
            _ => {}
        }
    }

    warn!("session did not finish before the deadline");
    Ok(())
}

fn take_quiz(state: &AppState) -> Result<(), String> {
    let mut turn = 0;
    while let Ok(question) = ipc::current_question(state) {
        let option_index = turn % question.options.len();
        println!("{} -> {}", question.text, question.options[option_index].text);
        ipc::answer_question(state, option_index)?;
        turn += 1;
    }

    let outcome = ipc::quiz_result(state)?;
    println!("{}", outcome.profile.title);
    println!("{}", outcome.profile.description);
    ipc::reset_quiz(state)
}

fn chat(state: &AppState) {
    println!("{}", state.chat.greeting());
    for message in ["Как играть?", "Что это за сайт?", "Расскажи анекдот"] {
        if let Some(reply) = ipc::send_chat(state, message) {
            println!("> {message}\n{reply}");
        }
    }
}
