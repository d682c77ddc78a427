//! Handlers invoked by the frontend.
//!
//! Game handlers forward commands to the game loop thread; quiz and chat
//! handlers work on `AppState` directly. Errors come back as strings for
//! the frontend to display.

use serde::Serialize;
use tracing::info;

use veselye_core::commands::PlayerCommand;
use veselye_core::enums::Category;
use veselye_core::state::GameSnapshot;
use veselye_core::types::BottleId;
use veselye_quiz::profiles::{result_profile, ResultProfile};
use veselye_quiz::questions::Question;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Quiz result with its display card.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOutcome {
    pub category: Category,
    pub profile: ResultProfile,
}

/// Start (or restart) a game session. Spawns the game loop on first use.
pub fn start_game(state: &AppState) -> Result<(), String> {
    {
        let mut running = state.running.lock().map_err(|e| e.to_string())?;
        if !*running {
            let (cmd_tx, handle) = game_loop::spawn_game_loop(
                state.game_config.clone(),
                state.latest_snapshot.clone(),
            )?;

            *state.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
            *state.loop_handle.lock().map_err(|e| e.to_string())? = Some(handle);
            *running = true;
        }
    }

    send_command(state, PlayerCommand::StartGame)
}

/// Catch a bottle by id. Unknown ids are ignored by the engine.
pub fn catch_bottle(state: &AppState, id: BottleId) -> Result<(), String> {
    send_command(state, PlayerCommand::CatchBottle { id })
}

/// Send a player command to the game loop.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Game not started".into()),
    }
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Tear down the game loop. A no-op when it is not running.
pub fn stop_game(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if !*running {
        return Ok(());
    }

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // Loop may already be gone; dropping the sender stops it either way.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_handle.lock().map_err(|e| e.to_string())?.take() {
        handle
            .join()
            .map_err(|_| "Game loop thread panicked".to_string())?;
    }
    *running = false;
    info!("game stopped");
    Ok(())
}

/// The quiz question awaiting an answer.
pub fn current_question(state: &AppState) -> Result<&'static Question, String> {
    let quiz = state.quiz.lock().map_err(|e| e.to_string())?;
    quiz.current_question().map_err(|e| e.to_string())
}

/// Pick option `option_index` of the current question.
pub fn answer_question(state: &AppState, option_index: usize) -> Result<Category, String> {
    let mut quiz = state.quiz.lock().map_err(|e| e.to_string())?;
    quiz.answer_option(option_index).map_err(|e| e.to_string())
}

/// Result of the completed quiz.
pub fn quiz_result(state: &AppState) -> Result<QuizOutcome, String> {
    let quiz = state.quiz.lock().map_err(|e| e.to_string())?;
    let category = quiz.result().map_err(|e| e.to_string())?;
    Ok(QuizOutcome {
        category,
        profile: result_profile(category),
    })
}

/// Start the quiz over.
pub fn reset_quiz(state: &AppState) -> Result<(), String> {
    let mut quiz = state.quiz.lock().map_err(|e| e.to_string())?;
    quiz.reset();
    Ok(())
}

/// Reply to a chat message. Blank messages get no reply.
pub fn send_chat(state: &AppState, message: &str) -> Option<String> {
    state.chat.respond(message)
}
