//! Application state shared across handlers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use veselye_core::commands::PlayerCommand;
use veselye_core::state::GameSnapshot;
use veselye_quiz::QuizEngine;
use veselye_sim::GameConfig;

use crate::chat::{ChatBot, OfflineReplyService, ReplyService};

/// Commands sent from the handler layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the game engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// Must be `Send + Sync` to be shared between handler threads:
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that does not exist before `start_game`
/// - the latest snapshot is `Arc<Mutex<...>>`, shared with the loop thread
pub struct AppState {
    /// Channel sender to the game loop thread. `None` before `start_game`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Join handle of the loop thread, taken on `stop_game`.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    /// Latest snapshot for synchronous `get_snapshot` queries.
    /// Updated by the game loop thread after each step.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    /// Quiz progress. Driven only by user actions, so no thread of its own.
    pub quiz: Mutex<QuizEngine>,
    pub chat: ChatBot<Box<dyn ReplyService>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
    /// Configuration for each game loop started from this state.
    pub game_config: GameConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_reply_service(Box::new(OfflineReplyService))
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose chat falls back to the given remote reply service.
    pub fn with_reply_service(service: Box<dyn ReplyService>) -> Self {
        Self {
            command_tx: Mutex::new(None),
            loop_handle: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            quiz: Mutex::new(QuizEngine::new()),
            chat: ChatBot::new(service),
            running: Mutex::new(false),
            game_config: GameConfig::default(),
        }
    }

    /// Same state with a different game configuration.
    pub fn with_game_config(mut self, config: GameConfig) -> Self {
        self.game_config = config;
        self
    }
}
