//! Game loop thread: owns the game engine and steps it every 16 ms.
//!
//! The engine is created inside this thread so exactly one owner ever
//! touches the session. Commands arrive via `mpsc` channel. Snapshots are
//! stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use veselye_core::constants::STEP_MS;
use veselye_core::state::GameSnapshot;
use veselye_sim::{GameConfig, GameEngine};

use crate::state::GameLoopCommand;

/// Wall-clock duration of one simulation step.
const STEP_DURATION: Duration = Duration::from_millis(STEP_MS);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the handler layer and the thread handle.
pub fn spawn_game_loop(
    config: GameConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("veselye-game-loop".into())
        .spawn(move || {
            run_game_loop(GameEngine::new(config), cmd_rx, &latest_snapshot);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    info!(seed = engine.config().seed, "game loop started");
    let mut next_step_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            info!("game loop stopped");
            return;
        }

        // 2. Advance one step
        let snapshot = engine.step();

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next step
        next_step_time += STEP_DURATION;
        let now = Instant::now();
        if next_step_time > now {
            std::thread::sleep(next_step_time - now);
        } else if now - next_step_time > STEP_DURATION * 2 {
            // Too far behind: reset instead of bursting steps to catch up.
            debug!(behind = ?(now - next_step_time), "game loop fell behind");
            next_step_time = now;
        }
    }
}

/// Forward queued commands to the engine. Returns false when the loop must exit.
fn drain_commands(engine: &mut GameEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
