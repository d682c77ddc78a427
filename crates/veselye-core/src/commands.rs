//! Player commands sent from the presentation layer to the game engine.
//!
//! Commands are queued and applied at the next step boundary.

use serde::{Deserialize, Serialize};

use crate::types::BottleId;

/// All possible player actions in the catch game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session (also used to play again after the timer ran out).
    StartGame,
    /// Catch the bottle with the given id.
    CatchBottle { id: BottleId },
}
