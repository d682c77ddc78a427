//! Events emitted by the game engine for sound and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Grade;
use crate::types::BottleId;

/// Per-step feedback events, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new session started.
    SessionStarted,
    /// A bottle appeared above the playfield.
    BottleSpawned { id: BottleId, is_bonus: bool },
    /// The player caught a bottle.
    BottleCaught { id: BottleId, points: u32 },
    /// A bottle fell past the bottom edge.
    BottleMissed { id: BottleId },
    /// The countdown reached zero.
    SessionEnded { score: u32, grade: Grade },
}
