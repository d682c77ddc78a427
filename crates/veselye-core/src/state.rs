//! Game state snapshot: the complete visible state handed to the renderer each step.

use serde::{Deserialize, Serialize};

use crate::enums::{GameStatus, Grade};
use crate::events::GameEvent;
use crate::types::{BottleId, Position, SimTime};

/// Complete game state broadcast after each step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub status: GameStatus,
    pub score: u32,
    pub time_remaining_secs: u32,
    /// Live bottles in spawn order.
    pub bottles: Vec<BottleView>,
    /// Final grade, present only once the session has ended.
    pub grade: Option<Grade>,
    pub events: Vec<GameEvent>,
}

/// A bottle as drawn on the playfield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BottleView {
    pub id: BottleId,
    pub position: Position,
    pub fall_speed: f64,
    pub is_bonus: bool,
}
