//! Snapshot system: queries the world and builds a complete `GameSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use veselye_core::components::{Bottle, FallSpeed};
use veselye_core::enums::GameStatus;
use veselye_core::events::GameEvent;
use veselye_core::state::{BottleView, GameSnapshot};
use veselye_core::types::{Position, SimTime};

use crate::scoring;

/// Build a complete snapshot from the current world and session counters.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    status: GameStatus,
    score: u32,
    time_remaining_secs: u32,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        status,
        score,
        time_remaining_secs,
        bottles: build_bottles(world),
        grade: (status == GameStatus::Ended).then(|| scoring::grade(score)),
        events,
    }
}

/// Live bottles in spawn order.
pub fn build_bottles(world: &World) -> Vec<BottleView> {
    let mut bottles: Vec<BottleView> = world
        .query::<(&Bottle, &Position, &FallSpeed)>()
        .iter()
        .map(|(_, (bottle, pos, speed))| BottleView {
            id: bottle.id,
            position: *pos,
            fall_speed: speed.0,
            is_bonus: bottle.is_bonus,
        })
        .collect();

    bottles.sort_by_key(|b| b.id);
    bottles
}
