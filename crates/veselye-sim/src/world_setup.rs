//! Entity spawn factories for the playfield.

use hecs::World;
use rand::Rng;

use veselye_core::components::{Bottle, FallSpeed};
use veselye_core::constants::*;
use veselye_core::types::{BottleId, Position};

/// Spawn one bottle just above the visible area.
///
/// Draw order is fixed (bonus roll, then x, then speed) so a given RNG
/// stream always yields the same bottle.
pub fn spawn_bottle<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    id: BottleId,
    playfield_width: f64,
) -> (hecs::Entity, Bottle) {
    let is_bonus = rng.gen_bool(BONUS_CHANCE);
    let max_x = (playfield_width - BOTTLE_WIDTH).max(0.0);
    let x: f64 = rng.gen_range(0.0..=max_x);
    let speed: f64 = rng.gen_range(FALL_SPEED_MIN..=FALL_SPEED_MAX);

    let bottle = Bottle { id, is_bonus };
    let entity = world.spawn((bottle, Position::new(x, -BOTTLE_HEIGHT), FallSpeed(speed)));
    (entity, bottle)
}

/// Spawn a bottle with explicit placement (for tests that need exact positions).
#[cfg(test)]
pub fn spawn_placed_bottle(
    world: &mut World,
    id: BottleId,
    position: Position,
    speed: f64,
    is_bonus: bool,
) -> hecs::Entity {
    world.spawn((Bottle { id, is_bonus }, position, FallSpeed(speed)))
}
