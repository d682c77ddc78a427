//! Fall integration: y += fall_speed once per step.

use hecs::World;

use veselye_core::components::FallSpeed;
use veselye_core::types::Position;

/// Move every falling entity down by its own speed.
pub fn run(world: &mut World) {
    for (_entity, (pos, speed)) in world.query_mut::<(&mut Position, &FallSpeed)>() {
        pos.y += speed.0;
    }
}
