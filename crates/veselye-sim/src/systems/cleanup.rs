//! Cleanup system: removes bottles that fell out of the playfield.

use hecs::{Entity, World};
use tracing::debug;

use veselye_core::components::Bottle;
use veselye_core::events::GameEvent;
use veselye_core::types::Position;

/// Despawn bottles whose `y` is past `floor`. Missed bottles cost nothing.
/// Uses a pre-allocated buffer to avoid per-step allocation.
pub fn run(
    world: &mut World,
    floor: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    for (entity, (pos, bottle)) in world.query_mut::<(&Position, &Bottle)>() {
        if pos.y > floor {
            despawn_buffer.push(entity);
            events.push(GameEvent::BottleMissed { id: bottle.id });
            debug!(id = %bottle.id, "bottle missed");
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove every bottle, e.g. when a session starts or ends.
pub fn clear_all(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.extend(world.query_mut::<&Bottle>().into_iter().map(|(e, _)| e));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
