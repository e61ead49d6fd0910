//! Disposal: marks actors done-for and despawns them at tick end.
//!
//! Disposal is two-phase. Anything that wants an actor gone calls
//! [`retire`], which flips its lifecycle and drops its collider in the
//! same breath, so later systems in the same tick already see it dead.
//! The actual despawn happens here, once per tick, after every system
//! has run.

use hecs::{Entity, World};

use popshot_core::components::Lifecycle;
use popshot_core::enums::LifeState;

use crate::registry::ColliderRegistry;
use crate::relations::Armament;

/// Mark an actor disposed and remove its collider. Idempotent; the
/// second caller in a tick is a no-op.
pub fn retire(world: &mut World, registry: &mut ColliderRegistry, entity: Entity) {
    let Ok(mut lifecycle) = world.get::<&mut Lifecycle>(entity) else {
        return;
    };
    if lifecycle.state == LifeState::Disposed {
        return;
    }
    lifecycle.state = LifeState::Disposed;
    drop(lifecycle);
    registry.remove(entity);
}

/// Despawn everything marked disposed this tick, then drop stale round
/// handles. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, lifecycle) in world.query_mut::<&Lifecycle>() {
        if lifecycle.state == LifeState::Disposed {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Armed pigeons forget rounds that just despawned. Player weapons do
    // the same for theirs in the weapons system.
    let mut armed: Vec<Entity> = Vec::new();
    for (entity, _armament) in world.query_mut::<&Armament>() {
        armed.push(entity);
    }
    for entity in armed {
        if let Ok(mut armament) = world.get::<&mut Armament>(entity) {
            armament.rounds.retain(|round| world.contains(*round));
        }
    }
}
