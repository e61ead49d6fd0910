//! Hanging bonuses: trail the carrier balloon and spin in place.

use glam::Vec3;
use hecs::{Entity, World};

use popshot_core::components::{BonusState, Lifecycle};
use popshot_core::constants::BONUS_SPIN_SPEED;
use popshot_core::enums::LifeState;
use popshot_core::types::Position;

use crate::relations::AttachedTo;

pub fn run(world: &mut World, dt: f32) {
    // Parents moved earlier this tick, so followers snap to the pose
    // their carrier holds now, not last tick's.
    let mut moves: Vec<(Entity, Vec3)> = Vec::new();
    for (entity, (attached, lifecycle)) in world.query::<(&AttachedTo, &Lifecycle)>().iter() {
        if lifecycle.state != LifeState::Live {
            continue;
        }
        let Ok(parent_position) = world.get::<&Position>(attached.parent) else {
            continue;
        };
        moves.push((entity, parent_position.0 + attached.offset));
    }
    for (entity, target) in moves {
        if let Ok(mut position) = world.get::<&mut Position>(entity) {
            position.0 = target;
        }
    }

    for (_entity, (state, lifecycle)) in world.query_mut::<(&mut BonusState, &Lifecycle)>() {
        if lifecycle.state != LifeState::Live {
            continue;
        }
        state.spin = (state.spin + BONUS_SPIN_SPEED * dt) % std::f32::consts::TAU;
    }
}
