//! Kinematic integration system.
//!
//! One fixed order per tick: damping first, then the accumulated
//! steering force, then the speed cap, then the position update. The
//! cap rescales the whole velocity vector so direction is preserved.

use glam::Vec3;
use hecs::World;

use popshot_core::components::{Kinematics, Lifecycle};
use popshot_core::enums::LifeState;
use popshot_core::types::{Position, Velocity};

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (position, velocity, kinematics, lifecycle)) in world.query_mut::<(
        &mut Position,
        &mut Velocity,
        &mut Kinematics,
        &Lifecycle,
    )>() {
        if lifecycle.state != LifeState::Live {
            continue;
        }

        velocity.0 *= kinematics.damping;
        velocity.0 += kinematics.accumulated_force;

        let speed = velocity.0.length();
        if speed > kinematics.max_speed {
            velocity.0 = velocity.0 / speed * kinematics.max_speed;
        }

        position.0 += velocity.0 * dt;
        kinematics.accumulated_force = Vec3::ZERO;
    }
}
