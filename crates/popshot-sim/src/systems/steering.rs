//! Steering pass: evaluates every actor's behavior list and writes the
//! summed force into its kinematics for the integrator to consume.
//!
//! Enemies carry their document behaviors plus the implicit idle bob;
//! ballistic projectiles carry a single gravity behavior. Forces are
//! summed in list order, which the tuning relies on.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use popshot_behavior::steering::{SteeringContext, SteeringSet};
use popshot_core::components::{Enemy, Hitbox, Kinematics, Lifecycle, Wall};
use popshot_core::enums::LifeState;
use popshot_core::types::{Aabb, Position, Velocity};

pub fn run(world: &mut World, dt: f32, player_eye: Vec3, rng: &mut ChaCha8Rng) {
    // Frozen views for the whole pass: behaviors see positions as they
    // were at the start of the tick.
    let mut obstacles = Vec::new();
    for (_entity, (position, hitbox, _wall)) in
        world.query_mut::<(&Position, &Hitbox, &Wall)>()
    {
        obstacles.push(Aabb::new(position.0, hitbox.half_extents));
    }

    let mut enemy_positions = Vec::new();
    for (entity, (position, lifecycle, _enemy)) in
        world.query_mut::<(&Position, &Lifecycle, &Enemy)>()
    {
        if lifecycle.state == LifeState::Live {
            enemy_positions.push((entity, position.0));
        }
    }

    for (entity, (set, position, velocity, kinematics, lifecycle)) in world.query_mut::<(
        &mut SteeringSet,
        &Position,
        &Velocity,
        &mut Kinematics,
        &Lifecycle,
    )>() {
        if lifecycle.state != LifeState::Live {
            continue;
        }

        // Attraction must never lock onto the actor itself.
        let others: Vec<Vec3> = enemy_positions
            .iter()
            .filter(|(other, _)| *other != entity)
            .map(|(_, pos)| *pos)
            .collect();

        let ctx = SteeringContext {
            position: position.0,
            velocity: velocity.0,
            player_eye,
            enemies: &others,
            obstacles: &obstacles,
        };

        let mut total = Vec3::ZERO;
        for behavior in &mut set.behaviors {
            total += behavior.force(dt, &ctx, rng);
        }
        kinematics.accumulated_force = total;
    }
}
