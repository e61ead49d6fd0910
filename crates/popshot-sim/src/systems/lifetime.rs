//! Projectile end-of-life: floor contact and age expiry.

use hecs::{Entity, World};

use popshot_core::components::{Lifecycle, ProjectileInfo};
use popshot_core::constants::PROJECTILE_FLOOR_Y;
use popshot_core::enums::LifeState;
use popshot_core::types::Position;

use crate::registry::ColliderRegistry;
use crate::systems::cleanup;

pub fn run(world: &mut World, registry: &mut ColliderRegistry) {
    let mut expired: Vec<Entity> = Vec::new();
    for (entity, (position, info, lifecycle)) in
        world.query_mut::<(&Position, &ProjectileInfo, &Lifecycle)>()
    {
        if lifecycle.state != LifeState::Live {
            continue;
        }
        if position.0.y < PROJECTILE_FLOOR_Y || info.age_secs > info.max_lifetime_secs {
            expired.push(entity);
        }
    }
    for entity in expired {
        cleanup::retire(world, registry, entity);
    }
}
