//! Central roster of everything that can collide.
//!
//! Actors register once at spawn and unregister once at retirement.
//! Entries keep insertion order so the collision pass visits pairs in
//! the same order every run, which the determinism guarantee relies on.

use hecs::{Entity, World};
use log::warn;
use popshot_core::components::{Hitbox, Lifecycle};
use popshot_core::enums::{ColliderClass, LifeState};
use popshot_core::types::{Aabb, Position};

/// One collider as captured at the start of a collision pass.
#[derive(Debug, Clone, Copy)]
pub struct ColliderShot {
    pub entity: Entity,
    pub class: ColliderClass,
    pub aabb: Aabb,
}

#[derive(Debug, Default)]
pub struct ColliderRegistry {
    entries: Vec<(Entity, ColliderClass)>,
}

impl ColliderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity. Registering the same entity twice is a spawn
    /// bookkeeping bug; the duplicate is dropped.
    pub fn add(&mut self, entity: Entity, class: ColliderClass) {
        if self.entries.iter().any(|(e, _)| *e == entity) {
            warn!("collider registered twice: {:?} ({:?})", entity, class);
            return;
        }
        self.entries.push((entity, class));
    }

    /// Unregisters an entity. Removing an entity that was never added (or
    /// was already removed) is a retirement bookkeeping bug.
    pub fn remove(&mut self, entity: Entity) {
        match self.entries.iter().position(|(e, _)| *e == entity) {
            Some(index) => {
                self.entries.remove(index);
            }
            None => warn!("collider removed twice: {:?}", entity),
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entries.iter().any(|(e, _)| *e == entity)
    }

    pub fn class_of(&self, entity: Entity) -> Option<ColliderClass> {
        self.entries
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, class)| *class)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry. Used by level teardown, which despawns all
    /// actors wholesale instead of retiring them one by one.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Captures the position and extent of every live registered collider.
    /// The collision pass runs against this frozen view, so movement caused
    /// by earlier resolutions in the same tick cannot create new overlaps.
    pub fn snapshot(&self, world: &World) -> Vec<ColliderShot> {
        let mut shots = Vec::with_capacity(self.entries.len());
        for &(entity, class) in &self.entries {
            let Ok(position) = world.get::<&Position>(entity) else {
                continue;
            };
            let Ok(hitbox) = world.get::<&Hitbox>(entity) else {
                continue;
            };
            if let Ok(lifecycle) = world.get::<&Lifecycle>(entity) {
                if lifecycle.state != LifeState::Live {
                    continue;
                }
            }
            shots.push(ColliderShot {
                entity,
                class,
                aabb: Aabb::new(position.0, hitbox.half_extents),
            });
        }
        shots
    }
}
