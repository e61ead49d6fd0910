//! Components that link entities to other entities.
//!
//! These hold live `hecs::Entity` handles, so they live in the sim crate
//! rather than popshot-core. Handles can go stale when the partner is
//! despawned; consumers check `world.contains` before following one.

use popshot_core::enums::HandSide;

/// Bonus-side half of the balloon/bonus pairing. The bonus trails its
/// carrier at a fixed offset until the carrier pops.
#[derive(Debug, Clone, Copy)]
pub struct AttachedTo {
    /// The carrier balloon.
    pub parent: hecs::Entity,
    /// Offset from the carrier's position, in world units.
    pub offset: glam::Vec3,
}

/// Carrier-side half of the balloon/bonus pairing.
#[derive(Debug, Clone, Copy)]
pub struct BonusLink {
    /// The attached bonus, if it has not been collected yet.
    pub bonus: Option<hecs::Entity>,
}

/// Who launched a projectile. Collision resolution skips the owner so a
/// round can never hit the actor that fired it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectileOwner {
    /// Fired or thrown from one of the player's hands.
    PlayerHand(HandSide),
    /// Launched by an enemy.
    Enemy(hecs::Entity),
}

/// Attached to every projectile at spawn.
#[derive(Debug, Clone, Copy)]
pub struct LaunchedBy {
    pub owner: ProjectileOwner,
}

/// Egg-launching state for shooter and dropper pigeons.
#[derive(Debug, Clone)]
pub struct Armament {
    /// Seconds between launches.
    pub cooldown_secs: f32,
    /// Scaled seconds since the last launch. Runs on the scaled clock
    /// so slow motion stretches enemy fire rates too.
    pub since_last_shot: f32,
    /// Eggs currently in flight, pruned as they are despawned.
    pub rounds: Vec<hecs::Entity>,
}

impl Armament {
    /// A fresh armament waits one full cooldown before its first launch,
    /// giving the player a beat to spot the pigeon.
    pub fn new(cooldown_secs: f32) -> Self {
        Self {
            cooldown_secs,
            since_last_shot: 0.0,
            rounds: Vec::new(),
        }
    }
}
