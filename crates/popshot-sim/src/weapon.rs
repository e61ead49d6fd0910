//! Weapon state, one instance per occupied hand slot.
//!
//! Weapons are not ECS entities: they have no collider and nothing else
//! references them, so they live directly on the player rig. The rounds
//! they fire ARE entities, and a weapon keeps handles to its in-flight
//! rounds so retirement can wait for them.

use hecs::Entity;
use popshot_core::enums::{ProjectileKind, WeaponKind};
use popshot_core::events::SoundId;

#[derive(Debug, Clone)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// What this weapon fires (or, for the hand, throws).
    pub projectile: ProjectileKind,
    /// Muzzle speed for trigger weapons. The hand ignores it and uses the
    /// sampled throw velocity instead.
    pub force: f32,
    /// Shots remaining. `None` is unlimited.
    pub durability: Option<u32>,
    pub cooldown_secs: f32,
    /// Raw-clock seconds since the last shot. Starts at the cooldown so
    /// the first trigger pull fires immediately.
    pub since_last_shot: f32,
    pub grabbed: bool,
    /// Set when durability runs out. A retired weapon stops firing and is
    /// dropped, but stays allocated until its last round lands.
    pub retired: bool,
    /// Rounds currently in flight, pruned as they are despawned.
    pub rounds: Vec<Entity>,
    /// Ledger instance for the fire sound, restarted on every shot.
    /// The hand throws silently and has none.
    pub fire_cue: Option<SoundId>,
}

impl Weapon {
    pub fn new(
        kind: WeaponKind,
        projectile: ProjectileKind,
        force: f32,
        durability: Option<u32>,
        cooldown_secs: f32,
    ) -> Self {
        Self {
            kind,
            projectile,
            force,
            durability,
            cooldown_secs,
            since_last_shot: cooldown_secs,
            grabbed: false,
            retired: false,
            rounds: Vec::new(),
            fire_cue: None,
        }
    }

    pub fn can_fire(&self) -> bool {
        self.grabbed
            && !self.retired
            && self.projectile != ProjectileKind::None
            && self.since_last_shot >= self.cooldown_secs
            && self.durability != Some(0)
    }

    /// Restarts the cooldown and spends one round of durability.
    pub fn note_shot(&mut self) {
        self.since_last_shot = 0.0;
        if let Some(shots) = self.durability.as_mut() {
            *shots = shots.saturating_sub(1);
        }
    }

    /// Runs on the raw clock so slow motion never stretches the firing rate.
    pub fn advance(&mut self, raw_dt: f32) {
        self.since_last_shot += raw_dt;
    }

    pub fn out_of_durability(&self) -> bool {
        self.durability == Some(0)
    }

    /// Stops the weapon firing and drops it from the hand. In-flight
    /// rounds are unaffected.
    pub fn retire(&mut self) {
        self.retired = true;
        self.grabbed = false;
    }

    /// A retired weapon can be freed once nothing it fired is still flying.
    pub fn disposable(&self) -> bool {
        self.retired && self.rounds.is_empty()
    }

    /// Fraction of the cooldown elapsed, saturating at 1. Snapshots expose
    /// this so a frontend can render a charge ring.
    pub fn cooldown_fraction(&self) -> f32 {
        if self.cooldown_secs <= 0.0 {
            return 1.0;
        }
        (self.since_last_shot / self.cooldown_secs).min(1.0)
    }
}
