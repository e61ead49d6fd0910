//! Player rig: health, tracked head and hand poses, and the weapon slots.
//!
//! The rig itself is not an ECS entity, but it owns two small proxy
//! entities (head and body) that stand in for the player in the collider
//! registry. Their positions are re-pinned to the tracked pose each tick.

use glam::Vec3;
use hecs::Entity;
use popshot_core::commands::InputFrame;
use popshot_core::constants::HAND_SAMPLE_INTERVAL;
use popshot_core::enums::HandSide;
use popshot_core::events::SoundId;

use crate::weapon::Weapon;

/// Periodic pose sampler backing the throw gesture. Keeps the last two
/// samples and the measured gap between them; throw velocity is the
/// displacement across that gap. Runs on the raw clock.
#[derive(Debug, Clone, Copy)]
pub struct HandSampler {
    previous: Vec3,
    latest: Vec3,
    since_sample_secs: f32,
    last_interval_secs: f32,
}

impl HandSampler {
    pub fn new(position: Vec3) -> Self {
        Self {
            previous: position,
            latest: position,
            since_sample_secs: 0.0,
            last_interval_secs: 0.0,
        }
    }

    /// Forgets sample history. Called when a hand grabs something so a
    /// stale pre-grab swing cannot leak into the next throw.
    pub fn reset(&mut self, position: Vec3) {
        *self = Self::new(position);
    }

    pub fn advance(&mut self, raw_dt: f32, current: Vec3) {
        self.since_sample_secs += raw_dt;
        if self.since_sample_secs >= HAND_SAMPLE_INTERVAL {
            self.previous = self.latest;
            self.latest = current;
            self.last_interval_secs = self.since_sample_secs;
            self.since_sample_secs = 0.0;
        }
    }

    /// Velocity the hand was moving at over the last full sample window.
    /// Zero until two distinct samples exist.
    pub fn throw_velocity(&self) -> Vec3 {
        if self.last_interval_secs <= 0.0 {
            return Vec3::ZERO;
        }
        (self.latest - self.previous) / self.last_interval_secs
    }
}

/// One hand: tracked pose, trigger/grip state, and an optional weapon.
#[derive(Debug, Clone)]
pub struct HandSlot {
    pub side: HandSide,
    pub position: Vec3,
    pub forward: Vec3,
    pub trigger: f32,
    /// Grip state from the previous tick, for release edge detection.
    pub grip_held: bool,
    pub sampler: HandSampler,
    pub weapon: Option<Weapon>,
}

impl HandSlot {
    fn new(side: HandSide) -> Self {
        Self {
            side,
            position: Vec3::ZERO,
            forward: Vec3::Z,
            trigger: 0.0,
            grip_held: false,
            sampler: HandSampler::new(Vec3::ZERO),
            weapon: None,
        }
    }

    /// Point rounds leave from, out along the hand's aim.
    pub fn muzzle(&self, offset: f32) -> Vec3 {
        self.position + self.forward.normalize_or_zero() * offset
    }
}

#[derive(Debug, Clone)]
pub struct PlayerRig {
    pub health: i32,
    /// Playfield anchor from the level document. The return button and
    /// other player-relative furniture offset from here.
    pub base_position: Vec3,
    pub head_position: Vec3,
    pub head_forward: Vec3,
    pub left: HandSlot,
    pub right: HandSlot,
    /// Collider proxy entities, spawned at level setup.
    pub head_entity: Option<Entity>,
    pub body_entity: Option<Entity>,
    /// Ledger instance for the hit grunt, restarted on every hit.
    pub hit_cue: Option<SoundId>,
    /// Last emitted motion-controller visibility, to emit on change only.
    pub controllers_visible: bool,
}

impl PlayerRig {
    pub fn new(health: i32, base_position: Vec3) -> Self {
        Self {
            health,
            base_position,
            head_position: base_position + Vec3::new(0.0, 1.7, 0.0),
            head_forward: Vec3::Z,
            left: HandSlot::new(HandSide::Left),
            right: HandSlot::new(HandSide::Right),
            head_entity: None,
            body_entity: None,
            hit_cue: None,
            controllers_visible: false,
        }
    }

    pub fn hand(&self, side: HandSide) -> &HandSlot {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }

    pub fn hand_mut(&mut self, side: HandSide) -> &mut HandSlot {
        match side {
            HandSide::Left => &mut self.left,
            HandSide::Right => &mut self.right,
        }
    }

    /// Copies tracked poses out of the input frame and advances both
    /// samplers. Runs every tick, paused or not, on the raw clock.
    pub fn apply_input(&mut self, input: &InputFrame, raw_dt: f32) {
        self.head_position = input.head_position;
        self.head_forward = input.head_forward;
        for side in [HandSide::Left, HandSide::Right] {
            let state = input.hand(side);
            let slot = self.hand_mut(side);
            slot.position = state.position;
            slot.forward = state.forward;
            slot.trigger = state.trigger;
            slot.sampler.advance(raw_dt, state.position);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn both_hands_empty(&self) -> bool {
        self.left.weapon.is_none() && self.right.weapon.is_none()
    }
}
