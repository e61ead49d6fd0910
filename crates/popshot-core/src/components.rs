//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Stable actor identifier allocated by the engine at spawn.
/// Snapshots key on this, never on raw entity handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Marks an entity as an enemy (balloon or pigeon).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as an in-flight projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Marks an entity as a balloon-carried bonus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bonus;

/// Marks an entity as a static arena wall.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wall;

/// Marks an entity as the return-to-menu button.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReturnButton;

/// Enemy archetype and score value from level data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub kind: EnemyKind,
    /// Points granted to the player when this enemy is destroyed.
    pub score: u32,
}

/// Remaining hit points. Every projectile impact removes one;
/// the actor dies when this reaches zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
}

/// Kinematic envelope consumed by the integrator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Speed cap (m/s). Velocity is rescaled, never truncated per axis.
    pub max_speed: f32,
    /// Per-tick velocity multiplier. 1.0 disables decay.
    pub damping: f32,
    /// Forces summed by the steering pass this tick, zeroed after integration.
    #[serde(default)]
    pub accumulated_force: Vec3,
}

/// Collision footprint half-extents, already inflated by the
/// per-kind padding at spawn. Centered on the actor position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub half_extents: Vec3,
}

/// Lifecycle gate. Systems skip actors once they leave `Live`;
/// the cleanup system despawns `Disposed` actors at end of tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Lifecycle {
    pub state: LifeState,
}

/// Pigeon head orientation, smoothly tracking the player eye.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HeadTracking {
    /// Current heading (radians).
    pub yaw: f32,
    pub pitch: f32,
    /// Per-spawn random yaw error so pigeons do not aim perfectly.
    pub aim_offset: f32,
    /// Turn rate toward the target heading (rad/s).
    pub turn_speed: f32,
}

/// Projectile archetype plus its aging state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileInfo {
    pub kind: ProjectileKind,
    /// Scaled seconds since launch.
    pub age_secs: f32,
    /// Age at which the projectile disposes itself.
    pub max_lifetime_secs: f32,
}

/// Trajectory shaping applied on top of the base integration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum FlightPath {
    /// No extra displacement; velocity alone carries the projectile.
    Straight,
    /// Drift forward, then bend the drift around +Y once the opening
    /// stretch ends. Boomerangs and javelins.
    Curve {
        /// Forward drift applied every tick (m/s).
        drift: Vec3,
        /// Full bend angle reached after the ramp (radians).
        curve_angle: f32,
        /// +1 bends right, -1 bends left.
        turn_dir: f32,
    },
    /// Drift forward while displacing sideways on a sine, flipping
    /// direction each period. Discs, and chaos balls with the extra
    /// vertical weave.
    Weave {
        /// Launch heading, drifted along at 1 m/s.
        forward: Vec3,
        /// Chaos balls weave vertically as well as laterally.
        vertical: bool,
        turn_dir: f32,
        vertical_dir: f32,
        /// Seconds since the last direction flip. Starts at the flip
        /// threshold so weaving begins immediately.
        since_turn_secs: f32,
    },
}

/// Bonus payload and activation guard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BonusState {
    pub payload: BonusPayload,
    /// Monotonic: set exactly once, by collection or by the balloon's
    /// destruction, never both.
    pub activated: bool,
    /// Idle spin angle (radians), cosmetic.
    pub spin: f32,
}

/// What a bonus grants when activated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum BonusPayload {
    Score { points: u32 },
    Time { duration_secs: f32, speed_ratio: f32 },
}

impl BonusPayload {
    pub fn kind(&self) -> BonusKind {
        match self {
            BonusPayload::Score { .. } => BonusKind::Score,
            BonusPayload::Time { .. } => BonusKind::Time,
        }
    }
}
