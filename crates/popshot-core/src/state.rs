//! Level snapshot: the complete visible state sent to the frontend each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::enums::*;
use crate::events::{AudioEvent, GameEvent};
use crate::types::SimTime;

/// Complete simulation state broadcast to the frontend after each tick.
///
/// Actor views are sorted by id so two snapshots of identical state
/// serialize identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current time factor; frontends drive animation and pitch from it.
    pub time_scale: f32,
    /// Zero-based wave index while a level is active.
    pub wave: u32,
    pub day_cycle: DayCycleView,
    pub score: ScoreBoard,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub bonuses: Vec<BonusView>,
    pub audio_events: Vec<AudioEvent>,
    pub game_events: Vec<GameEvent>,
}

/// One live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: ActorId,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub health: i32,
    /// Head heading for pigeons; zero for balloons.
    pub yaw: f32,
    pub pitch: f32,
}

/// One in-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ActorId,
    pub kind: ProjectileKind,
    pub position: Vec3,
    pub velocity: Vec3,
}

/// One hanging bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusView {
    pub id: ActorId,
    pub kind: BonusKind,
    pub position: Vec3,
    /// Idle spin angle (radians).
    pub spin: f32,
}

/// Player health and hands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: i32,
    pub left_weapon: Option<WeaponView>,
    pub right_weapon: Option<WeaponView>,
}

/// One held weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub kind: WeaponKind,
    pub projectile: ProjectileKind,
    /// Shots remaining; `None` means unlimited.
    pub durability: Option<u32>,
    /// 0 right after a shot, 1 when ready again.
    pub cooldown_fraction: f32,
    /// Retired weapons stop firing but linger until their shots land.
    pub retired: bool,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u32,
    pub enemies_destroyed: u32,
    pub shots_fired: u32,
}

/// Day-cycle phase for frontend lighting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DayCycleView {
    /// Phase in [0, 1): 0 is noon, 0.5 is midnight.
    pub progress: f32,
    /// Seconds for one full cycle.
    pub duration: f32,
}
