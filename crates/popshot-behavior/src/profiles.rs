//! Per-kind parameter profiles for actors.
//!
//! Consolidates the numbers that distinguish enemy and projectile
//! kinds, and the weapon/round compatibility table the factories
//! enforce.

use glam::Vec3;

use popshot_core::constants::*;
use popshot_core::enums::{EnemyKind, ProjectileKind, WeaponKind};

/// Parameters shared by every enemy of one kind.
pub struct EnemyProfile {
    /// Collision footprint half-extents (before padding).
    pub half_extents: Vec3,
    /// Implicit idle-bob parameters appended after the data behaviors.
    pub float_force: f32,
    pub float_freq: f32,
    /// Pigeons turn their head toward the player.
    pub tracks_player: bool,
    /// How this enemy launches eggs, if it does.
    pub egg_delivery: Option<EggDelivery>,
}

/// Egg launch style for armed pigeons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggDelivery {
    /// Launched at the player's head or body, 50/50.
    Aimed,
    /// Released below the pigeon with no initial velocity.
    Dropped,
}

/// Get the profile for a given enemy kind.
pub fn enemy_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Copper => balloon_profile(0.5),
        EnemyKind::Silver => balloon_profile(0.4),
        EnemyKind::Gold => balloon_profile(0.3),
        EnemyKind::Pigeon => pigeon_profile(Vec3::new(0.4, 0.4, 0.6), None),
        EnemyKind::PigeonBoss => pigeon_profile(Vec3::new(0.8, 0.8, 1.1), None),
        EnemyKind::PigeonShooter => {
            pigeon_profile(Vec3::new(0.4, 0.4, 0.6), Some(EggDelivery::Aimed))
        }
        EnemyKind::PigeonDropper => {
            pigeon_profile(Vec3::new(0.4, 0.4, 0.6), Some(EggDelivery::Dropped))
        }
    }
}

fn balloon_profile(radius: f32) -> EnemyProfile {
    EnemyProfile {
        half_extents: Vec3::splat(radius),
        float_force: BALLOON_FLOAT_FORCE,
        float_freq: BALLOON_FLOAT_FREQ,
        tracks_player: false,
        egg_delivery: None,
    }
}

fn pigeon_profile(half_extents: Vec3, egg_delivery: Option<EggDelivery>) -> EnemyProfile {
    EnemyProfile {
        half_extents,
        float_force: PIGEON_FLOAT_FORCE,
        float_freq: PIGEON_FLOAT_FREQ,
        tracks_player: true,
        egg_delivery,
    }
}

/// Trajectory family a projectile kind flies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStyle {
    Straight,
    /// Straight opening stretch, then a randomized sideways bend.
    Curve,
    /// Forward drift with periodic lateral weaving.
    Weave,
    /// Weave plus an independent vertical oscillation.
    ChaosWeave,
}

/// Parameters shared by every projectile of one kind.
pub struct ProjectileProfile {
    pub half_extents: Vec3,
    pub damping: f32,
    pub max_speed: f32,
    pub lifetime_secs: f32,
    pub hitbox_padding: f32,
    /// Downward pull; zero for projectiles that hold altitude.
    pub gravity_force: f32,
    pub style: FlightStyle,
}

/// Get the profile for a given projectile kind.
///
/// `None` has no profile; weapons that fire nothing never spawn.
pub fn projectile_profile(kind: ProjectileKind) -> ProjectileProfile {
    let base = ProjectileProfile {
        half_extents: Vec3::splat(0.15),
        damping: PROJECTILE_DAMPING,
        max_speed: PROJECTILE_MAX_SPEED,
        lifetime_secs: PROJECTILE_MAX_LIFETIME,
        hitbox_padding: PROJECTILE_HITBOX_PADDING,
        gravity_force: 0.0,
        style: FlightStyle::Straight,
    };
    match kind {
        ProjectileKind::Ball => ProjectileProfile {
            gravity_force: PROJECTILE_GRAVITY_FORCE,
            ..base
        },
        ProjectileKind::Laser => ProjectileProfile {
            half_extents: Vec3::new(0.05, 0.05, 0.4),
            ..base
        },
        ProjectileKind::Egg => ProjectileProfile {
            half_extents: Vec3::splat(0.12),
            gravity_force: PROJECTILE_GRAVITY_FORCE,
            ..base
        },
        ProjectileKind::Boomerang => ProjectileProfile {
            half_extents: Vec3::splat(0.25),
            style: FlightStyle::Curve,
            ..base
        },
        ProjectileKind::Javelin => ProjectileProfile {
            half_extents: Vec3::new(0.1, 0.1, 0.5),
            style: FlightStyle::Curve,
            ..base
        },
        ProjectileKind::Disc => ProjectileProfile {
            half_extents: Vec3::new(0.25, 0.05, 0.25),
            style: FlightStyle::Weave,
            ..base
        },
        ProjectileKind::ChaosBall => ProjectileProfile {
            half_extents: Vec3::splat(0.2),
            style: FlightStyle::ChaosWeave,
            ..base
        },
        ProjectileKind::None => base,
    }
}

/// Whether a weapon kind may be loaded with a given round.
///
/// The gun family is restricted; launchers take any real round; the
/// hand and the empty slot ignore the field entirely.
pub fn weapon_accepts(weapon: WeaponKind, projectile: Option<ProjectileKind>) -> bool {
    let round = projectile.unwrap_or(ProjectileKind::None);
    match weapon {
        WeaponKind::Hand | WeaponKind::None => true,
        WeaponKind::Gun => matches!(
            round,
            ProjectileKind::Ball
                | ProjectileKind::Laser
                | ProjectileKind::Boomerang
                | ProjectileKind::Javelin
        ),
        WeaponKind::GatlingGun => {
            matches!(round, ProjectileKind::Ball | ProjectileKind::Laser)
        }
        WeaponKind::BoomerangLauncher
        | WeaponKind::JavelinLauncher
        | WeaponKind::DiscLauncher
        | WeaponKind::ChaosGun => round != ProjectileKind::None,
    }
}
