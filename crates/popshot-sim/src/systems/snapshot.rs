//! Snapshot system: queries the world and builds the per-tick
//! [`LevelSnapshot`].
//!
//! Read-only over the world. The event vectors are drained by the
//! engine and handed in by value; actor views are sorted by id so two
//! snapshots of identical state serialize identically.

use hecs::World;

use popshot_core::components::*;
use popshot_core::enums::*;
use popshot_core::events::{AudioEvent, GameEvent};
use popshot_core::state::*;
use popshot_core::types::{Position, SimTime, Velocity};

use crate::environment::DayCycle;
use crate::player::PlayerRig;
use crate::systems::wave_progress::WaveTracker;
use crate::weapon::Weapon;

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    time_scale: f32,
    day_cycle: &DayCycle,
    tracker: Option<&WaveTracker>,
    score: &ScoreBoard,
    rig: Option<&PlayerRig>,
    audio_events: Vec<AudioEvent>,
    game_events: Vec<GameEvent>,
) -> LevelSnapshot {
    LevelSnapshot {
        time: *time,
        phase,
        time_scale,
        wave: tracker
            .and_then(|tracker| tracker.current_wave())
            .unwrap_or(0),
        day_cycle: DayCycleView {
            progress: day_cycle.progress(),
            duration: day_cycle.duration_secs(),
        },
        score: score.clone(),
        player: build_player(rig),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        bonuses: build_bonuses(world),
        audio_events,
        game_events,
    }
}

fn build_player(rig: Option<&PlayerRig>) -> PlayerView {
    let Some(rig) = rig else {
        return PlayerView::default();
    };
    PlayerView {
        health: rig.health,
        left_weapon: rig.left.weapon.as_ref().map(build_weapon),
        right_weapon: rig.right.weapon.as_ref().map(build_weapon),
    }
}

fn build_weapon(weapon: &Weapon) -> WeaponView {
    WeaponView {
        kind: weapon.kind,
        projectile: weapon.projectile,
        durability: weapon.durability,
        cooldown_fraction: weapon.cooldown_fraction(),
        retired: weapon.retired,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(
            &ActorId,
            &EnemyInfo,
            &Health,
            &Position,
            &Lifecycle,
            Option<&HeadTracking>,
        )>()
        .iter()
        .filter(|(_, (_, _, _, _, lifecycle, _))| lifecycle.state == LifeState::Live)
        .map(|(_, (id, info, health, position, _, head))| EnemyView {
            id: *id,
            kind: info.kind,
            position: position.0,
            health: health.current,
            yaw: head.map(|head| head.yaw).unwrap_or(0.0),
            pitch: head.map(|head| head.pitch).unwrap_or(0.0),
        })
        .collect();
    enemies.sort_by_key(|enemy| enemy.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ActorId, &ProjectileInfo, &Position, &Velocity, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, _, _, lifecycle))| lifecycle.state == LifeState::Live)
        .map(|(_, (id, info, position, velocity, _))| ProjectileView {
            id: *id,
            kind: info.kind,
            position: position.0,
            velocity: velocity.0,
        })
        .collect();
    projectiles.sort_by_key(|projectile| projectile.id);
    projectiles
}

fn build_bonuses(world: &World) -> Vec<BonusView> {
    let mut bonuses: Vec<BonusView> = world
        .query::<(&ActorId, &BonusState, &Position, &Lifecycle)>()
        .iter()
        .filter(|(_, (_, _, _, lifecycle))| lifecycle.state == LifeState::Live)
        .map(|(_, (id, state, position, _))| BonusView {
            id: *id,
            kind: state.payload.kind(),
            position: position.0,
            spin: state.spin,
        })
        .collect();
    bonuses.sort_by_key(|bonus| bonus.id);
    bonuses
}
