//! Projectile contact resolution.
//!
//! The pass runs against a collider snapshot frozen at its start and
//! visits projectiles and their candidate partners in registration
//! order, so rebuilding the same world replays the same contacts. A
//! projectile resolves at most one contact per tick and is consumed by
//! it whatever it hit; an armored enemy that soaks the hit still costs
//! the round.

use hecs::{Entity, World};

use popshot_core::components::{ActorId, BonusPayload, BonusState, EnemyInfo, Health, Lifecycle};
use popshot_core::constants::{CUE_LINGER_SECS, PROJECTILE_PLAYER_DAMAGE};
use popshot_core::enums::{ColliderClass, LifeState, SoundCue};
use popshot_core::events::{AudioEvent, GameEvent};
use popshot_core::state::ScoreBoard;
use popshot_core::types::Position;

use crate::player::PlayerRig;
use crate::registry::{ColliderRegistry, ColliderShot};
use crate::relations::{AttachedTo, BonusLink, LaunchedBy, ProjectileOwner};
use crate::sound::SoundLedger;
use crate::systems::cleanup;
use crate::tasks::{DeferredTasks, TaskAction};
use crate::time_control::TimeControl;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    registry: &mut ColliderRegistry,
    ledger: &mut SoundLedger,
    tasks: &mut DeferredTasks,
    time_control: &mut TimeControl,
    rig: &mut PlayerRig,
    score: &mut ScoreBoard,
    now_raw_secs: f32,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    let shots = registry.snapshot(world);

    for shot in shots
        .iter()
        .filter(|shot| shot.class == ColliderClass::Projectile)
    {
        if !is_live(world, shot.entity) {
            continue;
        }
        let owner = match world.get::<&LaunchedBy>(shot.entity) {
            Ok(launched) => launched.owner,
            Err(_) => continue,
        };

        for other in &shots {
            if other.entity == shot.entity || other.class == ColliderClass::Projectile {
                continue;
            }
            if owner_excludes(owner, other) {
                continue;
            }
            // The snapshot is frozen, so a partner retired earlier in
            // this same pass must be skipped here.
            if !is_live(world, other.entity) {
                continue;
            }
            if !shot.aabb.intersects(&other.aabb) {
                continue;
            }

            match other.class {
                ColliderClass::Enemy => hit_enemy(
                    world,
                    registry,
                    ledger,
                    tasks,
                    time_control,
                    score,
                    now_raw_secs,
                    other,
                    audio_events,
                    game_events,
                ),
                ColliderClass::Bonus => activate_bonus(
                    world,
                    registry,
                    ledger,
                    tasks,
                    time_control,
                    score,
                    now_raw_secs,
                    other.entity,
                    audio_events,
                    game_events,
                ),
                ColliderClass::PlayerHead | ColliderClass::PlayerBody => {
                    hit_player(rig, ledger, audio_events, game_events)
                }
                ColliderClass::ReturnButton => game_events.push(GameEvent::ReturnRequested),
                ColliderClass::Wall => {}
                ColliderClass::Projectile => {}
            }

            // Whatever it hit, the round is spent.
            cleanup::retire(world, registry, shot.entity);
            break;
        }
    }
}

fn is_live(world: &World, entity: Entity) -> bool {
    world
        .get::<&Lifecycle>(entity)
        .map(|lifecycle| lifecycle.state == LifeState::Live)
        .unwrap_or(false)
}

/// Contacts a projectile never makes: its own launcher, and the player
/// proxies for rounds the player launched.
fn owner_excludes(owner: ProjectileOwner, other: &ColliderShot) -> bool {
    match owner {
        ProjectileOwner::Enemy(launcher) => other.entity == launcher,
        ProjectileOwner::PlayerHand(_) => matches!(
            other.class,
            ColliderClass::PlayerHead | ColliderClass::PlayerBody
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn hit_enemy(
    world: &mut World,
    registry: &mut ColliderRegistry,
    ledger: &mut SoundLedger,
    tasks: &mut DeferredTasks,
    time_control: &mut TimeControl,
    score: &mut ScoreBoard,
    now_raw_secs: f32,
    shot: &ColliderShot,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    let enemy = shot.entity;
    let dead = match world.get::<&mut Health>(enemy) {
        Ok(mut health) => {
            health.current -= 1;
            health.current <= 0
        }
        Err(_) => return,
    };
    if !dead {
        return;
    }

    // The hanging bonus fires before its carrier goes away.
    let carried = world
        .get::<&BonusLink>(enemy)
        .ok()
        .and_then(|link| link.bonus);
    if let Some(bonus) = carried {
        activate_bonus(
            world,
            registry,
            ledger,
            tasks,
            time_control,
            score,
            now_raw_secs,
            bonus,
            audio_events,
            game_events,
        );
    }

    let Ok(info) = world.get::<&EnemyInfo>(enemy).map(|info| *info) else {
        return;
    };
    let Ok(id) = world.get::<&ActorId>(enemy).map(|id| *id) else {
        return;
    };

    score.score += info.score;
    score.enemies_destroyed += 1;
    game_events.push(GameEvent::EnemyDestroyed {
        id,
        kind: info.kind,
        score: info.score,
    });
    game_events.push(GameEvent::ScoreChanged { score: score.score });

    let cue_kind = if info.kind.is_balloon() {
        SoundCue::BalloonPop
    } else {
        SoundCue::PigeonDeath
    };
    let cue = ledger.play(cue_kind, false, Some(shot.aabb.center), audio_events);
    tasks.schedule(now_raw_secs + CUE_LINGER_SECS, TaskAction::ReleaseSound(cue));

    cleanup::retire(world, registry, enemy);
}

/// Fire a bonus payload exactly once, from either trigger: a direct
/// projectile hit or the carrier balloon's destruction.
#[allow(clippy::too_many_arguments)]
fn activate_bonus(
    world: &mut World,
    registry: &mut ColliderRegistry,
    ledger: &mut SoundLedger,
    tasks: &mut DeferredTasks,
    time_control: &mut TimeControl,
    score: &mut ScoreBoard,
    now_raw_secs: f32,
    bonus: Entity,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    let payload = match world.get::<&mut BonusState>(bonus) {
        Ok(mut state) => {
            if state.activated {
                return;
            }
            state.activated = true;
            state.payload
        }
        Err(_) => return,
    };
    let Ok(id) = world.get::<&ActorId>(bonus).map(|id| *id) else {
        return;
    };
    let position = world.get::<&Position>(bonus).map(|position| position.0).ok();

    game_events.push(GameEvent::BonusActivated {
        id,
        kind: payload.kind(),
    });
    match payload {
        BonusPayload::Score { points } => {
            score.score += points;
            game_events.push(GameEvent::ScoreChanged { score: score.score });
        }
        BonusPayload::Time {
            duration_secs,
            speed_ratio,
        } => {
            time_control.begin_slow_motion(speed_ratio);
            // A fresh Time bonus supersedes a running one; its restore
            // must not fire mid-bonus.
            tasks.cancel_time_restores();
            tasks.schedule(now_raw_secs + duration_secs, TaskAction::RestoreTimeScale);
        }
    }

    let cue = ledger.play(SoundCue::BonusCollected, false, position, audio_events);
    tasks.schedule(now_raw_secs + CUE_LINGER_SECS, TaskAction::ReleaseSound(cue));

    // Unhook from the carrier so the balloon's own death cannot re-fire it.
    let parent = world
        .get::<&AttachedTo>(bonus)
        .map(|attached| attached.parent)
        .ok();
    if let Some(parent) = parent {
        if let Ok(mut link) = world.get::<&mut BonusLink>(parent) {
            link.bonus = None;
        }
    }

    cleanup::retire(world, registry, bonus);
}

fn hit_player(
    rig: &mut PlayerRig,
    ledger: &mut SoundLedger,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    rig.health -= PROJECTILE_PLAYER_DAMAGE;
    game_events.push(GameEvent::PlayerHit {
        damage: PROJECTILE_PLAYER_DAMAGE,
        health: rig.health,
    });
    // The hit grunt follows the player, not a point in space.
    if let Some(cue) = rig.hit_cue {
        ledger.replay(cue, SoundCue::PlayerHit, None, audio_events);
    }
}
