//! Pigeon behavior: head tracking toward the player and egg launches.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use popshot_behavior::profiles::{enemy_profile, EggDelivery};
use popshot_core::components::{EnemyInfo, HeadTracking, Lifecycle};
use popshot_core::constants::{CUE_LINGER_SECS, EGG_LAUNCH_SPEED, EGG_SPAWN_DROP};
use popshot_core::enums::{LifeState, ProjectileKind, SoundCue};
use popshot_core::events::{AudioEvent, GameEvent};
use popshot_core::types::Position;

use crate::registry::ColliderRegistry;
use crate::relations::{Armament, ProjectileOwner};
use crate::sound::SoundLedger;
use crate::tasks::{DeferredTasks, TaskAction};
use crate::world_setup;

/// Run pigeon AI for one tick. `dt` is scaled time, so slow motion
/// stretches head turns and egg cadence alongside everything else.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    registry: &mut ColliderRegistry,
    ledger: &mut SoundLedger,
    tasks: &mut DeferredTasks,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    dt: f32,
    now_raw_secs: f32,
    player_head: Vec3,
    player_body: Vec3,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    track_player(world, dt, player_head);
    launch_eggs(
        world,
        registry,
        ledger,
        tasks,
        rng,
        next_actor_id,
        dt,
        now_raw_secs,
        player_head,
        player_body,
        audio_events,
        game_events,
    );
}

/// Turn each pigeon head toward the player eye at its bounded turn rate.
/// The per-spawn aim offset keeps a flock from staring in unison.
fn track_player(world: &mut World, dt: f32, player_head: Vec3) {
    for (_entity, (position, head, lifecycle)) in
        world.query_mut::<(&Position, &mut HeadTracking, &Lifecycle)>()
    {
        if lifecycle.state != LifeState::Live {
            continue;
        }
        let to_target = player_head - position.0;
        if to_target.length_squared() < f32::EPSILON {
            continue;
        }
        let dir = to_target.normalize();
        let desired_yaw = dir.x.atan2(dir.z) + head.aim_offset;
        let desired_pitch = dir.y.asin();
        let t = (head.turn_speed * dt).min(1.0);
        head.yaw += wrap_angle(desired_yaw - head.yaw) * t;
        head.pitch += (desired_pitch - head.pitch) * t;
    }
}

/// Wrap an angle delta into (-PI, PI] so heads turn the short way round.
fn wrap_angle(delta: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (delta + PI).rem_euclid(TAU) - PI
}

#[allow(clippy::too_many_arguments)]
fn launch_eggs(
    world: &mut World,
    registry: &mut ColliderRegistry,
    ledger: &mut SoundLedger,
    tasks: &mut DeferredTasks,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    dt: f32,
    now_raw_secs: f32,
    player_head: Vec3,
    player_body: Vec3,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    let mut launches: Vec<(Entity, Vec3, EggDelivery)> = Vec::new();
    for (entity, (position, info, armament, lifecycle)) in
        world.query_mut::<(&Position, &EnemyInfo, &mut Armament, &Lifecycle)>()
    {
        if lifecycle.state != LifeState::Live {
            continue;
        }
        let Some(delivery) = enemy_profile(info.kind).egg_delivery else {
            continue;
        };
        armament.since_last_shot += dt;
        if armament.since_last_shot < armament.cooldown_secs {
            continue;
        }
        armament.since_last_shot = 0.0;
        launches.push((entity, position.0, delivery));
    }

    for (shooter, position, delivery) in launches {
        let spawn_at = position - Vec3::new(0.0, EGG_SPAWN_DROP, 0.0);
        let velocity = match delivery {
            EggDelivery::Aimed => {
                // Half the launches aim for the head, half for the body.
                let target = if rng.gen::<f32>() > 0.5 {
                    player_head
                } else {
                    player_body
                };
                (target - spawn_at).normalize_or_zero() * EGG_LAUNCH_SPEED
            }
            EggDelivery::Dropped => Vec3::ZERO,
        };
        let egg = world_setup::spawn_projectile(
            world,
            registry,
            rng,
            next_actor_id,
            ProjectileKind::Egg,
            spawn_at,
            velocity,
            ProjectileOwner::Enemy(shooter),
            game_events,
        );
        if let Ok(mut armament) = world.get::<&mut Armament>(shooter) {
            armament.rounds.push(egg);
        }
        let cue = ledger.play(SoundCue::EggLaunch, false, Some(spawn_at), audio_events);
        tasks.schedule(now_raw_secs + CUE_LINGER_SECS, TaskAction::ReleaseSound(cue));
    }
}
