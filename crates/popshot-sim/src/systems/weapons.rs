//! Player weapon handling: collider proxy pinning, trigger fire, hand
//! throws, durability retirement and deferred slot disposal.
//!
//! Everything here runs on the raw clock. Cooldowns and the throw
//! sampler keep ticking through slow motion and pause; pause only stops
//! trigger and grip edges being consumed.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use popshot_core::commands::InputFrame;
use popshot_core::constants::{
    FIRE_HAPTIC_AMPLITUDE, FIRE_HAPTIC_MILLIS, GRIP_THRESHOLD, MUZZLE_OFFSET, PLAYER_BODY_DROP,
    TRIGGER_THRESHOLD,
};
use popshot_core::enums::{HandSide, SoundCue, WeaponKind};
use popshot_core::events::{AudioEvent, GameEvent};
use popshot_core::state::ScoreBoard;
use popshot_core::types::Position;

use crate::player::PlayerRig;
use crate::registry::ColliderRegistry;
use crate::relations::ProjectileOwner;
use crate::sound::SoundLedger;
use crate::world_setup;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    registry: &mut ColliderRegistry,
    ledger: &mut SoundLedger,
    rig: &mut PlayerRig,
    input: &InputFrame,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    raw_dt: f32,
    paused: bool,
    score: &mut ScoreBoard,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    pin_player_colliders(world, rig);

    for side in [HandSide::Left, HandSide::Right] {
        update_hand(
            world,
            registry,
            ledger,
            rig,
            input,
            rng,
            next_actor_id,
            raw_dt,
            paused,
            side,
            score,
            audio_events,
            game_events,
        );
    }

    // Show the motion controllers again once the last weapon is gone.
    if rig.both_hands_empty() && !rig.controllers_visible {
        rig.controllers_visible = true;
        game_events.push(GameEvent::ControllersVisible { visible: true });
    }
}

/// Re-pin the head and body proxy entities to the tracked head pose so
/// the collision pass sees the player where the headset actually is.
fn pin_player_colliders(world: &mut World, rig: &PlayerRig) {
    if let Some(head) = rig.head_entity {
        if let Ok(mut position) = world.get::<&mut Position>(head) {
            position.0 = rig.head_position;
        }
    }
    if let Some(body) = rig.body_entity {
        if let Ok(mut position) = world.get::<&mut Position>(body) {
            position.0 = rig.head_position - Vec3::new(0.0, PLAYER_BODY_DROP, 0.0);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn update_hand(
    world: &mut World,
    registry: &mut ColliderRegistry,
    ledger: &mut SoundLedger,
    rig: &mut PlayerRig,
    input: &InputFrame,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    raw_dt: f32,
    paused: bool,
    side: HandSide,
    score: &mut ScoreBoard,
    audio_events: &mut Vec<AudioEvent>,
    game_events: &mut Vec<GameEvent>,
) {
    let grip_now = input.hand(side).grip >= GRIP_THRESHOLD;
    let slot = rig.hand_mut(side);
    // The edge is computed before the held state updates, and the held
    // state updates even while paused so unpausing cannot see a stale edge.
    let grip_released = slot.grip_held && !grip_now;
    slot.grip_held = grip_now;

    let muzzle = slot.muzzle(MUZZLE_OFFSET);
    let Some(weapon) = slot.weapon.as_mut() else {
        return;
    };
    weapon.advance(raw_dt);
    weapon.rounds.retain(|round| world.contains(*round));

    if !paused {
        let wants_fire = if weapon.kind == WeaponKind::Hand {
            grip_released
        } else {
            weapon.kind.is_trigger_weapon() && slot.trigger > TRIGGER_THRESHOLD
        };

        if wants_fire && weapon.can_fire() {
            let (spawn_at, velocity) = if weapon.kind == WeaponKind::Hand {
                (slot.position, slot.sampler.throw_velocity())
            } else {
                (muzzle, slot.forward.normalize_or_zero() * weapon.force)
            };

            // A throw with no measured swing releases nothing and costs
            // nothing.
            if velocity.length_squared() > 0.0 {
                let round = world_setup::spawn_projectile(
                    world,
                    registry,
                    rng,
                    next_actor_id,
                    weapon.projectile,
                    spawn_at,
                    velocity,
                    ProjectileOwner::PlayerHand(side),
                    game_events,
                );
                weapon.rounds.push(round);
                weapon.note_shot();
                score.shots_fired += 1;

                game_events.push(GameEvent::WeaponFired {
                    hand: side,
                    projectile: weapon.projectile,
                });
                game_events.push(GameEvent::HapticPulse {
                    hand: side,
                    amplitude: FIRE_HAPTIC_AMPLITUDE,
                    millis: FIRE_HAPTIC_MILLIS,
                });
                if let Some(cue) = weapon.fire_cue {
                    ledger.replay(cue, SoundCue::GunShot, Some(spawn_at), audio_events);
                }
            }
        }
    }

    if weapon.out_of_durability() && !weapon.retired {
        weapon.retire();
    }

    // A retired weapon holds its slot until its last round lands, then
    // the slot frees along with its fire cue.
    if slot.weapon.as_ref().is_some_and(|weapon| weapon.disposable()) {
        if let Some(weapon) = slot.weapon.take() {
            if let Some(cue) = weapon.fire_cue {
                ledger.release(cue, audio_events);
            }
        }
    }
}
