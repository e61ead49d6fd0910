//! Actor spawn factories driven by level documents.
//!
//! Every spawn allocates an `ActorId`, assembles the component bundle
//! for the archetype, and registers the collider in the same call, so
//! an actor is never half-born. Validation happens before any world
//! mutation: `validate_level` vets a whole document up front, and the
//! wave scheduler re-vets a wave before spawning any of it.

use std::fmt;

use glam::Vec3;
use hecs::{Entity, EntityBuilder, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use popshot_behavior::profiles::{enemy_profile, projectile_profile, weapon_accepts, FlightStyle};
use popshot_behavior::steering::{Steering, SteeringSet};
use popshot_core::components::*;
use popshot_core::constants::*;
use popshot_core::enums::*;
use popshot_core::events::GameEvent;
use popshot_core::level::{BonusData, EnemyData, LevelData, WeaponData};
use popshot_core::types::{Position, Velocity};

use crate::registry::ColliderRegistry;
use crate::relations::{Armament, AttachedTo, BonusLink, LaunchedBy, ProjectileOwner};
use crate::weapon::Weapon;

/// Why a level document (or one entry in it) cannot be realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Bonuses hang under balloons; pigeons have nothing to hang one from.
    BonusOnPigeon { kind: EnemyKind },
    /// The weapon cannot chamber the round the document pairs it with.
    IncompatibleLoadout {
        weapon: WeaponKind,
        round: ProjectileKind,
    },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::BonusOnPigeon { kind } => {
                write!(f, "bonus attached to non-balloon enemy {:?}", kind)
            }
            SpawnError::IncompatibleLoadout { weapon, round } => {
                write!(f, "weapon {:?} cannot fire {:?}", weapon, round)
            }
        }
    }
}

/// Vet a whole level document before anything spawns. A document that
/// fails here is rejected wholesale; the world stays untouched.
pub fn validate_level(data: &LevelData) -> Result<(), SpawnError> {
    for weapon_data in [&data.player.left_hand, &data.player.right_hand]
        .into_iter()
        .flatten()
    {
        validate_weapon(weapon_data)?;
    }
    for wave in &data.waves {
        for enemy in &wave.enemies {
            validate_enemy(enemy)?;
        }
    }
    Ok(())
}

pub fn validate_enemy(data: &EnemyData) -> Result<(), SpawnError> {
    if data.bonus.is_some() && !data.kind.is_balloon() {
        return Err(SpawnError::BonusOnPigeon { kind: data.kind });
    }
    Ok(())
}

pub fn validate_weapon(data: &WeaponData) -> Result<(), SpawnError> {
    if !weapon_accepts(data.kind, data.projectile) {
        return Err(SpawnError::IncompatibleLoadout {
            weapon: data.kind,
            round: data.projectile.unwrap_or(ProjectileKind::None),
        });
    }
    Ok(())
}

/// Build a weapon from its descriptor. `Ok(None)` means the slot stays
/// empty (kind `none`). The fire cue is wired up by the caller, which
/// owns the sound ledger.
pub fn create_weapon(data: &WeaponData) -> Result<Option<Weapon>, SpawnError> {
    validate_weapon(data)?;
    if data.kind == WeaponKind::None {
        return Ok(None);
    }
    let durability = if data.durability < 0 {
        None
    } else {
        Some(data.durability as u32)
    };
    Ok(Some(Weapon::new(
        data.kind,
        data.projectile.unwrap_or(ProjectileKind::None),
        data.force,
        durability,
        data.cooldown,
    )))
}

/// Spawn one enemy from its wave entry, along with its bonus if it
/// carries one. The enemy's implicit idle bob is appended after the
/// document behaviors so document order still decides force order.
pub fn spawn_enemy(
    world: &mut World,
    registry: &mut ColliderRegistry,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    data: &EnemyData,
    events: &mut Vec<GameEvent>,
) -> Result<Entity, SpawnError> {
    validate_enemy(data)?;

    let profile = enemy_profile(data.kind);
    let position = data.position.to_vec3();

    let mut behaviors = Vec::with_capacity(data.behaviours.len() + 1);
    for behaviour_data in &data.behaviours {
        behaviors.push(Steering::from_data(behaviour_data, rng));
    }
    behaviors.push(Steering::floating(
        profile.float_force,
        profile.float_freq,
        rng,
    ));

    let actor_id = alloc_actor_id(next_actor_id);
    let mut builder = EntityBuilder::new();
    builder
        .add(actor_id)
        .add(Enemy)
        .add(EnemyInfo {
            kind: data.kind,
            score: data.score,
        })
        .add(Health {
            current: data.health,
        })
        .add(Position(position))
        .add(Velocity(Vec3::ZERO))
        .add(Kinematics {
            max_speed: ENEMY_MAX_SPEED,
            damping: ENEMY_DAMPING,
            accumulated_force: Vec3::ZERO,
        })
        .add(Hitbox {
            half_extents: profile.half_extents + Vec3::splat(ENEMY_HITBOX_PADDING),
        })
        .add(Lifecycle::default())
        .add(SteeringSet::new(behaviors));

    if profile.tracks_player {
        builder.add(HeadTracking {
            yaw: 0.0,
            pitch: 0.0,
            aim_offset: rng.gen_range(-PIGEON_AIM_OFFSET_MAX..PIGEON_AIM_OFFSET_MAX),
            turn_speed: PIGEON_HEAD_TURN_SPEED,
        });
    }
    if profile.egg_delivery.is_some() {
        builder.add(Armament::new(SHOOTER_COOLDOWN_SECS));
    }

    let enemy = world.spawn(builder.build());
    registry.add(enemy, ColliderClass::Enemy);
    events.push(GameEvent::EnemySpawned {
        id: actor_id,
        kind: data.kind,
    });

    if let Some(bonus_data) = &data.bonus {
        let bonus = spawn_bonus(world, registry, next_actor_id, enemy, position, bonus_data);
        // hecs cannot fail here: the entity was spawned above.
        let _ = world.insert_one(enemy, BonusLink { bonus: Some(bonus) });
    }

    Ok(enemy)
}

fn spawn_bonus(
    world: &mut World,
    registry: &mut ColliderRegistry,
    next_actor_id: &mut u32,
    parent: Entity,
    parent_position: Vec3,
    data: &BonusData,
) -> Entity {
    let payload = match *data {
        BonusData::Score { score } => BonusPayload::Score { points: score },
        BonusData::Time {
            duration,
            speed_ratio,
        } => BonusPayload::Time {
            duration_secs: duration,
            speed_ratio,
        },
    };
    let offset = Vec3::new(0.0, BONUS_ATTACH_OFFSET_Y, 0.0);

    let actor_id = alloc_actor_id(next_actor_id);
    let bonus = world.spawn((
        actor_id,
        Bonus,
        BonusState {
            payload,
            activated: false,
            spin: 0.0,
        },
        Position(parent_position + offset),
        Hitbox {
            half_extents: Vec3::splat(BONUS_HALF_EXTENT),
        },
        Lifecycle::default(),
        AttachedTo { parent, offset },
    ));
    registry.add(bonus, ColliderClass::Bonus);
    bonus
}

/// Spawn a projectile already in flight. The velocity decides the
/// heading that curve and weave paths unfold from.
pub fn spawn_projectile(
    world: &mut World,
    registry: &mut ColliderRegistry,
    rng: &mut ChaCha8Rng,
    next_actor_id: &mut u32,
    kind: ProjectileKind,
    position: Vec3,
    velocity: Vec3,
    owner: ProjectileOwner,
    events: &mut Vec<GameEvent>,
) -> Entity {
    let profile = projectile_profile(kind);
    let heading = velocity.normalize_or_zero();

    let path = match profile.style {
        FlightStyle::Straight => FlightPath::Straight,
        FlightStyle::Curve => FlightPath::Curve {
            drift: heading * CURVE_DRIFT_SPEED,
            curve_angle: CURVE_ANGLE_MIN + rng.gen::<f32>() * CURVE_ANGLE_SPAN,
            turn_dir: if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 },
        },
        FlightStyle::Weave | FlightStyle::ChaosWeave => FlightPath::Weave {
            forward: heading,
            vertical: profile.style == FlightStyle::ChaosWeave,
            turn_dir: 1.0,
            vertical_dir: 1.0,
            since_turn_secs: WEAVE_DELAY_SECS,
        },
    };

    let actor_id = alloc_actor_id(next_actor_id);
    let mut builder = EntityBuilder::new();
    builder
        .add(actor_id)
        .add(Projectile)
        .add(ProjectileInfo {
            kind,
            age_secs: 0.0,
            max_lifetime_secs: profile.lifetime_secs,
        })
        .add(Position(position))
        .add(Velocity(velocity))
        .add(Kinematics {
            max_speed: profile.max_speed,
            damping: profile.damping,
            accumulated_force: Vec3::ZERO,
        })
        .add(Hitbox {
            half_extents: profile.half_extents + Vec3::splat(profile.hitbox_padding),
        })
        .add(Lifecycle::default())
        .add(LaunchedBy { owner })
        .add(path);

    if profile.gravity_force > 0.0 {
        builder.add(SteeringSet::new(vec![Steering::Gravity {
            force: profile.gravity_force,
        }]));
    }

    let projectile = world.spawn(builder.build());
    registry.add(projectile, ColliderClass::Projectile);
    events.push(GameEvent::ProjectileSpawned {
        id: actor_id,
        kind,
    });
    projectile
}

/// Spawn the head and body collider proxies for the player rig.
pub fn spawn_player_colliders(
    world: &mut World,
    registry: &mut ColliderRegistry,
    next_actor_id: &mut u32,
    head_position: Vec3,
) -> (Entity, Entity) {
    let head = world.spawn((
        alloc_actor_id(next_actor_id),
        Position(head_position),
        Hitbox {
            half_extents: Vec3::splat(PLAYER_HEAD_HALF_EXTENT),
        },
        Lifecycle::default(),
    ));
    registry.add(head, ColliderClass::PlayerHead);

    let body = world.spawn((
        alloc_actor_id(next_actor_id),
        Position(head_position - Vec3::new(0.0, PLAYER_BODY_DROP, 0.0)),
        Hitbox {
            half_extents: Vec3::from_array(PLAYER_BODY_HALF_EXTENTS),
        },
        Lifecycle::default(),
    ));
    registry.add(body, ColliderClass::PlayerBody);

    (head, body)
}

/// Spawn the return-to-menu button, hittable by any player projectile.
pub fn spawn_return_button(
    world: &mut World,
    registry: &mut ColliderRegistry,
    next_actor_id: &mut u32,
    position: Vec3,
) -> Entity {
    let button = world.spawn((
        alloc_actor_id(next_actor_id),
        ReturnButton,
        Position(position),
        Hitbox {
            half_extents: Vec3::from_array(RETURN_BUTTON_HALF_EXTENTS),
        },
        Lifecycle::default(),
    ));
    registry.add(button, ColliderClass::ReturnButton);
    button
}

/// Fixed arena furniture: a central tower flanked by two stands. These
/// are the obstacle set the avoidance behavior steers around, and they
/// stop projectiles.
const ARENA_WALLS: [([f32; 3], [f32; 3]); 3] = [
    ([0.0, 2.5, 10.0], [1.5, 2.5, 1.5]),
    ([-8.0, 1.5, 6.0], [1.0, 1.5, 1.0]),
    ([8.0, 1.5, 6.0], [1.0, 1.5, 1.0]),
];

pub fn spawn_walls(
    world: &mut World,
    registry: &mut ColliderRegistry,
    next_actor_id: &mut u32,
) {
    for (center, half_extents) in ARENA_WALLS {
        let wall = world.spawn((
            alloc_actor_id(next_actor_id),
            Wall,
            Position(Vec3::from_array(center)),
            Hitbox {
                half_extents: Vec3::from_array(half_extents),
            },
            Lifecycle::default(),
        ));
        registry.add(wall, ColliderClass::Wall);
    }
}

fn alloc_actor_id(next_actor_id: &mut u32) -> ActorId {
    let id = ActorId(*next_actor_id);
    *next_actor_id += 1;
    id
}
