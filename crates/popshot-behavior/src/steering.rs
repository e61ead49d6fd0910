//! Pluggable steering behaviors.
//!
//! Each behavior computes a force vector from the actor's situation;
//! the steering system sums them in list order into the actor's
//! accumulated force, which the integrator consumes afterwards.
//!
//! Scaling conventions are part of the tuning and deliberately uneven:
//! `Gravity`, `MoveFreelyInCube` and `Rush` scale their output by dt,
//! the others feed the accumulator at full strength every tick.

use glam::{Quat, Vec3};
use rand::Rng;

use popshot_core::constants::*;
use popshot_core::level::BehaviourData;
use popshot_core::types::Aabb;

/// Situation of one actor for a single steering evaluation.
pub struct SteeringContext<'a> {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Player eye position (rush target).
    pub player_eye: Vec3,
    /// Positions of the other live enemies. The caller excludes the
    /// actor itself so attraction never locks onto its own position.
    pub enemies: &'a [Vec3],
    /// Static obstacle boxes (arena walls).
    pub obstacles: &'a [Aabb],
}

/// One steering behavior with its per-instance state.
#[derive(Debug, Clone)]
pub enum Steering {
    /// Constant downward pull.
    Gravity { force: f32 },
    /// Vertical bobbing on a sine wave. `phase` is randomized per
    /// instance so a wave of balloons never bobs in lockstep.
    Floating {
        force: f32,
        oscillation_freq: f32,
        phase: f32,
        elapsed: f32,
    },
    /// Pull toward the nearest other enemy within `radius`.
    AttractEnemy { force: f32, radius: f32 },
    /// Push away from any obstacle box closer than `radius`, deflected
    /// sideways so actors slide around corners instead of stalling.
    AvoidObstacles { force: f32, radius: f32 },
    /// Shuttle between two points, decelerating on approach.
    MoveAtoB {
        force: f32,
        switch_radius: f32,
        point_a: Vec3,
        point_b: Vec3,
        seeking_b: bool,
    },
    /// Wander inside a box, re-rolling the target on a fixed interval.
    MoveFreelyInCube {
        force: f32,
        min: Vec3,
        max: Vec3,
        target: Vec3,
        since_retarget: f32,
    },
    /// Alternate between a figure-eight loiter and a dash at the
    /// player, on a random timer.
    Rush {
        force: f32,
        loiter: bool,
        since_switch: f32,
        next_switch: f32,
    },
}

impl Steering {
    /// Build a behavior from its level-data descriptor, randomizing
    /// phases and timers from the engine RNG.
    pub fn from_data(data: &BehaviourData, rng: &mut impl Rng) -> Steering {
        match data {
            BehaviourData::AttractEnemy { force, radius } => Steering::AttractEnemy {
                force: *force,
                radius: *radius,
            },
            BehaviourData::AvoidMesh { force, radius } => Steering::AvoidObstacles {
                force: *force,
                radius: *radius,
            },
            BehaviourData::Floating { force, oscillation_freq } => Steering::floating(
                *force,
                *oscillation_freq,
                rng,
            ),
            BehaviourData::Gravity { force } => Steering::Gravity { force: *force },
            BehaviourData::MoveAtoB { force, radius, point_a, point_b } => Steering::MoveAtoB {
                force: *force,
                switch_radius: *radius,
                point_a: point_a.to_vec3(),
                point_b: point_b.to_vec3(),
                seeking_b: false,
            },
            BehaviourData::MoveFreelyInCube {
                force,
                min_position,
                max_position,
                ..
            } => {
                let min = min_position.to_vec3();
                let max = max_position.to_vec3();
                Steering::MoveFreelyInCube {
                    force: *force,
                    min,
                    max,
                    target: random_point_in(rng, min, max),
                    since_retarget: 0.0,
                }
            }
            BehaviourData::Rush { force } => Steering::Rush {
                force: *force,
                loiter: true,
                since_switch: 0.0,
                next_switch: roll_switch_time(rng),
            },
        }
    }

    /// A floating behavior with a random phase offset.
    pub fn floating(force: f32, oscillation_freq: f32, rng: &mut impl Rng) -> Steering {
        Steering::Floating {
            force,
            oscillation_freq,
            phase: rng.gen::<f32>() * std::f32::consts::TAU,
            elapsed: 0.0,
        }
    }

    /// Evaluate this behavior for one tick, advancing its state.
    pub fn force(&mut self, dt: f32, ctx: &SteeringContext, rng: &mut impl Rng) -> Vec3 {
        match self {
            Steering::Gravity { force } => Vec3::new(0.0, -*force * dt, 0.0),

            Steering::Floating { force, oscillation_freq, phase, elapsed } => {
                *elapsed += dt;
                let oscillation = (*elapsed / *oscillation_freq + *phase).sin() * *force;
                Vec3::new(0.0, oscillation, 0.0)
            }

            Steering::AttractEnemy { force, radius } => {
                let mut nearest = None;
                let mut min_distance = f32::INFINITY;
                for &enemy in ctx.enemies {
                    let distance = enemy.distance(ctx.position);
                    if distance < *radius && distance < min_distance {
                        min_distance = distance;
                        nearest = Some(enemy);
                    }
                }
                match nearest {
                    Some(target) => (target - ctx.position).normalize_or_zero() * *force,
                    None => Vec3::ZERO,
                }
            }

            Steering::AvoidObstacles { force, radius } => {
                let mut total = Vec3::ZERO;
                for obstacle in ctx.obstacles {
                    let closest = obstacle.closest_point(ctx.position);
                    let distance = ctx.position.distance(closest);
                    if distance < *radius {
                        let mut direction = (ctx.position - closest).normalize_or_zero();
                        direction = Quat::from_rotation_y(AVOID_DEFLECT_YAW) * direction;
                        direction.x *= AVOID_LATERAL_FACTOR;
                        direction.z *= AVOID_LATERAL_FACTOR;
                        let magnitude = (*radius - distance) / *radius;
                        total += direction * (*force * magnitude);
                    }
                }
                total
            }

            Steering::MoveAtoB { force, switch_radius, point_a, point_b, seeking_b } => {
                let target = if *seeking_b { *point_b } else { *point_a };
                if ctx.position.distance(target) < *switch_radius {
                    *seeking_b = !*seeking_b;
                }
                let target = if *seeking_b { *point_b } else { *point_a };
                let distance = ctx.position.distance(target);
                let direction = (target - ctx.position).normalize_or_zero();
                // Close = slow, far = fast.
                direction * (*force * (distance / PATROL_ARRIVAL_DIVISOR))
            }

            Steering::MoveFreelyInCube { force, min, max, target, since_retarget } => {
                *since_retarget += dt;
                if *since_retarget >= WANDER_RETARGET_SECS {
                    *target = random_point_in(rng, *min, *max);
                    *since_retarget = 0.0;
                }
                let direction = (*target - ctx.position).normalize_or_zero();
                direction * (*force * dt)
            }

            Steering::Rush { force, loiter, since_switch, next_switch } => {
                *since_switch += dt;
                let result = if *loiter {
                    let t = *since_switch * std::f32::consts::PI;
                    let offset = Vec3::new(
                        RUSH_ORBIT_RADIUS * t.sin(),
                        0.0,
                        RUSH_ORBIT_RADIUS * (2.0 * t).sin() / 2.0,
                    );
                    offset.normalize_or_zero() * (*force * dt)
                } else {
                    let direction = (ctx.player_eye - ctx.position).normalize_or_zero();
                    direction * (*force * RUSH_FORCE_FACTOR * dt)
                };
                if *since_switch >= *next_switch {
                    *loiter = !*loiter;
                    *since_switch = 0.0;
                    *next_switch = roll_switch_time(rng);
                }
                result
            }
        }
    }
}

/// Ordered behavior list attached to one actor.
#[derive(Debug, Clone, Default)]
pub struct SteeringSet {
    pub behaviors: Vec<Steering>,
}

impl SteeringSet {
    pub fn new(behaviors: Vec<Steering>) -> Self {
        Self { behaviors }
    }
}

fn random_point_in(rng: &mut impl Rng, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::new(
        min.x + rng.gen::<f32>() * (max.x - min.x),
        min.y + rng.gen::<f32>() * (max.y - min.y),
        min.z + rng.gen::<f32>() * (max.z - min.z),
    )
}

fn roll_switch_time(rng: &mut impl Rng) -> f32 {
    RUSH_SWITCH_MIN_SECS + rng.gen::<f32>() * RUSH_SWITCH_SPAN_SECS
}
