//! Trajectory shaping for curved and weaving projectiles, applied on
//! top of the base integration. Also the single place projectile age
//! advances.
//!
//! Curves fly straight for an opening stretch, then bend their drift
//! around +Y by an angle that keeps growing, so the path tightens into
//! a hook until the round expires. Weaves displace sideways on a sine
//! over a fixed period, flip direction at each period boundary, and
//! hold course for a beat after every flip.

use glam::{EulerRot, Quat, Vec3};
use hecs::World;

use popshot_core::components::{FlightPath, Lifecycle, ProjectileInfo};
use popshot_core::constants::{
    CURVE_DELAY_SECS, CURVE_RAMP_SECS, WEAVE_ANGLE, WEAVE_DELAY_SECS, WEAVE_DISTANCE_FACTOR,
    WEAVE_PERIOD_SECS,
};
use popshot_core::enums::LifeState;
use popshot_core::types::Position;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (position, info, path, lifecycle)) in world.query_mut::<(
        &mut Position,
        &mut ProjectileInfo,
        &mut FlightPath,
        &Lifecycle,
    )>() {
        if lifecycle.state != LifeState::Live {
            continue;
        }

        info.age_secs += dt;
        let age = info.age_secs;

        match path {
            FlightPath::Straight => {}
            FlightPath::Curve {
                drift,
                curve_angle,
                turn_dir,
            } => {
                if age <= CURVE_DELAY_SECS {
                    position.0 += *drift * dt;
                } else {
                    let curve_factor = (age - CURVE_DELAY_SECS) / CURVE_RAMP_SECS;
                    let angle = *curve_angle * curve_factor * *turn_dir;
                    position.0 += Quat::from_rotation_y(angle) * *drift * dt;
                }
            }
            FlightPath::Weave {
                forward,
                vertical,
                turn_dir,
                vertical_dir,
                since_turn_secs,
            } => {
                *since_turn_secs += dt;
                position.0 += *forward * dt;

                if *since_turn_secs >= WEAVE_DELAY_SECS {
                    let factor = (age % WEAVE_PERIOD_SECS) / WEAVE_PERIOD_SECS;
                    let lateral_angle =
                        WEAVE_ANGLE * (factor * std::f32::consts::TAU).sin() * *turn_dir;

                    if *vertical {
                        let vertical_angle =
                            WEAVE_ANGLE * (factor * std::f32::consts::TAU).cos() * *vertical_dir;
                        let rotation =
                            Quat::from_euler(EulerRot::YXZ, lateral_angle, vertical_angle, 0.0);
                        position.0 += rotation * Vec3::X * dt * WEAVE_DISTANCE_FACTOR;
                        position.0 += rotation * Vec3::Y * dt * WEAVE_DISTANCE_FACTOR;
                    } else {
                        let rotation = Quat::from_rotation_y(lateral_angle);
                        position.0 += rotation * Vec3::X * dt * WEAVE_DISTANCE_FACTOR;
                    }

                    // Period boundary: flip and hold course for a beat.
                    if age % WEAVE_PERIOD_SECS < dt {
                        *since_turn_secs = 0.0;
                        *turn_dir = -*turn_dir;
                        if *vertical {
                            *vertical_dir = -*vertical_dir;
                        }
                    }
                }
            }
        }
    }
}
