//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D position in play-space (meters, Cartesian).
/// x = right, y = up, z = forward from the player's spawn orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// 3D velocity in play-space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Distance to another position in meters.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

/// Simulation time tracking.
///
/// Two clocks advance together every tick: `elapsed_secs` is scaled by
/// the current time factor (slow motion, pause), `raw_secs` is not.
/// Weapon cooldowns and deferred engine work run on the raw clock so a
/// time bonus never stretches them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed scaled simulation time in seconds.
    pub elapsed_secs: f32,
    /// Elapsed wall-clock time in seconds, immune to the time factor.
    pub raw_secs: f32,
}

impl SimTime {
    /// Advance by one tick given the scaled and raw frame deltas.
    pub fn advance(&mut self, scaled_dt: f32, raw_dt: f32) {
        self.tick += 1;
        self.elapsed_secs += scaled_dt;
        self.raw_secs += raw_dt;
    }
}

/// Axis-aligned bounding box, the collision footprint of every actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self { center, half_extents }
    }

    /// Same box grown by `padding` meters on every side.
    pub fn padded(&self, padding: f32) -> Self {
        Self {
            center: self.center,
            half_extents: self.half_extents + Vec3::splat(padding),
        }
    }

    /// Same box moved so its center sits at `center`.
    pub fn at(&self, center: Vec3) -> Self {
        Self { center, half_extents: self.half_extents }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Overlap test on all three axes. Touching faces count as overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        (self.min().cmple(other.max()) & other.min().cmple(self.max())).all()
    }

    pub fn contains(&self, point: Vec3) -> bool {
        (self.min().cmple(point) & point.cmple(self.max())).all()
    }

    /// Closest point on or inside this box to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min(), self.max())
    }
}
