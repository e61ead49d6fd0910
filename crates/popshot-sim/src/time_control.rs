//! Simulation time scaling.
//!
//! Pause and the Time bonus each hold their own flag; pause wins while
//! both are set, so unpausing mid-bonus drops back to the bonus ratio,
//! not to full speed. The effective scale eases toward the winning
//! target a fixed fraction per tick, so slow motion ramps in and out
//! instead of stepping. Systems that must ignore slow motion (weapon
//! cooldowns, hand sampling, deferred tasks) consume the raw clock and
//! never see this multiplier.

use log::warn;
use popshot_core::constants::TIME_SCALE_LERP;

/// Gap below which the eased scale snaps to its target, so pause reaches
/// an exact zero and resume an exact one.
const SNAP_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy)]
pub struct TimeControl {
    scale: f32,
    paused: bool,
    slow_ratio: Option<f32>,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self {
            scale: 1.0,
            paused: false,
            slow_ratio: None,
        }
    }
}

impl TimeControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn target(&self) -> f32 {
        if self.paused {
            0.0
        } else {
            self.slow_ratio.unwrap_or(1.0)
        }
    }

    /// Eases the scale one step toward the target. Called once per tick
    /// before the scaled delta is computed.
    pub fn advance(&mut self) {
        let target = self.target();
        self.scale += (target - self.scale) * TIME_SCALE_LERP;
        if (target - self.scale).abs() < SNAP_EPSILON {
            self.scale = target;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Starts a Time bonus. The restore back to full speed is scheduled
    /// by the caller as a deferred task. A ratio at or above 1 would be a
    /// speed-up, not slow motion, and is refused.
    pub fn begin_slow_motion(&mut self, ratio: f32) {
        if !(0.0..1.0).contains(&ratio) {
            warn!("slow motion ratio {} out of range, ignored", ratio);
            return;
        }
        self.slow_ratio = Some(ratio);
    }

    pub fn end_slow_motion(&mut self) {
        self.slow_ratio = None;
    }

    pub fn scaled(&self, raw_dt: f32) -> f32 {
        raw_dt * self.scale
    }
}
