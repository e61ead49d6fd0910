//! Scripted demo input: a synthetic player for driving the engine
//! without a headset.
//!
//! The script is a pure function of the tick index, so a demo run under
//! a fixed seed replays exactly.

use glam::{Vec2, Vec3};

use popshot_core::commands::{HandState, InputFrame};
use popshot_core::constants::DT;

/// Eye height of the synthetic player (meters).
const EYE_HEIGHT: f32 = 1.7;

/// Vertical bob amplitude of the lead hand (meters). Gives hand
/// loadouts a real sampled swing to throw with.
const HAND_BOB_AMPLITUDE: f32 = 0.2;

/// Bob frequency (Hz).
const HAND_BOB_FREQ: f32 = 0.5;

pub struct AutoplayScript {
    /// Half-angle of the horizontal aim sweep (radians).
    pub sweep_half_angle: f32,
    /// Ticks for one full left-right-left sweep.
    pub sweep_period_ticks: u64,
    /// Upward aim bias (radians), so the sweep crosses balloon height.
    pub aim_pitch: f32,
    /// One trigger burst per this many ticks.
    pub burst_period_ticks: u64,
    /// Ticks the trigger stays held within each burst.
    pub burst_hold_ticks: u64,
    /// One grip close-and-release cycle per this many ticks.
    pub grip_period_ticks: u64,
    /// Ticks the grip stays closed within each cycle.
    pub grip_hold_ticks: u64,
}

impl Default for AutoplayScript {
    fn default() -> Self {
        Self {
            sweep_half_angle: std::f32::consts::FRAC_PI_3,
            sweep_period_ticks: 360,
            aim_pitch: 0.12,
            burst_period_ticks: 60,
            burst_hold_ticks: 15,
            grip_period_ticks: 120,
            grip_hold_ticks: 90,
        }
    }
}

impl AutoplayScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// The input frame for one tick.
    pub fn frame(&self, tick: u64) -> InputFrame {
        let yaw = self.sweep_yaw(tick);
        let (pitch_sin, pitch_cos) = self.aim_pitch.sin_cos();
        let forward = Vec3::new(
            yaw.sin() * pitch_cos,
            pitch_sin,
            yaw.cos() * pitch_cos,
        );

        let elapsed = tick as f32 * DT;
        let bob = (elapsed * std::f32::consts::TAU * HAND_BOB_FREQ).sin() * HAND_BOB_AMPLITUDE;

        let right = HandState {
            position: Vec3::new(0.25, 1.45 + bob, 0.1),
            forward,
            trigger: if self.burst_active(tick) { 1.0 } else { 0.0 },
            grip: if self.grip_held(tick) { 1.0 } else { 0.0 },
            thumbstick: Vec2::ZERO,
        };
        let left = HandState {
            position: Vec3::new(-0.25, 1.4 - bob, 0.1),
            forward,
            trigger: right.trigger,
            grip: right.grip,
            thumbstick: Vec2::ZERO,
        };

        InputFrame {
            head_position: Vec3::new(0.0, EYE_HEIGHT, 0.0),
            head_forward: forward,
            left,
            right,
        }
    }

    /// Triangle wave across [-half, +half].
    fn sweep_yaw(&self, tick: u64) -> f32 {
        let phase = (tick % self.sweep_period_ticks) as f32 / self.sweep_period_ticks as f32;
        let tri = if phase < 0.5 {
            phase * 4.0 - 1.0
        } else {
            3.0 - phase * 4.0
        };
        tri * self.sweep_half_angle
    }

    fn burst_active(&self, tick: u64) -> bool {
        tick % self.burst_period_ticks < self.burst_hold_ticks
    }

    fn grip_held(&self, tick: u64) -> bool {
        tick % self.grip_period_ticks < self.grip_hold_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_is_deterministic() {
        let a = AutoplayScript::new();
        let b = AutoplayScript::new();
        for tick in [0u64, 1, 59, 60, 179, 180, 359, 360, 7200] {
            let frame_a = serde_json::to_string(&a.frame(tick)).unwrap();
            let frame_b = serde_json::to_string(&b.frame(tick)).unwrap();
            assert_eq!(frame_a, frame_b, "Script diverged at tick {}", tick);
        }
    }

    #[test]
    fn test_trigger_fires_in_bursts() {
        let script = AutoplayScript::new();
        assert_eq!(script.frame(0).right.trigger, 1.0);
        assert_eq!(script.frame(14).right.trigger, 1.0);
        assert_eq!(script.frame(15).right.trigger, 0.0);
        assert_eq!(script.frame(59).right.trigger, 0.0);
        assert_eq!(script.frame(60).right.trigger, 1.0);
    }

    #[test]
    fn test_aim_stays_normalized_across_sweep() {
        let script = AutoplayScript::new();
        for tick in 0..script.sweep_period_ticks {
            let forward = script.frame(tick).right.forward;
            assert!(
                (forward.length() - 1.0).abs() < 1e-5,
                "Aim vector drifted off unit length at tick {}",
                tick
            );
            assert!(
                forward.x.abs() <= script.sweep_half_angle.sin() + 1e-5,
                "Sweep overshot its half-angle at tick {}",
                tick
            );
        }
    }

    #[test]
    fn test_grip_cycles_open_and_closed() {
        let script = AutoplayScript::new();
        let held = (0..script.grip_period_ticks)
            .filter(|tick| script.frame(*tick).right.grip > 0.5)
            .count() as u64;
        assert_eq!(held, script.grip_hold_ticks);
        assert_eq!(script.frame(script.grip_hold_ticks).right.grip, 0.0);
    }
}
