//! Player commands and per-tick input sent from the frontend.
//!
//! Commands are queued and processed at the next tick boundary. Input
//! frames are continuous state sampled once per tick, not queued.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::HandSide;
use crate::level::LevelData;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Load a level document and start playing it.
    LoadLevel { level: LevelData },
    /// Abandon the current level (or result screen) for the menu.
    ReturnToMenu,
    /// Pause the simulation (time factor target 0).
    Pause,
    /// Resume at normal speed.
    Resume,
}

/// Tracked pose and controls of one hand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandState {
    pub position: Vec3,
    /// Unit vector the hand is pointing along.
    pub forward: Vec3,
    /// Trigger axis in [0, 1].
    pub trigger: f32,
    /// Grip axis in [0, 1].
    pub grip: f32,
    pub thumbstick: Vec2,
}

impl Default for HandState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            trigger: 0.0,
            grip: 0.0,
            thumbstick: Vec2::ZERO,
        }
    }
}

/// One tick's worth of tracked input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InputFrame {
    /// Player eye position.
    pub head_position: Vec3,
    /// Unit vector the head is facing along.
    pub head_forward: Vec3,
    pub left: HandState,
    pub right: HandState,
}

impl Default for InputFrame {
    fn default() -> Self {
        Self {
            head_position: Vec3::new(0.0, 1.7, 0.0),
            head_forward: Vec3::Z,
            left: HandState::default(),
            right: HandState::default(),
        }
    }
}

impl InputFrame {
    pub fn hand(&self, side: HandSide) -> &HandState {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }
}
