//! Level document data model and loader.
//!
//! Levels are declarative JSON consumed at load time: player loadout,
//! day-cycle descriptor, UI layout, and an ordered list of waves. Field
//! spellings follow the established level format: camelCase everywhere
//! except the snake_case player hand keys, and the capitalized `Egg`
//! projectile tag.

use std::io;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BONUS_SCORE, DEFAULT_TIME_BONUS_RATIO, DEFAULT_TIME_BONUS_SECS};
use crate::enums::{EnemyKind, ProjectileKind, WeaponKind};

/// Complete level document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelData {
    pub player: PlayerData,
    #[serde(default)]
    pub environment: EnvironmentData,
    #[serde(default)]
    pub ui: UiData,
    pub waves: Vec<WaveData>,
}

/// Player loadout and spawn state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerData {
    /// Weapon for the left hand slot; absent means empty.
    #[serde(default)]
    pub left_hand: Option<WeaponData>,
    #[serde(default)]
    pub right_hand: Option<WeaponData>,
    pub health: i32,
    #[serde(default)]
    pub position: Vec3Data,
}

/// One weapon descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponData {
    #[serde(rename = "type")]
    pub kind: WeaponKind,
    /// Round fired by this weapon. Absent or `none` leaves it unarmed,
    /// which only the hand and empty slots accept.
    #[serde(default)]
    pub projectile: Option<ProjectileKind>,
    /// Muzzle speed for trigger weapons (m/s).
    #[serde(default)]
    pub force: f32,
    /// Shots before the weapon breaks; negative means unlimited.
    #[serde(default = "default_durability")]
    pub durability: i32,
    /// Seconds between shots.
    #[serde(default)]
    pub cooldown: f32,
}

/// One enemy descriptor inside a wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyData {
    #[serde(rename = "type")]
    pub kind: EnemyKind,
    pub health: i32,
    pub position: Vec3Data,
    /// Balloon-only perk; factories reject it on pigeon kinds.
    #[serde(default)]
    pub bonus: Option<BonusData>,
    #[serde(default)]
    pub behaviours: Vec<BehaviourData>,
    pub score: u32,
}

/// Perk hanging under a balloon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BonusData {
    Score {
        #[serde(default = "default_bonus_score")]
        score: u32,
    },
    #[serde(rename_all = "camelCase")]
    Time {
        /// Wall-clock seconds the slow motion lasts.
        #[serde(default = "default_time_bonus_secs")]
        duration: f32,
        /// Time factor while active. 1 is normal speed, 0.5 half speed.
        #[serde(default = "default_time_bonus_ratio")]
        speed_ratio: f32,
    },
}

/// Steering behavior descriptor attached to an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BehaviourData {
    AttractEnemy {
        force: f32,
        radius: f32,
    },
    AvoidMesh {
        force: f32,
        radius: f32,
    },
    #[serde(rename_all = "camelCase")]
    Floating {
        force: f32,
        oscillation_freq: f32,
    },
    Gravity {
        force: f32,
    },
    #[serde(rename_all = "camelCase")]
    MoveAtoB {
        force: f32,
        radius: f32,
        point_a: Vec3Data,
        point_b: Vec3Data,
    },
    #[serde(rename_all = "camelCase")]
    MoveFreelyInCube {
        force: f32,
        radius: f32,
        min_position: Vec3Data,
        max_position: Vec3Data,
    },
    Rush {
        force: f32,
    },
}

/// One wave of enemies, spawned together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveData {
    /// Optional label for level authors; progression uses list order.
    #[serde(default)]
    pub wave_number: Option<u32>,
    pub enemies: Vec<EnemyData>,
}

/// Day-cycle descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentData {
    /// Starting phase in [0, 1): 0 is noon, 0.5 is midnight.
    pub time: f32,
    /// Seconds for one full cycle.
    pub duration: f32,
}

impl Default for EnvironmentData {
    fn default() -> Self {
        Self { time: 0.0, duration: 120.0 }
    }
}

/// UI layout hints consumed by the simulation (button placement).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiData {
    /// Return button position relative to the player spawn.
    #[serde(default)]
    pub return_button_offset: Vec3Data,
}

/// Plain {x, y, z} triple as the documents spell it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3Data {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

fn default_durability() -> i32 {
    -1
}

fn default_bonus_score() -> u32 {
    DEFAULT_BONUS_SCORE
}

fn default_time_bonus_secs() -> f32 {
    DEFAULT_TIME_BONUS_SECS
}

fn default_time_bonus_ratio() -> f32 {
    DEFAULT_TIME_BONUS_RATIO
}

/// Load a level document from a JSON file.
pub fn load_level(path: &Path) -> io::Result<LevelData> {
    let text = std::fs::read_to_string(path)?;
    parse_level(&text)
}

/// Parse a level document from a JSON string.
pub fn parse_level(text: &str) -> io::Result<LevelData> {
    serde_json::from_str(text).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid level document: {e}"),
        )
    })
}
