//! Events emitted by the simulation for audio, haptics and UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::ActorId;
use crate::enums::*;

/// Handle for one live sound-cue instance, allocated by the sound ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SoundId(pub u32);

/// Audio events for the frontend sound system.
///
/// `Play`/`Stop`/`Release` manage ledger-tracked cue instances; music
/// is fire-and-forget and carries no handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Start a cue instance, optionally positioned in play-space.
    Play {
        sound: SoundId,
        cue: SoundCue,
        looped: bool,
        position: Option<Vec3>,
    },
    /// Silence a cue instance without releasing its resources.
    Stop { sound: SoundId },
    /// Free a cue instance. The handle is dead afterwards.
    Release { sound: SoundId },
    /// Start a music track, replacing whatever is playing.
    MusicStart { cue: SoundCue },
    MusicStop,
}

/// Game events for UI feedback and logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A wave began spawning (zero-based index).
    WaveStarted { wave: u32, enemy_count: u32 },
    EnemySpawned { id: ActorId, kind: EnemyKind },
    /// An enemy died to a projectile; `score` is what it was worth.
    EnemyDestroyed { id: ActorId, kind: EnemyKind, score: u32 },
    ProjectileSpawned { id: ActorId, kind: ProjectileKind },
    BonusActivated { id: ActorId, kind: BonusKind },
    /// Total score after any change.
    ScoreChanged { score: u32 },
    PlayerHit { damage: i32, health: i32 },
    WeaponFired { hand: HandSide, projectile: ProjectileKind },
    /// Rumble request for one controller.
    HapticPulse {
        hand: HandSide,
        amplitude: f32,
        millis: u32,
    },
    /// Hide controllers while weapons occupy the hands, show them in menus.
    ControllersVisible { visible: bool },
    LevelWon,
    LevelLost,
    /// A level document failed validation and was not started.
    LevelRejected { reason: String },
    /// The return button was hit; the frontend should confirm or ignore.
    ReturnRequested,
}
