//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Copper/silver/gold are balloons, the rest are pigeons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnemyKind {
    /// Basic balloon, drifts on its spawn behaviors.
    Copper,
    /// Balloon worth more score in stock levels.
    Silver,
    /// Balloon worth the most score in stock levels.
    Gold,
    /// Flying pigeon, tracks the player with its head.
    Pigeon,
    /// Armored pigeon that soaks several hits before dying.
    PigeonBoss,
    /// Pigeon that launches eggs at the player on a cooldown.
    PigeonShooter,
    /// Pigeon that drops eggs below itself on a cooldown.
    PigeonDropper,
}

impl EnemyKind {
    /// Balloons float passively and never count toward wave completion.
    pub fn is_balloon(&self) -> bool {
        matches!(self, EnemyKind::Copper | EnemyKind::Silver | EnemyKind::Gold)
    }

    pub fn is_pigeon(&self) -> bool {
        !self.is_balloon()
    }
}

/// Projectile archetype. Determines flight path and spawn profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectileKind {
    /// Plain ballistic ball, gravity only.
    Ball,
    /// Straight bolt, no gravity.
    Laser,
    /// Enemy-launched egg, ballistic, hurts the player.
    #[serde(rename = "Egg")]
    Egg,
    /// Curves sideways after a straight opening stretch.
    Boomerang,
    /// Same curved path as the boomerang, different projectile body.
    Javelin,
    /// Weaves left and right on a fixed period while drifting forward.
    Disc,
    /// Disc weave plus an independent vertical weave.
    ChaosBall,
    /// Placeholder for weapons that fire nothing.
    None,
}

/// Weapon archetype held in a player hand slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeaponKind {
    /// Bare hand: throws its loaded round with the grip gesture instead
    /// of firing on the trigger.
    Hand,
    /// Trigger weapon limited to ball, laser, boomerang or javelin rounds.
    Gun,
    /// Rapid trigger weapon limited to ball or laser rounds.
    GatlingGun,
    BoomerangLauncher,
    JavelinLauncher,
    DiscLauncher,
    ChaosGun,
    /// Empty hand slot.
    #[default]
    None,
}

impl WeaponKind {
    /// Trigger weapons fire on input; the hand and empty slots do not.
    pub fn is_trigger_weapon(&self) -> bool {
        !matches!(self, WeaponKind::Hand | WeaponKind::None)
    }
}

/// Perk carried by a balloon, granted when the balloon pops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BonusKind {
    Score,
    Time,
}

/// Collision class, decides which pair rules apply on contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColliderClass {
    Enemy,
    Bonus,
    Projectile,
    PlayerHead,
    PlayerBody,
    Wall,
    ReturnButton,
}

/// Which hand of the player rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandSide {
    Left,
    Right,
}

/// Actor lifecycle state. Disposal is requested once and resolved at the
/// end of the same tick; a disposed actor never acts again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    #[default]
    Live,
    Disposed,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Won,
    Lost,
}

/// Sound cue identifiers handed to the host audio layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoundCue {
    BalloonPop,
    PigeonDeath,
    EggLaunch,
    GunShot,
    PlayerHit,
    BonusCollected,
    Victory,
    Defeat,
    MenuTheme,
    LevelMusic,
}
