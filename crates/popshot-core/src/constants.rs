//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Frame timing ---

/// Largest raw frame delta the simulation will accept (seconds).
/// Longer frames (breakpoints, headset removed) are clamped, not replayed.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Fraction of the gap to the target time factor closed each tick.
pub const TIME_SCALE_LERP: f32 = 0.08;

/// Time factor granted by a slow-motion bonus when the level omits one.
pub const DEFAULT_TIME_BONUS_RATIO: f32 = 0.5;

/// Duration of a slow-motion bonus when the level omits one (raw seconds).
pub const DEFAULT_TIME_BONUS_SECS: f32 = 6.0;

// --- Enemies ---

/// Enemy speed cap (m/s).
pub const ENEMY_MAX_SPEED: f32 = 20.0;

/// Per-tick velocity damping factor for enemies.
pub const ENEMY_DAMPING: f32 = 0.98;

/// Hitbox padding around enemy footprints (meters).
pub const ENEMY_HITBOX_PADDING: f32 = 0.1;

/// Balloon idle bob: force amplitude and oscillation frequency divisor.
pub const BALLOON_FLOAT_FORCE: f32 = 0.08;
pub const BALLOON_FLOAT_FREQ: f32 = 0.5;

/// Pigeon idle bob: force amplitude and oscillation frequency divisor.
pub const PIGEON_FLOAT_FORCE: f32 = 0.1;
pub const PIGEON_FLOAT_FREQ: f32 = 0.2;

/// Pigeon head turn rate toward the player (rad/s).
pub const PIGEON_HEAD_TURN_SPEED: f32 = 1.0;

/// Half-range of the random per-pigeon aim offset (radians).
pub const PIGEON_AIM_OFFSET_MAX: f32 = std::f32::consts::FRAC_PI_4;

/// Seconds between egg launches for shooter and dropper pigeons (scaled clock).
pub const SHOOTER_COOLDOWN_SECS: f32 = 2.0;

/// Launch speed of a shooter pigeon's egg (m/s).
pub const EGG_LAUNCH_SPEED: f32 = 4.0;

/// Eggs spawn this far below the pigeon so they clear its own hitbox.
pub const EGG_SPAWN_DROP: f32 = 0.5;

/// Gravity force applied to eggs and balls.
pub const PROJECTILE_GRAVITY_FORCE: f32 = 9.81;

// --- Projectiles ---

/// Per-tick velocity damping factor for projectiles (none).
pub const PROJECTILE_DAMPING: f32 = 1.0;

/// Projectile speed cap (m/s).
pub const PROJECTILE_MAX_SPEED: f32 = 60.0;

/// Seconds a projectile may live before self-disposal.
pub const PROJECTILE_MAX_LIFETIME: f32 = 10.0;

/// Hitbox padding around projectile footprints (meters).
pub const PROJECTILE_HITBOX_PADDING: f32 = 1.0;

/// Projectiles below this height are considered on the floor and disposed.
pub const PROJECTILE_FLOOR_Y: f32 = -1.0;

/// Damage dealt to the player by an enemy projectile hit.
pub const PROJECTILE_PLAYER_DAMAGE: i32 = 10;

/// Curved projectiles fly straight this long before bending (scaled seconds).
pub const CURVE_DELAY_SECS: f32 = 2.0;

/// Seconds over which the curve angle ramps from zero to full.
pub const CURVE_RAMP_SECS: f32 = 2.0;

/// Forward drift speed for curved and weaving projectiles (m/s).
pub const CURVE_DRIFT_SPEED: f32 = 4.0;

/// Random full-curve angle range (radians): min + rand * span.
pub const CURVE_ANGLE_MIN: f32 = std::f32::consts::FRAC_PI_8;
pub const CURVE_ANGLE_SPAN: f32 = std::f32::consts::FRAC_PI_8;

/// Weaving projectiles hold course this long between direction flips.
pub const WEAVE_DELAY_SECS: f32 = 1.0;

/// Full period of the weave oscillation (scaled seconds).
pub const WEAVE_PERIOD_SECS: f32 = 3.0;

/// Peak weave steering angle (radians).
pub const WEAVE_ANGLE: f32 = std::f32::consts::TAU;

/// Lateral weave displacement multiplier.
pub const WEAVE_DISTANCE_FACTOR: f32 = 2.0;

// --- Weapons ---

/// Muzzle distance in front of the firing hand (meters).
pub const MUZZLE_OFFSET: f32 = 1.5;

/// Trigger axis value above which a trigger weapon fires.
pub const TRIGGER_THRESHOLD: f32 = 0.8;

/// Grip axis value at which a hand counts as squeezing. Crossing it
/// downward is the throw gesture.
pub const GRIP_THRESHOLD: f32 = 0.5;

/// Interval between hand velocity samples for throws (raw seconds).
pub const HAND_SAMPLE_INTERVAL: f32 = 0.1;

/// Haptic pulse on fire: amplitude and duration.
pub const FIRE_HAPTIC_AMPLITUDE: f32 = 0.5;
pub const FIRE_HAPTIC_MILLIS: u32 = 100;

// --- Bonuses ---

/// Balloon-carried bonuses hang this far below the balloon center.
pub const BONUS_ATTACH_OFFSET_Y: f32 = -2.5;

/// Idle spin rate of a hanging bonus (rad/s).
pub const BONUS_SPIN_SPEED: f32 = 1.0;

/// Bonus pickup collision half-extent (meters).
pub const BONUS_HALF_EXTENT: f32 = 0.25;

/// Score granted by a score bonus when the level omits a value.
pub const DEFAULT_BONUS_SCORE: u32 = 10;

// --- Audio ---

/// One-shot cue instances (deaths, launches, pickups) are released this
/// long after they start, past the end of the longest sample (raw seconds).
pub const CUE_LINGER_SECS: f32 = 4.0;

// --- Steering ---

/// Rush pattern: random seconds between orbit and rush phases.
pub const RUSH_SWITCH_MIN_SECS: f32 = 3.0;
pub const RUSH_SWITCH_SPAN_SECS: f32 = 7.0;

/// Radius of the rush pattern's figure-eight orbit (meters).
pub const RUSH_ORBIT_RADIUS: f32 = 5.0;

/// Force multiplier while rushing the player.
pub const RUSH_FORCE_FACTOR: f32 = 2.0;

/// Patrol force scales with distance-to-target over this divisor.
pub const PATROL_ARRIVAL_DIVISOR: f32 = 100.0;

/// Seconds between random target re-rolls inside a wander volume.
pub const WANDER_RETARGET_SECS: f32 = 2.0;

/// Obstacle avoidance: deflection yaw and lateral attenuation.
pub const AVOID_DEFLECT_YAW: f32 = std::f32::consts::FRAC_PI_8;
pub const AVOID_LATERAL_FACTOR: f32 = 0.5;

// --- Player ---

/// Player head hitbox half-extents (meters).
pub const PLAYER_HEAD_HALF_EXTENT: f32 = 0.15;

/// Player body hitbox half-extents (meters).
pub const PLAYER_BODY_HALF_EXTENTS: [f32; 3] = [0.25, 0.6, 0.2];

/// Body hitbox center sits this far below the head.
pub const PLAYER_BODY_DROP: f32 = 0.8;

/// Return button collision box half-extents (meters).
pub const RETURN_BUTTON_HALF_EXTENTS: [f32; 3] = [0.35, 0.05, 0.35];
