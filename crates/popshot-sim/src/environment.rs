//! Day/night cycle clock.
//!
//! The sim only tracks where in the cycle the level is; sun position,
//! sky color, and lighting are derived by the frontend from `progress`.
//! Advances on the scaled clock, so slow motion slows the sun too.

use popshot_core::level::EnvironmentData;

#[derive(Debug, Clone, Copy)]
pub struct DayCycle {
    elapsed_secs: f32,
    duration_secs: f32,
}

impl Default for DayCycle {
    fn default() -> Self {
        Self::from_data(&EnvironmentData::default())
    }
}

impl DayCycle {
    pub fn from_data(data: &EnvironmentData) -> Self {
        Self {
            // `time` is a fraction of the cycle: 0 is noon, 0.5 midnight.
            elapsed_secs: data.duration * data.time,
            duration_secs: data.duration,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed_secs += dt;
    }

    /// Position in the cycle as a wrapped fraction in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        (self.elapsed_secs % self.duration_secs) / self.duration_secs
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }
}
