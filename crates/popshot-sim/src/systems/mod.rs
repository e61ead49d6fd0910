//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine
//! state they touch. The engine runs them in a fixed order; none of
//! them keeps state of its own except the wave tracker, which lives in
//! `wave_progress`.

pub mod bonus;
pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod flight;
pub mod lifetime;
pub mod movement;
pub mod snapshot;
pub mod steering;
pub mod wave_progress;
pub mod weapons;
