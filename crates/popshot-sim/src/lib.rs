//! Simulation engine for POPSHOT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces LevelSnapshots for the frontend.

pub mod engine;
pub mod environment;
pub mod player;
pub mod registry;
pub mod relations;
pub mod sound;
pub mod systems;
pub mod tasks;
pub mod time_control;
pub mod weapon;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use popshot_core as core;
