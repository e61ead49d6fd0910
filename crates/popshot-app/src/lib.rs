//! Headless driver for the arcade shooter simulation.
//!
//! Wires the engine to a real-time loop thread fed by an mpsc command
//! channel, a scripted input source standing in for tracked hands, and
//! line-delimited JSON snapshot output.

pub mod autoplay;
pub mod game_loop;
