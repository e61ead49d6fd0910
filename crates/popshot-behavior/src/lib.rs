//! Steering behaviors for POPSHOT.
//!
//! Implements the pluggable force behaviors that drive enemy motion and
//! the per-kind parameter profiles for actors. Behaviors are evaluated
//! against plain data. No ECS dependency.

pub mod profiles;
pub mod steering;

pub use popshot_core as core;

#[cfg(test)]
mod tests;
