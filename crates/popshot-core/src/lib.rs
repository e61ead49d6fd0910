//! Core types and definitions for the POPSHOT simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, level documents, state snapshots, events, and
//! constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod level;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
