//! Catch-game simulation for Veselye.
//!
//! Owns the hecs world of falling bottles, runs systems at a fixed step,
//! and produces `GameSnapshot`s for the renderer.

pub mod config;
pub mod engine;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use config::GameConfig;
pub use engine::GameEngine;
pub use scoring::grade;
pub use veselye_core as core;

#[cfg(test)]
mod tests;
