//! Round controller for Bullet Frenzy.
//!
//! Owns the hecs ECS world, the player, the cover field, and the round
//! state; runs systems in a strict per-tick order and produces
//! `RoundSnapshot`s for the renderer. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod player;
pub mod round;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use frenzy_core as core;

#[cfg(test)]
mod tests;
