//! Per-tick systems, run by the engine in a strict order.
//!
//! Systems are free functions over `&mut World` plus whatever engine-owned
//! state they touch. They do not hold state of their own.

pub mod bombs;
pub mod bullets;
pub mod cheat;
pub mod effects;
pub mod enemies;
pub mod enemy_shots;
pub mod pickups;
pub mod snapshot;
