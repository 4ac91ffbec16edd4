//! Arena geometry for Bullet Frenzy.
//!
//! Collision predicates, the hitbox trait, destructible cover objects,
//! and the sampled line-of-sight occlusion test.

pub mod cover;
pub mod geom;
pub mod hitbox;
pub mod occlusion;

pub use frenzy_core as core;
