//! Enemy AI for Bullet Frenzy.
//!
//! Pure decision logic: targeting and fire-direction computation, and the
//! coordinated-attack escalation state machine. No ECS dependency —
//! operates on plain data, generic over `rand::Rng` for seedability.

pub mod escalation;
pub mod targeting;

pub use frenzy_core as core;
