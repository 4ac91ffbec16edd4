//! Events emitted by the simulation for UI and audio feedback.
//!
//! Each tick's events are collected into the snapshot and cleared.

use serde::{Deserialize, Serialize};

use crate::enums::{PickupKind, RoundOverReason};
use crate::types::Vec3;

/// Per-tick feedback events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player fired a bullet.
    ShotFired,
    /// Fire command refused (out of ammo).
    OutOfAmmo,
    /// A player bullet killed an enemy.
    EnemyDown { position: Vec3, score: u32 },
    /// A bullet hit a bomb (not yet destroying it).
    BombHit { hits: u32 },
    /// A bomb was destroyed by bullet hits and will respawn elsewhere.
    BombDestroyed { position: Vec3 },
    /// A bomb detonated on player contact.
    BombDetonated { position: Vec3 },
    /// A bullet damaged a cover object.
    CoverDamaged { cover_index: usize, health: f64 },
    /// A cover object was destroyed.
    CoverDestroyed { cover_index: usize },
    /// The player collected a pickup.
    PickupCollected { kind: PickupKind },
    /// The player was hit by an enemy shot.
    PlayerHit { life_remaining: u32 },
    /// An enemy landed a melee hit and was teleported away.
    MeleeHit { life_remaining: u32 },
    /// Elimination threshold reached; coordinated attack incoming.
    CoordinatedAttackWarning,
    /// All live enemies fired the coordinated volley.
    CoordinatedVolley,
    /// The round ended.
    RoundOver { reason: RoundOverReason },
}
