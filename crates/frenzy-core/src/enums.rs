//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player stance. Affects the detection modifier and movement capability.
/// Lying is entered only by round-ending conditions and cleared only by
/// a round reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
    Lying,
}

/// Movement intent directions, relative to the aim direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Cover object presets. Dimensions are fixed per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverKind {
    /// 80 x 60 x 20 box.
    Wall,
    /// 60 x 40 x 15 box.
    Barrier,
    /// 30 x 80 x 30 box.
    Pillar,
}

/// Explosive device lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BombPhase {
    /// Armed, slow blink.
    #[default]
    Idle,
    /// Time-triggered escalation: faster blink.
    Warning,
    /// Player-contact detonation; animates for a fixed duration, then removal.
    /// Destruction by bullet hits skips this: the bomb is removed outright
    /// and respawned elsewhere.
    Exploding,
}

/// Collectible pickup kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
    Speed,
    Damage,
    Shield,
    Ammo,
}

/// Coordinated-attack escalation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPhase {
    #[default]
    Normal,
    /// Elimination threshold reached; volley fires when the warning elapses.
    Warning,
    /// Volley fired; any hit on the player ends the round immediately.
    Active,
}

/// Particle effect kinds. Kind determines particle count, color, speed,
/// lifetime, and screen-shake envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Bomb detonation or destruction.
    BombBlast,
    /// Enemy killed by a player bullet.
    EnemyDefeat,
    /// Coordinated-attack warning marker at each enemy.
    AttackWarning,
    /// Volley muzzle flash.
    MuzzleFlash,
}

/// Why the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOverReason {
    LifeDepleted,
    TooManyMisses,
    TimeExpired,
    BombContact,
}
