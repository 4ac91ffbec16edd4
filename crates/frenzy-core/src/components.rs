//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Entity positions use `types::Vec3` directly as a component.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Vec3;

/// AI enemy state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Spawn position (restored on round reset bookkeeping, shown in views).
    pub original_position: Vec3,
    /// Collision radius before pulse scaling.
    pub radius: f64,
    /// Pulse animation clock; scale = 0.7 + 0.3 * sin(clock).
    pub pulse_clock: f64,
    /// Current pulse scale.
    pub scale: f64,
    /// Aim precision in [0, 1]; higher is tighter spread.
    pub accuracy: f64,
    /// Base ticks between shots for this enemy.
    pub firing_interval: i32,
    /// Ticks until the next shot is allowed.
    pub firing_cooldown: i32,
    /// Whether this enemy currently detects the player.
    pub is_targeting: bool,
    /// Last recorded player position (aim point for volleys).
    pub target_position: Option<Vec3>,
    /// Remaining ticks of the targeting indicator.
    pub targeting_indicator: i32,
    /// Remaining ticks of the muzzle flash.
    pub muzzle_flash: i32,
}

/// A bullet fired by the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBullet {
    /// Unit direction of travel.
    pub direction: Vec3,
    /// World units advanced per tick.
    pub speed: f64,
}

/// A projectile fired by an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyShot {
    /// Unit direction of travel.
    pub direction: Vec3,
    pub speed: f64,
    /// Ticks since fired.
    pub age: u32,
    /// Expires at this age regardless of collision.
    pub lifetime: u32,
}

/// Timed explosive device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    pub phase: BombPhase,
    /// Bullet hits taken so far (destroys at BOMB_MAX_HITS).
    pub hit_count: u32,
    /// Ticks since spawn; drives the Idle -> Warning transition.
    pub lifetime_timer: u32,
    /// Blink animation clock.
    pub blink_timer: u32,
    /// Current blink half-cycle length (shortens in Warning).
    pub blink_interval: u32,
    /// Ticks of explosion animation elapsed (Exploding phase only).
    pub explosion_timer: u32,
    /// Remaining ticks of the hit flash.
    pub flash_timer: u32,
}

/// Collectible pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    /// Terminal; a collected pickup never re-enters collision checks.
    pub collected: bool,
    /// Spin animation (degrees).
    pub rotation: f64,
    /// Float/pulse animation clock.
    pub pulse_clock: f64,
}

/// A single particle within an effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// RGBA; alpha fades linearly over the lifetime.
    pub color: [f64; 4],
    pub size: f64,
    pub age: u32,
    pub lifetime: u32,
}

/// Particle-based visual effect with a screen-shake envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub particles: Vec<Particle>,
    pub age: u32,
    /// Screen shake peak intensity.
    pub shake_intensity: f64,
    /// Ticks over which the shake envelope decays to zero.
    pub shake_duration: u32,
    /// Ticks of shake elapsed.
    pub shake_timer: u32,
}
