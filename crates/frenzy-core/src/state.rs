//! Round snapshot — the complete visible state exposed to the renderer
//! after each tick. Read-only for consumers; none of these structs are
//! fed back into the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, Vec3};

/// Complete post-tick view of the simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub time: SimTime,
    pub hud: HudView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub enemy_shots: Vec<EnemyShotView>,
    pub covers: Vec<CoverView>,
    pub bombs: Vec<BombView>,
    pub pickups: Vec<PickupView>,
    pub effects: Vec<EffectView>,
    /// Accumulated screen-shake offset from all active effects.
    pub screen_shake: Vec3,
    pub events: Vec<GameEvent>,
}

/// HUD values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub life: u32,
    pub score: u32,
    pub ammo: u32,
    pub missed_shots: u32,
    pub countdown_secs: f64,
    pub attack_phase: AttackPhase,
    /// Ticks remaining until the coordinated volley (Warning phase only).
    pub attack_warning_ticks_left: u32,
    pub eliminations: u32,
    pub cheat_mode: bool,
    pub first_person: bool,
    pub game_over: bool,
    pub round_over_reason: Option<RoundOverReason>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    /// Current facing angle (degrees).
    pub angle: f64,
    /// Target facing angle for smooth rotation (degrees).
    pub target_angle: f64,
    pub stance: Stance,
    pub behind_cover: bool,
    /// Index into `covers` of the cover currently shielding the player.
    pub current_cover: Option<usize>,
    pub walking: bool,
    /// Walk cycle clock for limb animation.
    pub walk_clock: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec3,
    /// Current pulse scale applied to the model and the hit radius.
    pub scale: f64,
    pub is_targeting: bool,
    /// Targeting indicator visible.
    pub indicator_lit: bool,
    /// Muzzle flash visible.
    pub muzzle_flash_lit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec3,
    pub direction: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyShotView {
    pub position: Vec3,
    pub direction: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverView {
    pub position: Vec3,
    pub kind: CoverKind,
    pub health: f64,
    pub max_health: f64,
    pub destroyed: bool,
    pub decals: Vec<DecalView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecalView {
    pub position: Vec3,
    /// Fraction of display time remaining in [0, 1].
    pub fade: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombView {
    pub position: Vec3,
    pub phase: BombPhase,
    pub hit_count: u32,
    /// Blink half-cycle is currently lit.
    pub blink_on: bool,
    /// Hit flash currently visible.
    pub flashing: bool,
    /// Explosion animation progress in [0, 1] (Exploding phase only).
    pub explosion_progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Vec3,
    pub kind: PickupKind,
    pub rotation: f64,
    pub pulse_clock: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub particles: Vec<ParticleView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec3,
    pub color: [f64; 4],
    pub size: f64,
}
