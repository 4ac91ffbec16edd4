//! Per-enemy targeting and firing decisions.
//!
//! Pure functions that take the situation as plain data and return what the
//! enemy should do. The occlusion check itself happens in the arena crate;
//! here it arrives as a precomputed flag.

use rand::Rng;

use frenzy_core::constants::*;
use frenzy_core::enums::Stance;
use frenzy_core::types::Vec3;

/// Input to the targeting evaluation for a single enemy.
pub struct TargetingContext {
    /// Distance from the enemy to the player.
    pub distance: f64,
    /// Base detection range before the player's modifier.
    pub detection_range: f64,
    pub firing_range: f64,
    /// Player's detection-difficulty modifier (stance + cover stack).
    pub detection_modifier: f64,
    /// Cover blocks the enemy's line of sight to the player.
    pub occluded: bool,
    /// Firing cooldown has elapsed.
    pub cooldown_ready: bool,
}

/// Output of the targeting evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetingDecision {
    /// The enemy sees the player this tick.
    pub detected: bool,
    /// The enemy fires this tick.
    pub fire: bool,
}

/// Decide detection and firing for one enemy this tick.
///
/// Detection requires the player inside the modifier-scaled detection range
/// and an unoccluded line of sight. Firing additionally requires firing
/// range and an elapsed cooldown.
pub fn evaluate(ctx: &TargetingContext) -> TargetingDecision {
    let effective_range = ctx.detection_range * ctx.detection_modifier;
    let detected = ctx.distance <= effective_range && !ctx.occluded;
    let fire = detected && ctx.distance <= ctx.firing_range && ctx.cooldown_ready;
    TargetingDecision { detected, fire }
}

/// The accuracy-penalty stack from the player's posture.
/// Lower values widen the spread cone.
pub fn accuracy_penalty(stance: Stance, behind_cover: bool) -> f64 {
    let mut penalty = 1.0;
    if stance == Stance::Crouching {
        penalty *= ACCURACY_PENALTY_CROUCHING;
    }
    if behind_cover {
        penalty *= ACCURACY_PENALTY_BEHIND_COVER;
    }
    penalty
}

/// Compute a perturbed unit firing direction from `from` toward `target`.
///
/// Spread per axis is uniform in [-s, s] with
/// s = (1 - accuracy) * ENEMY_SPREAD_FACTOR / penalty.
pub fn fire_direction(
    rng: &mut impl Rng,
    from: &Vec3,
    target: &Vec3,
    accuracy: f64,
    penalty: f64,
) -> Vec3 {
    let mut direction = (*target - *from).normalized();
    let spread = (1.0 - accuracy) * ENEMY_SPREAD_FACTOR / penalty;
    direction.x += rng.gen_range(-spread..=spread);
    direction.y += rng.gen_range(-spread..=spread);
    direction.z += rng.gen_range(-spread..=spread);
    direction.normalized()
}

/// Cooldown after a shot: the enemy's base interval plus symmetric jitter.
pub fn cooldown_after_shot(rng: &mut impl Rng, base_interval: i32) -> i32 {
    base_interval + rng.gen_range(-ENEMY_COOLDOWN_JITTER..=ENEMY_COOLDOWN_JITTER)
}
