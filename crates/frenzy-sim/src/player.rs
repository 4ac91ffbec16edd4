//! Player state: movement, smooth rotation, stance, and hitbox geometry.
//!
//! The player lives outside the ECS world — there is exactly one, and most
//! systems need it every tick.

use frenzy_arena::cover::CoverField;
use frenzy_arena::hitbox::{BoxHitbox, CompositeHitbox, SphereHitbox};
use frenzy_core::constants::*;
use frenzy_core::enums::{MoveDirection, Stance};
use frenzy_core::types::Vec3;

/// Held movement keys. Opposing flags cancel out.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementIntents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// The player. `position.z` doubles as the stance height (30 standing,
/// 15 crouching), matching the hitbox math below.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec3,
    /// Current facing angle in degrees, wrapped to [0, 360).
    pub angle: f64,
    /// Where smooth rotation is heading.
    pub target_angle: f64,
    pub stance: Stance,
    pub intents: MovementIntents,
    pub behind_cover: bool,
    /// Index into the cover field of the cover shielding the player.
    /// Recomputed every tick; never owns the cover.
    pub current_cover: Option<usize>,
    pub walking: bool,
    pub walk_clock: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, PLAYER_STAND_HEIGHT),
            angle: 0.0,
            target_angle: 0.0,
            stance: Stance::Standing,
            intents: MovementIntents::default(),
            behind_cover: false,
            current_cover: None,
            walking: false,
            walk_clock: 0.0,
        }
    }

    pub fn set_intent(&mut self, direction: MoveDirection, pressed: bool) {
        match direction {
            MoveDirection::Forward => self.intents.forward = pressed,
            MoveDirection::Backward => self.intents.backward = pressed,
            MoveDirection::Left => self.intents.left = pressed,
            MoveDirection::Right => self.intents.right = pressed,
        }
    }

    /// Nudge the rotation target by a relative amount. Ignored while Lying.
    pub fn adjust_aim(&mut self, degrees: f64) {
        if self.stance == Stance::Lying {
            return;
        }
        self.target_angle = (self.target_angle + degrees).rem_euclid(360.0);
    }

    /// Set the rotation target absolutely. Ignored while Lying.
    pub fn set_aim(&mut self, degrees: f64) {
        if self.stance == Stance::Lying {
            return;
        }
        self.target_angle = degrees.rem_euclid(360.0);
    }

    /// Move the current angle toward the target along the shortest angular
    /// path, snapping once the remaining difference drops below the
    /// threshold.
    pub fn update_rotation(&mut self) {
        if self.stance == Stance::Lying {
            return;
        }
        let mut diff = self.target_angle - self.angle;
        while diff > 180.0 {
            diff -= 360.0;
        }
        while diff < -180.0 {
            diff += 360.0;
        }
        if diff.abs() < PLAYER_ROTATION_SNAP {
            self.angle = self.target_angle;
        } else {
            let step = PLAYER_ROTATION_RATE.min(diff.abs());
            self.angle = (self.angle + step * diff.signum()).rem_euclid(360.0);
        }
    }

    /// Apply held movement intents. Diagonal motion is normalized to unit
    /// speed; a tentative position that would leave the arena, enter a
    /// cover box, or crowd an enemy is rejected in whole.
    pub fn update_movement(&mut self, covers: &CoverField, enemies: &[(Vec3, f64)]) {
        self.walking = false;
        if self.stance != Stance::Lying {
            let mut forward = 0.0;
            if self.intents.forward {
                forward += PLAYER_MOVE_SPEED;
            }
            if self.intents.backward {
                forward -= PLAYER_MOVE_SPEED;
            }
            let mut strafe = 0.0;
            if self.intents.right {
                strafe += PLAYER_MOVE_SPEED;
            }
            if self.intents.left {
                strafe -= PLAYER_MOVE_SPEED;
            }

            if forward != 0.0 || strafe != 0.0 {
                // The walk cycle follows the intent: pushing against a
                // wall or the boundary still animates the limbs.
                self.walking = true;
                if forward != 0.0 && strafe != 0.0 {
                    forward *= std::f64::consts::FRAC_1_SQRT_2;
                    strafe *= std::f64::consts::FRAC_1_SQRT_2;
                }
                // Forward follows the aim direction; strafe is perpendicular.
                let theta = self.angle.to_radians();
                let dx = theta.sin() * forward + theta.cos() * strafe;
                let dy = theta.cos() * forward - theta.sin() * strafe;
                let tentative =
                    Vec3::new(self.position.x + dx, self.position.y + dy, self.position.z);
                if self.can_stand_at(&tentative, covers, enemies) {
                    self.position = tentative;
                }
            }
        }

        if self.walking {
            self.walk_clock += WALK_CYCLE_SPEED;
        } else {
            self.walk_clock *= 0.9;
        }
    }

    fn can_stand_at(&self, p: &Vec3, covers: &CoverField, enemies: &[(Vec3, f64)]) -> bool {
        if p.x.abs() >= PLAYER_BOUND_XY || p.y.abs() >= PLAYER_BOUND_XY {
            return false;
        }
        if covers.first_hit(p, PLAYER_RADIUS).is_some() {
            return false;
        }
        !enemies
            .iter()
            .any(|(pos, radius)| p.distance_to(pos) < PLAYER_RADIUS + radius)
    }

    /// Toggle Standing <-> Crouching. Blocked while Lying.
    pub fn toggle_crouch(&mut self) {
        match self.stance {
            Stance::Standing => {
                self.stance = Stance::Crouching;
                self.position.z = PLAYER_CROUCH_HEIGHT;
            }
            Stance::Crouching => {
                self.stance = Stance::Standing;
                self.position.z = PLAYER_STAND_HEIGHT;
            }
            Stance::Lying => {}
        }
    }

    /// Entered only by round-ending conditions; cleared only by a reset.
    pub fn lie_down(&mut self) {
        self.stance = Stance::Lying;
    }

    pub fn height(&self) -> f64 {
        match self.stance {
            Stance::Crouching => PLAYER_CROUCH_HEIGHT,
            _ => PLAYER_STAND_HEIGHT,
        }
    }

    /// Multiplicative detection-difficulty stack applied to enemy
    /// detection range.
    pub fn detection_modifier(&self) -> f64 {
        let mut modifier = 1.0;
        if self.stance == Stance::Crouching {
            modifier *= DETECTION_MOD_CROUCHING;
        }
        if self.stance == Stance::Lying {
            modifier *= DETECTION_MOD_LYING;
        }
        if self.behind_cover {
            modifier *= DETECTION_MOD_BEHIND_COVER;
        }
        modifier
    }

    pub fn head_position(&self) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.position.y,
            self.position.z + self.height() - 2.0,
        )
    }

    pub fn torso_center(&self) -> Vec3 {
        Vec3::new(
            self.position.x,
            self.position.y,
            self.position.z + self.height() / 2.0,
        )
    }

    /// Composite head + torso hitbox at the current stance.
    pub fn hitbox(&self) -> CompositeHitbox {
        CompositeHitbox {
            head: SphereHitbox {
                center: self.head_position(),
                radius: PLAYER_HEAD_RADIUS,
            },
            torso: BoxHitbox {
                center: self.torso_center(),
                // Torso depth reuses the half-width on both x and y.
                half_extents: Vec3::new(
                    PLAYER_TORSO_WIDTH / 2.0,
                    PLAYER_TORSO_WIDTH / 2.0,
                    PLAYER_TORSO_HEIGHT / 2.0,
                ),
            },
        }
    }

    /// Horizontal gun direction from the current facing angle.
    pub fn gun_direction(&self) -> Vec3 {
        let theta = self.angle.to_radians();
        Vec3::new(theta.sin(), theta.cos(), 0.0)
    }

    /// Bullet spawn point.
    pub fn gun_tip(&self) -> Vec3 {
        self.position + self.gun_direction() * GUN_TIP_OFFSET
    }

    /// Recompute the behind-cover flag against every enemy. The first
    /// enemy shielded by a cover wins; the index is the non-owning
    /// back-reference into the field.
    pub fn recompute_cover_status(&mut self, covers: &CoverField, enemies: &[Vec3]) {
        self.behind_cover = false;
        self.current_cover = None;
        for enemy_pos in enemies {
            if let Some(index) = covers.cover_between(&self.position, enemy_pos) {
                self.behind_cover = true;
                self.current_cover = Some(index);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_speed_is_normalized() {
        let covers = CoverField::default();
        let mut player = PlayerState::new();
        player.set_intent(MoveDirection::Forward, true);
        player.set_intent(MoveDirection::Right, true);
        player.update_movement(&covers, &[]);

        let moved = player.position.horizontal_distance_to(&Vec3::new(0.0, 0.0, 0.0));
        assert!((moved - PLAYER_MOVE_SPEED).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_shortest_path_across_zero() {
        let mut player = PlayerState::new();
        player.set_aim(350.0);
        player.update_rotation();
        // 0 -> 350 goes counterclockwise through 352, not the long way
        assert!((player.angle - 352.0).abs() < 1e-9);
        player.update_rotation();
        assert_eq!(player.angle, 350.0);
    }

    #[test]
    fn test_rotation_snaps_below_threshold() {
        let mut player = PlayerState::new();
        player.set_aim(0.5);
        player.update_rotation();
        assert_eq!(player.angle, 0.5);
    }

    #[test]
    fn test_movement_rejected_at_boundary() {
        let covers = CoverField::default();
        let mut player = PlayerState::new();
        player.position = Vec3::new(0.0, PLAYER_BOUND_XY - 1.0, PLAYER_STAND_HEIGHT);
        player.set_intent(MoveDirection::Forward, true);
        player.update_movement(&covers, &[]);
        assert_eq!(player.position.y, PLAYER_BOUND_XY - 1.0);
    }

    #[test]
    fn test_walk_cycle_runs_while_blocked() {
        let covers = CoverField::default();
        let mut player = PlayerState::new();
        player.position = Vec3::new(0.0, PLAYER_BOUND_XY - 1.0, PLAYER_STAND_HEIGHT);
        player.set_intent(MoveDirection::Forward, true);
        player.update_movement(&covers, &[]);
        assert!(player.walking);
        assert_eq!(player.walk_clock, WALK_CYCLE_SPEED);
        player.update_movement(&covers, &[]);
        assert_eq!(player.walk_clock, 2.0 * WALK_CYCLE_SPEED);
    }

    #[test]
    fn test_movement_rejected_near_enemy() {
        let covers = CoverField::default();
        let mut player = PlayerState::new();
        player.set_intent(MoveDirection::Forward, true);
        let enemies = [(Vec3::new(0.0, 25.0, 25.0), 15.0)];
        player.update_movement(&covers, &enemies);
        assert_eq!(player.position.y, 0.0);
    }

    #[test]
    fn test_crouch_toggle_reversible() {
        let mut player = PlayerState::new();
        player.toggle_crouch();
        assert_eq!(player.stance, Stance::Crouching);
        assert_eq!(player.position.z, PLAYER_CROUCH_HEIGHT);
        player.toggle_crouch();
        assert_eq!(player.stance, Stance::Standing);
        assert_eq!(player.position.z, PLAYER_STAND_HEIGHT);
    }

    #[test]
    fn test_lying_blocks_crouch_and_motion() {
        let covers = CoverField::default();
        let mut player = PlayerState::new();
        player.lie_down();
        player.toggle_crouch();
        assert_eq!(player.stance, Stance::Lying);
        player.set_intent(MoveDirection::Forward, true);
        player.update_movement(&covers, &[]);
        assert_eq!(player.position.y, 0.0);
    }

    #[test]
    fn test_detection_modifier_stack() {
        let mut player = PlayerState::new();
        assert_eq!(player.detection_modifier(), 1.0);
        player.toggle_crouch();
        assert_eq!(player.detection_modifier(), DETECTION_MOD_CROUCHING);
        player.behind_cover = true;
        assert!(
            (player.detection_modifier() - DETECTION_MOD_CROUCHING * DETECTION_MOD_BEHIND_COVER)
                .abs()
                < 1e-12
        );
    }
}
