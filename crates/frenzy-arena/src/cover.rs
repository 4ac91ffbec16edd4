//! Destructible cover objects and the arena-wide cover field.
//!
//! The field owns every `CoverObject` and answers the collision and
//! occlusion queries used by the player, enemies, and projectiles.
//! Covers are referred to by index; nothing outside the field owns one.

use serde::{Deserialize, Serialize};

use frenzy_core::constants::{COVER_DECAL_TICKS, COVER_MAX_HEALTH};
use frenzy_core::enums::CoverKind;
use frenzy_core::types::Vec3;

use crate::geom;
use crate::occlusion;

/// A fading impact marker on a cover object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageDecal {
    pub position: Vec3,
    /// Ticks of display time remaining.
    pub ticks_left: u32,
}

/// A single destructible cover object (axis-aligned box).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverObject {
    pub position: Vec3,
    pub kind: CoverKind,
    /// Box half-extents on x/y/z, fixed per kind.
    pub half_extents: Vec3,
    pub health: f64,
    pub max_health: f64,
    /// Terminal; destroyed covers never match any query again.
    pub destroyed: bool,
    pub decals: Vec<DamageDecal>,
}

impl CoverObject {
    pub fn new(position: Vec3, kind: CoverKind) -> Self {
        let (w, h, d) = match kind {
            CoverKind::Wall => (80.0, 60.0, 20.0),
            CoverKind::Barrier => (60.0, 40.0, 15.0),
            CoverKind::Pillar => (30.0, 80.0, 30.0),
        };
        Self {
            position,
            kind,
            half_extents: Vec3::new(w / 2.0, h / 2.0, d / 2.0),
            health: COVER_MAX_HEALTH,
            max_health: COVER_MAX_HEALTH,
            destroyed: false,
            decals: Vec::new(),
        }
    }

    /// True iff `point` lies within this cover's box expanded by `radius`.
    /// Always false once destroyed.
    pub fn blocks_point(&self, point: &Vec3, radius: f64) -> bool {
        if self.destroyed {
            return false;
        }
        let expanded = Vec3::new(
            self.half_extents.x + radius,
            self.half_extents.y + radius,
            self.half_extents.z + radius,
        );
        geom::point_vs_box(point, &self.position, &expanded)
    }

    /// Apply damage at an impact point. Records a decal and returns true
    /// when this hit destroys the cover.
    pub fn take_damage(&mut self, amount: f64, impact: Vec3) -> bool {
        if self.destroyed {
            return false;
        }
        self.health -= amount;
        self.decals.push(DamageDecal {
            position: impact,
            ticks_left: COVER_DECAL_TICKS,
        });
        if self.health <= 0.0 {
            self.health = 0.0;
            self.destroyed = true;
            return true;
        }
        false
    }

    /// Advance decal timers, dropping expired ones.
    fn tick_decals(&mut self) {
        self.decals.retain_mut(|d| {
            d.ticks_left = d.ticks_left.saturating_sub(1);
            d.ticks_left > 0
        });
    }
}

/// The arena's complete set of cover objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverField {
    pub covers: Vec<CoverObject>,
}

impl CoverField {
    /// The fixed arena layout: four walls, four barriers, four pillars.
    pub fn standard_arena() -> Self {
        let mut covers = Vec::with_capacity(12);

        covers.push(CoverObject::new(Vec3::new(-200.0, 0.0, 30.0), CoverKind::Wall));
        covers.push(CoverObject::new(Vec3::new(200.0, 0.0, 30.0), CoverKind::Wall));
        covers.push(CoverObject::new(Vec3::new(0.0, -200.0, 30.0), CoverKind::Wall));
        covers.push(CoverObject::new(Vec3::new(0.0, 200.0, 30.0), CoverKind::Wall));

        covers.push(CoverObject::new(Vec3::new(-100.0, -100.0, 20.0), CoverKind::Barrier));
        covers.push(CoverObject::new(Vec3::new(100.0, 100.0, 20.0), CoverKind::Barrier));
        covers.push(CoverObject::new(Vec3::new(-100.0, 100.0, 20.0), CoverKind::Barrier));
        covers.push(CoverObject::new(Vec3::new(100.0, -100.0, 20.0), CoverKind::Barrier));

        covers.push(CoverObject::new(Vec3::new(-150.0, -150.0, 40.0), CoverKind::Pillar));
        covers.push(CoverObject::new(Vec3::new(150.0, 150.0, 40.0), CoverKind::Pillar));
        covers.push(CoverObject::new(Vec3::new(-150.0, 150.0, 40.0), CoverKind::Pillar));
        covers.push(CoverObject::new(Vec3::new(150.0, -150.0, 40.0), CoverKind::Pillar));

        Self { covers }
    }

    /// Index of the first non-destroyed cover hit by a point + radius.
    pub fn first_hit(&self, point: &Vec3, radius: f64) -> Option<usize> {
        self.covers
            .iter()
            .position(|c| c.blocks_point(point, radius))
    }

    /// True iff any non-destroyed cover blocks the sampled segment.
    pub fn occluded(&self, from: &Vec3, to: &Vec3) -> bool {
        occlusion::segment_occluded(from, to, &self.covers)
    }

    /// Index of the cover shielding `player` from `enemy`, if any.
    /// Samples from the enemy toward the player, matching the detection
    /// geometry enemies use.
    pub fn cover_between(&self, player: &Vec3, enemy: &Vec3) -> Option<usize> {
        self.covers
            .iter()
            .position(|c| occlusion::segment_occluded(enemy, player, std::slice::from_ref(c)))
    }

    /// Advance all decal timers.
    pub fn tick(&mut self) {
        for cover in &mut self.covers {
            cover.tick_decals();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_sequence_and_destruction() {
        let mut cover = CoverObject::new(Vec3::new(0.0, 0.0, 30.0), CoverKind::Wall);
        let impact = Vec3::new(0.0, -30.0, 30.0);

        for expected in [75.0, 50.0, 25.0] {
            let destroyed = cover.take_damage(25.0, impact);
            assert!(!destroyed);
            assert_eq!(cover.health, expected);
            assert!(!cover.destroyed);
        }

        let destroyed = cover.take_damage(25.0, impact);
        assert!(destroyed);
        assert_eq!(cover.health, 0.0);
        assert!(cover.destroyed);
        assert_eq!(cover.decals.len(), 4);

        // Destroyed covers ignore further damage and all collision queries
        assert!(!cover.take_damage(25.0, impact));
        assert!(!cover.blocks_point(&cover.position, 50.0));
    }

    #[test]
    fn test_decal_expiry() {
        let mut cover = CoverObject::new(Vec3::new(0.0, 0.0, 30.0), CoverKind::Barrier);
        cover.take_damage(25.0, Vec3::new(0.0, -20.0, 20.0));
        for _ in 0..COVER_DECAL_TICKS {
            cover.tick_decals();
        }
        assert!(cover.decals.is_empty());
    }

    #[test]
    fn test_first_hit_skips_destroyed() {
        let mut field = CoverField::standard_arena();
        let wall_pos = field.covers[0].position;
        assert_eq!(field.first_hit(&wall_pos, 8.0), Some(0));

        // Destroy the first wall; the point no longer hits anything
        for _ in 0..4 {
            field.covers[0].take_damage(25.0, wall_pos);
        }
        assert_eq!(field.first_hit(&wall_pos, 8.0), None);
    }

    #[test]
    fn test_cover_between() {
        let field = CoverField::standard_arena();
        // Wall at (-200, 0, 30); enemy beyond it, player at the origin side
        let player = Vec3::new(-100.0, 0.0, 30.0);
        let enemy = Vec3::new(-300.0, 0.0, 25.0);
        assert_eq!(field.cover_between(&player, &enemy), Some(0));

        // No cover along the open diagonal between barriers
        let player = Vec3::new(0.0, 0.0, 30.0);
        let enemy = Vec3::new(0.0, 50.0, 25.0);
        assert_eq!(field.cover_between(&player, &enemy), None);
    }
}
