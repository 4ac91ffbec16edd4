//! Projectile-vs-entity hitboxes.
//!
//! Two implementations behind one trait: enemies use a single scaled
//! sphere, the player a composite head-sphere + torso-box. Callers always
//! go through the trait; there is no capability probing at call sites.

use frenzy_core::types::Vec3;

use crate::geom;

/// Anything a projectile can hit.
pub trait Hitbox {
    /// True iff a sphere at `center` with `radius` intersects this hitbox.
    fn intersects_sphere(&self, center: &Vec3, radius: f64) -> bool;
}

/// Simple-radius hitbox.
#[derive(Debug, Clone, Copy)]
pub struct SphereHitbox {
    pub center: Vec3,
    pub radius: f64,
}

impl Hitbox for SphereHitbox {
    fn intersects_sphere(&self, center: &Vec3, radius: f64) -> bool {
        geom::sphere_vs_sphere(&self.center, self.radius, center, radius)
    }
}

/// Axis-aligned box hitbox, tested as point-in-expanded-box.
#[derive(Debug, Clone, Copy)]
pub struct BoxHitbox {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Hitbox for BoxHitbox {
    fn intersects_sphere(&self, center: &Vec3, radius: f64) -> bool {
        let expanded = Vec3::new(
            self.half_extents.x + radius,
            self.half_extents.y + radius,
            self.half_extents.z + radius,
        );
        geom::point_vs_box(center, &self.center, &expanded)
    }
}

/// Humanoid hitbox: head sphere plus torso box.
#[derive(Debug, Clone, Copy)]
pub struct CompositeHitbox {
    pub head: SphereHitbox,
    pub torso: BoxHitbox,
}

impl Hitbox for CompositeHitbox {
    fn intersects_sphere(&self, center: &Vec3, radius: f64) -> bool {
        self.head.intersects_sphere(center, radius)
            || self.torso.intersects_sphere(center, radius)
    }
}
