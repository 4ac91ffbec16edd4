//! Collision predicates. Axis-aligned only; no rotation support.

use frenzy_core::types::Vec3;

/// True iff the two spheres overlap (strict inequality).
pub fn sphere_vs_sphere(c1: &Vec3, r1: f64, c2: &Vec3, r2: f64) -> bool {
    c1.distance_to(c2) < r1 + r2
}

/// True iff `p` lies strictly inside the axis-aligned box.
pub fn point_vs_box(p: &Vec3, center: &Vec3, half_extents: &Vec3) -> bool {
    (p.x - center.x).abs() < half_extents.x
        && (p.y - center.y).abs() < half_extents.y
        && (p.z - center.z).abs() < half_extents.z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_overlap() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 0.0, 0.0);
        assert!(sphere_vs_sphere(&a, 6.0, &b, 5.0));
        assert!(!sphere_vs_sphere(&a, 4.0, &b, 5.0));
        // Exactly touching is not an overlap
        assert!(!sphere_vs_sphere(&a, 5.0, &b, 5.0));
    }

    #[test]
    fn test_point_in_box() {
        let center = Vec3::new(0.0, 0.0, 0.0);
        let half = Vec3::new(10.0, 5.0, 2.0);
        assert!(point_vs_box(&Vec3::new(9.9, -4.9, 1.9), &center, &half));
        assert!(!point_vs_box(&Vec3::new(10.1, 0.0, 0.0), &center, &half));
        // On the face is outside (strict test)
        assert!(!point_vs_box(&Vec3::new(10.0, 0.0, 0.0), &center, &half));
    }
}
