//! Sampled line-of-sight occlusion.
//!
//! Steps along the segment at unit intervals and tests each sample against
//! the covers' boxes expanded by a fixed margin. Deliberately approximate:
//! gaps narrower than one sample step, or covers thinner than the margin,
//! can be missed. Gameplay depends on this looseness, so it is preserved.

use frenzy_core::constants::OCCLUSION_MARGIN;
use frenzy_core::types::Vec3;

use crate::cover::CoverObject;

/// True iff any non-destroyed cover blocks the segment from `from` to `to`.
pub fn segment_occluded(from: &Vec3, to: &Vec3, covers: &[CoverObject]) -> bool {
    let delta = *to - *from;
    let length = delta.length();
    if length < 1.0 {
        return false;
    }
    let direction = delta.normalized();

    let steps = length.floor() as usize;
    for i in 0..steps {
        let sample = *from + direction * i as f64;
        for cover in covers {
            if cover.blocks_point(&sample, OCCLUSION_MARGIN) {
                return true;
            }
        }
    }
    false
}
