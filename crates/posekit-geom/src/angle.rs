//! Signed angles between vectors.

use posekit_math::Vec3;

/// Angle from `v1` to `v2` in (-π, π], signed by the side of `normal`.
///
/// The magnitude is `atan2(|v1 × v2|, v1 · v2)`; it is negated when
/// `v1 × v2` points away from `normal`. Inputs need not be normalized.
pub fn signed_angle(v1: &Vec3, v2: &Vec3, normal: &Vec3) -> f64 {
    let n = v1.cross(v2);
    let theta = n.norm().atan2(v1.dot(v2));
    if n.dot(normal) < 0.0 {
        -theta
    } else {
        theta
    }
}
