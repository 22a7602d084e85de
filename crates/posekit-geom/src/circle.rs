//! Circles and circle-circle intersection.

use crate::error::{GeomError, Result};
use posekit_math::{Dir3, Point3, Tolerance, Vec3};
use tracing::debug;

/// A circle in 3D: center, radius and the normal of its plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
    /// Unit normal of the circle's plane.
    pub normal: Dir3,
}

impl Circle {
    /// Create a circle; the normal does not need to be normalized.
    pub fn new(center: Point3, radius: f64, normal: Vec3) -> Self {
        Self {
            center,
            radius,
            normal: Dir3::new_normalize(normal),
        }
    }

    /// A circle in a plane parallel to world XY.
    pub fn in_xy(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius,
            normal: Vec3::z_axis(),
        }
    }
}

/// The two points where coplanar circles `c1` and `c2` cross.
///
/// The first point lies on the side of `c1.normal × (c2 - c1)`. Tangent
/// circles return the touching point twice.
pub fn circle_circle_intersection(c1: &Circle, c2: &Circle) -> Result<[Point3; 2]> {
    let tol = Tolerance::DEFAULT;
    for c in [c1, c2] {
        if !c.radius.is_finite() || c.radius <= 0.0 {
            return Err(GeomError::InvalidRadius(c.radius));
        }
    }

    let between = c2.center - c1.center;
    let d = between.norm();
    if tol.is_zero(d) {
        return Err(GeomError::ConcentricCircles);
    }
    let dir = between / d;

    let parallel = c1.normal.cross(c2.normal.as_ref()).norm() < tol.angular;
    if !parallel || !tol.is_zero(dir.dot(c1.normal.as_ref()) * d) {
        return Err(GeomError::NotCoplanar);
    }

    let (r1, r2) = (c1.radius, c2.radius);
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h_sq = r1 * r1 - a * a;
    // relative slack so tangency survives rounding
    if h_sq < -tol.linear * r1 * r1 {
        return Err(GeomError::NoIntersection { distance: d });
    }
    let h = h_sq.max(0.0).sqrt();
    if h == 0.0 {
        debug!(distance = d, "circles are tangent");
    }

    let base = c1.center + dir * a;
    let offset = c1.normal.cross(&dir) * h;
    Ok([base + offset, base - offset])
}
