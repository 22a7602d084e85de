//! Denavit-Hartenberg link transforms.

use crate::Transform;
use nalgebra::Matrix4;

/// Classic Denavit-Hartenberg parameters of one link.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DhParameters {
    /// Joint offset along the previous z axis.
    pub d: f64,
    /// Joint angle about the previous z axis (radians).
    pub theta: f64,
    /// Link length along the new x axis.
    pub a: f64,
    /// Link twist about the new x axis (radians).
    pub alpha: f64,
}

impl DhParameters {
    /// Create a parameter set from `(d, theta, a, alpha)`.
    pub fn new(d: f64, theta: f64, a: f64, alpha: f64) -> Self {
        Self { d, theta, a, alpha }
    }
}

impl Transform {
    /// Transform between adjacent link frames, `Rz(theta) Tz(d) Tx(a) Rx(alpha)`.
    pub fn dh(p: &DhParameters) -> Self {
        let (st, ct) = p.theta.sin_cos();
        let (sa, ca) = p.alpha.sin_cos();
        #[rustfmt::skip]
        let matrix = Matrix4::new(
            ct, -st * ca,  st * sa, p.a * ct,
            st,  ct * ca, -ct * sa, p.a * st,
            0.0,      sa,       ca,      p.d,
            0.0,     0.0,      0.0,      1.0,
        );
        Self { matrix }
    }

    /// Base-to-tip transform of a serial chain of DH links.
    pub fn dh_chain(links: &[DhParameters]) -> Self {
        Self::concatenate(links.iter().map(Self::dh))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point3, Vec3};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_dh_zero_angles_is_translation() {
        let t = Transform::dh(&DhParameters::new(5.0, 0.0, 10.0, 0.0));
        assert_relative_eq!(t.matrix, Transform::translation(10.0, 0.0, 5.0).matrix);
    }

    #[test]
    fn test_dh_theta_rotates_link_length() {
        let t = Transform::dh(&DhParameters::new(2.0, FRAC_PI_2, 10.0, 0.0));
        let tip = t.apply_point(&Point3::origin());
        assert_relative_eq!(tip, Point3::new(0.0, 10.0, 2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_dh_alpha_twists_z_axis() {
        let t = Transform::dh(&DhParameters::new(0.0, 0.0, 0.0, FRAC_PI_2));
        let z = t.apply_vec(&Vec3::z());
        assert_relative_eq!(z, Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_dh_matches_decomposition() {
        let p = DhParameters::new(0.4, 0.7, 1.3, -0.5);
        let expected = Transform::concatenate([
            Transform::rotation_z(p.theta),
            Transform::translation(0.0, 0.0, p.d),
            Transform::translation(p.a, 0.0, 0.0),
            Transform::rotation_x(p.alpha),
        ]);
        assert_relative_eq!(Transform::dh(&p).matrix, expected.matrix, epsilon = 1e-12);
    }

    #[test]
    fn test_dh_chain_planar_arm() {
        // Two 1.0 links, second joint bent 90 degrees
        let links = [
            DhParameters::new(0.0, 0.0, 1.0, 0.0),
            DhParameters::new(0.0, FRAC_PI_2, 1.0, 0.0),
        ];
        let tip = Transform::dh_chain(&links).apply_point(&Point3::origin());
        assert_relative_eq!(tip, Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(Transform::dh_chain(&[]), Transform::identity());
    }
}
