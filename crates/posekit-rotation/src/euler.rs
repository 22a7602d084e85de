//! Euler angle extraction.

use crate::types::RotationMatrix;
use posekit_math::Transform;

/// Rotations about the fixed X, Y and Z axes, applied in that order.
///
/// The combined rotation is `Rz(rz) * Ry(ry) * Rx(rx)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    /// Rotation about X (radians).
    pub rx: f64,
    /// Rotation about Y (radians), in [-π/2, π/2].
    pub ry: f64,
    /// Rotation about Z (radians).
    pub rz: f64,
}

impl EulerAngles {
    /// Create from the three angles in radians.
    pub fn new(rx: f64, ry: f64, rz: f64) -> Self {
        Self { rx, ry, rz }
    }

    /// The rotation `Rz(rz) * Ry(ry) * Rx(rx)`.
    pub fn to_transform(&self) -> Transform {
        Transform::concatenate([
            Transform::rotation_z(self.rz),
            Transform::rotation_y(self.ry),
            Transform::rotation_x(self.rx),
        ])
    }
}

/// Euler angles of a rotation matrix.
///
/// At gimbal lock (`ry = ±π/2`) the split between `rx` and `rz` is not
/// unique; the returned pair still reproduces the rotation only up to that
/// ambiguity.
pub fn matrix_to_euler(m: &RotationMatrix) -> EulerAngles {
    EulerAngles {
        rx: m[(2, 1)].atan2(m[(2, 2)]),
        ry: -m[(2, 0)].clamp(-1.0, 1.0).asin(),
        rz: m[(1, 0)].atan2(m[(0, 0)]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        assert_eq!(matrix_to_euler(&RotationMatrix::identity()), EulerAngles::default());
    }

    #[test]
    fn test_single_axis_rotations() {
        let rx = matrix_to_euler(&RotationMatrix::from(&Transform::rotation_x(0.4)));
        assert_relative_eq!(rx.rx, 0.4, epsilon = 1e-12);
        assert_relative_eq!(rx.ry, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rx.rz, 0.0, epsilon = 1e-12);

        let rz = matrix_to_euler(&RotationMatrix::from(&Transform::rotation_z(-1.1)));
        assert_relative_eq!(rz.rz, -1.1, epsilon = 1e-12);
        assert_relative_eq!(rz.rx, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let angles = EulerAngles::new(0.3, -0.5, 1.2);
        let m = RotationMatrix::from(&angles.to_transform());
        let back = matrix_to_euler(&m);
        assert_relative_eq!(back.rx, angles.rx, epsilon = 1e-12);
        assert_relative_eq!(back.ry, angles.ry, epsilon = 1e-12);
        assert_relative_eq!(back.rz, angles.rz, epsilon = 1e-12);
    }

    #[test]
    fn test_gimbal_lock_reproduces_rotation() {
        let angles = EulerAngles::new(0.0, FRAC_PI_2, 0.7);
        let m = RotationMatrix::from(&angles.to_transform());
        let back = matrix_to_euler(&m);
        assert_relative_eq!(back.ry, FRAC_PI_2, epsilon = 1e-6);
        let rebuilt = RotationMatrix::from(&back.to_transform());
        assert_relative_eq!(*rebuilt.as_matrix(), *m.as_matrix(), epsilon = 1e-6);
    }

    #[test]
    fn test_drifted_sine_is_clamped() {
        let m = RotationMatrix::from_rows([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0 - 1e-12, 0.0, 0.0]]);
        let e = matrix_to_euler(&m);
        assert!(e.ry.is_finite());
        assert_relative_eq!(e.ry, FRAC_PI_2);
    }
}
