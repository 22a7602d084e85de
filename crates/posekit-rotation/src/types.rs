//! Input and output value types of the extractor.

use nalgebra::Matrix4;
use posekit_math::{Dir3, Mat3, Tolerance, Transform, Vec3};
use std::ops::Index;

/// A 3x3 rotation matrix, indexed `m[(row, col)]`.
///
/// Assumed orthogonal with determinant +1; nothing checks this. A 4x4
/// homogeneous matrix converts by keeping its upper-left block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix(Mat3);

impl RotationMatrix {
    /// The identity rotation.
    pub fn identity() -> Self {
        Self(Mat3::identity())
    }

    /// Build from nine coefficients given row by row.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self(Mat3::new(
            r0[0], r0[1], r0[2], //
            r1[0], r1[1], r1[2], //
            r2[0], r2[1], r2[2],
        ))
    }

    /// Keep the upper-left 3x3 block of a homogeneous matrix.
    pub fn from_homogeneous(m: &Matrix4<f64>) -> Self {
        Self(m.fixed_view::<3, 3>(0, 0).into_owned())
    }

    /// The underlying matrix.
    pub fn as_matrix(&self) -> &Mat3 {
        &self.0
    }

    /// Sum of the diagonal terms.
    pub fn trace(&self) -> f64 {
        self.0.trace()
    }
}

impl Index<(usize, usize)> for RotationMatrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.0[index]
    }
}

impl From<Mat3> for RotationMatrix {
    fn from(m: Mat3) -> Self {
        Self(m)
    }
}

impl From<Matrix4<f64>> for RotationMatrix {
    fn from(m: Matrix4<f64>) -> Self {
        Self::from_homogeneous(&m)
    }
}

impl From<&Transform> for RotationMatrix {
    fn from(t: &Transform) -> Self {
        Self(t.rotation_block())
    }
}

/// A rotation packed into one vector: direction is the axis, length is the angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle(Vec3);

impl AxisAngle {
    /// The zero rotation.
    pub fn zero() -> Self {
        Self(Vec3::zeros())
    }

    /// Rotation of `angle` radians about `axis`.
    pub fn new(axis: &Dir3, angle: f64) -> Self {
        Self(axis.into_inner() * angle)
    }

    /// Wrap an already scaled rotation vector.
    pub fn from_vector(v: Vec3) -> Self {
        Self(v)
    }

    /// The rotation vector.
    pub fn vector(&self) -> Vec3 {
        self.0
    }

    /// `[x, y, z]` components of the rotation vector.
    pub fn components(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Rotation angle in radians (the vector length).
    pub fn angle(&self) -> f64 {
        self.0.norm()
    }

    /// Unit rotation axis, or `None` for a zero rotation.
    pub fn axis(&self) -> Option<Dir3> {
        Dir3::try_new(self.0, Tolerance::DEFAULT.linear)
    }

    /// Homogeneous rotation transform for this rotation.
    pub fn to_transform(&self) -> Transform {
        match self.axis() {
            Some(axis) => Transform::rotation_about_axis(&axis, self.angle()),
            None => Transform::identity(),
        }
    }
}

impl From<AxisAngle> for Vec3 {
    fn from(a: AxisAngle) -> Self {
        a.0
    }
}
