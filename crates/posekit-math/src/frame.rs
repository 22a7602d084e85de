//! Right-handed coordinate frames.

use crate::{Dir3, MathError, Point3, Result, Tolerance, Transform, Vec3};
use nalgebra::Matrix4;

/// An origin with orthonormal x and y axes; z is `x × y`.
///
/// This is the "plane" a robot target is usually authored as: the origin is
/// the tool position and the axes give the tool orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Frame origin.
    pub origin: Point3,
    /// Unit x axis.
    pub x_axis: Dir3,
    /// Unit y axis, orthogonal to `x_axis`.
    pub y_axis: Dir3,
}

impl Frame {
    /// Build a frame from an origin and two axis hints.
    ///
    /// The x axis keeps its direction; the y axis is re-orthogonalized
    /// against it within the plane the two hints span.
    pub fn new(origin: Point3, x_axis: Vec3, y_axis: Vec3) -> Result<Self> {
        let eps = Tolerance::DEFAULT.linear;
        let x = x_axis
            .try_normalize(eps)
            .ok_or(MathError::ZeroLengthAxis("x"))?;
        let y = y_axis
            .try_normalize(eps)
            .ok_or(MathError::ZeroLengthAxis("y"))?;
        let z = x.cross(&y);
        if Tolerance::DEFAULT.is_zero(z.norm()) {
            return Err(MathError::ParallelAxes);
        }
        let y = z.normalize().cross(&x);
        Ok(Self {
            origin,
            x_axis: Dir3::new_unchecked(x),
            y_axis: Dir3::new_normalize(y),
        })
    }

    /// The world XY frame: origin at zero, axes along X and Y.
    pub fn world_xy() -> Self {
        Self {
            origin: Point3::origin(),
            x_axis: Vec3::x_axis(),
            y_axis: Vec3::y_axis(),
        }
    }

    /// Unit z axis (`x × y`).
    pub fn z_axis(&self) -> Dir3 {
        Dir3::new_normalize(self.x_axis.cross(self.y_axis.as_ref()))
    }

    /// Whether this frame coincides with [`Frame::world_xy`] within `tol`.
    pub fn is_world_xy(&self, tol: &Tolerance) -> bool {
        let world = Self::world_xy();
        tol.points_equal(&self.origin, &world.origin)
            && tol.dirs_equal(&self.x_axis, &world.x_axis)
            && tol.dirs_equal(&self.y_axis, &world.y_axis)
    }

    /// Placement transform: maps frame-local coordinates to world coordinates.
    pub fn to_transform(&self) -> Transform {
        let z = self.z_axis();
        let mut m = Matrix4::identity();
        for i in 0..3 {
            m[(i, 0)] = self.x_axis[i];
            m[(i, 1)] = self.y_axis[i];
            m[(i, 2)] = z[i];
            m[(i, 3)] = self.origin[i];
        }
        Transform::from_matrix(m)
    }

    /// Inverse of [`Frame::to_transform`]: maps world coordinates into the frame.
    pub fn inverse_transform(&self) -> Transform {
        let z = self.z_axis();
        let o = self.origin.coords;
        let mut m = Matrix4::identity();
        for (row, axis) in [self.x_axis, self.y_axis, z].iter().enumerate() {
            for col in 0..3 {
                m[(row, col)] = axis[col];
            }
            m[(row, 3)] = -axis.dot(&o);
        }
        Transform::from_matrix(m)
    }

    /// Apply a transform to the origin and both axes.
    ///
    /// Fails if the transform collapses the axes (e.g. a zero scale).
    pub fn transformed(&self, t: &Transform) -> Result<Self> {
        Self::new(
            t.apply_point(&self.origin),
            t.apply_vec(self.x_axis.as_ref()),
            t.apply_vec(self.y_axis.as_ref()),
        )
    }

    /// Re-express a frame authored relative to `base` in the coordinates `base` lives in.
    ///
    /// Used to carry targets modelled on a build plate into robot base coordinates.
    pub fn rebased_onto(&self, base: &Frame) -> Result<Self> {
        self.transformed(&Transform::frame_to_frame(&Frame::world_xy(), base))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::world_xy()
    }
}
