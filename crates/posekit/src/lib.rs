#![warn(missing_docs)]

//! Robot pose math facade for posekit.
//!
//! Re-exports the math, rotation and geometry crates and adds [`Pose`]:
//! a target position plus axis-angle orientation, the value a robot
//! controller expects for a Cartesian target or tool center point.
//!
//! # Example
//!
//! ```
//! use posekit::{Frame, Point3, Pose, Vec3};
//!
//! let target = Frame::new(Point3::new(400.0, 0.0, 250.0), Vec3::x(), -Vec3::y()).unwrap();
//! let pose = Pose::from_frame(&target);
//! assert!((pose.x - 0.4).abs() < 1e-12);
//! assert!((pose.rotation().angle() - std::f64::consts::PI).abs() < 1e-12);
//! ```

pub use posekit_geom;
pub use posekit_math;
pub use posekit_rotation;

pub use posekit_geom::{circle_circle_intersection, signed_angle, Circle, GeomError};
pub use posekit_math::{
    DhParameters, Dir3, Frame, Mat3, MathError, Point3, Tolerance, Transform, Vec3,
};
pub use posekit_rotation::{
    extract_axis_angle, matrix_to_euler, AxisAngle, AxisAngleExtractor, EulerAngles,
    ExtractSettings, RotationCase, RotationError, RotationMatrix,
};

mod pose;

pub use pose::{Pose, MM_PER_M};
