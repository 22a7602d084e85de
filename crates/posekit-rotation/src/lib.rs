#![warn(missing_docs)]

//! Rotation extraction for posekit.
//!
//! Converts rotation matrices (or the rotation block of homogeneous
//! transforms) into axis-angle vectors, the orientation format robot
//! controllers take in a pose, and into fixed-axis Euler angles.
//!
//! # Example
//!
//! ```
//! use posekit_math::{Dir3, Transform, Vec3};
//! use posekit_rotation::{extract_axis_angle, RotationMatrix};
//!
//! let axis = Dir3::new_normalize(Vec3::new(0.0, 0.0, 1.0));
//! let t = Transform::rotation_about_axis(&axis, 0.5);
//! let rot = extract_axis_angle(&RotationMatrix::from(&t));
//! assert!((rot.angle() - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod euler;
pub mod extract;
pub mod settings;
pub mod types;

pub use error::{Result, RotationError};
pub use euler::{matrix_to_euler, EulerAngles};
pub use extract::{extract_axis_angle, AxisAngleExtractor, RotationCase, IDENTITY_AXIS};
pub use settings::ExtractSettings;
pub use types::{AxisAngle, RotationMatrix};
