#![warn(missing_docs)]

//! Small geometric helpers for posekit.
//!
//! Signed angles between vectors and circle-circle intersection, the
//! building blocks of simple planar linkage and tool-orientation math.

pub mod angle;
pub mod circle;
pub mod error;

pub use angle::signed_angle;
pub use circle::{circle_circle_intersection, Circle};
pub use error::{GeomError, Result};
