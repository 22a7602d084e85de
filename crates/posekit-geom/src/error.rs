//! Error types for geometric helpers.

use thiserror::Error;

/// Errors that can occur when intersecting circles.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// Both circles share a center, so there is no unique intersection.
    #[error("circles are concentric")]
    ConcentricCircles,

    /// The circles are too far apart, or one lies inside the other.
    #[error("circles do not intersect (center distance {distance})")]
    NoIntersection {
        /// Distance between the two centers.
        distance: f64,
    },

    /// The circles do not lie in a common plane.
    #[error("circles are not coplanar")]
    NotCoplanar,

    /// A circle has a non-positive or non-finite radius.
    #[error("invalid circle radius: {0}")]
    InvalidRadius(f64),
}

/// Result type for geometric helpers.
pub type Result<T> = std::result::Result<T, GeomError>;
