//! Error types for the math crate.

use thiserror::Error;

/// Errors that can occur when building math types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// An axis vector has (near) zero length.
    #[error("{0} axis has zero length")]
    ZeroLengthAxis(&'static str),

    /// The x and y axes of a frame are parallel.
    #[error("frame axes are parallel")]
    ParallelAxes,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;
