//! Error types for rotation extraction.

use thiserror::Error;

/// Errors that can occur when configuring the extractor.
#[derive(Error, Debug)]
pub enum RotationError {
    /// A settings value is out of range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The settings document could not be parsed.
    #[error("failed to parse settings: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for rotation operations.
pub type Result<T> = std::result::Result<T, RotationError>;
