//! Numeric settings of the axis-angle extractor.

use crate::error::{Result, RotationError};
use serde::{Deserialize, Serialize};

/// Tolerances and fallback constants used by [`AxisAngleExtractor`](crate::AxisAngleExtractor).
///
/// The defaults reproduce the classic closed-form extraction; missing keys
/// in a settings document fall back to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Maximum `|m_ij - m_ji|` for the matrix to count as symmetric (0° or 180°).
    pub singularity_epsilon: f64,
    /// Maximum `|m_ij + m_ji|` and `|trace - 3|` for a symmetric matrix to count as identity.
    pub identity_epsilon: f64,
    /// Below this, the axis normaliser of the general case is replaced by 1.
    pub norm_floor: f64,
    /// Axis component used for a half turn whose pivot diagonal term vanishes.
    pub half_turn_fallback: f64,
    /// Clamp the cosine term to [-1, 1] before `acos`.
    pub clamp_cosine: bool,
}

impl ExtractSettings {
    /// Default settings (`0.01` tolerances, `0.001` floor, `0.7071` fallback, clamping on).
    pub const DEFAULT: Self = Self {
        singularity_epsilon: 0.01,
        identity_epsilon: 0.01,
        norm_floor: 0.001,
        half_turn_fallback: 0.7071,
        clamp_cosine: true,
    };

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("singularity_epsilon", self.singularity_epsilon),
            ("identity_epsilon", self.identity_epsilon),
            ("norm_floor", self.norm_floor),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RotationError::InvalidSettings(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.half_turn_fallback > 0.0 && self.half_turn_fallback <= 1.0) {
            return Err(RotationError::InvalidSettings(format!(
                "half_turn_fallback must be in (0, 1], got {}",
                self.half_turn_fallback
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}
