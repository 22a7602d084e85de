//! Axis-angle extraction from rotation matrices.
//!
//! The matrix is first classified by its symmetry: a (numerically)
//! symmetric rotation matrix is either the identity or a half turn, where
//! the general formula divides by `sin(angle) ≈ 0`. Each case then has its
//! own closed form.

use crate::error::Result;
use crate::settings::ExtractSettings;
use crate::types::{AxisAngle, RotationMatrix};
use posekit_math::Vec3;
use rayon::prelude::*;
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Axis reported for the zero rotation, before scaling by the zero angle.
pub const IDENTITY_AXIS: [f64; 3] = [1.0, 0.0, 0.0];

/// Which closed form applies to a rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationCase {
    /// Symmetric with trace 3: no rotation.
    Identity,
    /// Symmetric but not the identity: a rotation by π.
    HalfTurn,
    /// Any other rotation, angle in (0, π).
    General,
}

impl RotationCase {
    /// Classify `m` using the tolerances in `settings`.
    pub fn classify(m: &RotationMatrix, settings: &ExtractSettings) -> Self {
        let pairs = off_diagonal_pairs(m);
        let symmetric = pairs
            .iter()
            .all(|(a, b)| (a - b).abs() < settings.singularity_epsilon);
        if !symmetric {
            return Self::General;
        }

        let eps = settings.identity_epsilon;
        let identity =
            pairs.iter().all(|(a, b)| (a + b).abs() < eps) && (m.trace() - 3.0).abs() < eps;
        if identity {
            Self::Identity
        } else {
            Self::HalfTurn
        }
    }
}

/// `(m_ij, m_ji)` for the three off-diagonal pairs.
fn off_diagonal_pairs(m: &RotationMatrix) -> [(f64, f64); 3] {
    [
        (m[(0, 1)], m[(1, 0)]),
        (m[(0, 2)], m[(2, 0)]),
        (m[(1, 2)], m[(2, 1)]),
    ]
}

/// Converts rotation matrices to axis-angle vectors.
///
/// Holds only immutable settings, so one extractor can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct AxisAngleExtractor {
    settings: ExtractSettings,
}

impl AxisAngleExtractor {
    /// Create an extractor after validating `settings`.
    pub fn new(settings: ExtractSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings in use.
    pub fn settings(&self) -> &ExtractSettings {
        &self.settings
    }

    /// Which closed form [`extract`](Self::extract) will use for `m`.
    pub fn classify(&self, m: &RotationMatrix) -> RotationCase {
        RotationCase::classify(m, &self.settings)
    }

    /// Axis-angle vector of `m`: unit axis scaled by the angle in [0, π].
    ///
    /// The input is not validated. A matrix that is not a proper rotation
    /// yields a numerically meaningless vector rather than an error.
    pub fn extract(&self, m: &RotationMatrix) -> AxisAngle {
        match self.classify(m) {
            RotationCase::Identity => {
                let [x, y, z] = IDENTITY_AXIS;
                AxisAngle::from_vector(Vec3::new(x, y, z) * 0.0)
            }
            RotationCase::HalfTurn => AxisAngle::from_vector(self.half_turn_axis(m) * PI),
            RotationCase::General => self.general(m),
        }
    }

    /// Extract every matrix in parallel; output order follows input order.
    pub fn extract_batch(&self, matrices: &[RotationMatrix]) -> Vec<AxisAngle> {
        matrices.par_iter().map(|m| self.extract(m)).collect()
    }

    /// Axis of a half turn, from the symmetric part `(R + I) / 2 = a aᵀ`.
    ///
    /// Pivots on the largest diagonal term. When even that one vanishes the
    /// matrix is not a real half turn and a fixed diagonal axis is returned.
    fn half_turn_axis(&self, m: &RotationMatrix) -> Vec3 {
        let eps = self.settings.singularity_epsilon;
        let fallback = self.settings.half_turn_fallback;

        let xx = (m[(0, 0)] + 1.0) / 2.0;
        let yy = (m[(1, 1)] + 1.0) / 2.0;
        let zz = (m[(2, 2)] + 1.0) / 2.0;
        let xy = (m[(0, 1)] + m[(1, 0)]) / 4.0;
        let xz = (m[(0, 2)] + m[(2, 0)]) / 4.0;
        let yz = (m[(1, 2)] + m[(2, 1)]) / 4.0;

        if xx > yy && xx > zz {
            if xx < eps {
                debug!(pivot = xx, "half-turn pivot below epsilon, using fallback axis");
                Vec3::new(0.0, fallback, fallback)
            } else {
                let x = xx.sqrt();
                Vec3::new(x, xy / x, xz / x)
            }
        } else if yy > zz {
            if yy < eps {
                debug!(pivot = yy, "half-turn pivot below epsilon, using fallback axis");
                Vec3::new(fallback, 0.0, fallback)
            } else {
                let y = yy.sqrt();
                Vec3::new(xy / y, y, yz / y)
            }
        } else if zz < eps {
            debug!(pivot = zz, "half-turn pivot below epsilon, using fallback axis");
            Vec3::new(fallback, fallback, 0.0)
        } else {
            let z = zz.sqrt();
            Vec3::new(xz / z, yz / z, z)
        }
    }

    /// Angle from the trace, axis from the skew-symmetric part.
    fn general(&self, m: &RotationMatrix) -> AxisAngle {
        let skew = Vec3::new(
            m[(2, 1)] - m[(1, 2)],
            m[(0, 2)] - m[(2, 0)],
            m[(1, 0)] - m[(0, 1)],
        );
        let mut s = skew.norm();
        if s.abs() < self.settings.norm_floor {
            debug!(norm = s, "skew part below norm floor, axis left unnormalised");
            s = 1.0;
        }

        let cos = (m.trace() - 1.0) / 2.0;
        let angle = if self.settings.clamp_cosine {
            clamp_cosine(cos).acos()
        } else {
            cos.acos()
        };
        AxisAngle::from_vector(skew / s * angle)
    }
}

/// Clamp a cosine that drifted outside [-1, 1].
fn clamp_cosine(cos: f64) -> f64 {
    let clamped = cos.clamp(-1.0, 1.0);
    if clamped != cos {
        trace!(cos, "cosine outside [-1, 1], clamped");
    }
    clamped
}

/// Axis-angle vector of `m` with the default settings.
pub fn extract_axis_angle(m: &RotationMatrix) -> AxisAngle {
    AxisAngleExtractor::default().extract(m)
}
