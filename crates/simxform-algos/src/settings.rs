//! Solver settings
//!
//! Tolerances that control degeneracy detection and Euler extraction.
//! The defaults keep the XYZ Euler convention of the report and treat only
//! numerically coincident source points as degenerate. Both degeneracy
//! tolerances are relative, so they hold at any coordinate scale.

use serde::{Deserialize, Serialize};

use crate::euler::GIMBAL_LOCK_THRESHOLD;
use crate::AlignError;

/// Tunable tolerances for [`compute_similarity_transform_with`](crate::compute_similarity_transform_with)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignSettings {
    /// `|sy|` at or above which Euler extraction takes the gimbal-lock branch
    pub gimbal_threshold: f64,
    /// Centered source energy, relative to `Σ|p_i|²`, at or below which the
    /// source points are treated as coincident and the scale as undefined.
    /// Independent of the coordinate units.
    pub min_relative_energy: f64,
    /// Relative triangle area (`|(p1-p0)×(p2-p0)| / energy`) at or below
    /// which the source points are reported as collinear
    pub collinear_tolerance: f64,
}

impl Default for AlignSettings {
    fn default() -> Self {
        Self {
            gimbal_threshold: GIMBAL_LOCK_THRESHOLD,
            min_relative_energy: 1e-12,
            collinear_tolerance: 1e-9,
        }
    }
}

impl AlignSettings {
    /// Check every field, returning the first invalid one
    pub fn validate(&self) -> Result<(), AlignError> {
        if !self.gimbal_threshold.is_finite()
            || self.gimbal_threshold <= 0.0
            || self.gimbal_threshold > 1.0
        {
            return Err(AlignError::InvalidSetting {
                name: "gimbal_threshold",
                reason: format!("must be in (0, 1], got {}", self.gimbal_threshold),
            });
        }
        check_tolerance("min_relative_energy", self.min_relative_energy)?;
        check_tolerance("collinear_tolerance", self.collinear_tolerance)?;
        Ok(())
    }
}

fn check_tolerance(name: &'static str, value: f64) -> Result<(), AlignError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AlignError::InvalidSetting {
            name,
            reason: format!("must be a finite non-negative number, got {value}"),
        });
    }
    Ok(())
}
