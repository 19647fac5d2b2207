// ── Propagation tuning ──
//
// Every empirical constant of the multipath model in one serializable
// record. The defaults are tuning values, not physical derivations; the
// config crate exposes them as the `[propagation]` table.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const REFLECTION_RADIUS_M: f64 = 15.0;
pub const MAX_REFLECTION_WALLS: usize = 12;
pub const REFLECTION_LOS_RATIO_CUTOFF: f64 = 2.5;

pub const DIFFRACTION_RADIUS_M: f64 = 12.0;
pub const MAX_DIFFRACTION_CORNERS: usize = 16;
pub const DIFFRACTION_LOS_RATIO_CUTOFF: f64 = 2.8;
pub const DIFFRACTION_OCCLUSION_CROSSINGS: usize = 3;
pub const DIFFRACTION_BASE_LOSS_DB: f64 = 6.0;
pub const DIFFRACTION_LOSS_PER_DEGREE_DB: f64 = 0.10;
pub const DIFFRACTION_MAX_ANGLE_DEG: f64 = 120.0;

/// Single-bounce reflection knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionTuning {
    pub enabled: bool,
    /// Walls farther than this from both AP and receiver are ignored.
    pub radius_m: f64,
    pub max_walls: usize,
    /// Reject a bounce longer than `los_ratio_cutoff × LOS`.
    pub los_ratio_cutoff: f64,
}

impl Default for ReflectionTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            radius_m: REFLECTION_RADIUS_M,
            max_walls: MAX_REFLECTION_WALLS,
            los_ratio_cutoff: REFLECTION_LOS_RATIO_CUTOFF,
        }
    }
}

/// Single-corner diffraction knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffractionTuning {
    pub enabled: bool,
    /// Corners farther than this from both AP and receiver are ignored.
    pub radius_m: f64,
    pub max_corners: usize,
    /// Reject a detour longer than `los_ratio_cutoff × LOS`.
    pub los_ratio_cutoff: f64,
    /// A corner is dropped when both legs cross at least this many walls.
    pub occlusion_crossings: usize,
    pub base_loss_db: f64,
    pub loss_per_degree_db: f64,
    /// Turning angles above this add no further loss.
    pub max_angle_deg: f64,
}

impl Default for DiffractionTuning {
    fn default() -> Self {
        Self {
            enabled: true,
            radius_m: DIFFRACTION_RADIUS_M,
            max_corners: MAX_DIFFRACTION_CORNERS,
            los_ratio_cutoff: DIFFRACTION_LOS_RATIO_CUTOFF,
            occlusion_crossings: DIFFRACTION_OCCLUSION_CROSSINGS,
            base_loss_db: DIFFRACTION_BASE_LOSS_DB,
            loss_per_degree_db: DIFFRACTION_LOSS_PER_DEGREE_DB,
            max_angle_deg: DIFFRACTION_MAX_ANGLE_DEG,
        }
    }
}

impl DiffractionTuning {
    /// Knife-edge style penalty for turning `theta_deg` around a corner on a
    /// path `length_m` long, relative to a `los_m` direct path.
    pub fn loss_db(&self, theta_deg: f64, length_m: f64, los_m: f64) -> f64 {
        let theta = theta_deg.clamp(0.0, self.max_angle_deg);
        let ratio = (length_m / los_m).max(1.0);
        self.base_loss_db + self.loss_per_degree_db * theta + 10.0 * ratio.log10()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationTuning {
    pub reflection: ReflectionTuning,
    pub diffraction: DiffractionTuning,
}

impl PropagationTuning {
    /// Direct path plus wall loss only.
    pub fn los_only() -> Self {
        let mut tuning = Self::default();
        tuning.reflection.enabled = false;
        tuning.diffraction.enabled = false;
        tuning
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let checks = [
            ("reflection.radius_m", self.reflection.radius_m, 0.0),
            ("reflection.los_ratio_cutoff", self.reflection.los_ratio_cutoff, 1.0),
            ("diffraction.radius_m", self.diffraction.radius_m, 0.0),
            ("diffraction.los_ratio_cutoff", self.diffraction.los_ratio_cutoff, 1.0),
            ("diffraction.base_loss_db", self.diffraction.base_loss_db, 0.0),
            ("diffraction.loss_per_degree_db", self.diffraction.loss_per_degree_db, 0.0),
            ("diffraction.max_angle_deg", self.diffraction.max_angle_deg, 0.0),
        ];
        for (field, value, min) in checks {
            if !value.is_finite() || value < min {
                return Err(CoreError::request(
                    field,
                    format!("must be a finite number >= {min} (got {value})"),
                ));
            }
        }
        Ok(())
    }
}
