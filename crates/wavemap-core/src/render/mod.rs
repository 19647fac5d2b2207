//! Heatmap rendering: grid sampling, color mapping and smoothing.

pub mod blur;
pub mod colormap;
pub mod grid;

use std::time::Instant;

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::Environment;
use crate::propagation::Aggregator;
use crate::tuning::PropagationTuning;

pub const DEFAULT_GRID_STEP_PX: u32 = 8;
pub const DEFAULT_LEGEND_MIN_DBM: f64 = -96.0;
pub const DEFAULT_LEGEND_MAX_DBM: f64 = -10.0;
pub const DEFAULT_SMOOTH_RADIUS_PX: u32 = 8;

/// What to render. Sizes are in pixels of the floorplan image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRequest {
    pub width: u32,
    pub height: u32,
    pub grid_step_px: u32,
    /// Signal painted fully green.
    pub legend_min_dbm: f64,
    /// Signal painted fully red.
    pub legend_max_dbm: f64,
    /// Box-blur radius; 0 disables smoothing.
    pub smooth_radius_px: u32,
}

impl Default for HeatmapRequest {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            grid_step_px: DEFAULT_GRID_STEP_PX,
            legend_min_dbm: DEFAULT_LEGEND_MIN_DBM,
            legend_max_dbm: DEFAULT_LEGEND_MAX_DBM,
            smooth_radius_px: DEFAULT_SMOOTH_RADIUS_PX,
        }
    }
}

impl HeatmapRequest {
    /// A `width × height` request with default grid, legend and smoothing.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::request(
                "size",
                format!("width and height must be positive (got {}x{})", self.width, self.height),
            ));
        }
        if self.grid_step_px == 0 {
            return Err(CoreError::request("grid_step_px", "must be at least 1"));
        }
        if !self.legend_min_dbm.is_finite() || !self.legend_max_dbm.is_finite() {
            return Err(CoreError::request("legend", "bounds must be finite"));
        }
        if self.legend_min_dbm >= self.legend_max_dbm {
            return Err(CoreError::request(
                "legend",
                format!(
                    "min ({}) must be below max ({})",
                    self.legend_min_dbm, self.legend_max_dbm
                ),
            ));
        }
        Ok(())
    }
}

/// Renders RSSI heatmaps for one environment snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapGenerator<'a> {
    env: &'a Environment,
    tuning: &'a PropagationTuning,
}

impl<'a> HeatmapGenerator<'a> {
    pub fn new(env: &'a Environment, tuning: &'a PropagationTuning) -> Self {
        Self { env, tuning }
    }

    /// Render `req` into an RGBA image of exactly `width × height`.
    ///
    /// Blocks no AP reaches stay fully transparent; with no enabled AP the
    /// whole image does.
    pub fn generate(&self, req: &HeatmapRequest) -> Result<RgbaImage, CoreError> {
        req.validate()?;
        self.env.validate()?;
        self.tuning.validate()?;

        let started = Instant::now();
        let img = if self.env.enabled_aps().next().is_none() {
            debug!("no enabled access points, rendering an empty heatmap");
            RgbaImage::new(req.width, req.height)
        } else {
            let agg = Aggregator::new(self.env, self.tuning);
            grid::paint(&agg, req)
        };

        let img = blur::box_blur(&img, req.smooth_radius_px);
        info!(
            width = req.width,
            height = req.height,
            grid_step = req.grid_step_px,
            elapsed_ms = started.elapsed().as_millis(),
            "heatmap rendered"
        );
        Ok(img)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::AccessPoint;

    #[test]
    fn rejects_degenerate_requests() {
        let zero_step = HeatmapRequest {
            grid_step_px: 0,
            ..HeatmapRequest::new(10, 10)
        };
        assert!(matches!(
            zero_step.validate(),
            Err(CoreError::InvalidRequest { ref field, .. }) if field == "grid_step_px"
        ));
        assert!(HeatmapRequest::new(0, 10).validate().is_err());
        assert!(HeatmapRequest::new(10, 0).validate().is_err());

        let inverted = HeatmapRequest {
            legend_min_dbm: -10.0,
            legend_max_dbm: -96.0,
            ..HeatmapRequest::new(10, 10)
        };
        assert!(inverted.validate().is_err());

        let nan = HeatmapRequest {
            legend_min_dbm: f64::NAN,
            ..HeatmapRequest::new(10, 10)
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn generate_checks_environment() {
        let env = Environment::new(0.0, 2.5).with_ap(AccessPoint::new("AP", (0.0, 0.0)));
        let tuning = PropagationTuning::default();
        let err = HeatmapGenerator::new(&env, &tuning)
            .generate(&HeatmapRequest::new(16, 16))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnvironment { .. }));
    }

    #[test]
    fn empty_environment_is_transparent() {
        let env = Environment::new(0.05, 2.5);
        let tuning = PropagationTuning::default();
        let img = HeatmapGenerator::new(&env, &tuning)
            .generate(&HeatmapRequest::new(33, 17))
            .unwrap();
        assert_eq!(img.dimensions(), (33, 17));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
