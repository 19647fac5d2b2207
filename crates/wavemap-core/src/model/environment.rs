// ── Environment snapshot ──
//
// The read model the engine consumes. Built by the caller, handed in by
// reference, never mutated during a generation.

use serde::{Deserialize, Serialize};

use super::access_point::AccessPoint;
use super::wall::Wall;
use crate::error::CoreError;
use crate::geometry::Point;

/// Near-field floor applied to every AP→receiver distance, in meters.
pub const MIN_DISTANCE_M: f64 = 0.10;

/// Default log-distance path-loss exponent.
pub const DEFAULT_PATH_LOSS_EXPONENT: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub aps: Vec<AccessPoint>,
    pub walls: Vec<Wall>,
    /// Meters per pixel.
    pub scale_m_per_px: f64,
    pub path_loss_exponent: f64,
    pub min_distance_m: f64,
}

impl Environment {
    pub fn new(scale_m_per_px: f64, path_loss_exponent: f64) -> Self {
        Self {
            aps: Vec::new(),
            walls: Vec::new(),
            scale_m_per_px,
            path_loss_exponent,
            min_distance_m: MIN_DISTANCE_M,
        }
    }

    pub fn with_ap(mut self, ap: AccessPoint) -> Self {
        self.aps.push(ap);
        self
    }

    pub fn with_wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    /// Whether the scale is usable (finite and positive).
    pub fn has_scale(&self) -> bool {
        self.scale_m_per_px.is_finite() && self.scale_m_per_px > 0.0
    }

    /// Pixel distance converted to meters.
    pub fn to_meters(&self, px: f64) -> f64 {
        px * self.scale_m_per_px
    }

    /// Meters between two pixel-space points, floored at the near-field minimum.
    pub fn floored_distance_m(&self, a: Point, b: Point) -> f64 {
        self.to_meters(a.distance(b)).max(self.min_distance_m)
    }

    /// Access points that are switched on.
    pub fn enabled_aps(&self) -> impl Iterator<Item = &AccessPoint> {
        self.aps.iter().filter(|ap| ap.enabled)
    }

    /// Check the preconditions the engine relies on.
    ///
    /// An empty AP list is fine: it simply produces no signal anywhere.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.has_scale() {
            return Err(CoreError::environment(
                "scale_m_per_px",
                format!("must be a positive number (got {})", self.scale_m_per_px),
            ));
        }
        if !self.path_loss_exponent.is_finite() || self.path_loss_exponent <= 0.0 {
            return Err(CoreError::environment(
                "path_loss_exponent",
                format!("must be a positive number (got {})", self.path_loss_exponent),
            ));
        }
        if !self.min_distance_m.is_finite() || self.min_distance_m <= 0.0 {
            return Err(CoreError::environment(
                "min_distance_m",
                format!("must be a positive number (got {})", self.min_distance_m),
            ));
        }
        Ok(())
    }
}

/// Meters per pixel from a reference segment of known real length.
pub fn scale_from_reference(a: Point, b: Point, real_meters: f64) -> Result<f64, CoreError> {
    if !real_meters.is_finite() || real_meters <= 0.0 {
        return Err(CoreError::environment(
            "reference",
            format!("real length must be a positive number of meters (got {real_meters})"),
        ));
    }
    let px = a.distance(b);
    if px < 1.0 {
        return Err(CoreError::environment(
            "reference",
            "segment is shorter than one pixel",
        ));
    }
    Ok(real_meters / px)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::model::WallMaterial;

    #[test]
    fn builder_collects_aps_and_walls() {
        let env = Environment::new(0.05, 2.5)
            .with_ap(AccessPoint::new("AP-1", (0.0, 0.0)))
            .with_wall(Wall::new((5.0, -5.0), (5.0, 5.0), WallMaterial::Drywall));
        assert_eq!(env.aps.len(), 1);
        assert_eq!(env.walls.len(), 1);
        assert_eq!(env.min_distance_m, MIN_DISTANCE_M);
    }

    #[test]
    fn distance_is_scaled_and_floored() {
        let env = Environment::new(0.05, 2.5);
        let d = env.floored_distance_m(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((d - 5.0).abs() < 1e-12);
        assert_eq!(env.floored_distance_m(Point::new(3.0, 3.0), Point::new(3.0, 3.0)), 0.10);
    }

    #[test]
    fn validation_rejects_missing_scale() {
        let err = Environment::new(f64::NAN, 2.5).validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnvironment { ref field, .. } if field == "scale_m_per_px"));
        assert!(Environment::new(0.0, 2.5).validate().is_err());
        assert!(Environment::new(0.05, 0.0).validate().is_err());
        assert!(Environment::new(0.05, 2.5).validate().is_ok());
    }

    #[test]
    fn scale_from_reference_segment() {
        let scale = scale_from_reference(Point::new(0.0, 0.0), Point::new(200.0, 0.0), 5.0).unwrap();
        assert!((scale - 0.025).abs() < 1e-12);
        assert!(scale_from_reference(Point::new(0.0, 0.0), Point::new(0.0, 0.0), 5.0).is_err());
        assert!(scale_from_reference(Point::new(0.0, 0.0), Point::new(10.0, 0.0), -1.0).is_err());
    }
}
