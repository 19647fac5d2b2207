// ── Per-pixel RSSI aggregation ──
//
// Paths of one band add up in linear power; the strongest band speaks for
// an AP, and the strongest AP speaks for the pixel.

use tracing::debug;

use super::candidates::{diffraction_corners, reflection_walls};
use super::multipath::{Path, line_of_sight, single_bounce_reflection, single_corner_diffraction};
use super::path_loss::{dbm_to_mw, mw_to_dbm};
use crate::geometry::Point;
use crate::model::{AccessPoint, Band, Environment};
use crate::tuning::PropagationTuning;

/// Pruned multipath candidates for one (AP, receiver) pair. Band-independent.
#[derive(Debug, Clone, Default)]
struct Candidates {
    los_m: f64,
    reflectors: Vec<usize>,
    corners: Vec<Point>,
}

/// Evaluates received signal strength over a borrowed environment.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    env: &'a Environment,
    tuning: &'a PropagationTuning,
}

impl<'a> Aggregator<'a> {
    pub fn new(env: &'a Environment, tuning: &'a PropagationTuning) -> Self {
        debug!(
            aps = env.aps.len(),
            walls = env.walls.len(),
            reflection = tuning.reflection.enabled,
            diffraction = tuning.diffraction.enabled,
            "aggregator ready"
        );
        Self { env, tuning }
    }

    pub fn environment(&self) -> &'a Environment {
        self.env
    }

    fn candidates(&self, ap: Point, rx: Point) -> Candidates {
        let reflectors = if self.tuning.reflection.enabled {
            reflection_walls(self.env, ap, rx, &self.tuning.reflection)
        } else {
            Vec::new()
        };
        let corners = if self.tuning.diffraction.enabled {
            diffraction_corners(self.env, ap, rx, &self.tuning.diffraction)
        } else {
            Vec::new()
        };
        Candidates {
            los_m: self.env.floored_distance_m(ap, rx),
            reflectors,
            corners,
        }
    }

    fn paths_with(&self, cands: &Candidates, ap: Point, rx: Point, band: Band) -> Vec<Path> {
        let mut paths = Vec::with_capacity(1 + cands.reflectors.len() + cands.corners.len());
        paths.push(line_of_sight(self.env, ap, rx, band));
        paths.extend(cands.reflectors.iter().filter_map(|&wall| {
            single_bounce_reflection(self.env, ap, rx, wall, cands.los_m, &self.tuning.reflection, band)
        }));
        paths.extend(cands.corners.iter().filter_map(|&corner| {
            single_corner_diffraction(self.env, ap, rx, corner, cands.los_m, &self.tuning.diffraction, band)
        }));
        paths
    }

    /// Every path from `ap` to `rx` on `band` that survives pruning, direct
    /// path first.
    pub fn paths(&self, ap: Point, rx: Point, band: Band) -> Vec<Path> {
        let cands = self.candidates(ap, rx);
        self.paths_with(&cands, ap, rx, band)
    }

    /// Strongest band of one AP at `rx`, in dBm.
    ///
    /// `None` when the AP is off, has no radio on, or nothing arrives.
    pub fn ap_rssi_at(&self, ap: &AccessPoint, rx: Point) -> Option<f64> {
        if !ap.enabled {
            return None;
        }
        let cands = self.candidates(ap.position, rx);
        let exponent = self.env.path_loss_exponent;

        ap.active_radios()
            .filter_map(|(band, radio)| {
                let eirp = radio.eirp_dbm();
                let total_mw: f64 = self
                    .paths_with(&cands, ap.position, rx, band)
                    .iter()
                    .map(|p| dbm_to_mw(p.rssi_dbm(eirp, band, exponent)))
                    .filter(|mw| mw.is_finite())
                    .sum();
                (total_mw > 0.0).then(|| mw_to_dbm(total_mw))
            })
            .max_by(f64::total_cmp)
    }

    /// Strongest AP at `rx`, in dBm. `None` when no AP reaches the point.
    pub fn strongest_rssi_at(&self, rx: Point) -> Option<f64> {
        self.env
            .enabled_aps()
            .filter_map(|ap| self.ap_rssi_at(ap, rx))
            .max_by(f64::total_cmp)
    }
}
