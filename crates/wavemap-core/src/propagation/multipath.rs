// ── Multipath path builders ──
//
// One direct path, single-bounce reflections (image-source method) and
// single-corner diffractions. Builders return `None` when a candidate does
// not produce a usable path; the caller simply skips it.

use serde::Serialize;

use super::attenuation::wall_loss_along;
use super::path_loss::path_loss_db;
use crate::geometry::{Point, angle_deg, reflect_point_over_line, segment_intersection_point};
use crate::model::{Band, Environment};
use crate::tuning::{DiffractionTuning, ReflectionTuning};

/// How a path gets from the AP to the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum PathRoute {
    Direct,
    /// Bounced once off `env.walls[wall]` at `point`.
    Reflection { wall: usize, point: Point },
    /// Bent once around a wall endpoint.
    Diffraction { corner: Point },
}

/// One propagation path between an AP and a receiver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Path {
    /// Total travelled distance, in meters.
    pub length_m: f64,
    /// Through-wall attenuation summed over every leg, in dB.
    pub wall_loss_db: f64,
    /// Reflection or diffraction penalty, in dB. Zero for the direct path.
    pub extra_loss_db: f64,
    pub route: PathRoute,
}

impl Path {
    /// Total loss along this path for `band`.
    pub fn total_loss_db(&self, band: Band, exponent: f64) -> f64 {
        path_loss_db(self.length_m, band.freq_ghz(), exponent) + self.wall_loss_db + self.extra_loss_db
    }

    /// Received power for a transmitter radiating `eirp_dbm`.
    pub fn rssi_dbm(&self, eirp_dbm: f64, band: Band, exponent: f64) -> f64 {
        eirp_dbm - self.total_loss_db(band, exponent)
    }
}

/// The direct path. Always exists.
pub fn line_of_sight(env: &Environment, ap: Point, rx: Point, band: Band) -> Path {
    Path {
        length_m: env.floored_distance_m(ap, rx),
        wall_loss_db: wall_loss_along(ap, rx, &env.walls, None, Some(band)),
        extra_loss_db: 0.0,
        route: PathRoute::Direct,
    }
}

/// Single bounce off `env.walls[wall]`.
///
/// The AP is mirrored across the wall's infinite line; the bounce point is
/// where mirror→receiver crosses the wall segment. The reflector itself is
/// not counted as a through-wall loss on either leg. Paths longer than
/// `los_ratio_cutoff × los_m` are rejected.
pub fn single_bounce_reflection(
    env: &Environment,
    ap: Point,
    rx: Point,
    wall: usize,
    los_m: f64,
    tuning: &ReflectionTuning,
    band: Band,
) -> Option<Path> {
    let reflector = env.walls.get(wall)?;
    let mirror = reflect_point_over_line(ap, reflector.start, reflector.end);
    let point = segment_intersection_point(mirror, rx, reflector.start, reflector.end)?;

    let length_m = env.to_meters(ap.distance(point) + point.distance(rx));
    if !length_m.is_finite() || length_m > los_m * tuning.los_ratio_cutoff {
        return None;
    }

    let wall_loss_db = wall_loss_along(ap, point, &env.walls, Some(wall), Some(band))
        + wall_loss_along(point, rx, &env.walls, Some(wall), Some(band));

    Some(Path {
        length_m,
        wall_loss_db,
        extra_loss_db: reflector.reflection_loss_db(),
        route: PathRoute::Reflection { wall, point },
    })
}

/// Single diffraction around `corner`.
///
/// Both legs pay full wall loss. The penalty grows with the turning angle
/// at the corner and with the detour relative to `los_m`.
pub fn single_corner_diffraction(
    env: &Environment,
    ap: Point,
    rx: Point,
    corner: Point,
    los_m: f64,
    tuning: &DiffractionTuning,
    band: Band,
) -> Option<Path> {
    let length_m = env.to_meters(ap.distance(corner) + corner.distance(rx));
    if !length_m.is_finite() || length_m > los_m * tuning.los_ratio_cutoff {
        return None;
    }

    let theta = angle_deg(ap - corner, rx - corner);
    let wall_loss_db = wall_loss_along(ap, corner, &env.walls, None, Some(band))
        + wall_loss_along(corner, rx, &env.walls, None, Some(band));

    Some(Path {
        length_m,
        wall_loss_db,
        extra_loss_db: tuning.loss_db(theta, length_m, los_m),
        route: PathRoute::Diffraction { corner },
    })
}
