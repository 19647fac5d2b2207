// ── Candidate pruning ──
//
// Full multipath over every wall is quadratic per pixel. These keep only the
// reflectors and corners near the AP or the receiver, nearest first.

use std::collections::HashSet;

use super::attenuation::wall_cross_count;
use crate::geometry::{Point, closest_point_on_segment};
use crate::model::Environment;
use crate::tuning::{DiffractionTuning, ReflectionTuning};

/// Indices into `env.walls` worth trying as reflectors, nearest first.
///
/// A wall scores the smaller of its distances to the AP and to the
/// receiver; walls beyond the radius are dropped.
pub fn reflection_walls(
    env: &Environment,
    ap: Point,
    rx: Point,
    tuning: &ReflectionTuning,
) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = env
        .walls
        .iter()
        .enumerate()
        .filter_map(|(i, wall)| {
            let to_ap = ap.distance(closest_point_on_segment(ap, wall.start, wall.end));
            let to_rx = rx.distance(closest_point_on_segment(rx, wall.start, wall.end));
            let score = env.to_meters(to_ap.min(to_rx));
            (score <= tuning.radius_m).then_some((i, score))
        })
        .collect();

    // Stable: ties keep wall order.
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.truncate(tuning.max_walls);
    ranked.into_iter().map(|(i, _)| i).collect()
}

/// Integer-pixel key used to merge shared corners.
fn corner_key(p: Point) -> (i64, i64) {
    #[allow(clippy::cast_possible_truncation)]
    let key = (p.x.round() as i64, p.y.round() as i64);
    key
}

/// Wall endpoints worth trying as diffraction corners, nearest first.
///
/// Corners shared by several walls are kept once. A corner hidden behind
/// `occlusion_crossings` walls on both legs is dropped.
pub fn diffraction_corners(
    env: &Environment,
    ap: Point,
    rx: Point,
    tuning: &DiffractionTuning,
) -> Vec<Point> {
    let mut ranked: Vec<(Point, f64)> = env
        .walls
        .iter()
        .flat_map(|wall| wall.corners())
        .filter_map(|corner| {
            let score = env.to_meters(ap.distance(corner).min(rx.distance(corner)));
            (score <= tuning.radius_m).then_some((corner, score))
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut seen = HashSet::new();
    let mut corners = Vec::new();
    for (corner, _) in ranked {
        if corners.len() >= tuning.max_corners {
            break;
        }
        if !seen.insert(corner_key(corner)) {
            continue;
        }
        let occluded = wall_cross_count(ap, corner, &env.walls, None) >= tuning.occlusion_crossings
            && wall_cross_count(corner, rx, &env.walls, None) >= tuning.occlusion_crossings;
        if !occluded {
            corners.push(corner);
        }
    }
    corners
}
