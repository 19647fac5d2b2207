// ── Point probe ──
//
// Cheap inspection query: direct path and wall loss only, no multipath.
// One reading per radiating (AP, band), strongest first. Walls are charged
// at their 2.4 GHz figure whatever the reading's band.

use crate::geometry::Point;
use crate::model::{Environment, RssiReading};
use crate::propagation::{Path, PathRoute, wall_loss_along};

/// Direct path with band-less (2.4 GHz) wall loss.
fn direct_path(env: &Environment, ap: Point, at: Point) -> Path {
    Path {
        length_m: env.floored_distance_m(ap, at),
        wall_loss_db: wall_loss_along(ap, at, &env.walls, None, None),
        extra_loss_db: 0.0,
        route: PathRoute::Direct,
    }
}

/// Every visible (SSID, band) at `at`, sorted by descending RSSI.
///
/// Disabled APs, disabled radios and radios with a blank SSID are skipped.
/// Without a usable scale there is nothing to measure and the list is empty.
pub fn sample_rssi_all_at(env: &Environment, at: Point) -> Vec<RssiReading> {
    if !env.has_scale() {
        return Vec::new();
    }

    let mut readings: Vec<RssiReading> = env
        .enabled_aps()
        .flat_map(|ap| {
            let path = direct_path(env, ap.position, at);
            ap.active_radios()
                .filter(|(_, radio)| !radio.ssid.trim().is_empty())
                .map(move |(band, radio)| RssiReading {
                    ssid: radio.ssid.clone(),
                    band,
                    rssi_dbm: path.rssi_dbm(radio.eirp_dbm(), band, env.path_loss_exponent),
                })
        })
        .collect();

    // Stable, so equal readings keep AP then band order.
    readings.sort_by(|a, b| b.rssi_dbm.total_cmp(&a.rssi_dbm));
    readings
}

/// Top probe reading at `at`, in dBm.
pub fn strongest_rssi_at(env: &Environment, at: Point) -> Option<f64> {
    sample_rssi_all_at(env, at).first().map(|r| r.rssi_dbm)
}
