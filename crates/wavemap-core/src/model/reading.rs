// ── Probe readings ──

use serde::{Deserialize, Serialize};

use super::band::Band;

/// One (SSID, band) signal visible at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RssiReading {
    pub ssid: String,
    pub band: Band,
    pub rssi_dbm: f64,
}
