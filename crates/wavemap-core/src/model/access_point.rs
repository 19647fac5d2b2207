// ── Access points and their per-band radios ──

use std::fmt;

use serde::{Deserialize, Serialize};

use super::band::{Band, BandMap};
use crate::geometry::Point;

/// Default transmit power for every radio, in dBm.
pub const DEFAULT_TX_POWER_DBM: f64 = 18.0;

/// Default antenna gain for every radio, in dBi.
pub const DEFAULT_ANTENNA_GAIN_DBI: f64 = 2.0;

/// One radio of an access point. Owned by exactly one AP, one per band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioConfig {
    pub enabled: bool,
    pub ssid: String,
    pub tx_power_dbm: f64,
    pub antenna_gain_dbi: f64,
}

impl RadioConfig {
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            enabled: true,
            ssid: ssid.into(),
            tx_power_dbm: DEFAULT_TX_POWER_DBM,
            antenna_gain_dbi: DEFAULT_ANTENNA_GAIN_DBI,
        }
    }

    /// Effective isotropic radiated power: tx power plus antenna gain.
    pub fn eirp_dbm(&self) -> f64 {
        self.tx_power_dbm + self.antenna_gain_dbi
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub name: String,
    pub position: Point,
    pub enabled: bool,
    pub radios: BandMap<RadioConfig>,
}

impl AccessPoint {
    /// A new AP with all three radios enabled at default power. Each radio's
    /// SSID defaults to `{name}_{suffix}` (`AP-1_24G`, `AP-1_5G`, ...).
    pub fn new(name: impl Into<String>, position: impl Into<Point>) -> Self {
        let name = name.into();
        let radios = BandMap::from_fn(|band| {
            RadioConfig::new(format!("{name}_{}", band.ssid_suffix()))
        });
        Self {
            name,
            position: position.into(),
            enabled: true,
            radios,
        }
    }

    pub fn radio(&self, band: Band) -> &RadioConfig {
        &self.radios[band]
    }

    pub fn radio_mut(&mut self, band: Band) -> &mut RadioConfig {
        &mut self.radios[band]
    }

    /// Enable exactly the given bands, disabling the rest.
    pub fn with_bands(mut self, bands: &[Band]) -> Self {
        for band in Band::ALL {
            self.radios[band].enabled = bands.contains(&band);
        }
        self
    }

    /// Set transmit power and antenna gain on every radio.
    pub fn with_power(mut self, tx_power_dbm: f64, antenna_gain_dbi: f64) -> Self {
        for band in Band::ALL {
            let radio = &mut self.radios[band];
            radio.tx_power_dbm = tx_power_dbm;
            radio.antenna_gain_dbi = antenna_gain_dbi;
        }
        self
    }

    /// Radios that are actually radiating: the AP is on and the radio is on.
    pub fn active_radios(&self) -> impl Iterator<Item = (Band, &RadioConfig)> {
        let on = self.enabled;
        self.radios.iter().filter(move |(_, radio)| on && radio.enabled)
    }

    pub fn enabled_bands(&self) -> Vec<Band> {
        self.active_radios().map(|(band, _)| band).collect()
    }
}

impl fmt::Display for AccessPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for band in self.enabled_bands() {
            write!(f, " [{band}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn new_ap_has_three_enabled_radios_with_default_ssids() {
        let ap = AccessPoint::new("AP-1", (10.0, 20.0));
        assert_eq!(ap.enabled_bands(), Band::ALL.to_vec());
        assert_eq!(ap.radio(Band::Ghz24).ssid, "AP-1_24G");
        assert_eq!(ap.radio(Band::Ghz5).ssid, "AP-1_5G");
        assert_eq!(ap.radio(Band::Ghz6).ssid, "AP-1_6G");
        assert_eq!(ap.radio(Band::Ghz5).eirp_dbm(), 20.0);
    }

    #[test]
    fn disabled_ap_has_no_active_radios() {
        let mut ap = AccessPoint::new("lobby", (0.0, 0.0));
        ap.enabled = false;
        assert!(ap.enabled_bands().is_empty());
    }

    #[test]
    fn with_bands_toggles_radios_independently() {
        let ap = AccessPoint::new("AP-2", (0.0, 0.0)).with_bands(&[Band::Ghz5]);
        assert_eq!(ap.enabled_bands(), vec![Band::Ghz5]);
        assert!(!ap.radio(Band::Ghz24).enabled);
    }

    #[test]
    fn display_lists_active_bands() {
        let ap = AccessPoint::new("AP-3", (0.0, 0.0)).with_bands(&[Band::Ghz24, Band::Ghz6]);
        insta::assert_snapshot!(ap.to_string(), @"AP-3 [2.4 GHz] [6 GHz]");
    }
}
