// ── Wi-Fi bands ──

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::CoreError;

const BAND_COUNT: usize = 3;

/// A Wi-Fi frequency band. Closed set, known at compile time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Band {
    #[serde(rename = "2.4ghz")]
    Ghz24,
    #[serde(rename = "5ghz")]
    Ghz5,
    #[serde(rename = "6ghz")]
    Ghz6,
}

impl Band {
    /// All bands in ascending frequency order.
    pub const ALL: [Band; BAND_COUNT] = [Band::Ghz24, Band::Ghz5, Band::Ghz6];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ghz24 => "2.4 GHz",
            Self::Ghz5 => "5 GHz",
            Self::Ghz6 => "6 GHz",
        }
    }

    /// Nominal carrier frequency used by the path-loss model.
    pub const fn freq_ghz(self) -> f64 {
        match self {
            Self::Ghz24 => 2.4,
            Self::Ghz5 => 5.0,
            Self::Ghz6 => 6.0,
        }
    }

    /// Short suffix used in default SSIDs (`AP-1_24G`).
    pub const fn ssid_suffix(self) -> &'static str {
        match self {
            Self::Ghz24 => "24G",
            Self::Ghz5 => "5G",
            Self::Ghz6 => "6G",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Ghz24 => 0,
            Self::Ghz5 => 1,
            Self::Ghz6 => 2,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Band {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "");
        match normalized.trim_end_matches("ghz").trim_end_matches('g') {
            "2.4" | "24" => Ok(Self::Ghz24),
            "5" => Ok(Self::Ghz5),
            "6" => Ok(Self::Ghz6),
            _ => Err(CoreError::UnknownBand { name: s.into() }),
        }
    }
}

// ── BandMap ─────────────────────────────────────────────────────────

/// One value per band, stored in a fixed array indexed by [`Band`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BandMap<T>([T; BAND_COUNT]);

impl<T> BandMap<T> {
    /// Build a map by evaluating `f` once per band.
    pub fn from_fn(mut f: impl FnMut(Band) -> T) -> Self {
        Self([f(Band::Ghz24), f(Band::Ghz5), f(Band::Ghz6)])
    }

    pub fn get(&self, band: Band) -> &T {
        &self.0[band.index()]
    }

    pub fn get_mut(&mut self, band: Band) -> &mut T {
        &mut self.0[band.index()]
    }

    /// `(band, value)` pairs in band order.
    pub fn iter(&self) -> impl Iterator<Item = (Band, &T)> {
        Band::iter().zip(self.0.iter())
    }
}

impl<T> Index<Band> for BandMap<T> {
    type Output = T;

    fn index(&self, band: Band) -> &T {
        self.get(band)
    }
}

impl<T> IndexMut<Band> for BandMap<T> {
    fn index_mut(&mut self, band: Band) -> &mut T {
        self.get_mut(band)
    }
}
