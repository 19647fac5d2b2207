// ── Wall material catalog ──
//
// Fixed presets. A wall whose attenuation was edited by hand no longer
// points at one of these; see `WallKind::Custom`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use super::band::Band;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum WallMaterial {
    #[serde(rename = "bookshelf")]
    Bookshelf,
    #[serde(rename = "cubicle")]
    Cubicle,
    #[serde(rename = "drywall")]
    Drywall,
    #[serde(rename = "brick")]
    Brick,
    #[serde(rename = "glass")]
    Window,
    #[serde(rename = "door")]
    Door,
    #[serde(rename = "elevator")]
    ElevatorShaft,
    #[serde(rename = "concrete")]
    Concrete,
    #[serde(rename = "custom")]
    Custom,
}

struct Preset {
    tag: &'static str,
    label: &'static str,
    attenuation_24_db: f64,
    attenuation_5_db: f64,
    reflection_loss_db: f64,
    color_hex: &'static str,
}

const fn preset(material: WallMaterial) -> Preset {
    match material {
        WallMaterial::Bookshelf => Preset {
            tag: "bookshelf",
            label: "Bookshelf",
            attenuation_24_db: 2.0,
            attenuation_5_db: 2.0,
            reflection_loss_db: 4.0,
            color_hex: "#8D6E63",
        },
        WallMaterial::Cubicle => Preset {
            tag: "cubicle",
            label: "Cubicle",
            attenuation_24_db: 2.0,
            attenuation_5_db: 2.0,
            reflection_loss_db: 4.0,
            color_hex: "#607D8B",
        },
        WallMaterial::Drywall => Preset {
            tag: "drywall",
            label: "Drywall",
            attenuation_24_db: 3.0,
            attenuation_5_db: 3.0,
            reflection_loss_db: 6.0,
            color_hex: "#B0BEC5",
        },
        WallMaterial::Brick => Preset {
            tag: "brick",
            label: "Brick wall",
            attenuation_24_db: 5.0,
            attenuation_5_db: 15.0,
            reflection_loss_db: 10.0,
            color_hex: "#C62828",
        },
        WallMaterial::Window => Preset {
            tag: "glass",
            label: "Window",
            attenuation_24_db: 3.0,
            attenuation_5_db: 9.0,
            reflection_loss_db: 6.0,
            color_hex: "#26C6DA",
        },
        WallMaterial::Door => Preset {
            tag: "door",
            label: "Door",
            attenuation_24_db: 3.0,
            attenuation_5_db: 8.0,
            reflection_loss_db: 6.0,
            color_hex: "#FB8C00",
        },
        WallMaterial::ElevatorShaft => Preset {
            tag: "elevator",
            label: "Elevator shaft",
            attenuation_24_db: 10.0,
            attenuation_5_db: 10.0,
            reflection_loss_db: 12.0,
            color_hex: "#6A1B9A",
        },
        WallMaterial::Concrete => Preset {
            tag: "concrete",
            label: "Concrete wall",
            attenuation_24_db: 14.0,
            attenuation_5_db: 14.0,
            reflection_loss_db: 10.0,
            color_hex: "#424242",
        },
        WallMaterial::Custom => Preset {
            tag: "custom",
            label: "Custom",
            attenuation_24_db: 0.0,
            attenuation_5_db: 0.0,
            reflection_loss_db: 8.0,
            color_hex: "#212121",
        },
    }
}

impl WallMaterial {
    /// Short machine tag, also the serialized form.
    pub const fn tag(self) -> &'static str {
        preset(self).tag
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        preset(self).label
    }

    pub const fn default_attenuation_24_db(self) -> f64 {
        preset(self).attenuation_24_db
    }

    pub const fn default_attenuation_5_db(self) -> f64 {
        preset(self).attenuation_5_db
    }

    /// Default through-wall loss for `band`. 6 GHz shares the 2.4 GHz figure.
    pub const fn default_attenuation_db(self, band: Band) -> f64 {
        match band {
            Band::Ghz5 => self.default_attenuation_5_db(),
            Band::Ghz24 | Band::Ghz6 => self.default_attenuation_24_db(),
        }
    }

    /// Extra loss of a single specular bounce off this material.
    pub const fn reflection_loss_db(self) -> f64 {
        preset(self).reflection_loss_db
    }

    /// Display color as `#RRGGBB`.
    pub const fn color_hex(self) -> &'static str {
        preset(self).color_hex
    }

    /// Display color as RGB bytes.
    pub fn color_rgb(self) -> [u8; 3] {
        let hex = self.color_hex().trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0)
        };
        [channel(0), channel(2), channel(4)]
    }

    /// Dropdown-style label, e.g. `Door (3/8 dB)`.
    pub fn label_with_attenuation(self) -> String {
        format!(
            "{} ({:.0}/{:.0} dB)",
            self.label(),
            self.default_attenuation_24_db(),
            self.default_attenuation_5_db()
        )
    }

    /// The catalog in display order.
    pub fn catalog() -> impl Iterator<Item = WallMaterial> {
        WallMaterial::iter()
    }
}

impl fmt::Display for WallMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for WallMaterial {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        WallMaterial::iter()
            .find(|m| {
                m.tag() == wanted || m.label().to_ascii_lowercase().replace(' ', "-") == wanted
            })
            .or(match wanted.as_str() {
                "window" => Some(Self::Window),
                "elevator-shaft" => Some(Self::ElevatorShaft),
                "wall" => Some(Self::Concrete),
                _ => None,
            })
            .ok_or_else(|| CoreError::UnknownMaterial { name: s.into() })
    }
}
