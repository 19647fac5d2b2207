// ── Walls ──
//
// A wall is a segment plus an explicit attenuation state: either it follows
// a catalog preset, or it was overridden by hand and carries its own two
// per-band figures. Transitions between the two are explicit methods.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::band::Band;
use super::material::WallMaterial;
use crate::error::CoreError;
use crate::geometry::Point;

/// Where a wall's attenuation figures come from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WallKind {
    /// Follows the catalog defaults of a material.
    Preset { material: WallMaterial },
    /// Hand-entered attenuation, detached from the catalog.
    Custom {
        attenuation_24_db: f64,
        attenuation_5_db: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WallRecord")]
pub struct Wall {
    pub start: Point,
    pub end: Point,
    kind: WallKind,
}

/// Unchecked wire form of a [`Wall`]; decoding goes through the same
/// constructors as code does.
#[derive(Deserialize)]
struct WallRecord {
    start: Point,
    end: Point,
    kind: WallKind,
}

impl TryFrom<WallRecord> for Wall {
    type Error = CoreError;

    fn try_from(record: WallRecord) -> Result<Self, Self::Error> {
        match record.kind {
            WallKind::Preset { material } => Ok(Self::new(record.start, record.end, material)),
            WallKind::Custom {
                attenuation_24_db,
                attenuation_5_db,
            } => Self::custom(record.start, record.end, attenuation_24_db, attenuation_5_db),
        }
    }
}

impl Wall {
    /// A wall following `material`'s catalog defaults.
    ///
    /// Picking [`WallMaterial::Custom`] from the catalog yields a custom wall
    /// with zero attenuation on both bands.
    pub fn new(start: impl Into<Point>, end: impl Into<Point>, material: WallMaterial) -> Self {
        let mut wall = Self {
            start: start.into(),
            end: end.into(),
            kind: WallKind::Preset { material },
        };
        wall.set_material(material);
        wall
    }

    /// A wall with hand-entered per-band attenuation.
    pub fn custom(
        start: impl Into<Point>,
        end: impl Into<Point>,
        attenuation_24_db: f64,
        attenuation_5_db: f64,
    ) -> Result<Self, CoreError> {
        let mut wall = Self::new(start, end, WallMaterial::Custom);
        wall.set_attenuation(attenuation_24_db, attenuation_5_db)?;
        Ok(wall)
    }

    pub fn kind(&self) -> WallKind {
        self.kind
    }

    /// The material this wall reports: its preset, or `Custom`.
    pub fn material(&self) -> WallMaterial {
        match self.kind {
            WallKind::Preset { material } => material,
            WallKind::Custom { .. } => WallMaterial::Custom,
        }
    }

    /// Switch to a catalog preset, resetting both per-band values.
    pub fn set_material(&mut self, material: WallMaterial) {
        self.kind = match material {
            WallMaterial::Custom => WallKind::Custom {
                attenuation_24_db: material.default_attenuation_24_db(),
                attenuation_5_db: material.default_attenuation_5_db(),
            },
            preset => WallKind::Preset { material: preset },
        };
    }

    /// Override both per-band values by hand, detaching the wall from its
    /// preset. The segment is kept.
    pub fn set_attenuation(
        &mut self,
        attenuation_24_db: f64,
        attenuation_5_db: f64,
    ) -> Result<(), CoreError> {
        for value in [attenuation_24_db, attenuation_5_db] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidAttenuation { value });
            }
        }
        self.kind = WallKind::Custom {
            attenuation_24_db,
            attenuation_5_db,
        };
        Ok(())
    }

    pub fn attenuation_24_db(&self) -> f64 {
        match self.kind {
            WallKind::Preset { material } => material.default_attenuation_24_db(),
            WallKind::Custom {
                attenuation_24_db, ..
            } => attenuation_24_db,
        }
    }

    pub fn attenuation_5_db(&self) -> f64 {
        match self.kind {
            WallKind::Preset { material } => material.default_attenuation_5_db(),
            WallKind::Custom {
                attenuation_5_db, ..
            } => attenuation_5_db,
        }
    }

    /// Through-wall loss for `band`; `None` means 2.4 GHz.
    ///
    /// 6 GHz has no figure of its own and shares the 2.4 GHz value.
    pub fn attenuation_db(&self, band: Option<Band>) -> f64 {
        match band {
            Some(Band::Ghz5) => self.attenuation_5_db(),
            Some(Band::Ghz24 | Band::Ghz6) | None => self.attenuation_24_db(),
        }
    }

    /// Extra loss of a specular bounce off this wall.
    pub fn reflection_loss_db(&self) -> f64 {
        self.material().reflection_loss_db()
    }

    /// Both endpoints, start first.
    pub fn corners(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    pub fn length_px(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.0},{:.0})-({:.0},{:.0}) {:.0}/{:.0} dB",
            self.material().tag(),
            self.start.x,
            self.start.y,
            self.end.x,
            self.end.y,
            self.attenuation_24_db(),
            self.attenuation_5_db()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn preset_wall_uses_catalog_values() {
        let wall = Wall::new((0.0, 0.0), (10.0, 0.0), WallMaterial::Door);
        assert_eq!(wall.kind(), WallKind::Preset { material: WallMaterial::Door });
        assert_eq!(wall.attenuation_db(Some(Band::Ghz24)), 3.0);
        assert_eq!(wall.attenuation_db(Some(Band::Ghz5)), 8.0);
        assert_eq!(wall.attenuation_db(Some(Band::Ghz6)), 3.0);
        assert_eq!(wall.attenuation_db(None), 3.0);
        assert_eq!(wall.reflection_loss_db(), 6.0);
    }

    #[test]
    fn manual_override_detaches_into_custom() {
        let mut wall = Wall::new((1.0, 2.0), (3.0, 4.0), WallMaterial::Brick);
        wall.set_attenuation(7.0, 11.0).unwrap();

        assert_eq!(wall.material(), WallMaterial::Custom);
        assert_eq!(wall.attenuation_24_db(), 7.0);
        assert_eq!(wall.attenuation_5_db(), 11.0);
        assert_eq!(wall.start, Point::new(1.0, 2.0));
        assert_eq!(wall.end, Point::new(3.0, 4.0));
        assert_eq!(wall.reflection_loss_db(), WallMaterial::Custom.reflection_loss_db());
    }

    #[test]
    fn switching_material_resets_both_values() {
        let mut wall = Wall::custom((0.0, 0.0), (5.0, 5.0), 20.0, 30.0).unwrap();
        wall.set_material(WallMaterial::Window);

        assert_eq!(wall.kind(), WallKind::Preset { material: WallMaterial::Window });
        assert_eq!(wall.attenuation_24_db(), 3.0);
        assert_eq!(wall.attenuation_5_db(), 9.0);
    }

    #[test]
    fn selecting_custom_from_catalog_starts_at_zero() {
        let wall = Wall::new((0.0, 0.0), (5.0, 0.0), WallMaterial::Custom);
        assert_eq!(
            wall.kind(),
            WallKind::Custom {
                attenuation_24_db: 0.0,
                attenuation_5_db: 0.0
            }
        );
    }

    #[test]
    fn negative_or_nan_attenuation_is_rejected() {
        let mut wall = Wall::new((0.0, 0.0), (5.0, 0.0), WallMaterial::Drywall);
        assert_eq!(
            wall.set_attenuation(-1.0, 3.0),
            Err(CoreError::InvalidAttenuation { value: -1.0 })
        );
        assert!(wall.set_attenuation(3.0, f64::NAN).is_err());
        // A rejected edit leaves the wall untouched.
        assert_eq!(wall.material(), WallMaterial::Drywall);
    }

    #[test]
    fn display_summarizes_segment_and_attenuation() {
        let wall = Wall::new((0.0, 0.0), (120.4, 80.6), WallMaterial::Brick);
        insta::assert_snapshot!(wall.to_string(), @"brick (0,0)-(120,81) 5/15 dB");
    }

    #[test]
    fn wall_kind_serializes_with_tag() {
        let json = serde_json::to_value(WallKind::Preset {
            material: WallMaterial::Door,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"kind": "preset", "material": "door"}));
    }

    #[test]
    fn decoding_checks_custom_attenuation() {
        let wall = Wall::custom((0.0, 0.0), (4.0, 0.0), 6.0, 12.5).unwrap();
        let json = serde_json::to_value(&wall).unwrap();
        let back: Wall = serde_json::from_value(json).unwrap();
        assert_eq!(back, wall);

        let bad = serde_json::json!({
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 4.0, "y": 0.0},
            "kind": {"kind": "custom", "attenuation_24_db": -3.0, "attenuation_5_db": 1.0},
        });
        let err = serde_json::from_value::<Wall>(bad).unwrap_err();
        assert!(err.to_string().contains("-3"), "{err}");
    }

    #[test]
    fn decoding_preset_takes_catalog_values() {
        let json = serde_json::json!({
            "start": {"x": 0.0, "y": 0.0},
            "end": {"x": 4.0, "y": 0.0},
            "kind": {"kind": "preset", "material": "glass"},
        });
        let wall: Wall = serde_json::from_value(json).unwrap();
        assert_eq!(wall.material(), WallMaterial::Window);
        assert_eq!(wall.attenuation_5_db(), 9.0);
    }
}
