// ── Floorplan domain model ──
//
// Every type here is a plain value: the engine reads an `Environment`
// snapshot built from them and never mutates it. Editing (material swaps,
// manual attenuation overrides) happens on owned values before the snapshot
// is taken.

pub mod access_point;
pub mod band;
pub mod environment;
pub mod material;
pub mod reading;
pub mod wall;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use wavemap_core::model::*` gives you everything.

pub use access_point::{AccessPoint, RadioConfig};
pub use band::{Band, BandMap};
pub use environment::{Environment, MIN_DISTANCE_M, scale_from_reference};
pub use material::WallMaterial;
pub use reading::RssiReading;
pub use wall::{Wall, WallKind};
