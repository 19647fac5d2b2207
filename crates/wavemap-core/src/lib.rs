//! Indoor Wi-Fi propagation engine for 2D floorplans.
//!
//! This crate owns the domain model and every algorithm between "a list of
//! access points and walls" and "a colored RSSI heatmap":
//!
//! - **Domain model** ([`model`]) — [`Band`], [`BandMap`], [`RadioConfig`],
//!   [`AccessPoint`], the [`WallMaterial`] catalog, [`Wall`] with its explicit
//!   [`WallKind`] state, and the immutable [`Environment`] snapshot.
//!
//! - **Geometry kernel** ([`geometry`]) — segment intersection, closest point,
//!   line reflection and vector angles on pixel-space [`Point`]s.
//!
//! - **Propagation** ([`propagation`]) — log-distance path loss, per-band wall
//!   attenuation, LOS / single-bounce reflection / single-corner diffraction
//!   path builders, the candidate pruner, and the per-pixel
//!   [`Aggregator`](propagation::Aggregator).
//!
//! - **Rendering** ([`render`]) — [`HeatmapGenerator`] supersamples grid
//!   blocks, maps dBm through a three-stop gradient and applies an optional
//!   separable box blur into an [`image::RgbaImage`].
//!
//! - **Probe** ([`probe`]) — the cheap LOS-only ranked reading list used for
//!   point inspection.
//!
//! Every empirical constant lives in [`PropagationTuning`]. The engine is
//! synchronous and only ever borrows an `Environment`; callers snapshot
//! their editable state before invoking it.

pub mod error;
pub mod geometry;
pub mod model;
pub mod probe;
pub mod propagation;
pub mod render;
pub mod tuning;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use geometry::Point;
pub use probe::{sample_rssi_all_at, strongest_rssi_at};
pub use propagation::{Aggregator, Path, PathRoute};
pub use render::{HeatmapGenerator, HeatmapRequest};
pub use tuning::{DiffractionTuning, PropagationTuning, ReflectionTuning};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AccessPoint, Band, BandMap, Environment, MIN_DISTANCE_M, RadioConfig, RssiReading, Wall,
    WallKind, WallMaterial,
};
