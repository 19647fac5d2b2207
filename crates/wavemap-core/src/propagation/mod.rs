//! Signal propagation: path loss, wall attenuation, multipath paths and the
//! per-pixel aggregator.

pub mod aggregate;
pub mod attenuation;
pub mod candidates;
pub mod multipath;
pub mod path_loss;

pub use aggregate::Aggregator;
pub use attenuation::{wall_cross_count, wall_loss_along};
pub use multipath::{Path, PathRoute};
pub use path_loss::{dbm_to_mw, mw_to_dbm, path_loss_db};
