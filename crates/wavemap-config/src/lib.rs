//! Layered configuration for wavemap.
//!
//! Built-in defaults, then the TOML config file, then `WAVEMAP_*`
//! environment variables. Nested keys use `__` in the environment:
//! `WAVEMAP_RENDER__GRID_STEP_PX=4` sets `render.grid_step_px`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use wavemap_core::model::access_point::{DEFAULT_ANTENNA_GAIN_DBI, DEFAULT_TX_POWER_DBM};
use wavemap_core::model::environment::DEFAULT_PATH_LOSS_EXPONENT;
use wavemap_core::render::{
    DEFAULT_GRID_STEP_PX, DEFAULT_LEGEND_MAX_DBM, DEFAULT_LEGEND_MIN_DBM, DEFAULT_SMOOTH_RADIUS_PX,
};
use wavemap_core::{CoreError, PropagationTuning, WallMaterial};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "WAVEMAP_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl From<CoreError> for ConfigError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest { field, reason }
            | CoreError::InvalidEnvironment { field, reason } => Self::Validation {
                field: format!("propagation.{field}"),
                reason,
            },
            other => Self::Validation {
                field: "propagation".into(),
                reason: other.to_string(),
            },
        }
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderDefaults,
    pub scene: SceneDefaults,
    /// Multipath tuning constants.
    pub propagation: PropagationTuning,
}

/// Defaults for `render` and the output layer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderDefaults {
    pub grid_step_px: u32,
    pub legend_min_dbm: f64,
    pub legend_max_dbm: f64,
    pub smooth_radius_px: u32,
    /// table, json, json-compact, yaml or plain.
    pub output: String,
    /// auto, always or never.
    pub color: String,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            grid_step_px: DEFAULT_GRID_STEP_PX,
            legend_min_dbm: DEFAULT_LEGEND_MIN_DBM,
            legend_max_dbm: DEFAULT_LEGEND_MAX_DBM,
            smooth_radius_px: DEFAULT_SMOOTH_RADIUS_PX,
            output: "table".into(),
            color: "auto".into(),
        }
    }
}

/// Defaults applied to scenes described on the command line.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneDefaults {
    pub path_loss_exponent: f64,
    pub tx_power_dbm: f64,
    pub antenna_gain_dbi: f64,
    /// Material of walls given without one.
    pub wall_material: WallMaterial,
}

impl Default for SceneDefaults {
    fn default() -> Self {
        Self {
            path_loss_exponent: DEFAULT_PATH_LOSS_EXPONENT,
            tx_power_dbm: DEFAULT_TX_POWER_DBM,
            antenna_gain_dbi: DEFAULT_ANTENNA_GAIN_DBI,
            wall_material: WallMaterial::Concrete,
        }
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

impl Config {
    /// Range checks that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.render;
        if r.grid_step_px == 0 {
            return Err(invalid("render.grid_step_px", "must be at least 1"));
        }
        if !r.legend_min_dbm.is_finite() || !r.legend_max_dbm.is_finite() {
            return Err(invalid("render.legend", "bounds must be finite"));
        }
        if r.legend_min_dbm >= r.legend_max_dbm {
            return Err(invalid(
                "render.legend",
                format!("min ({}) must be below max ({})", r.legend_min_dbm, r.legend_max_dbm),
            ));
        }
        if !matches!(r.output.as_str(), "table" | "json" | "json-compact" | "yaml" | "plain") {
            return Err(invalid(
                "render.output",
                format!("expected table, json, json-compact, yaml or plain, got '{}'", r.output),
            ));
        }
        if !matches!(r.color.as_str(), "auto" | "always" | "never") {
            return Err(invalid(
                "render.color",
                format!("expected auto, always or never, got '{}'", r.color),
            ));
        }

        let s = &self.scene;
        if !s.path_loss_exponent.is_finite() || s.path_loss_exponent <= 0.0 {
            return Err(invalid(
                "scene.path_loss_exponent",
                format!("must be a positive number (got {})", s.path_loss_exponent),
            ));
        }
        if !s.tx_power_dbm.is_finite() || !s.antenna_gain_dbi.is_finite() {
            return Err(invalid("scene", "tx power and antenna gain must be finite"));
        }

        self.propagation.validate()?;
        Ok(())
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "wavemap", "wavemap").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("wavemap");
    p
}

// ── Config loading ──────────────────────────────────────────────────

fn figment_for(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load and validate the config.
///
/// `explicit` is a `--config` override and must exist. Without it the
/// platform path is used, and a missing file just means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => path.to_path_buf(),
        None => config_path(),
    };
    debug!(path = %path.display(), exists = path.is_file(), "loading config");

    let config: Config = figment_for(&path).extract()?;
    config.validate()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML.
pub fn to_toml(cfg: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Write `cfg` to `path`, creating parent directories.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_toml(cfg)?)?;
    debug!(path = %path.display(), "config written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.render.grid_step_px, 8);
        assert_eq!(cfg.render.legend_min_dbm, -96.0);
        assert_eq!(cfg.render.legend_max_dbm, -10.0);
        assert_eq!(cfg.scene.wall_material, WallMaterial::Concrete);
    }

    #[test]
    fn validation_names_the_field() {
        let mut cfg = Config::default();
        cfg.render.legend_min_dbm = 0.0;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "render.legend"));

        let mut cfg = Config::default();
        cfg.propagation.diffraction.radius_m = -1.0;
        let err = cfg.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation { ref field, .. } if field == "propagation.diffraction.radius_m"
        ));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = to_toml(&Config::default()).unwrap();
        assert!(text.contains("[render]"));
        assert!(text.contains("[propagation.diffraction]"));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, Config::default());
    }

    #[test]
    fn config_path_ends_with_file_name() {
        assert!(config_path().ends_with("config.toml"));
    }
}
