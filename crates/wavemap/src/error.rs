//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a stable process exit code.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use wavemap_config::ConfigError;
use wavemap_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const IO: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Scene & request ──────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wavemap::validation))]
    Validation { field: String, reason: String },

    #[error("Unknown wall material '{name}'")]
    #[diagnostic(
        code(wavemap::unknown_material),
        help(
            "Run: wavemap materials to see the catalog.\n\
             Or give a custom pair instead of a name, e.g. --wall 0,0,100,0,6/12"
        )
    )]
    UnknownMaterial { name: String },

    #[error("Unknown band '{name}'")]
    #[diagnostic(code(wavemap::unknown_band), help("Supported bands: 2.4, 5, 6"))]
    UnknownBand { name: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file not found: {}", path.display())]
    #[diagnostic(
        code(wavemap::no_config),
        help("Create it with: wavemap config init, or drop --config to use defaults.")
    )]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration file already exists: {}", path.display())]
    #[diagnostic(
        code(wavemap::config_exists),
        help("Use --force to overwrite it.")
    )]
    ConfigExists { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(
        code(wavemap::config),
        help("Check the config file and WAVEMAP_* environment variables.")
    )]
    Config(Box<figment::Error>),

    #[error("Failed to serialize config: {0}")]
    #[diagnostic(code(wavemap::config_serialize))]
    ConfigSerialize(#[from] toml::ser::Error),

    // ── Output ───────────────────────────────────────────────────────

    #[error("Failed to write heatmap to {}", path.display())]
    #[diagnostic(
        code(wavemap::image),
        help("Check that the directory exists and the file name ends in .png")
    )]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(wavemap::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(wavemap::yaml))]
    Yaml(#[from] serde_yaml::Error),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(wavemap::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. }
            | Self::UnknownMaterial { .. }
            | Self::UnknownBand { .. }
            | Self::ConfigExists { .. } => exit_code::USAGE,
            Self::ConfigNotFound { .. } => exit_code::NOT_FOUND,
            Self::Image { .. } | Self::Io(_) => exit_code::IO,
            Self::Config(_) | Self::ConfigSerialize(_) | Self::Json(_) | Self::Yaml(_) => {
                exit_code::GENERAL
            }
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRequest { field, reason }
            | CoreError::InvalidEnvironment { field, reason } => Self::Validation { field, reason },
            CoreError::InvalidAttenuation { value } => Self::Validation {
                field: "wall attenuation".into(),
                reason: format!("must be a finite, non-negative dB value (got {value})"),
            },
            CoreError::UnknownMaterial { name } => Self::UnknownMaterial { name },
            CoreError::UnknownBand { name } => Self::UnknownBand { name },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::NotFound { path } => Self::ConfigNotFound { path },
            ConfigError::Serialization(e) => Self::ConfigSerialize(e),
            ConfigError::Figment(e) => Self::Config(e),
            ConfigError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_usage() {
        let err = CliError::from(CoreError::UnknownMaterial {
            name: "adamantium".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);

        let err = CliError::from(CoreError::InvalidAttenuation { value: -3.0 });
        assert!(matches!(err, CliError::Validation { .. }));
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }

    #[test]
    fn missing_config_is_not_found() {
        let err = CliError::from(ConfigError::NotFound {
            path: "/nope/config.toml".into(),
        });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert_eq!(err.to_string(), "Configuration file not found: /nope/config.toml");
    }

    #[test]
    fn io_errors_use_io_code() {
        let err = CliError::from(std::io::Error::other("disk full"));
        assert_eq!(err.exit_code(), exit_code::IO);
    }
}
