//! CLI configuration: thin wrapper around `wavemap_config`.
//!
//! Re-exports the shared types and resolves the settings where a command-line
//! flag can override the config file (`--output`, `--color`, `--config`).

use std::path::PathBuf;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use wavemap_config::{Config, config_path, save_config, to_toml};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Load the config, honoring `--config`.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(wavemap_config::load_config(global.config.as_deref())?)
}

/// The config file in effect: `--config` if given, else the platform path.
pub fn active_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

/// Output format: flag, then config.
pub fn output_format(global: &GlobalOpts, cfg: &Config) -> OutputFormat {
    global.output.unwrap_or(match cfg.render.output.as_str() {
        "json" => OutputFormat::Json,
        "json-compact" => OutputFormat::JsonCompact,
        "yaml" => OutputFormat::Yaml,
        "plain" => OutputFormat::Plain,
        _ => OutputFormat::Table,
    })
}

/// Color mode: flag, then config.
pub fn color_mode(global: &GlobalOpts, cfg: &Config) -> ColorMode {
    global.color.unwrap_or(match cfg.render.color.as_str() {
        "always" => ColorMode::Always,
        "never" => ColorMode::Never,
        _ => ColorMode::Auto,
    })
}
