//! Clap derive structures for the `wavemap` CLI.
//!
//! Defines the command tree, global flags, and the small comma-separated
//! value types used to describe a scene on the command line. This file only
//! depends on clap and std so the build script can include it for man pages.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// wavemap -- Wi-Fi coverage heatmaps for floorplans
#[derive(Debug, Parser)]
#[command(
    name = "wavemap",
    version,
    about = "Render Wi-Fi signal heatmaps and probe RSSI on 2D floorplans",
    long_about = "Predicts received signal strength from access points placed on a \
        floorplan.\n\n\
        Combines log-distance path loss, per-band wall attenuation, single-bounce \
        reflections and single-corner diffraction, and renders the result as a \
        translucent PNG overlay.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: from config, table]
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BandArg {
    /// 2.4 GHz
    #[value(name = "2.4", alias = "24", alias = "2.4ghz")]
    Ghz24,
    /// 5 GHz
    #[value(name = "5", alias = "5ghz")]
    Ghz5,
    /// 6 GHz
    #[value(name = "6", alias = "6ghz")]
    Ghz6,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a heatmap PNG for a scene
    #[command(alias = "r")]
    Render(RenderArgs),

    /// List the signals visible at one point, strongest first
    #[command(alias = "p")]
    Probe(ProbeArgs),

    /// Show the wall material catalog
    #[command(alias = "mat")]
    Materials,

    /// Show supported Wi-Fi bands
    Bands,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Scene description ────────────────────────────────────────────────

/// Access points, walls and scale shared by `render` and `probe`.
#[derive(Debug, Args)]
pub struct SceneArgs {
    /// Meters per pixel
    #[arg(long, conflicts_with = "reference", required_unless_present = "reference")]
    pub scale: Option<f64>,

    /// Derive the scale from a segment of known length: x1,y1,x2,y2,meters
    #[arg(long, value_name = "X1,Y1,X2,Y2,M", allow_hyphen_values = true)]
    pub reference: Option<ReferenceSpec>,

    /// Path-loss exponent [default: from config, 2.5]
    #[arg(long, short = 'n')]
    pub exponent: Option<f64>,

    /// Access point at x,y with an optional name (repeatable)
    #[arg(long = "ap", value_name = "X,Y[,NAME]", allow_hyphen_values = true)]
    pub aps: Vec<ApSpec>,

    /// Transmit power of every radio in dBm [default: from config, 18]
    #[arg(long, allow_negative_numbers = true)]
    pub tx_power: Option<f64>,

    /// Antenna gain of every radio in dBi [default: from config, 2]
    #[arg(long, allow_negative_numbers = true)]
    pub antenna_gain: Option<f64>,

    /// Enabled band (repeatable) [default: all]
    #[arg(long = "band", value_name = "BAND")]
    pub bands: Vec<BandArg>,

    /// Wall from x1,y1 to x2,y2 with an optional material or a24/a5 dB pair
    /// (repeatable)
    #[arg(long = "wall", value_name = "X1,Y1,X2,Y2[,MAT|A24/A5]", allow_hyphen_values = true)]
    pub walls: Vec<WallSpec>,
}

// ── Render ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Image width in pixels
    #[arg(long)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long)]
    pub height: u32,

    /// Block size in pixels [default: from config, 8]
    #[arg(long)]
    pub grid_step: Option<u32>,

    /// RSSI painted fully green, in dBm [default: from config, -96]
    #[arg(long, allow_negative_numbers = true)]
    pub legend_min: Option<f64>,

    /// RSSI painted fully red, in dBm [default: from config, -10]
    #[arg(long, allow_negative_numbers = true)]
    pub legend_max: Option<f64>,

    /// Box-blur radius in pixels, 0 to disable [default: from config, 8]
    #[arg(long)]
    pub smooth: Option<u32>,

    /// Skip single-bounce reflections
    #[arg(long)]
    pub no_reflection: bool,

    /// Skip corner diffraction
    #[arg(long)]
    pub no_diffraction: bool,

    /// Output PNG path
    #[arg(long, short = 'O', value_name = "FILE")]
    pub out: PathBuf,
}

// ── Probe ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Point to inspect: x,y in pixels
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub at: PointSpec,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

// ── Comma-separated value types ──────────────────────────────────────

fn numbers(s: &str, what: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| format!("invalid {what} coordinate '{part}'"))
        })
        .collect()
}

/// `x,y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSpec {
    pub x: f64,
    pub y: f64,
}

impl FromStr for PointSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match numbers(s, "point")?.as_slice() {
            &[x, y] => Ok(Self { x, y }),
            _ => Err(format!("expected x,y but got '{s}'")),
        }
    }
}

/// `x,y[,name]`
#[derive(Debug, Clone, PartialEq)]
pub struct ApSpec {
    pub x: f64,
    pub y: f64,
    pub name: Option<String>,
}

impl FromStr for ApSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ',');
        let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
            return Err(format!("expected x,y[,name] but got '{s}'"));
        };
        let at: PointSpec = format!("{x},{y}").parse()?;
        let name = parts
            .next()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        Ok(Self {
            x: at.x,
            y: at.y,
            name,
        })
    }
}

/// `x1,y1,x2,y2,meters`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSpec {
    pub start: PointSpec,
    pub end: PointSpec,
    pub meters: f64,
}

impl FromStr for ReferenceSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match numbers(s, "reference")?.as_slice() {
            &[x1, y1, x2, y2, meters] => Ok(Self {
                start: PointSpec { x: x1, y: y1 },
                end: PointSpec { x: x2, y: y2 },
                meters,
            }),
            _ => Err(format!("expected x1,y1,x2,y2,meters but got '{s}'")),
        }
    }
}

/// What a `--wall` says about attenuation.
#[derive(Debug, Clone, PartialEq)]
pub enum WallAttenuation {
    /// Use the configured default material.
    Default,
    /// A catalog material by name.
    Material(String),
    /// Hand-entered 2.4 GHz / 5 GHz loss in dB.
    Custom { a24: f64, a5: f64 },
}

/// `x1,y1,x2,y2[,material | ,a24/a5]`
#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec {
    pub start: PointSpec,
    pub end: PointSpec,
    pub attenuation: WallAttenuation,
}

impl FromStr for WallSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(5, ',').collect();
        if parts.len() < 4 {
            return Err(format!("expected x1,y1,x2,y2[,material] but got '{s}'"));
        }
        let coords = numbers(&parts[..4].join(","), "wall")?;
        let &[x1, y1, x2, y2] = coords.as_slice() else {
            return Err(format!("expected four wall coordinates in '{s}'"));
        };

        let attenuation = match parts.get(4).copied().map(str::trim) {
            None | Some("") => WallAttenuation::Default,
            Some(extra) => match extra.split_once('/') {
                Some((a24, a5)) => {
                    let parse = |v: &str| {
                        v.trim()
                            .parse::<f64>()
                            .map_err(|_| format!("invalid attenuation '{v}' in '{s}'"))
                    };
                    WallAttenuation::Custom {
                        a24: parse(a24)?,
                        a5: parse(a5)?,
                    }
                }
                None => WallAttenuation::Material(extra.to_string()),
            },
        };

        Ok(Self {
            start: PointSpec { x: x1, y: y1 },
            end: PointSpec { x: x2, y: y2 },
            attenuation,
        })
    }
}
