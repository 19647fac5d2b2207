//! Heatmap render command.

use std::fmt::Write as _;

use image::{ImageFormat, RgbaImage};
use serde::Serialize;
use tracing::info;
use wavemap_core::{HeatmapGenerator, HeatmapRequest};

use crate::cli::{GlobalOpts, RenderArgs};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::{output, scene};

// ── Summary ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RenderSummary {
    path: String,
    width: u32,
    height: u32,
    grid_step_px: u32,
    smooth_radius_px: u32,
    access_points: usize,
    walls: usize,
    /// Share of pixels with any signal, 0–100.
    coverage_percent: f64,
}

#[allow(clippy::cast_precision_loss)]
fn coverage_percent(img: &RgbaImage) -> f64 {
    let total = u64::from(img.width()) * u64::from(img.height());
    if total == 0 {
        return 0.0;
    }
    let painted = img.pixels().filter(|p| p.0[3] > 0).count() as f64;
    100.0 * painted / total as f64
}

fn detail(s: &RenderSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Heatmap written to {}", s.path);
    let _ = writeln!(out, "  Size:      {}x{} px", s.width, s.height);
    let _ = writeln!(out, "  Grid:      {} px blocks, blur {} px", s.grid_step_px, s.smooth_radius_px);
    let _ = writeln!(out, "  Scene:     {} access points, {} walls", s.access_points, s.walls);
    let _ = write!(out, "  Coverage:  {:.1}%", s.coverage_percent);
    out
}

// ── Handler ─────────────────────────────────────────────────────────

fn request(args: &RenderArgs, cfg: &Config) -> HeatmapRequest {
    let d = &cfg.render;
    HeatmapRequest {
        width: args.width,
        height: args.height,
        grid_step_px: args.grid_step.unwrap_or(d.grid_step_px),
        legend_min_dbm: args.legend_min.unwrap_or(d.legend_min_dbm),
        legend_max_dbm: args.legend_max.unwrap_or(d.legend_max_dbm),
        smooth_radius_px: args.smooth.unwrap_or(d.smooth_radius_px),
    }
}

pub fn handle(args: &RenderArgs, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let env = scene::build(&args.scene, &cfg.scene)?;
    let req = request(args, cfg);

    let mut tuning = cfg.propagation.clone();
    if args.no_reflection {
        tuning.reflection.enabled = false;
    }
    if args.no_diffraction {
        tuning.diffraction.enabled = false;
    }

    let img = HeatmapGenerator::new(&env, &tuning).generate(&req)?;
    img.save_with_format(&args.out, ImageFormat::Png)
        .map_err(|source| CliError::Image {
            path: args.out.clone(),
            source,
        })?;
    info!(path = %args.out.display(), "heatmap saved");

    let summary = RenderSummary {
        path: args.out.display().to_string(),
        width: req.width,
        height: req.height,
        grid_step_px: req.grid_step_px,
        smooth_radius_px: req.smooth_radius_px,
        access_points: env.aps.len(),
        walls: env.walls.len(),
        coverage_percent: coverage_percent(&img),
    };
    let out = output::render_single(
        config::output_format(global, cfg),
        &summary,
        detail,
        |s| s.path.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
