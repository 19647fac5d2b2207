// ── Block grid sampler ──
//
// The image is tiled into `grid_step` squares. Each square is sampled 3×3,
// averaged in linear power and painted with one flat color.

use image::{Rgba, RgbaImage};

use super::HeatmapRequest;
use super::colormap::rssi_to_color;
use crate::geometry::Point;
use crate::propagation::{Aggregator, dbm_to_mw, mw_to_dbm};

/// Subsamples per block along each axis.
pub const SUPERSAMPLE: u32 = 3;

/// Offset of subsample `s` inside a block of `step` pixels.
fn subsample_offset(s: u32, step: u32) -> u64 {
    (u64::from(s) * u64::from(step) + u64::from(step / 2)) / u64::from(SUPERSAMPLE)
}

/// Pixel coordinate of subsample `s` in the block starting at `origin`,
/// clamped to the last pixel of an axis `len` pixels long.
fn sample_coord(origin: u32, s: u32, step: u32, len: u32) -> u32 {
    let last = len.saturating_sub(1);
    u32::try_from(u64::from(origin) + subsample_offset(s, step)).map_or(last, |c| c.min(last))
}

/// Average signal over one block, in dBm. `None` when no subsample sees
/// any AP.
pub fn block_rssi(agg: &Aggregator<'_>, x0: u32, y0: u32, req: &HeatmapRequest) -> Option<f64> {
    let step = req.grid_step_px;
    let mut total_mw = 0.0;
    let mut hits = 0u32;

    for sy in 0..SUPERSAMPLE {
        let py = sample_coord(y0, sy, step, req.height);
        for sx in 0..SUPERSAMPLE {
            let px = sample_coord(x0, sx, step, req.width);
            if let Some(rssi) = agg.strongest_rssi_at(Point::new(f64::from(px), f64::from(py))) {
                total_mw += dbm_to_mw(rssi);
                hits += 1;
            }
        }
    }

    (hits > 0).then(|| mw_to_dbm(total_mw / f64::from(hits)))
}

/// Colors for one row of blocks starting at pixel row `y0`.
fn block_row(agg: &Aggregator<'_>, y0: u32, req: &HeatmapRequest) -> Vec<Option<Rgba<u8>>> {
    (0..req.width)
        .step_by(req.grid_step_px as usize)
        .map(|x0| {
            block_rssi(agg, x0, y0, req)
                .map(|rssi| rssi_to_color(rssi, req.legend_min_dbm, req.legend_max_dbm))
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn block_rows(agg: &Aggregator<'_>, req: &HeatmapRequest) -> Vec<Vec<Option<Rgba<u8>>>> {
    (0..req.height)
        .step_by(req.grid_step_px as usize)
        .map(|y0| block_row(agg, y0, req))
        .collect()
}

#[cfg(feature = "parallel")]
fn block_rows(agg: &Aggregator<'_>, req: &HeatmapRequest) -> Vec<Vec<Option<Rgba<u8>>>> {
    use rayon::prelude::*;

    let starts: Vec<u32> = (0..req.height).step_by(req.grid_step_px as usize).collect();
    starts.into_par_iter().map(|y0| block_row(agg, y0, req)).collect()
}

/// Paint every block with signal onto a fully transparent canvas.
pub fn paint(agg: &Aggregator<'_>, req: &HeatmapRequest) -> RgbaImage {
    let mut img = RgbaImage::new(req.width, req.height);
    let step = req.grid_step_px;

    for (row, colors) in block_rows(agg, req).into_iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let y0 = row as u32 * step;
        for (col, color) in colors.into_iter().enumerate() {
            let Some(color) = color else { continue };
            #[allow(clippy::cast_possible_truncation)]
            let x0 = col as u32 * step;
            for y in y0..y0.saturating_add(step).min(req.height) {
                for x in x0..x0.saturating_add(step).min(req.width) {
                    img.put_pixel(x, y, color);
                }
            }
        }
    }
    img
}
