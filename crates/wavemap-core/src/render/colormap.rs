// ── RSSI → color ──

use image::Rgba;

/// Opacity of every painted block.
pub const HEATMAP_ALPHA: f64 = 0.55;

/// `(position, [r, g, b])`, position in 0..=1 along the legend.
const STOPS: [(f64, [f64; 3]); 3] = [
    (0.0, [0.0, 160.0, 0.0]),
    (0.5, [255.0, 235.0, 0.0]),
    (1.0, [230.0, 40.0, 20.0]),
];

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Map `rssi_dbm` onto the green → yellow → red legend spanning
/// `min_dbm..=max_dbm`. Values outside the legend saturate at the ends.
pub fn rssi_to_color(rssi_dbm: f64, min_dbm: f64, max_dbm: f64) -> Rgba<u8> {
    let t = (rssi_dbm - min_dbm) / (max_dbm - min_dbm);
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    let i = usize::from(t > STOPS[1].0);
    let (t0, lo) = STOPS[i];
    let (t1, hi) = STOPS[i + 1];
    let u = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };

    let mix = |k: usize| channel(lo[k] + u * (hi[k] - lo[k]));
    Rgba([mix(0), mix(1), mix(2), channel(HEATMAP_ALPHA * 255.0)])
}
