// ── Separable box blur ──

use image::RgbaImage;

/// One sliding-window pass along rows (`horizontal`) or columns.
///
/// Samples outside the image repeat the edge pixel. Every channel, alpha
/// included, is averaged and rounded half up.
fn pass(src: &RgbaImage, radius: u32, horizontal: bool) -> RgbaImage {
    let (w, h) = src.dimensions();
    let mut dst = RgbaImage::new(w, h);
    let (len, lanes) = if horizontal { (w, h) } else { (h, w) };
    let last = i64::from(len) - 1;
    let r = i64::from(radius);
    let win = 2 * u64::from(radius) + 1;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let at = |lane: u32, i: i64| -> [u8; 4] {
        let i = i.clamp(0, last) as u32;
        let (x, y) = if horizontal { (i, lane) } else { (lane, i) };
        src.get_pixel(x, y).0
    };

    for lane in 0..lanes {
        let mut sum = [0u64; 4];
        for i in -r..=r {
            for (s, c) in sum.iter_mut().zip(at(lane, i)) {
                *s += u64::from(c);
            }
        }

        for i in 0..len {
            #[allow(clippy::cast_possible_truncation)]
            let out = sum.map(|s| ((s + win / 2) / win) as u8);
            let (x, y) = if horizontal { (i, lane) } else { (lane, i) };
            dst.put_pixel(x, y, image::Rgba(out));

            let leaving = at(lane, i64::from(i) - r);
            let entering = at(lane, i64::from(i) + r + 1);
            for ((s, e), l) in sum.iter_mut().zip(entering).zip(leaving) {
                *s = *s + u64::from(e) - u64::from(l);
            }
        }
    }
    dst
}

/// Box blur of `radius` pixels, horizontal pass then vertical pass.
/// Radius 0 returns an exact copy.
pub fn box_blur(src: &RgbaImage, radius: u32) -> RgbaImage {
    if radius == 0 {
        return src.clone();
    }
    let tmp = pass(src, radius, true);
    pass(&tmp, radius, false)
}
