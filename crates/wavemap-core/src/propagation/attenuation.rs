// ── Through-wall attenuation ──

use crate::geometry::{Point, segments_intersect};
use crate::model::{Band, Wall};

/// Walls crossed by `p1`–`p2`, minus the one at index `ignore`.
fn crossed<'a>(
    p1: Point,
    p2: Point,
    walls: &'a [Wall],
    ignore: Option<usize>,
) -> impl Iterator<Item = &'a Wall> {
    walls
        .iter()
        .enumerate()
        .filter(move |(i, _)| Some(*i) != ignore)
        .filter(move |(_, w)| segments_intersect(p1, p2, w.start, w.end))
        .map(|(_, w)| w)
}

/// Summed attenuation of every wall crossed by `p1`–`p2`, in dB.
///
/// `ignore` skips the wall at that index (the reflector of a bounce path).
/// `band` of `None` means 2.4 GHz.
pub fn wall_loss_along(
    p1: Point,
    p2: Point,
    walls: &[Wall],
    ignore: Option<usize>,
    band: Option<Band>,
) -> f64 {
    crossed(p1, p2, walls, ignore)
        .map(|w| w.attenuation_db(band))
        .sum()
}

/// Number of walls crossed by `p1`–`p2`.
pub fn wall_cross_count(p1: Point, p2: Point, walls: &[Wall], ignore: Option<usize>) -> usize {
    crossed(p1, p2, walls, ignore).count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::model::WallMaterial;

    fn vertical(x: f64, material: WallMaterial) -> Wall {
        Wall::new((x, -10.0), (x, 10.0), material)
    }

    #[test]
    fn no_walls_no_loss() {
        let loss = wall_loss_along(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &[], None, None);
        assert_eq!(loss, 0.0);
    }

    #[test]
    fn sums_crossed_walls_per_band() {
        let walls = [
            vertical(10.0, WallMaterial::Brick),
            vertical(20.0, WallMaterial::Door),
            vertical(200.0, WallMaterial::Concrete),
        ];
        let (a, b) = (Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(wall_loss_along(a, b, &walls, None, None), 5.0 + 3.0);
        assert_eq!(wall_loss_along(a, b, &walls, None, Some(Band::Ghz5)), 15.0 + 8.0);
        assert_eq!(wall_loss_along(a, b, &walls, None, Some(Band::Ghz6)), 5.0 + 3.0);
        assert_eq!(wall_cross_count(a, b, &walls, None), 2);
    }

    #[test]
    fn ignored_wall_is_skipped() {
        let walls = [vertical(10.0, WallMaterial::Brick), vertical(20.0, WallMaterial::Door)];
        let (a, b) = (Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert_eq!(wall_loss_along(a, b, &walls, Some(0), None), 3.0);
        assert_eq!(wall_cross_count(a, b, &walls, Some(1)), 1);
    }

    #[test]
    fn touching_endpoint_counts_as_crossing() {
        let walls = [vertical(100.0, WallMaterial::Drywall)];
        let loss = wall_loss_along(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &walls, None, None);
        assert_eq!(loss, WallMaterial::Drywall.default_attenuation_24_db());
    }
}
