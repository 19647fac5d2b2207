// ── Geometry kernel ──
//
// Pixel-space primitives shared by the attenuation accumulator, the path
// builders and the candidate pruner. Degenerate inputs never panic: they
// return a neutral value (no intersection, identity reflection, zero angle).

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Tolerance for collinearity and parallel-line tests.
pub const EPS: f64 = 1e-9;

/// A point (or vector) in floorplan pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 2D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ── Orientation tests ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Collinear,
    CounterClockwise,
    Clockwise,
}

fn orient(a: Point, b: Point, c: Point) -> Orientation {
    let v = (b - a).cross(c - a);
    if v.abs() < EPS {
        Orientation::Collinear
    } else if v > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// `p` lies inside the bounding box of `ab` (inclusive, with tolerance).
fn within_bounds(a: Point, b: Point, p: Point) -> bool {
    p.x <= a.x.max(b.x) + EPS
        && p.x + EPS >= a.x.min(b.x)
        && p.y <= a.y.max(b.y) + EPS
        && p.y + EPS >= a.y.min(b.y)
}

// ── Public kernel ───────────────────────────────────────────────────

/// Whether segments `ab` and `cd` share at least one point.
///
/// Proper crossings, touching endpoints and collinear overlap all count.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let o1 = orient(a, b, c);
    let o2 = orient(a, b, d);
    let o3 = orient(c, d, a);
    let o4 = orient(c, d, b);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && within_bounds(a, b, c))
        || (o2 == Orientation::Collinear && within_bounds(a, b, d))
        || (o3 == Orientation::Collinear && within_bounds(c, d, a))
        || (o4 == Orientation::Collinear && within_bounds(c, d, b))
}

/// The single point where segments `ab` and `cd` cross.
///
/// `None` when they do not touch, or when the supporting lines are parallel
/// (including collinear overlap, which has no unique intersection).
pub fn segment_intersection_point(a: Point, b: Point, c: Point, d: Point) -> Option<Point> {
    if !segments_intersect(a, b, c, d) {
        return None;
    }

    let den = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
    if den.abs() < EPS {
        return None;
    }

    let ab = a.x * b.y - a.y * b.x;
    let cd = c.x * d.y - c.y * d.x;
    let p = Point::new(
        (ab * (c.x - d.x) - (a.x - b.x) * cd) / den,
        (ab * (c.y - d.y) - (a.y - b.y) * cd) / den,
    );

    (within_bounds(a, b, p) && within_bounds(c, d, p)).then_some(p)
}

/// Closest point to `p` on segment `ab` (projection clamped to the segment).
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let v = b - a;
    let len2 = v.dot(v);
    if len2 < EPS {
        return a;
    }
    let t = ((p - a).dot(v) / len2).clamp(0.0, 1.0);
    a + v * t
}

/// Mirror `p` across the infinite line through `a` and `b`.
///
/// A zero-length `ab` defines no line, so `p` comes back unchanged.
pub fn reflect_point_over_line(p: Point, a: Point, b: Point) -> Point {
    let v = b - a;
    let len2 = v.dot(v);
    if len2 < EPS {
        return p;
    }
    let t = (p - a).dot(v) / len2;
    let foot = a + v * t;
    foot * 2.0 - p
}

/// Unsigned angle between two vectors, in degrees (0–180).
pub fn angle_deg(u: Point, v: Point) -> f64 {
    let du = u.magnitude();
    let dv = v.magnitude();
    if du < EPS || dv < EPS {
        return 0.0;
    }
    let cos = (u.dot(v) / (du * dv)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
