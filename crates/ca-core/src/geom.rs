use core::ops::Sub;

use crate::Error;

/// Squared length below which two points are considered to coincide.
const MIN_LINE_LENGTH2: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point2i {
    pub x: i32,
    pub y: i32,
}

impl Point2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, so `1` means 8-connected neighbors.
    pub fn chebyshev(self, other: Self) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Integer cell holding this point, truncating each coordinate toward zero.
    /// Coordinates outside the `i32` range saturate.
    pub fn to_cell(self) -> Point2i {
        Point2i {
            x: self.x as i32,
            y: self.y as i32,
        }
    }
}

impl From<Point2i> for Point2d {
    fn from(p: Point2i) -> Self {
        Self {
            x: f64::from(p.x),
            y: f64::from(p.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Vec2d {
    /// z-component of the 3D cross product.
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }

    pub fn norm2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl Sub<Point2d> for Point2d {
    type Output = Vec2d;

    fn sub(self, rhs: Point2d) -> Self::Output {
        Vec2d {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Open polyline; vertex order is traversal order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline2d {
    pub points: Vec<Point2d>,
}

impl Polyline2d {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, p: Point2d) {
        self.points.push(p);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2d> {
        self.points.iter()
    }
}

impl FromIterator<Point2d> for Polyline2d {
    fn from_iter<I: IntoIterator<Item = Point2d>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Returns true if `p` lies on the left side of the line from `a` to `b`.
///
/// Left means `(p - a) x (b - a) < 0`. Points on the line are not left.
pub fn is_left_of(p: Point2d, a: Point2d, b: Point2d) -> bool {
    (p - a).cross(b - a) < 0.0
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Fails with [`Error::DegenerateLine`] when `a` and `b` coincide.
pub fn distance_point_line(p: Point2d, a: Point2d, b: Point2d) -> Result<f64, Error> {
    let dir = b - a;
    let len2 = dir.norm2();
    if len2 < MIN_LINE_LENGTH2 {
        return Err(Error::DegenerateLine);
    }

    Ok((p - a).cross(dir).abs() / len2.sqrt())
}
