use core::f64::consts::TAU;

use ca_core::{Point2d, Point2i};

use crate::RootSide;

/// Direction of the line from `a` to `b`, in `[0, 2π)`.
///
/// Undefined for `a == b`.
pub fn line_angle(a: Point2d, b: Point2d) -> f64 {
    ((b.y - a.y).atan2(b.x - a.x) + TAU) % TAU
}

/// Counter-clockwise turn from `angle1` to `angle2`, in `[0, 2π)`.
///
/// Both inputs are expected in `[0, 2π)`.
pub fn angle_between(angle1: f64, angle2: f64) -> f64 {
    (angle2 - angle1 + TAU) % TAU
}

/// Angle between the centroid line `c1 -> c2` and the wall line
/// `inner -> outer`.
///
/// For [`RootSide::Left`] the turn is measured from the centroid line to the
/// wall line, for [`RootSide::Right`] the other way round, so both sides of a
/// root report comparable values.
pub fn boundary_angle(
    c1: Point2d,
    c2: Point2d,
    inner: Point2i,
    outer: Point2i,
    side: RootSide,
) -> f64 {
    let file_angle = line_angle(c1, c2);
    let wall_angle = line_angle(inner.into(), outer.into());

    match side {
        RootSide::Left => angle_between(file_angle, wall_angle),
        RootSide::Right => angle_between(wall_angle, file_angle),
    }
}
