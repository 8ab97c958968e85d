//! Boundary geometry between two adjacent regions of a label image.
//!
//! The wall between regions `a` and `b` is the set of background pixels whose
//! 4-connected neighbors include both labels. Its ends are the wall pixels
//! with exactly one 8-connected neighbor in the wall. Each end is assigned
//! the inner or outer role from its side of the centroid-to-centroid line and
//! the configured [`RootSide`]; the farthest candidate wins each role. The
//! boundary angle is measured between the centroid line and the inner-to-outer
//! line.
//!
//! Wall detection is a full-image scan per label pair. Nothing here assumes
//! the wall is a simple arc: branching or broken walls yield any number of
//! ends, and a role without candidates is reported as `None`.

mod angle;
mod classify;
mod pixels;

pub use angle::{angle_between, boundary_angle, line_angle};
pub use classify::{ContactPoints, ContactRole, RootSide, classify_extremities};
pub use pixels::{Connectivity, find_boundary_pixels, find_extremities, neighbors};

use ca_core::{Error, Label, LabelView, Point2d, Point2i};
use log::debug;

/// Everything computed for one pair of adjacent regions.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryAnalysis {
    pub label1: Label,
    pub label2: Label,
    pub pixels: Vec<Point2i>,
    pub extremities: Vec<Point2i>,
    pub contacts: ContactPoints,
    /// Present only when both contact points were found.
    pub angle: Option<f64>,
}

/// Runs wall scan, end isolation, role assignment and angle for one pair.
///
/// `c1` and `c2` are the centroids of `label1` and `label2`.
pub fn analyze_boundary(
    img: &LabelView<'_>,
    label1: Label,
    label2: Label,
    c1: Point2d,
    c2: Point2d,
    side: RootSide,
) -> Result<BoundaryAnalysis, Error> {
    let pixels = find_boundary_pixels(img, label1, label2);
    let extremities = find_extremities(&pixels);
    let contacts = classify_extremities(&extremities, c1, c2, side)?;

    let angle = match (contacts.inner, contacts.outer) {
        (Some(inner), Some(outer)) => Some(boundary_angle(c1, c2, inner, outer, side)),
        _ => None,
    };

    debug!(
        "boundary {label1}-{label2}: {} pixels, {} extremities, angle={angle:?}",
        pixels.len(),
        extremities.len()
    );

    Ok(BoundaryAnalysis {
        label1,
        label2,
        pixels,
        extremities,
        contacts,
        angle,
    })
}
