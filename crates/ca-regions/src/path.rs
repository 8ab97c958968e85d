use ca_core::{Error, Label, LabelView, Point2d, Polyline2d};
use log::debug;

use crate::CentroidProvider;

/// One vertex per label, at that region's centroid, in sequence order.
pub fn build_path_curve<C>(
    img: &LabelView<'_>,
    labels: &[Label],
    provider: &C,
) -> Result<Polyline2d, Error>
where
    C: CentroidProvider + ?Sized,
{
    let centroids = provider.centroids(img, labels)?;
    if centroids.len() != labels.len() {
        return Err(Error::SizeMismatch {
            expected: labels.len(),
            actual: centroids.len(),
        });
    }

    debug!("build_path_curve: {} vertices", centroids.len());
    Ok(Polyline2d { points: centroids })
}

/// 3-point moving average over interior vertices.
///
/// Averages are taken from the input curve, never from already smoothed
/// vertices. The first and last vertex are copied unchanged, so curves with
/// fewer than three vertices come back identical.
pub fn smooth_path(curve: &Polyline2d) -> Polyline2d {
    let src = &curve.points;
    let n = src.len();

    let mut out = curve.clone();
    for i in 1..n.saturating_sub(1) {
        let (a, b, c) = (src[i - 1], src[i], src[i + 1]);
        out.points[i] = Point2d {
            x: (a.x + b.x + c.x) / 3.0,
            y: (a.y + b.y + c.y) / 3.0,
        };
    }
    out
}
