//! Region statistics and the centroid path through a cell file.
//!
//! [`CentroidProvider`] is the seam to whatever computes region centroids;
//! [`PixelMeanCentroids`] is the plain mean of member-pixel coordinates.
//! [`build_path_curve`] turns a label sequence into one vertex per region and
//! [`smooth_path`] applies a single 3-point moving average.

mod centroid;
mod path;

pub use centroid::{CentroidProvider, PixelMeanCentroids};
pub use path::{build_path_curve, smooth_path};
