//! Walking a label image along a polyline.
//!
//! - [`digital_line`] samples the integer cells of a segment with a digital
//!   differential analyzer: one sample per unit step along the major axis,
//!   the minor coordinate rounded with `f64::round` (ties away from zero).
//! - [`extract_labels`] runs the rasterizer over every waypoint segment and
//!   keeps the non-background labels in first-encounter order.
//!
//! Waypoints are converted to cells by truncation toward zero before
//! rasterizing; samples that fall outside the image read as background.

mod labels;
mod line;

pub use labels::{LabelSequence, extract_labels};
pub use line::{DigitalLine, digital_line};
