//! Foundational primitives for cell-file boundary analysis.
//!
//! ## Label Images
//! A label image is an [`Image<u32>`] where `0` is background and any other
//! value identifies a region. [`ImageView`] borrows it row-major for the
//! read-only passes of the pipeline.
//!
//! ## Coordinates
//! Integer points ([`Point2i`]) address pixel centers, `x` along a row and `y`
//! down the columns. Reads outside `[0, width) x [0, height)` return `None`;
//! callers treat them as background.
//!
//! ## Orientation
//! [`is_left_of`] uses the sign of `(p - a) x (b - a)`: a negative cross
//! product means left. With `y` pointing down this is the left-hand side when
//! walking from `a` to `b` on screen.

mod error;
mod geom;
mod image;

pub use error::Error;
pub use geom::{Point2d, Point2i, Polyline2d, Vec2d, distance_point_line, is_left_of};
pub use image::{BACKGROUND, Image, ImageView, Label, LabelImage, LabelView};
