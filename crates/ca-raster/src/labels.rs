use std::collections::HashSet;

use ca_core::{BACKGROUND, Error, Label, LabelView, Point2d};
use log::debug;

use crate::line::digital_line;

/// Distinct region labels in first-encounter order.
///
/// A label seen anywhere earlier is never appended again, no matter how far
/// back it was seen.
#[derive(Debug, Clone, Default)]
pub struct LabelSequence {
    order: Vec<Label>,
    seen: HashSet<Label>,
}

impl LabelSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` unless it is already present. Returns true if appended.
    pub fn insert(&mut self, label: Label) -> bool {
        if !self.seen.insert(label) {
            return false;
        }
        self.order.push(label);
        true
    }

    pub fn contains(&self, label: Label) -> bool {
        self.seen.contains(&label)
    }

    pub fn as_slice(&self) -> &[Label] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<Label> {
        self.order
    }
}

impl PartialEq for LabelSequence {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for LabelSequence {}

impl FromIterator<Label> for LabelSequence {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut seq = Self::new();
        for label in iter {
            seq.insert(label);
        }
        seq
    }
}

/// Labels crossed by the polyline through `waypoints`, in traversal order.
///
/// Each waypoint is truncated to its cell, then every segment is rasterized
/// with [`digital_line`]. Background and out-of-image samples are skipped.
/// Waypoints must be finite; coordinates beyond the `i32` range saturate.
pub fn extract_labels(img: &LabelView<'_>, waypoints: &[Point2d]) -> Result<LabelSequence, Error> {
    if waypoints.len() < 2 {
        return Err(Error::TooFewWaypoints {
            count: waypoints.len(),
        });
    }

    if let Some(index) = waypoints.iter().position(|p| !p.is_finite()) {
        return Err(Error::InvalidWaypoint { index });
    }

    let mut seq = LabelSequence::new();
    let mut samples = 0usize;
    for pair in waypoints.windows(2) {
        let line = digital_line(pair[0].to_cell(), pair[1].to_cell());
        for cell in line.clipped_to(img.width(), img.height()) {
            samples += 1;
            let label = img.at(cell).unwrap_or(BACKGROUND);
            if label != BACKGROUND {
                seq.insert(label);
            }
        }
    }

    debug!(
        "extract_labels: {} waypoints, {samples} samples, {} labels",
        waypoints.len(),
        seq.len()
    );
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use ca_core::{Error, Label, LabelImage, Point2d, Point2i};
    use proptest::prelude::*;

    use super::{LabelSequence, extract_labels};
    use crate::digital_line;

    fn four_rect_image() -> LabelImage {
        let mut img = LabelImage::new_fill(13, 6, 0);
        img.fill_rect(1, 1, 3, 5, 4);
        img.fill_rect(4, 1, 6, 5, 7);
        img.fill_rect(7, 1, 9, 5, 10);
        img.fill_rect(10, 1, 12, 5, 15);
        img
    }

    fn p(x: f64, y: f64) -> Point2d {
        Point2d { x, y }
    }

    #[test]
    fn four_rectangles_in_traversal_order() {
        let img = four_rect_image();
        let waypoints = [p(2.0, 2.0), p(7.0, 4.0), p(11.0, 2.0)];

        let seq = extract_labels(&img.as_view(), &waypoints).expect("two or more waypoints");
        assert_eq!(seq.as_slice(), &[4, 7, 10, 15]);
    }

    #[test]
    fn revisited_labels_keep_their_first_position() {
        let img = four_rect_image();
        let waypoints = [p(5.0, 2.0), p(1.0, 2.0), p(11.0, 3.0), p(4.0, 3.0)];

        let seq = extract_labels(&img.as_view(), &waypoints).expect("valid waypoints");
        assert_eq!(seq.as_slice(), &[7, 4, 10, 15]);
    }

    #[test]
    fn fractional_waypoints_are_truncated() {
        let img = four_rect_image();
        // (3.9, 2.2) truncates to the background cell (3, 2), not to label 7.
        let waypoints = [p(3.9, 2.2), p(3.2, 4.8)];

        let seq = extract_labels(&img.as_view(), &waypoints).expect("valid waypoints");
        assert!(seq.is_empty());
    }

    #[test]
    fn samples_outside_the_image_are_background() {
        let img = four_rect_image();
        let waypoints = [p(-5.0, 2.0), p(20.0, 2.0)];

        let seq = extract_labels(&img.as_view(), &waypoints).expect("valid waypoints");
        assert_eq!(seq.as_slice(), &[4, 7, 10, 15]);
    }

    #[test]
    fn far_away_waypoints_cross_the_same_labels() {
        let img = four_rect_image();
        let waypoints = [p(-3.0e9, 2.0), p(3.0e9, 2.0)];

        let seq = extract_labels(&img.as_view(), &waypoints).expect("finite waypoints");
        assert_eq!(seq.as_slice(), &[4, 7, 10, 15]);

        let waypoints = [p(5.0, 3.0e9), p(5.0, -3.0e9), p(-3.0e9, -3.0e9)];
        let seq = extract_labels(&img.as_view(), &waypoints).expect("finite waypoints");
        assert_eq!(seq.as_slice(), &[7]);
    }

    #[test]
    fn non_finite_waypoints_are_rejected() {
        let img = four_rect_image();
        assert_eq!(
            extract_labels(&img.as_view(), &[p(2.0, 2.0), p(f64::NAN, 2.0)]).unwrap_err(),
            Error::InvalidWaypoint { index: 1 }
        );
        assert_eq!(
            extract_labels(&img.as_view(), &[p(f64::INFINITY, 0.0), p(2.0, 2.0)]).unwrap_err(),
            Error::InvalidWaypoint { index: 0 }
        );
    }

    #[test]
    fn fewer_than_two_waypoints_is_rejected() {
        let img = four_rect_image();
        assert_eq!(
            extract_labels(&img.as_view(), &[p(2.0, 2.0)]).unwrap_err(),
            Error::TooFewWaypoints { count: 1 }
        );
        assert_eq!(
            extract_labels(&img.as_view(), &[]).unwrap_err(),
            Error::TooFewWaypoints { count: 0 }
        );
    }

    #[test]
    fn sequence_insert_reports_duplicates() {
        let mut seq = LabelSequence::new();
        assert!(seq.insert(3));
        assert!(seq.insert(1));
        assert!(!seq.insert(3));
        assert!(seq.contains(1));
        assert_eq!(seq.into_vec(), vec![3, 1]);
    }

    proptest! {
        #[test]
        fn matches_linear_scan_first_occurrence(
            data in prop::collection::vec(0..5u32, 64),
            coords in prop::collection::vec((0..8i32, 0..8i32), 2..6),
        ) {
            let img = LabelImage::from_vec(8, 8, data).expect("8x8 image");
            let view = img.as_view();
            let waypoints: Vec<Point2d> =
                coords.iter().map(|&(x, y)| Point2d::from(Point2i::new(x, y))).collect();

            let seq = extract_labels(&view, &waypoints).expect("at least two waypoints");

            let mut expected: Vec<Label> = Vec::new();
            for w in coords.windows(2) {
                let (a, b) = (Point2i::new(w[0].0, w[0].1), Point2i::new(w[1].0, w[1].1));
                for cell in digital_line(a, b) {
                    let label = view.at(cell).expect("waypoints lie inside the image");
                    if label != 0 && !expected.contains(&label) {
                        expected.push(label);
                    }
                }
            }
            prop_assert_eq!(seq.as_slice(), expected.as_slice());
        }
    }
}
