use ca_boundary::{ContactRole, RootSide, analyze_boundary};
use ca_core::{Error, Label, LabelView, Point2d, Point2i, Polyline2d};
use ca_raster::extract_labels;
use ca_regions::{CentroidProvider, PixelMeanCentroids, build_path_curve, smooth_path};
use log::{debug, warn};

/// Tissue names offered by default; any other name is accepted as well.
pub const TISSUE_PRESETS: [&str; 4] = ["Epiderm", "Cortex", "Endoderm", "Pericycle"];

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub side: RootSide,
    pub smooth_path: bool,
    /// Free-form metadata carried into the reports.
    pub tissue_type: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            side: RootSide::Left,
            smooth_path: true,
            tissue_type: TISSUE_PRESETS[0].to_owned(),
        }
    }
}

/// Contact points and angle of the wall between two consecutive regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRecord {
    pub label1: Label,
    pub label2: Label,
    pub inner: Point2i,
    pub outer: Point2i,
    /// Radians in `[0, 2π)`.
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every consecutive pair produced a record.
    Completed,
    /// Pair `pair_index` had no point for `missing`; later pairs were skipped.
    Aborted {
        pair_index: usize,
        label1: Label,
        label2: Label,
        missing: ContactRole,
    },
}

/// Result of one cell-file analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CellFile {
    pub tissue_type: String,
    pub side: RootSide,
    pub smoothed: bool,
    pub labels: Vec<Label>,
    /// One vertex per label; smoothed when `smoothed` is set.
    pub path: Polyline2d,
    pub boundaries: Vec<BoundaryRecord>,
    pub outcome: Outcome,
}

/// Analysis with pixel-mean centroids and default tissue metadata.
pub fn compute_cell_file_boundaries(
    img: &LabelView<'_>,
    waypoints: &[Point2d],
    side: RootSide,
    smooth: bool,
) -> Result<CellFile, Error> {
    let opts = AnalysisOptions {
        side,
        smooth_path: smooth,
        ..AnalysisOptions::default()
    };
    analyze_cell_file(img, waypoints, &opts)
}

pub fn analyze_cell_file(
    img: &LabelView<'_>,
    waypoints: &[Point2d],
    opts: &AnalysisOptions,
) -> Result<CellFile, Error> {
    analyze_cell_file_with(img, waypoints, opts, &PixelMeanCentroids)
}

/// Full pipeline with a caller-supplied centroid provider.
///
/// Fails on fewer than two waypoints, on provider errors, and when two
/// consecutive centroids coincide while their wall has ends. A pair without
/// an inner or outer point ends the run early with [`Outcome::Aborted`];
/// records produced before it are kept.
pub fn analyze_cell_file_with<C>(
    img: &LabelView<'_>,
    waypoints: &[Point2d],
    opts: &AnalysisOptions,
    provider: &C,
) -> Result<CellFile, Error>
where
    C: CentroidProvider + ?Sized,
{
    let labels = extract_labels(img, waypoints)?.into_vec();

    let mut path = build_path_curve(img, &labels, provider)?;
    if opts.smooth_path {
        path = smooth_path(&path);
    }

    let mut boundaries = Vec::with_capacity(labels.len().saturating_sub(1));
    let mut outcome = Outcome::Completed;

    for (i, pair) in labels.windows(2).enumerate() {
        let (label1, label2) = (pair[0], pair[1]);
        let (c1, c2) = (path.points[i], path.points[i + 1]);

        let analysis = analyze_boundary(img, label1, label2, c1, c2, opts.side)?;
        let contacts = analysis.contacts;
        let (Some(inner), Some(outer), Some(angle)) =
            (contacts.inner, contacts.outer, analysis.angle)
        else {
            let missing = contacts.missing().unwrap_or(ContactRole::Inner);
            warn!("{missing:?} point not found for pair {i} ({label1}-{label2}), stopping");
            outcome = Outcome::Aborted {
                pair_index: i,
                label1,
                label2,
                missing,
            };
            break;
        };

        boundaries.push(BoundaryRecord {
            label1,
            label2,
            inner,
            outer,
            angle,
        });
    }

    debug!(
        "analyze_cell_file: {} labels, {} boundaries, {outcome:?}",
        labels.len(),
        boundaries.len()
    );

    Ok(CellFile {
        tissue_type: opts.tissue_type.clone(),
        side: opts.side,
        smoothed: opts.smooth_path,
        labels,
        path,
        boundaries,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use ca_boundary::{ContactRole, RootSide};
    use ca_core::{Error, Label, LabelImage, LabelView, Point2d, Point2i};

    use super::{
        AnalysisOptions, Outcome, analyze_cell_file, analyze_cell_file_with,
        compute_cell_file_boundaries,
    };

    fn p(x: f64, y: f64) -> Point2d {
        Point2d { x, y }
    }

    /// Regions 4 and 7 touch across a one-pixel wall, 10 sits three pixels
    /// away from 7.
    fn broken_file_image() -> LabelImage {
        let mut img = LabelImage::new_fill(14, 6, 0);
        img.fill_rect(1, 1, 3, 5, 4);
        img.fill_rect(4, 1, 6, 5, 7);
        img.fill_rect(9, 1, 11, 5, 10);
        img
    }

    #[test]
    fn missing_wall_aborts_and_keeps_earlier_records() {
        let img = broken_file_image();
        let cf = compute_cell_file_boundaries(
            &img.as_view(),
            &[p(1.0, 2.0), p(10.0, 2.0)],
            RootSide::Left,
            false,
        )
        .expect("valid input");

        assert_eq!(cf.labels, vec![4, 7, 10]);
        assert_eq!(cf.boundaries.len(), 1);
        assert_eq!(cf.boundaries[0].inner, Point2i::new(3, 1));
        assert!((cf.boundaries[0].angle - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(
            cf.outcome,
            Outcome::Aborted {
                pair_index: 1,
                label1: 7,
                label2: 10,
                missing: ContactRole::Inner,
            }
        );
    }

    #[test]
    fn single_region_has_no_pairs() {
        let img = broken_file_image();
        let cf = analyze_cell_file(
            &img.as_view(),
            &[p(1.0, 1.0), p(2.0, 4.0)],
            &AnalysisOptions::default(),
        )
        .expect("valid input");

        assert_eq!(cf.labels, vec![4]);
        assert_eq!(cf.path.len(), 1);
        assert!(cf.boundaries.is_empty());
        assert_eq!(cf.outcome, Outcome::Completed);
        assert_eq!(cf.tissue_type, "Epiderm");
    }

    #[test]
    fn too_few_waypoints_fail_before_anything_else() {
        let img = broken_file_image();
        assert_eq!(
            compute_cell_file_boundaries(&img.as_view(), &[p(1.0, 1.0)], RootSide::Left, true),
            Err(Error::TooFewWaypoints { count: 1 })
        );
    }

    fn collapsed(_: &LabelView<'_>, labels: &[Label]) -> Result<Vec<Point2d>, Error> {
        Ok(vec![p(3.0, 2.0); labels.len()])
    }

    #[test]
    fn coincident_centroids_fail_the_run() {
        let img = broken_file_image();
        let opts = AnalysisOptions {
            smooth_path: false,
            ..AnalysisOptions::default()
        };
        assert_eq!(
            analyze_cell_file_with(&img.as_view(), &[p(1.0, 2.0), p(10.0, 2.0)], &opts, &collapsed),
            Err(Error::DegenerateLine)
        );
    }
}
