use std::collections::HashMap;

use ca_core::{Error, Label, LabelView, Point2d};

/// Maps region labels to their centroids.
///
/// Implementations return one point per requested label, in request order.
pub trait CentroidProvider {
    fn centroids(&self, img: &LabelView<'_>, labels: &[Label]) -> Result<Vec<Point2d>, Error>;
}

impl<F> CentroidProvider for F
where
    F: Fn(&LabelView<'_>, &[Label]) -> Result<Vec<Point2d>, Error>,
{
    fn centroids(&self, img: &LabelView<'_>, labels: &[Label]) -> Result<Vec<Point2d>, Error> {
        self(img, labels)
    }
}

/// Centroid as the mean `(x, y)` of the pixels carrying the label.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelMeanCentroids;

impl CentroidProvider for PixelMeanCentroids {
    fn centroids(&self, img: &LabelView<'_>, labels: &[Label]) -> Result<Vec<Point2d>, Error> {
        let mut slot: HashMap<Label, usize> = HashMap::with_capacity(labels.len());
        for (i, &label) in labels.iter().enumerate() {
            slot.entry(label).or_insert(i);
        }

        let mut sum_x = vec![0.0_f64; labels.len()];
        let mut sum_y = vec![0.0_f64; labels.len()];
        let mut count = vec![0_usize; labels.len()];

        for y in 0..img.height() {
            for (x, label) in img.row(y).iter().enumerate() {
                let Some(&i) = slot.get(label) else {
                    continue;
                };
                sum_x[i] += x as f64;
                sum_y[i] += y as f64;
                count[i] += 1;
            }
        }

        labels
            .iter()
            .map(|label| {
                let i = slot[label];
                if count[i] == 0 {
                    return Err(Error::EmptyRegion { label: *label });
                }
                let n = count[i] as f64;
                Ok(Point2d {
                    x: sum_x[i] / n,
                    y: sum_y[i] / n,
                })
            })
            .collect()
    }
}
