use ca_core::{Label, Point2i};

use crate::pipeline::CellFile;

/// Header of the semicolon separated text produced by [`CellFile::log_lines`].
pub const LOG_HEADER: &str = "imageName;tissueType;label1;label2;innerPointX;innerPointY;outerPointX;outerPointY;angleInDegrees";

/// One line of the results table, angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRow {
    pub label1: Label,
    pub label2: Label,
    pub inner_x: i32,
    pub inner_y: i32,
    pub outer_x: i32,
    pub outer_y: i32,
    pub angle_deg: f64,
}

impl CellFile {
    pub fn is_complete(&self) -> bool {
        matches!(self.outcome, crate::Outcome::Completed)
    }

    /// Inner then outer point of every record, in record order.
    pub fn all_extremities(&self) -> Vec<Point2i> {
        self.boundaries
            .iter()
            .flat_map(|b| [b.inner, b.outer])
            .collect()
    }

    pub fn table(&self) -> Vec<BoundaryRow> {
        self.boundaries
            .iter()
            .map(|b| BoundaryRow {
                label1: b.label1,
                label2: b.label2,
                inner_x: b.inner.x,
                inner_y: b.inner.y,
                outer_x: b.outer.x,
                outer_y: b.outer.y,
                angle_deg: b.angle.to_degrees(),
            })
            .collect()
    }

    /// [`LOG_HEADER`] followed by one line per record, angles with three decimals.
    pub fn log_lines(&self, image_name: &str) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.boundaries.len() + 1);
        lines.push(LOG_HEADER.to_owned());
        for r in self.table() {
            lines.push(format!(
                "{image_name}; {}; {}; {}; {}; {}; {}; {}; {:.3}",
                self.tissue_type,
                r.label1,
                r.label2,
                r.inner_x,
                r.inner_y,
                r.outer_x,
                r.outer_y,
                r.angle_deg
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use ca_boundary::RootSide;
    use ca_core::{Point2d, Point2i, Polyline2d};

    use crate::{BoundaryRecord, CellFile, LOG_HEADER, Outcome};

    fn sample() -> CellFile {
        CellFile {
            tissue_type: "Cortex".to_owned(),
            side: RootSide::Left,
            smoothed: true,
            labels: vec![4, 7, 10],
            path: Polyline2d {
                points: vec![Point2d::default(); 3],
            },
            boundaries: vec![
                BoundaryRecord {
                    label1: 4,
                    label2: 7,
                    inner: Point2i::new(3, 1),
                    outer: Point2i::new(3, 4),
                    angle: core::f64::consts::FRAC_PI_2,
                },
                BoundaryRecord {
                    label1: 7,
                    label2: 10,
                    inner: Point2i::new(6, 1),
                    outer: Point2i::new(6, 4),
                    angle: core::f64::consts::PI,
                },
            ],
            outcome: Outcome::Completed,
        }
    }

    #[test]
    fn extremities_and_table() {
        let cf = sample();
        assert!(cf.is_complete());
        assert_eq!(
            cf.all_extremities(),
            vec![
                Point2i::new(3, 1),
                Point2i::new(3, 4),
                Point2i::new(6, 1),
                Point2i::new(6, 4)
            ]
        );

        let rows = cf.table();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[1].label1, rows[1].label2), (7, 10));
        assert!((rows[0].angle_deg - 90.0).abs() < 1e-9);
        assert!((rows[1].angle_deg - 180.0).abs() < 1e-9);
    }

    #[test]
    fn log_lines_format() {
        let lines = sample().log_lines("root-01");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], LOG_HEADER);
        assert_eq!(lines[1], "root-01; Cortex; 4; 7; 3; 1; 3; 4; 90.000");
        assert_eq!(lines[2], "root-01; Cortex; 7; 10; 6; 1; 6; 4; 180.000");
    }
}
