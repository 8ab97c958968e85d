use ca_core::Point2i;

/// Cells of the 8-connected digital segment from `p1` to `p2`, both included.
///
/// The walk has `max(|dx|, |dy|) + 1` samples. Identical inputs always yield
/// identical cells.
pub fn digital_line(p1: Point2i, p2: Point2i) -> DigitalLine {
    let dx = i64::from(p2.x) - i64::from(p1.x);
    let dy = i64::from(p2.y) - i64::from(p1.y);
    let x_major = dx.unsigned_abs() >= dy.unsigned_abs();

    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
    let slope = if major == 0 {
        0.0
    } else {
        minor as f64 / major as f64
    };

    DigitalLine {
        start: p1,
        x_major,
        step: major.signum(),
        slope,
        next: 0,
        end: major.unsigned_abs() + 1,
    }
}

/// Restartable iterator over the cells of a digital segment.
#[derive(Debug, Clone)]
pub struct DigitalLine {
    start: Point2i,
    x_major: bool,
    step: i64,
    slope: f64,
    next: u64,
    end: u64,
}

impl DigitalLine {
    /// Drops the leading and trailing samples whose major-axis coordinate
    /// lies outside `[0, width) x [0, height)`.
    ///
    /// The cells that remain are exactly those of the full walk, so a segment
    /// reaching far outside an image costs only as many steps as the image is
    /// wide (or tall).
    pub fn clipped_to(mut self, width: usize, height: usize) -> Self {
        let (s0, extent) = if self.x_major {
            (i64::from(self.start.x), width)
        } else {
            (i64::from(self.start.y), height)
        };
        let hi = i64::try_from(extent).unwrap_or(i64::MAX);

        let (k_lo, k_hi) = if self.step >= 0 {
            (-s0, hi.saturating_sub(s0))
        } else {
            (s0.saturating_sub(hi) + 1, s0 + 1)
        };

        self.end = self.end.min(k_hi.max(0) as u64);
        self.next = self.next.max(k_lo.max(0) as u64).min(self.end);
        self
    }

    fn sample(&self, k: u64) -> Point2i {
        if k == 0 {
            return self.start;
        }

        // k never exceeds |major|, so the major coordinate stays between the
        // two endpoints and fits in i32.
        let offset = self.step * k as i64;
        if self.x_major {
            let y = f64::from(self.start.y) + self.slope * offset as f64;
            Point2i::new((i64::from(self.start.x) + offset) as i32, y.round() as i32)
        } else {
            let x = f64::from(self.start.x) + self.slope * offset as f64;
            Point2i::new(x.round() as i32, (i64::from(self.start.y) + offset) as i32)
        }
    }
}

impl Iterator for DigitalLine {
    type Item = Point2i;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let p = self.sample(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for DigitalLine {}
