use ca_core::{Error, Point2d, Point2i, distance_point_line, is_left_of};

/// Which side of the root the cell file lies on.
///
/// Fixes which side of the centroid line holds the inner contact point and
/// the direction in which the boundary angle is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootSide {
    #[default]
    Left,
    Right,
}

impl RootSide {
    pub fn is_left(self) -> bool {
        self == Self::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    Inner,
    Outer,
}

/// Representative ends of a wall; `None` when no end qualifies for the role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactPoints {
    pub inner: Option<Point2i>,
    pub outer: Option<Point2i>,
}

impl ContactPoints {
    /// First role without a point, inner before outer.
    pub fn missing(&self) -> Option<ContactRole> {
        if self.inner.is_none() {
            Some(ContactRole::Inner)
        } else if self.outer.is_none() {
            Some(ContactRole::Outer)
        } else {
            None
        }
    }
}

/// Splits wall ends into inner and outer candidates and keeps, per role, the
/// one farthest from the line through the two centroids.
///
/// A point is an inner candidate when `is_left_of(p, c1, c2) != side.is_left()`.
/// Ties keep the earlier point. Fails with [`Error::DegenerateLine`] if any
/// end has to be measured against coincident centroids.
pub fn classify_extremities(
    extremities: &[Point2i],
    c1: Point2d,
    c2: Point2d,
    side: RootSide,
) -> Result<ContactPoints, Error> {
    let mut contacts = ContactPoints::default();
    let mut max_inner = f64::NEG_INFINITY;
    let mut max_outer = f64::NEG_INFINITY;

    for &p in extremities {
        let q = Point2d::from(p);
        let dist = distance_point_line(q, c1, c2)?;

        if is_left_of(q, c1, c2) ^ side.is_left() {
            if dist > max_inner {
                contacts.inner = Some(p);
                max_inner = dist;
            }
        } else if dist > max_outer {
            contacts.outer = Some(p);
            max_outer = dist;
        }
    }

    Ok(contacts)
}
