use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    /// A traversal needs at least two waypoints.
    TooFewWaypoints { count: usize },
    /// Waypoint `index` has a NaN or infinite coordinate.
    InvalidWaypoint { index: usize },
    /// The two points defining a line coincide.
    DegenerateLine,
    /// A region statistic was requested for a label with no pixels.
    EmptyRegion { label: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::TooFewWaypoints { count } => {
                write!(f, "requires at least two waypoints, got {count}")
            }
            Self::InvalidWaypoint { index } => {
                write!(f, "waypoint {index} has a non-finite coordinate")
            }
            Self::DegenerateLine => {
                write!(f, "line endpoints are too close to define a direction")
            }
            Self::EmptyRegion { label } => write!(f, "region {label} has no pixels"),
        }
    }
}

impl std::error::Error for Error {}
