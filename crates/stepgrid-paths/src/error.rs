//! Contract violations raised by search strategies.

use std::fmt;

use stepgrid_core::Point;

/// Caller errors detected by a [`SearchStrategy`](crate::SearchStrategy).
///
/// Failing to find a path is not an error: it is reported through
/// [`Status::Exhausted`](crate::Status::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `step` was called before `initialize`.
    NotInitialized,
    /// An endpoint lies outside the grid.
    OutOfBounds(Point),
    /// An endpoint is a wall.
    WallEndpoint(Point),
    /// Start and end are the same cell.
    SameEndpoints(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "search stepped before initialization"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::WallEndpoint(p) => write!(f, "endpoint {p} is a wall"),
            Self::SameEndpoints(p) => write!(f, "start and end are both {p}"),
        }
    }
}

impl std::error::Error for SearchError {}
