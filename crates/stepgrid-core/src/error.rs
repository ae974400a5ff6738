//! Errors raised while building or editing a [`Grid`](crate::Grid).

use std::fmt;

use crate::geom::Point;

/// Errors that can occur when configuring a grid scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The point lies outside the grid.
    OutOfBounds(Point),
    /// The point holds the other endpoint and cannot take this role.
    Reserved(Point),
    /// A second start or end marker was found while parsing.
    DuplicateEndpoint { ch: char, pos: Point },
    /// Parsed lines have inconsistent widths.
    InconsistentSize(String),
    /// A character outside `.#SE` was found while parsing.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the grid"),
            Self::Reserved(p) => write!(f, "point {p} already holds an endpoint"),
            Self::DuplicateEndpoint { ch, pos } => {
                write!(f, "grid layout has a second \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::InconsistentSize(s) => write!(f, "grid layout: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
