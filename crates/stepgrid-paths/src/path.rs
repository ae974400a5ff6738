//! Path reconstruction and validation helpers.

use std::collections::HashSet;

use stepgrid_core::{Grid, Point};

/// Walk `parent` links from `goal` back to the root and return the path in
/// root-to-goal order.
///
/// The walk is bounded by the number of cells, so stale links left by a run
/// that was not reset cannot loop forever.
pub fn trace_parents(grid: &Grid, goal: Point) -> Vec<Point> {
    let mut path = Vec::new();
    let mut at = Some(goal);
    while let Some(p) = at {
        if path.len() > grid.len() {
            break;
        }
        path.push(p);
        at = grid.at(p).and_then(|c| c.parent());
    }
    path.reverse();
    path
}

/// Number of moves along `path` (unit edge cost).
#[inline]
pub fn path_cost(path: &[Point]) -> i32 {
    path.len().saturating_sub(1) as i32
}

/// Whether `path` runs from `start` to `end` through distinct, passable,
/// orthogonally adjacent cells.
pub fn is_valid_path(grid: &Grid, path: &[Point], start: Point, end: Point) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    if first != start || last != end {
        return false;
    }
    let mut seen = HashSet::with_capacity(path.len());
    if !path.iter().all(|&p| grid.is_passable(p) && seen.insert(p)) {
        return false;
    }
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
