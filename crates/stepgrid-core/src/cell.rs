//! The [`Cell`] type, one square of the search grid.

use crate::geom::Point;

/// A grid square with scenario flags and per-run search fields.
///
/// The position is fixed at construction. The `start`, `end` and `wall` flags
/// are only changed through [`Grid`](crate::Grid) mutators, which keep them
/// consistent. The search fields (`visited`, `parent`, `g_cost`, `h_cost`) are
/// written by the running search and cleared by
/// [`Grid::reset_search`](crate::Grid::reset_search) between runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    start: bool,
    end: bool,
    wall: bool,
    visited: bool,
    parent: Option<Point>,
    g_cost: i32,
    h_cost: i32,
}

impl Cell {
    pub(crate) const fn new(pos: Point) -> Self {
        Self {
            pos,
            start: false,
            end: false,
            wall: false,
            visited: false,
            parent: None,
            g_cost: 0,
            h_cost: 0,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.start
    }

    #[inline]
    pub const fn is_end(&self) -> bool {
        self.end
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.wall
    }

    /// Display-only marker; searches keep their own visited bookkeeping.
    #[inline]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// The cell this one was discovered from in the current run.
    #[inline]
    pub const fn parent(&self) -> Option<Point> {
        self.parent
    }

    /// Accumulated path cost from the start.
    #[inline]
    pub const fn g_cost(&self) -> i32 {
        self.g_cost
    }

    /// Heuristic estimate of the remaining cost to the goal.
    #[inline]
    pub const fn h_cost(&self) -> i32 {
        self.h_cost
    }

    /// `g_cost + h_cost`.
    #[inline]
    pub const fn f_cost(&self) -> i32 {
        self.g_cost + self.h_cost
    }

    #[inline]
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    #[inline]
    pub fn set_parent(&mut self, parent: Option<Point>) {
        self.parent = parent;
    }

    #[inline]
    pub fn set_g_cost(&mut self, g: i32) {
        self.g_cost = g;
    }

    #[inline]
    pub fn set_h_cost(&mut self, h: i32) {
        self.h_cost = h;
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        !self.wall
    }

    /// Clear every search field back to its default.
    pub fn reset_search(&mut self) {
        self.visited = false;
        self.parent = None;
        self.g_cost = 0;
        self.h_cost = 0;
    }

    pub(crate) fn set_start_flag(&mut self, start: bool) {
        self.start = start;
        if start {
            self.wall = false;
        }
    }

    pub(crate) fn set_end_flag(&mut self, end: bool) {
        self.end = end;
        if end {
            self.wall = false;
        }
    }

    pub(crate) fn set_wall_flag(&mut self, wall: bool) {
        self.wall = wall;
    }
}
