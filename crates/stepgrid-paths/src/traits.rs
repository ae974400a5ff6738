use stepgrid_core::{Grid, Point};

use crate::error::SearchError;

/// Lifecycle of one strategy instance.
///
/// `Uninitialized → Running → {Found, Exhausted}`. Only
/// [`SearchStrategy::initialize`] leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Uninitialized,
    Running,
    Found,
    Exhausted,
}

impl Status {
    /// Whether the run has ended, with or without a path.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// Step-wise search over a [`Grid`].
///
/// A strategy holds a handle to the grid it was initialized with and writes
/// the per-run cell fields (`visited`, `parent`, `g_cost`, `h_cost`). The
/// driver must call [`Grid::reset_search`] before re-initializing on the
/// same grid.
pub trait SearchStrategy {
    /// Human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Bind to `grid` and seed a new run from `start` to `end`.
    ///
    /// Both endpoints must be distinct, in-bounds, non-wall cells.
    fn initialize(&mut self, grid: &Grid, start: Point, end: Point) -> Result<(), SearchError>;

    /// Perform one unit of work. Returns `true` once the run has terminated.
    ///
    /// Stepping a terminated run is a no-op that returns `true`.
    fn step(&mut self) -> Result<bool, SearchError>;

    /// Cells from start to end inclusive, or `None` if no path was found.
    fn path(&self) -> Option<&[Point]>;

    /// Cells newly discovered by the most recent `step` (or the seeds, right
    /// after `initialize`). Duplicate-free, in discovery order.
    fn frontier(&self) -> Vec<Point>;

    /// Cells expanded so far in this run. Duplicate-free, in expansion order.
    fn visited(&self) -> Vec<Point>;

    fn status(&self) -> Status;

    /// Number of `step` calls that did work in this run.
    fn steps(&self) -> usize;

    fn is_finished(&self) -> bool {
        self.status().is_terminal()
    }

    /// Step until the run terminates and return the path, if any.
    fn run(&mut self) -> Result<Option<Vec<Point>>, SearchError> {
        while !self.step()? {}
        Ok(self.path().map(<[Point]>::to_vec))
    }
}
