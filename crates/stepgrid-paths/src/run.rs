//! Bookkeeping shared by every strategy: endpoints, status and the
//! frontier/visited/path snapshots the driver polls.

use stepgrid_core::{Grid, Point};

use crate::error::SearchError;
use crate::traits::Status;

pub(crate) struct Run {
    pub(crate) name: &'static str,
    pub(crate) grid: Grid,
    pub(crate) start: Point,
    pub(crate) end: Point,
    pub(crate) status: Status,
    pub(crate) frontier: Vec<Point>,
    pub(crate) visited: Vec<Point>,
    pub(crate) path: Option<Vec<Point>>,
    pub(crate) steps: usize,
}

impl Run {
    /// Validate the endpoints and open a run with `start` as the only seed.
    pub(crate) fn begin(
        name: &'static str,
        grid: &Grid,
        start: Point,
        end: Point,
    ) -> Result<Self, SearchError> {
        for p in [start, end] {
            let cell = grid.at(p).ok_or(SearchError::OutOfBounds(p))?;
            if cell.is_wall() {
                return Err(SearchError::WallEndpoint(p));
            }
        }
        if start == end {
            return Err(SearchError::SameEndpoints(start));
        }
        grid.update(start, |c| {
            c.set_parent(None);
            c.set_g_cost(0);
        });
        log::debug!(
            "{name}: initialized on {}x{} grid, {start} -> {end}",
            grid.rows(),
            grid.cols()
        );
        Ok(Self {
            name,
            grid: grid.clone(),
            start,
            end,
            status: Status::Running,
            frontier: vec![start],
            visited: Vec::new(),
            path: None,
            steps: 0,
        })
    }

    #[inline]
    pub(crate) fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Flat index of an endpoint, which `begin` has already bounds-checked.
    pub(crate) fn endpoint_index(&self, p: Point) -> Result<usize, SearchError> {
        self.grid.index(p).ok_or(SearchError::OutOfBounds(p))
    }

    /// Start a unit of work: the frontier only reports this step's discoveries.
    pub(crate) fn begin_step(&mut self) {
        self.frontier.clear();
        self.steps += 1;
    }

    /// Record that `p` has been expanded.
    pub(crate) fn expand(&mut self, p: Point) {
        self.visited.push(p);
        self.grid.update(p, |c| c.set_visited(true));
    }

    /// Record that `n` was reached from `from` with cost `g`.
    pub(crate) fn discover(&mut self, n: Point, from: Point, g: i32) {
        self.grid.update(n, |c| {
            c.set_parent(Some(from));
            c.set_g_cost(g);
        });
        self.frontier.push(n);
    }

    pub(crate) fn g_cost(&self, p: Point) -> i32 {
        self.grid.at(p).map_or(0, |c| c.g_cost())
    }

    pub(crate) fn finish_found(&mut self, path: Vec<Point>) {
        log::debug!(
            "{}: found path of {} cells after {} steps, {} cells visited",
            self.name,
            path.len(),
            self.steps,
            self.visited.len()
        );
        self.status = Status::Found;
        self.frontier.clear();
        self.path = Some(path);
    }

    pub(crate) fn finish_exhausted(&mut self) {
        log::debug!(
            "{}: exhausted after {} steps, {} cells visited, no path",
            self.name,
            self.steps,
            self.visited.len()
        );
        self.status = Status::Exhausted;
        self.frontier.clear();
        self.path = None;
    }

    pub(crate) fn trace_step(&self) {
        log::trace!(
            "{}: step {} discovered {} cells, {} visited",
            self.name,
            self.steps,
            self.frontier.len(),
            self.visited.len()
        );
    }
}
