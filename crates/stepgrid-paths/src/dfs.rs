use stepgrid_core::{Grid, Point};

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::path::trace_parents;
use crate::run::Run;
use crate::traits::{SearchStrategy, Status};

/// Depth-first search with an explicit stack, one cell per step.
///
/// Finds *a* connecting path, not necessarily a short one.
#[derive(Default)]
pub struct DepthFirst {
    state: Option<DfsState>,
}

struct DfsState {
    run: Run,
    stack: Vec<Point>,
    // Expanded cells. A cell can sit on the stack more than once; only the
    // copy popped first is expanded.
    closed: Vec<bool>,
    nbuf: Neighbors,
}

impl DfsState {
    /// Drop already-expanded copies from the top of the stack.
    fn prune(&mut self) {
        while let Some(&top) = self.stack.last() {
            match self.run.grid.index(top) {
                Some(i) if !self.closed[i] => break,
                _ => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl DepthFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStrategy for DepthFirst {
    fn name(&self) -> &'static str {
        "Depth-First"
    }

    fn initialize(&mut self, grid: &Grid, start: Point, end: Point) -> Result<(), SearchError> {
        self.state = None;
        let run = Run::begin(self.name(), grid, start, end)?;
        self.state = Some(DfsState {
            run,
            stack: vec![start],
            closed: vec![false; grid.len()],
            nbuf: Neighbors::new(),
        });
        Ok(())
    }

    fn step(&mut self) -> Result<bool, SearchError> {
        let Some(st) = self.state.as_mut() else {
            return Err(SearchError::NotInitialized);
        };
        if st.run.is_finished() {
            return Ok(true);
        }
        st.run.begin_step();

        st.prune();
        let Some(current) = st.stack.pop() else {
            st.run.finish_exhausted();
            return Ok(true);
        };
        let Some(ci) = st.run.grid.index(current) else {
            return Err(SearchError::OutOfBounds(current));
        };
        st.closed[ci] = true;
        st.run.expand(current);
        if current == st.run.end {
            let path = trace_parents(&st.run.grid, current);
            st.run.finish_found(path);
            return Ok(true);
        }

        let DfsState {
            run,
            stack,
            closed,
            nbuf,
        } = &mut *st;
        let g = run.g_cost(current) + 1;
        for &n in nbuf.passable(&run.grid, current) {
            let Some(ni) = run.grid.index(n) else {
                continue;
            };
            if closed[ni] {
                continue;
            }
            run.discover(n, current, g);
            stack.push(n);
        }

        st.prune();
        if st.stack.is_empty() {
            st.run.finish_exhausted();
        } else {
            st.run.trace_step();
        }
        Ok(st.run.is_finished())
    }

    fn path(&self) -> Option<&[Point]> {
        self.state.as_ref()?.run.path.as_deref()
    }

    fn frontier(&self) -> Vec<Point> {
        self.state
            .as_ref()
            .map_or_else(Vec::new, |s| s.run.frontier.clone())
    }

    fn visited(&self) -> Vec<Point> {
        self.state
            .as_ref()
            .map_or_else(Vec::new, |s| s.run.visited.clone())
    }

    fn status(&self) -> Status {
        self.state.as_ref().map_or(Status::Uninitialized, |s| s.run.status)
    }

    fn steps(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.run.steps)
    }
}
