//! Meet-in-the-middle search: two breadth-first expansions, one rooted at the
//! start and one at the end, stepped alternately until they touch.

use std::collections::VecDeque;

use stepgrid_core::{Grid, Point};

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::run::Run;
use crate::traits::{SearchStrategy, Status};

/// Bidirectional breadth-first search.
///
/// A `step` expands one cell from the start side and, unless that met the
/// other side, one cell from the end side. Each side keeps its own seen set
/// and parent table; grid cells only get their display `visited` flag, not
/// `parent`. The stitched path is valid but not guaranteed shortest.
///
/// [`visited`](SearchStrategy::visited) is the union of both sides' seen
/// cells, which for this strategy are marked when queued.
#[derive(Default)]
pub struct Bidirectional {
    state: Option<BidiState>,
}

struct Side {
    queue: VecDeque<Point>,
    seen: Vec<bool>,
    parent: Vec<Option<Point>>,
}

impl Side {
    fn rooted(grid: &Grid, root: Point) -> Result<Self, SearchError> {
        let ri = grid.index(root).ok_or(SearchError::OutOfBounds(root))?;
        let mut seen = vec![false; grid.len()];
        seen[ri] = true;
        Ok(Self {
            queue: VecDeque::from([root]),
            seen,
            parent: vec![None; grid.len()],
        })
    }

    fn has_seen(&self, grid: &Grid, p: Point) -> bool {
        grid.index(p).is_some_and(|i| self.seen[i])
    }

    /// Follow this side's parent links from `from` back to its root.
    fn chain(&self, grid: &Grid, from: Option<Point>) -> Vec<Point> {
        let mut out = Vec::new();
        let mut at = from;
        while let Some(p) = at {
            if out.len() > grid.len() {
                break;
            }
            out.push(p);
            at = grid.index(p).and_then(|i| self.parent[i]);
        }
        out
    }
}

struct BidiState {
    run: Run,
    forward: Side,
    backward: Side,
    nbuf: Neighbors,
}

/// Expand one cell of `this`. Returns the meeting cell if a newly queued
/// neighbour had already been seen by `other`.
fn expand_side(
    run: &mut Run,
    this: &mut Side,
    other: &Side,
    nbuf: &mut Neighbors,
) -> Option<Point> {
    let current = this.queue.pop_front()?;
    for &n in nbuf.passable(&run.grid, current) {
        let Some(ni) = run.grid.index(n) else {
            continue;
        };
        if this.seen[ni] {
            continue;
        }
        this.seen[ni] = true;
        this.parent[ni] = Some(current);
        this.queue.push_back(n);
        run.frontier.push(n);

        if other.seen[ni] {
            return Some(n);
        }
        run.expand(n);
    }
    None
}

/// Start-side chain from the root to `meet`, then the end-side chain from
/// `meet`'s end-side parent to the end.
fn stitch(grid: &Grid, forward: &Side, backward: &Side, meet: Point) -> Vec<Point> {
    let mut path = forward.chain(grid, Some(meet));
    path.reverse();
    let tail = grid.index(meet).and_then(|i| backward.parent[i]);
    path.extend(backward.chain(grid, tail));
    path
}

impl SearchStrategy for Bidirectional {
    fn name(&self) -> &'static str {
        "Bidirectional"
    }

    fn initialize(&mut self, grid: &Grid, start: Point, end: Point) -> Result<(), SearchError> {
        self.state = None;
        let mut run = Run::begin(self.name(), grid, start, end)?;
        let forward = Side::rooted(grid, start)?;
        let backward = Side::rooted(grid, end)?;
        run.frontier.push(end);
        run.expand(start);
        run.expand(end);
        self.state = Some(BidiState {
            run,
            forward,
            backward,
            nbuf: Neighbors::new(),
        });
        Ok(())
    }

    fn step(&mut self) -> Result<bool, SearchError> {
        let Some(BidiState {
            run,
            forward,
            backward,
            nbuf,
        }) = self.state.as_mut()
        else {
            return Err(SearchError::NotInitialized);
        };
        if run.is_finished() {
            return Ok(true);
        }
        run.begin_step();

        let meet = match expand_side(run, forward, backward, nbuf) {
            Some(m) => Some(m),
            None => expand_side(run, backward, forward, nbuf),
        };
        if let Some(meet) = meet {
            log::trace!("{}: sides met at {meet}", run.name);
            let path = stitch(&run.grid, forward, backward, meet);
            run.finish_found(path);
            return Ok(true);
        }

        if forward.queue.is_empty() && backward.queue.is_empty() {
            run.finish_exhausted();
        } else {
            run.trace_step();
        }
        Ok(run.is_finished())
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

impl Bidirectional {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `p` has been reached from the start side.
    pub fn seen_from_start(&self, p: Point) -> bool {
        self.state
            .as_ref()
            .is_some_and(|s| s.forward.has_seen(&s.run.grid, p))
    }

    /// Whether `p` has been reached from the end side.
    pub fn seen_from_end(&self, p: Point) -> bool {
        self.state
            .as_ref()
            .is_some_and(|s| s.backward.has_seen(&s.run.grid, p))
    }
}
