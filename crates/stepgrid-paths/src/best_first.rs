//! The priority-driven family: Dijkstra, A* and greedy best-first share this
//! skeleton and differ only in how an open cell is ranked.

use std::collections::BinaryHeap;
use std::marker::PhantomData;

use stepgrid_core::{Grid, Point};

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::path::trace_parents;
use crate::run::Run;
use crate::traits::{SearchStrategy, Status};

/// How a priority-driven search orders its open cells.
pub trait Ranking {
    /// Strategy name reported by [`SearchStrategy::name`].
    const NAME: &'static str;

    /// Heuristic estimate `h` from `from` to `goal`.
    fn heuristic(from: Point, goal: Point) -> i32;

    /// Priority of an open cell; lower is expanded first.
    fn rank(g: i32, h: i32) -> i32;
}

/// Reference into the open set, ordered for use in `BinaryHeap`.
///
/// Lower rank pops first; equal ranks pop in insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    pos: Point,
    idx: usize,
    rank: i32,
    seq: u64,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest rank, then oldest.
        other.rank.cmp(&self.rank).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Default)]
struct Node {
    g: i32,
    rank: i32,
    // Sequence number of the node's live heap entry.
    seq: u64,
    open: bool,
    closed: bool,
}

/// Best-first search, one cell per step, ranked by `K`.
///
/// Every edge costs 1. When a neighbour is rediscovered with a lower `g`,
/// its cost and parent are updated and it is re-ranked; superseded heap
/// entries are skipped lazily.
pub struct BestFirst<K: Ranking> {
    state: Option<BestFirstState>,
    _ranking: PhantomData<K>,
}

struct BestFirstState {
    run: Run,
    open: BinaryHeap<OpenRef>,
    nodes: Vec<Node>,
    next_seq: u64,
    nbuf: Neighbors,
}

impl BestFirstState {
    fn is_live(&self, e: &OpenRef) -> bool {
        let n = &self.nodes[e.idx];
        n.open && !n.closed && n.seq == e.seq
    }

    /// Drop superseded entries from the top of the heap.
    fn prune(&mut self) {
        while let Some(top) = self.open.peek() {
            if self.is_live(top) {
                break;
            }
            self.open.pop();
        }
    }

    fn push(&mut self, pos: Point, idx: usize, rank: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let n = &mut self.nodes[idx];
        n.rank = rank;
        n.seq = seq;
        n.open = true;
        self.open.push(OpenRef {
            pos,
            idx,
            rank,
            seq,
        });
    }
}

impl<K: Ranking> Default for BestFirst<K> {
    fn default() -> Self {
        Self {
            state: None,
            _ranking: PhantomData,
        }
    }
}

impl<K: Ranking> BestFirst<K> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Ranking> SearchStrategy for BestFirst<K> {
    fn name(&self) -> &'static str {
        K::NAME
    }

    fn initialize(&mut self, grid: &Grid, start: Point, end: Point) -> Result<(), SearchError> {
        self.state = None;
        let run = Run::begin(K::NAME, grid, start, end)?;
        let si = run.endpoint_index(start)?;
        let h = K::heuristic(start, end);
        grid.update(start, |c| c.set_h_cost(h));

        let mut st = BestFirstState {
            run,
            open: BinaryHeap::new(),
            nodes: vec![Node::default(); grid.len()],
            next_seq: 0,
            nbuf: Neighbors::new(),
        };
        st.push(start, si, K::rank(0, h));
        self.state = Some(st);
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
        let Some(current) = st.open.pop() else {
            st.run.finish_exhausted();
            return Ok(true);
        };
        let (cp, ci) = (current.pos, current.idx);

        st.run.expand(cp);
        if cp == st.run.end {
            let path = trace_parents(&st.run.grid, cp);
            st.run.finish_found(path);
            return Ok(true);
        }
        st.nodes[ci].open = false;
        st.nodes[ci].closed = true;

        let tentative = st.nodes[ci].g + 1;
        let end = st.run.end;
        // Take the scratch buffer so `push` can borrow the whole state.
        let mut nbuf = std::mem::take(&mut st.nbuf);
        for &np in nbuf.passable(&st.run.grid, cp) {
            let Some(ni) = st.run.grid.index(np) else {
                continue;
            };
            let n = &st.nodes[ni];
            if n.closed {
                continue;
            }
            let newly = !n.open;
            if !newly && tentative >= n.g {
                continue;
            }

            let h = K::heuristic(np, end);
            let rank = K::rank(tentative, h);
            let rerank = newly || rank != n.rank;
            st.nodes[ni].g = tentative;
            st.run.grid.update(np, |c| {
                c.set_parent(Some(cp));
                c.set_g_cost(tentative);
                c.set_h_cost(h);
            });
            if rerank {
                st.push(np, ni, rank);
            }
            if newly {
                st.run.frontier.push(np);
            }
        }
        st.nbuf = nbuf;

        st.prune();
        if st.open.is_empty() {
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
