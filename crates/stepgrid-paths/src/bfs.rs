use std::collections::VecDeque;

use stepgrid_core::{Grid, Point};

use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::path::trace_parents;
use crate::run::Run;
use crate::traits::{SearchStrategy, Status};

/// Breadth-first search, one distance layer per step.
///
/// A `step` drains exactly the cells that were queued when it began, so after
/// `k` steps every cell at distance `< k` from the start has been expanded.
/// Paths are shortest in edge count.
#[derive(Default)]
pub struct BreadthFirst {
    state: Option<BfsState>,
}

struct BfsState {
    run: Run,
    queue: VecDeque<Point>,
    // Set when a cell is queued, so no cell is queued twice.
    enqueued: Vec<bool>,
    nbuf: Neighbors,
}

impl BreadthFirst {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "Breadth-First"
    }

    fn initialize(&mut self, grid: &Grid, start: Point, end: Point) -> Result<(), SearchError> {
        self.state = None;
        let run = Run::begin(self.name(), grid, start, end)?;
        let mut enqueued = vec![false; grid.len()];
        enqueued[run.endpoint_index(start)?] = true;
        self.state = Some(BfsState {
            run,
            queue: VecDeque::from([start]),
            enqueued,
            nbuf: Neighbors::new(),
        });
        Ok(())
    }

    fn step(&mut self) -> Result<bool, SearchError> {
        let Some(BfsState {
            run,
            queue,
            enqueued,
            nbuf,
        }) = self.state.as_mut()
        else {
            return Err(SearchError::NotInitialized);
        };
        if run.is_finished() {
            return Ok(true);
        }
        run.begin_step();

        let layer = queue.len();
        for _ in 0..layer {
            let Some(current) = queue.pop_front() else {
                break;
            };
            run.expand(current);
            if current == run.end {
                let path = trace_parents(&run.grid, current);
                run.finish_found(path);
                return Ok(true);
            }

            let g = run.g_cost(current) + 1;
            for &n in nbuf.passable(&run.grid, current) {
                let Some(ni) = run.grid.index(n) else {
                    continue;
                };
                if enqueued[ni] {
                    continue;
                }
                enqueued[ni] = true;
                run.discover(n, current, g);
                queue.push_back(n);
            }
        }

        if queue.is_empty() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(rows: i32, cols: i32) -> Grid {
        Grid::new(rows, cols)
    }

    #[test]
    fn step_before_initialize_fails() {
        let mut bfs = BreadthFirst::new();
        assert_eq!(bfs.status(), Status::Uninitialized);
        assert_eq!(bfs.step(), Err(SearchError::NotInitialized));
        assert!(bfs.path().is_none());
        assert!(bfs.frontier().is_empty());
    }

    #[test]
    fn initialize_seeds_frontier_with_start() {
        let grid = open_grid(3, 3);
        let mut bfs = BreadthFirst::new();
        bfs.initialize(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert_eq!(bfs.status(), Status::Running);
        assert_eq!(bfs.frontier(), vec![Point::new(0, 0)]);
        assert!(bfs.visited().is_empty());
    }

    #[test]
    fn each_step_is_one_layer() {
        let grid = open_grid(5, 5);
        let mut bfs = BreadthFirst::new();
        bfs.initialize(&grid, Point::new(0, 0), Point::new(4, 4)).unwrap();

        assert!(!bfs.step().unwrap());
        assert_eq!(bfs.visited(), vec![Point::new(0, 0)]);
        assert_eq!(bfs.frontier(), vec![Point::new(1, 0), Point::new(0, 1)]);

        assert!(!bfs.step().unwrap());
        // Layer 1 expanded; layer 2 discovered.
        assert_eq!(bfs.visited().len(), 3);
        assert_eq!(
            bfs.frontier(),
            vec![Point::new(2, 0), Point::new(1, 1), Point::new(0, 2)]
        );
        for p in bfs.frontier() {
            assert_eq!(grid.at(p).unwrap().g_cost(), 2);
        }
    }

    #[test]
    fn finds_manhattan_path_on_open_grid() {
        let grid = open_grid(5, 5);
        let mut bfs = BreadthFirst::new();
        bfs.initialize(&grid, Point::new(0, 0), Point::new(4, 4)).unwrap();
        let path = bfs.run().unwrap().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(bfs.status(), Status::Found);
        // Goal sits in layer 8; the step that pops it is the ninth.
        assert_eq!(bfs.steps(), 9);
        assert!(bfs.frontier().is_empty());
        assert_eq!(trace_parents(&grid, Point::new(4, 4)), path);
    }

    #[test]
    fn enclosed_goal_is_exhausted() {
        let grid = Grid::parse(
            "\
S....
...#.
..#E#
...#.",
        )
        .unwrap();
        let mut bfs = BreadthFirst::new();
        bfs.initialize(&grid, grid.start().unwrap(), grid.end().unwrap())
            .unwrap();
        assert_eq!(bfs.run().unwrap(), None);
        assert_eq!(bfs.status(), Status::Exhausted);
        assert!(!bfs.visited().contains(&Point::new(2, 3)));
        assert!(bfs.visited().iter().all(|&p| !grid.is_wall(p)));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let grid = Grid::parse("S#\n.E").unwrap();
        let mut bfs = BreadthFirst::new();
        assert_eq!(
            bfs.initialize(&grid, Point::new(0, 1), Point::new(1, 1)),
            Err(SearchError::WallEndpoint(Point::new(0, 1)))
        );
        assert_eq!(
            bfs.initialize(&grid, Point::new(0, 0), Point::new(2, 0)),
            Err(SearchError::OutOfBounds(Point::new(2, 0)))
        );
        assert_eq!(
            bfs.initialize(&grid, Point::new(0, 0), Point::new(0, 0)),
            Err(SearchError::SameEndpoints(Point::new(0, 0)))
        );
        assert_eq!(bfs.status(), Status::Uninitialized);
    }
}
