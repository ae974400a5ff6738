//! Behaviour shared by every strategy, checked across all of them.

use proptest::prelude::*;
use stepgrid_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::path::{is_valid_path, trace_parents};
use crate::traits::{SearchStrategy, Status};

fn start_run(alg: Algorithm, grid: &Grid, start: Point, end: Point) -> Box<dyn SearchStrategy> {
    grid.reset_search();
    let mut s = alg.build();
    s.initialize(grid, start, end).unwrap();
    s
}

fn enclosed() -> Grid {
    Grid::parse(
        "\
S......
.....#.
....#E#
.....#.",
    )
    .unwrap()
}

#[test]
fn optimal_strategies_agree_on_open_grid() {
    let grid = Grid::new(5, 5);
    for alg in Algorithm::ALL.into_iter().filter(|a| a.is_optimal()) {
        let mut s = start_run(alg, &grid, Point::new(0, 0), Point::new(4, 4));
        let path = s.run().unwrap().unwrap();
        assert_eq!(path.len(), 9, "{alg}");
        assert!(is_valid_path(&grid, &path, Point::new(0, 0), Point::new(4, 4)));
    }
}

#[test]
fn every_strategy_finds_some_path_on_open_grid() {
    let grid = Grid::new(5, 5);
    for alg in Algorithm::ALL {
        let mut s = start_run(alg, &grid, Point::new(0, 0), Point::new(4, 4));
        let path = s.run().unwrap().unwrap();
        assert!(path.len() >= 9, "{alg}");
        assert!(is_valid_path(&grid, &path, Point::new(0, 0), Point::new(4, 4)), "{alg}");
        assert_eq!(s.status(), Status::Found);
    }
}

#[test]
fn enclosed_end_exhausts_every_strategy() {
    let grid = enclosed();
    let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
    for alg in Algorithm::ALL {
        let mut s = start_run(alg, &grid, start, end);
        assert_eq!(s.run().unwrap(), None, "{alg}");
        assert_eq!(s.status(), Status::Exhausted, "{alg}");
        assert!(s.frontier().is_empty(), "{alg}");
        assert!(s.path().is_none(), "{alg}");
    }
}

#[test]
fn stepping_a_finished_run_changes_nothing() {
    let grid = Grid::parse(
        "\
S.#..
..#.E
.....",
    )
    .unwrap();
    let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
    for alg in Algorithm::ALL {
        let mut s = start_run(alg, &grid, start, end);
        s.run().unwrap();
        let path = s.path().map(<[Point]>::to_vec);
        let visited = s.visited();
        let steps = s.steps();
        for _ in 0..3 {
            assert_eq!(s.step(), Ok(true), "{alg}");
        }
        assert_eq!(s.path().map(<[Point]>::to_vec), path, "{alg}");
        assert_eq!(s.visited(), visited, "{alg}");
        assert_eq!(s.steps(), steps, "{alg}");
        assert!(s.frontier().is_empty(), "{alg}");
    }
}

#[test]
fn visited_only_grows_and_skips_walls() {
    let grid = Grid::parse(
        "\
S..#....
.#.#.##.
.#...#..
...#...E",
    )
    .unwrap();
    let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
    for alg in Algorithm::ALL {
        let mut s = start_run(alg, &grid, start, end);
        let mut prev = s.visited();
        while !s.step().unwrap() {
            let now = s.visited();
            assert!(now.starts_with(&prev), "{alg}");
            prev = now;
        }
        let now = s.visited();
        assert!(now.starts_with(&prev), "{alg}");
        assert!(now.iter().all(|&p| !grid.is_wall(p)), "{alg}");
        for p in &now {
            assert!(grid.at(*p).unwrap().is_visited(), "{alg}");
        }
    }
}

#[test]
fn parent_links_reproduce_the_path() {
    let grid = Grid::parse(
        "\
S..#....
.#.#.##.
.#...#..
...#...E",
    )
    .unwrap();
    let (start, end) = (grid.start().unwrap(), grid.end().unwrap());
    for alg in Algorithm::ALL
        .into_iter()
        .filter(|a| *a != Algorithm::Bidirectional)
    {
        let mut s = start_run(alg, &grid, start, end);
        let path = s.run().unwrap().unwrap();
        assert_eq!(trace_parents(&grid, end), path, "{alg}");
        assert_eq!(
            grid.at(end).unwrap().g_cost() as usize,
            path.len() - 1,
            "{alg}"
        );
    }
}

#[test]
fn reinitialize_starts_a_fresh_run() {
    let grid = Grid::new(4, 4);
    for alg in Algorithm::ALL {
        let mut s = start_run(alg, &grid, Point::new(0, 0), Point::new(3, 3));
        s.run().unwrap();
        grid.reset_search();
        s.initialize(&grid, Point::new(3, 0), Point::new(0, 3)).unwrap();
        assert_eq!(s.status(), Status::Running, "{alg}");
        assert_eq!(s.steps(), 0, "{alg}");
        let path = s.run().unwrap().unwrap();
        assert!(
            is_valid_path(&grid, &path, Point::new(3, 0), Point::new(0, 3)),
            "{alg}"
        );
    }
}

/// A `rows x cols` grid whose walls come from `bits`, with the corners kept
/// open as endpoints.
fn walled_grid(rows: i32, cols: i32, bits: &[bool]) -> (Grid, Point, Point) {
    let grid = Grid::new(rows, cols);
    let (start, end) = (Point::new(0, 0), Point::new(rows - 1, cols - 1));
    for (i, &wall) in bits.iter().take(grid.len()).enumerate() {
        let p = grid.point(i);
        if wall && p != start && p != end {
            grid.set_wall(p, true).unwrap();
        }
    }
    (grid, start, end)
}

proptest! {
    #[test]
    fn strategies_agree_on_reachability(
        rows in 2..7i32,
        cols in 2..7i32,
        bits in prop::collection::vec(prop::bool::weighted(0.3), 36),
    ) {
        let (grid, start, end) = walled_grid(rows, cols, &bits);
        let mut found = Vec::new();
        let mut optimal_lens = Vec::new();
        for alg in Algorithm::ALL {
            let mut s = start_run(alg, &grid, start, end);
            let path = s.run().unwrap();
            if let Some(path) = &path {
                prop_assert!(is_valid_path(&grid, path, start, end));
                if alg.is_optimal() {
                    optimal_lens.push(path.len());
                }
            }
            prop_assert!(s.visited().iter().all(|&p| !grid.is_wall(p)));
            found.push(path.is_some());
        }
        prop_assert!(found.iter().all(|&f| f == found[0]));
        prop_assert!(optimal_lens.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn open_grid_optimal_paths_match_manhattan(
        rows in 1..9i32,
        cols in 1..9i32,
        s in any::<usize>(),
        e in any::<usize>(),
    ) {
        let grid = Grid::new(rows, cols);
        prop_assume!(grid.len() >= 2);
        let si = s % grid.len();
        let ei = (si + 1 + e % (grid.len() - 1)) % grid.len();
        let (start, end) = (grid.point(si), grid.point(ei));
        for alg in Algorithm::ALL {
            let mut strategy = start_run(alg, &grid, start, end);
            let path = strategy.run().unwrap();
            prop_assert!(path.is_some());
            let path = path.unwrap();
            prop_assert!(is_valid_path(&grid, &path, start, end));
            if alg.is_optimal() {
                prop_assert_eq!(path.len() as i32 - 1, manhattan(start, end));
            }
        }
    }

    #[test]
    fn visited_never_repeats(
        rows in 2..7i32,
        cols in 2..7i32,
        bits in prop::collection::vec(prop::bool::weighted(0.25), 36),
    ) {
        let (grid, start, end) = walled_grid(rows, cols, &bits);
        for alg in Algorithm::ALL {
            let mut s = start_run(alg, &grid, start, end);
            s.run().unwrap();
            let mut visited = s.visited();
            let n = visited.len();
            visited.sort();
            visited.dedup();
            prop_assert_eq!(visited.len(), n);
        }
    }
}
