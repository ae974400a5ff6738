use rand::Rng;
use stepgrid_core::{Grid, Point};

/// Tuning for [`MazeGen`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    /// Chance that a cell the traversal steps onto becomes a wall.
    /// Values outside `0.0..=1.0` act as the nearest bound.
    pub wall_probability: f64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall_probability: 0.3,
        }
    }
}

/// What a call to [`MazeGen::generate`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeReport {
    /// Cells reached by the traversal. Every cell of the grid is reached.
    pub visited: usize,
    /// Walls placed.
    pub walls: usize,
}

/// Backtracking obstacle generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub config: MazeConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default [`MazeConfig`].
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, MazeConfig::default())
    }

    pub fn with_config(rng: R, config: MazeConfig) -> Self {
        Self { rng, config }
    }

    /// Replace every wall in `grid` with a fresh random layout.
    ///
    /// All walls are cleared first. The traversal then starts at a random
    /// cell and repeatedly steps from the cell on top of its stack to a
    /// uniformly chosen unreached orthogonal neighbour, backtracking when
    /// there is none. Each cell stepped onto becomes a wall with probability
    /// `wall_probability` unless it is the start or end. The initial cell is
    /// never walled.
    ///
    /// Search fields on the cells are left untouched.
    pub fn generate(&mut self, grid: &Grid) -> MazeReport {
        grid.clear_walls();
        let mut report = MazeReport::default();
        if grid.is_empty() {
            return report;
        }

        let mut reached = vec![false; grid.len()];
        let first = Point::new(
            self.rng.random_range(0..grid.rows()),
            self.rng.random_range(0..grid.cols()),
        );
        let mut stack = Vec::with_capacity(grid.len());
        if let Some(i) = grid.index(first) {
            reached[i] = true;
            report.visited += 1;
            stack.push(first);
        }

        let mut open = Vec::with_capacity(4);
        while let Some(&current) = stack.last() {
            open.clear();
            open.extend(
                current
                    .neighbors_4()
                    .into_iter()
                    .filter_map(|n| grid.index(n).map(|i| (n, i)))
                    .filter(|&(_, i)| !reached[i]),
            );
            if open.is_empty() {
                stack.pop();
                continue;
            }

            let (next, ni) = open[self.rng.random_range(0..open.len())];
            reached[ni] = true;
            report.visited += 1;

            let roll: f64 = self.rng.random();
            let endpoint = grid.at(next).is_some_and(|c| c.is_start() || c.is_end());
            if roll < self.config.wall_probability
                && !endpoint
                && grid.set_wall(next, true).is_ok()
            {
                report.walls += 1;
            }
            stack.push(next);
        }

        log::debug!(
            "maze: {}x{} grid from {first}, {} cells reached, {} walls",
            grid.rows(),
            grid.cols(),
            report.visited,
            report.walls
        );
        report
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = MazeConfig {
            wall_probability: 0.45,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let report = MazeReport {
            visited: 12,
            walls: 4,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"visited":12,"walls":4}"#);
    }
}
