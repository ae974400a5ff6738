//! Randomized obstacle layouts for stepgrid grids.
//!
//! [`MazeGen`] walks the grid with a randomized depth-first backtracker and
//! turns some of the cells it steps onto into walls. The start and end cells
//! are never walled, but nothing guarantees they stay connected.

pub mod maze;

pub use maze::{MazeConfig, MazeGen, MazeReport};
