//! Incremental, steppable graph search on rectangular grids.
//!
//! Every strategy implements [`SearchStrategy`]: bind it to a grid with
//! [`initialize`](SearchStrategy::initialize), then call
//! [`step`](SearchStrategy::step) until it reports completion, reading the
//! frontier, visited set and path between calls.
//!
//! | Strategy | One `step()` | Shortest path |
//! |---|---|---|
//! | [`BreadthFirst`] | one whole queue layer | yes |
//! | [`DepthFirst`] | one popped cell | no |
//! | [`Dijkstra`] | one cell, ranked by `g` | yes |
//! | [`AStar`] | one cell, ranked by `g + h` | yes |
//! | [`GreedyBestFirst`] | one cell, ranked by `h` | no |
//! | [`Bidirectional`] | one cell from each side | no |
//!
//! All edges cost 1 and movement is orthogonal only; `h` is the Manhattan
//! distance to the goal.

mod algorithm;
mod astar;
mod best_first;
mod bfs;
mod bidirectional;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod greedy;
mod neighbors;
mod path;
mod run;
mod traits;

#[cfg(test)]
mod scenarios;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::{AStar, AStarRanking};
pub use best_first::{BestFirst, Ranking};
pub use bfs::BreadthFirst;
pub use bidirectional::Bidirectional;
pub use dfs::DepthFirst;
pub use dijkstra::{Dijkstra, UniformCostRanking};
pub use distance::manhattan;
pub use error::SearchError;
pub use greedy::{GreedyBestFirst, GreedyRanking};
pub use neighbors::Neighbors;
pub use path::{is_valid_path, path_cost, trace_parents};
pub use traits::{SearchStrategy, Status};
