use stepgrid_core::Point;

use crate::best_first::{BestFirst, Ranking};
use crate::distance::manhattan;

/// A* ranking: `g + h` with the Manhattan distance as `h`.
///
/// Manhattan distance is admissible and consistent on a unit-cost grid
/// without diagonal moves.
pub struct AStarRanking;

impl Ranking for AStarRanking {
    const NAME: &'static str = "A*";

    #[inline]
    fn heuristic(from: Point, goal: Point) -> i32 {
        manhattan(from, goal)
    }

    #[inline]
    fn rank(g: i32, h: i32) -> i32 {
        g + h
    }
}

/// A* search. Paths are minimum-cost.
pub type AStar = BestFirst<AStarRanking>;
