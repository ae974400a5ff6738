use stepgrid_core::Point;

use crate::best_first::{BestFirst, Ranking};
use crate::distance::manhattan;

/// Greedy ranking: the Manhattan estimate alone, ignoring `g`.
pub struct GreedyRanking;

impl Ranking for GreedyRanking {
    const NAME: &'static str = "Greedy Best-First";

    #[inline]
    fn heuristic(from: Point, goal: Point) -> i32 {
        manhattan(from, goal)
    }

    #[inline]
    fn rank(_g: i32, h: i32) -> i32 {
        h
    }
}

/// Greedy best-first search. Fast, but paths are not guaranteed shortest.
pub type GreedyBestFirst = BestFirst<GreedyRanking>;
