use stepgrid_core::Point;

use crate::best_first::{BestFirst, Ranking};

/// Uniform-cost ranking: `g` alone, no heuristic.
pub struct UniformCostRanking;

impl Ranking for UniformCostRanking {
    const NAME: &'static str = "Dijkstra";

    #[inline]
    fn heuristic(_from: Point, _goal: Point) -> i32 {
        0
    }

    #[inline]
    fn rank(g: i32, _h: i32) -> i32 {
        g
    }
}

/// Uniform-cost search. Paths are minimum-cost.
pub type Dijkstra = BestFirst<UniformCostRanking>;

#[cfg(test)]
mod tests {
    use stepgrid_core::Grid;

    use super::*;
    use crate::traits::{SearchStrategy, Status};

    #[test]
    fn expands_in_cost_order() {
        let grid = Grid::new(5, 5);
        let start = Point::new(2, 2);
        let mut d = Dijkstra::new();
        d.initialize(&grid, start, Point::new(0, 0)).unwrap();
        while !d.step().unwrap() {}
        let costs: Vec<i32> = d
            .visited()
            .iter()
            .map(|&p| (p.row - start.row).abs() + (p.col - start.col).abs())
            .collect();
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(d.path().unwrap().len(), 5);
    }

    #[test]
    fn heuristic_stays_zero() {
        let grid = Grid::new(3, 3);
        let mut d = Dijkstra::new();
        d.initialize(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
        d.step().unwrap();
        for p in d.frontier() {
            let c = grid.at(p).unwrap();
            assert_eq!(c.h_cost(), 0);
            assert_eq!(c.g_cost(), 1);
        }
    }

    #[test]
    fn detour_around_wall_is_minimal() {
        let grid = Grid::parse(
            "\
.....
.###.
S#..E
.###.
.....",
        )
        .unwrap();
        let mut d = Dijkstra::new();
        d.initialize(&grid, grid.start().unwrap(), grid.end().unwrap())
            .unwrap();
        let path = d.run().unwrap().unwrap();
        assert_eq!(d.status(), Status::Found);
        assert_eq!(path.len(), 9);
    }
}
