use stepgrid_core::{Grid, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal neighbors of a point in the fixed order
/// up, down, left, right, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the in-bounds, non-wall orthogonal neighbors of `p`.
    pub fn passable(&mut self, grid: &Grid, p: Point) -> &[Point] {
        self.cardinal(p, |n| grid.is_passable(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_is_clipped() {
        let grid = Grid::new(3, 3);
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.passable(&grid, Point::new(0, 0)),
            &[Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn walls_are_skipped() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let mut nb = Neighbors::new();
        assert_eq!(
            nb.passable(&grid, Point::new(0, 1)),
            &[Point::new(0, 0), Point::new(0, 2)]
        );
        assert_eq!(nb.passable(&grid, Point::new(1, 1)).len(), 4);
    }
}
