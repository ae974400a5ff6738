//! The [`Grid`] type: a fixed-size 2D array of [`Cell`]s behind a shared handle.
//!
//! Cloning a `Grid` yields another handle onto the **same** cells. A driver
//! keeps one handle to configure the scenario and read results, and hands
//! another to the search strategy that mutates the search fields.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<Cell>,
    cols: usize,
}

impl GridBuffer {
    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.row as usize) * self.cols + (p.col as usize)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rows × cols grid of [`Cell`]s backed by shared storage.
///
/// Dimensions are fixed at creation. Points outside the grid read as `None`
/// and are rejected by the mutators.
#[derive(Debug, Clone)]
pub struct Grid {
    buffer: Rc<RefCell<GridBuffer>>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell open.
    /// Negative dimensions are clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::new(0, 0, rows.max(0), cols.max(0));
        let cells = bounds.iter().map(Cell::new).collect();
        Self {
            buffer: Rc::new(RefCell::new(GridBuffer {
                cells,
                cols: bounds.cols() as usize,
            })),
            bounds,
        }
    }

    /// Build the opening scenario of the interactive tool: a three-cell wall
    /// column in the middle, start at `(rows/2, 1)` and end at
    /// `(rows/2, cols-2)`.
    pub fn with_default_layout(rows: i32, cols: i32) -> Result<Self, GridError> {
        let grid = Self::new(rows, cols);
        let mid_row = rows / 2;
        let mid_col = cols / 2;
        for row in mid_row - 1..=mid_row + 1 {
            grid.set_wall(Point::new(row, mid_col), true)?;
        }
        grid.set_start(Point::new(mid_row, 1))?;
        grid.set_end(Point::new(mid_row, cols - 2))?;
        Ok(grid)
    }

    /// Parse a rectangular text layout.
    ///
    /// Runes: `.` open, `#` wall, `S` start, `E` end. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        if lines.iter().any(|l| l.chars().count() as i32 != cols) {
            return Err(GridError::InconsistentSize(text.to_string()));
        }

        let grid = Self::new(rows, cols);
        let mut seen_start = false;
        let mut seen_end = false;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Point::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_wall(pos, true)?,
                    'S' => {
                        if seen_start {
                            return Err(GridError::DuplicateEndpoint { ch, pos });
                        }
                        seen_start = true;
                        grid.set_start(pos)?;
                    }
                    'E' => {
                        if seen_end {
                            return Err(GridError::DuplicateEndpoint { ch, pos });
                        }
                        seen_end = true;
                        grid.set_end(pos)?;
                    }
                    _ => return Err(GridError::InvalidRune { ch, pos }),
                }
            }
        }
        Ok(grid)
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether both handles refer to the same cells.
    #[inline]
    pub fn same_storage(&self, other: &Grid) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// Row-major flat index of `p`, or `None` if out of range.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols() as usize) + (p.col as usize))
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols().max(1) as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds.contains(p) {
            return None;
        }
        let buf = self.buffer.borrow();
        Some(buf.cells[buf.index(p)])
    }

    /// Apply `f` to the cell at `p`. Returns `None` if `p` is out of bounds.
    pub fn update<R>(&self, p: Point, f: impl FnOnce(&mut Cell) -> R) -> Option<R> {
        if !self.bounds.contains(p) {
            return None;
        }
        let mut buf = self.buffer.borrow_mut();
        let i = buf.index(p);
        Some(f(&mut buf.cells[i]))
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_passable())
    }

    /// Whether `p` is inside the grid and a wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_wall())
    }

    /// Position of the start cell, if one is set.
    pub fn start(&self) -> Option<Point> {
        self.find(|c| c.is_start())
    }

    /// Position of the end cell, if one is set.
    pub fn end(&self) -> Option<Point> {
        self.find(|c| c.is_end())
    }

    fn find(&self, pred: impl Fn(&Cell) -> bool) -> Option<Point> {
        self.buffer.borrow().cells.iter().find(|c| pred(c)).map(Cell::pos)
    }

    /// Make `p` the start cell, clearing the previous one and any wall on `p`.
    pub fn set_start(&self, p: Point) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        let mut buf = self.buffer.borrow_mut();
        if buf.cells[i].is_end() {
            return Err(GridError::Reserved(p));
        }
        for c in buf.cells.iter_mut().filter(|c| c.is_start()) {
            c.set_start_flag(false);
        }
        buf.cells[i].set_start_flag(true);
        Ok(())
    }

    /// Make `p` the end cell, clearing the previous one and any wall on `p`.
    pub fn set_end(&self, p: Point) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        let mut buf = self.buffer.borrow_mut();
        if buf.cells[i].is_start() {
            return Err(GridError::Reserved(p));
        }
        for c in buf.cells.iter_mut().filter(|c| c.is_end()) {
            c.set_end_flag(false);
        }
        buf.cells[i].set_end_flag(true);
        Ok(())
    }

    /// Set or clear a wall at `p`. Endpoints can never become walls.
    pub fn set_wall(&self, p: Point, wall: bool) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        let mut buf = self.buffer.borrow_mut();
        let cell = &mut buf.cells[i];
        if wall && (cell.is_start() || cell.is_end()) {
            return Err(GridError::Reserved(p));
        }
        cell.set_wall_flag(wall);
        Ok(())
    }

    /// Remove every wall.
    pub fn clear_walls(&self) {
        for c in self.buffer.borrow_mut().cells.iter_mut() {
            c.set_wall_flag(false);
        }
    }

    /// Clear `visited`, `parent`, `g_cost` and `h_cost` on every cell.
    ///
    /// Must be called between two runs on the same grid.
    pub fn reset_search(&self) {
        for c in self.buffer.borrow_mut().cells.iter_mut() {
            c.reset_search();
        }
    }

    /// Positions of all walls, row-major.
    pub fn walls(&self) -> Vec<Point> {
        self.buffer
            .borrow()
            .cells
            .iter()
            .filter(|c| c.is_wall())
            .map(Cell::pos)
            .collect()
    }

    /// Count the cells matching `pred`.
    pub fn count(&self, pred: impl Fn(&Cell) -> bool) -> usize {
        self.buffer.borrow().cells.iter().filter(|c| pred(c)).count()
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Grid {
    /// Writes the layout in the rune set accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.buffer.borrow();
        for row in buf.cells.chunks(buf.cols.max(1)) {
            for c in row {
                let ch = if c.is_start() {
                    'S'
                } else if c.is_end() {
                    'E'
                } else if c.is_wall() {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.grid.at(p).map(|c| (p, c))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
