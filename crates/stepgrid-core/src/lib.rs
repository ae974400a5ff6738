//! **stepgrid-core**: the grid and cell model shared by the stepgrid crates.
//!
//! A [`Grid`] is a fixed-size, row-major array of [`Cell`]s addressed by
//! [`Point`]s (`row`, `col`). Grid values are handles onto shared storage, so a
//! driver and a running search can both hold one and observe the same cells.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
