//! Text-mode driver for the stepgrid search strategies.
//!
//! Builds the opening scenario (optionally covered by a generated maze),
//! binds one strategy to it and renders the grid after every step.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use stepgrid_core::{Grid, GridError, Point};
use stepgrid_maze::{MazeConfig, MazeGen, MazeReport};
use stepgrid_paths::{Algorithm, SearchError, SearchStrategy, UnknownAlgorithm};

pub const ROWS: i32 = 10;
pub const COLS: i32 = 10;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while setting up or driving a demo run.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    /// The grid has no start or no end cell.
    MissingEndpoint(&'static str),
    /// The seed argument is not an unsigned integer.
    InvalidSeed(String),
    Algorithm(UnknownAlgorithm),
    Grid(GridError),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEndpoint(which) => write!(f, "grid has no {which} cell"),
            Self::InvalidSeed(s) => write!(f, "invalid seed \u{201c}{s}\u{201d}"),
            Self::Algorithm(e) => write!(f, "{e}"),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Algorithm(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnknownAlgorithm> for DemoError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::Algorithm(e)
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Settings for one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub rows: i32,
    pub cols: i32,
    pub algorithm: Algorithm,
    /// When set, a maze is generated over the opening layout from this seed.
    pub seed: Option<u64>,
    pub maze: MazeConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            algorithm: Algorithm::AStar,
            seed: None,
            maze: MazeConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Read `[algorithm] [seed]` from command-line arguments, program name
    /// excluded.
    pub fn from_args<I>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(a) = args.next() {
            config.algorithm = a.as_ref().parse()?;
        }
        if let Some(s) = args.next() {
            let s = s.as_ref();
            config.seed = Some(
                s.parse()
                    .map_err(|_| DemoError::InvalidSeed(s.to_string()))?,
            );
        }
        Ok(config)
    }

    /// The opening layout, with a maze generated over it when a seed is set.
    pub fn build_grid(&self) -> Result<(Grid, Option<MazeReport>), DemoError> {
        let grid = Grid::with_default_layout(self.rows, self.cols)?;
        let report = self.seed.map(|seed| {
            MazeGen::with_config(StdRng::seed_from_u64(seed), self.maze).generate(&grid)
        });
        Ok((grid, report))
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render `grid` with the state of `strategy` laid over it.
///
/// Runes, in order of precedence: `#` wall, `S`/`E` endpoints, `*` path,
/// `+` frontier, `.` visited, space for untouched open cells. Each row ends
/// with a newline.
pub fn render(grid: &Grid, strategy: &dyn SearchStrategy) -> String {
    let mut marks = vec![' '; grid.len()];
    let mut mark = |p: Point, ch: char| {
        if let Some(i) = grid.index(p) {
            marks[i] = ch;
        }
    };
    for p in strategy.visited() {
        mark(p, '.');
    }
    for p in strategy.frontier() {
        mark(p, '+');
    }
    for &p in strategy.path().unwrap_or_default() {
        mark(p, '*');
    }

    let mut out = String::with_capacity(grid.len() + grid.rows().max(0) as usize);
    for (i, (p, cell)) in grid.iter().enumerate() {
        out.push(if cell.is_wall() {
            '#'
        } else if cell.is_start() {
            'S'
        } else if cell.is_end() {
            'E'
        } else {
            marks[i]
        });
        if p.col == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Snapshot sizes after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    pub step: usize,
    pub frontier: usize,
    pub visited: usize,
}

/// One strategy driven over one grid, step by step.
pub struct Session {
    grid: Grid,
    strategy: Box<dyn SearchStrategy>,
    history: Vec<StepStats>,
}

impl Session {
    /// Clear the previous run's search fields on `grid` and initialize a
    /// fresh `algorithm` between its start and end cells.
    pub fn start(grid: &Grid, algorithm: Algorithm) -> Result<Self, DemoError> {
        let start = grid.start().ok_or(DemoError::MissingEndpoint("start"))?;
        let end = grid.end().ok_or(DemoError::MissingEndpoint("end"))?;
        grid.reset_search();
        let mut strategy = algorithm.build();
        strategy.initialize(grid, start, end)?;
        log::debug!(
            "session: {} from {start} to {end} on {}x{} grid",
            strategy.name(),
            grid.rows(),
            grid.cols()
        );
        Ok(Self {
            grid: grid.clone(),
            strategy,
            history: Vec::new(),
        })
    }

    /// Advance one step. Returns `true` once the run has finished; stepping
    /// after that records nothing.
    pub fn step(&mut self) -> Result<bool, DemoError> {
        if self.strategy.is_finished() {
            return Ok(true);
        }
        let done = self.strategy.step()?;
        let stats = StepStats {
            step: self.strategy.steps(),
            frontier: self.strategy.frontier().len(),
            visited: self.strategy.visited().len(),
        };
        log::trace!(
            "session: step {} frontier {} visited {}",
            stats.step,
            stats.frontier,
            stats.visited
        );
        self.history.push(stats);
        if done {
            log::debug!(
                "session: {} finished as {:?} after {} steps",
                self.strategy.name(),
                self.strategy.status(),
                stats.step
            );
        }
        Ok(done)
    }

    /// Step to completion and return the path, if any.
    pub fn finish(&mut self) -> Result<Option<Vec<Point>>, DemoError> {
        while !self.step()? {}
        Ok(self.strategy.path().map(<[Point]>::to_vec))
    }

    pub fn frame(&self) -> String {
        render(&self.grid, self.strategy.as_ref())
    }

    pub fn strategy(&self) -> &dyn SearchStrategy {
        self.strategy.as_ref()
    }

    pub fn history(&self) -> &[StepStats] {
        &self.history
    }
}
