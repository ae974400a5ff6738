//! Step through one search on the opening scenario and print every frame.
//!
//! Run: cargo run --bin stepgrid-demo -- [algorithm] [seed]
//!
//! `algorithm` is one of bfs, dfs, dijkstra, greedy, astar, bidirectional
//! (default astar). A `seed` covers the grid with a generated maze first.

use stepgrid_demos::{DemoConfig, DemoError, Session};

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    let (grid, report) = config.build_grid()?;
    if let Some(report) = report {
        println!(
            "Maze: {} walls over {} cells (seed {})",
            report.walls,
            report.visited,
            config.seed.unwrap_or_default()
        );
    }

    let mut session = Session::start(&grid, config.algorithm)?;
    println!("{}", session.strategy().name());
    print!("{}", session.frame());
    while !session.step()? {
        if let Some(stats) = session.history().last() {
            println!(
                "\nstep {}: {} new, {} visited",
                stats.step, stats.frontier, stats.visited
            );
        }
        print!("{}", session.frame());
    }

    println!();
    print!("{}", session.frame());
    match session.strategy().path() {
        Some(path) => println!(
            "Path of {} cells after {} steps, {} cells visited.",
            path.len(),
            session.strategy().steps(),
            session.strategy().visited().len()
        ),
        None => println!("No path found."),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
