use std::error::Error;
use std::path::PathBuf;

use gridstep_search::{Algorithm, DEFAULT_DEPTH_LIMIT, DEFAULT_WEIGHT, Heuristic};

mod list;
mod run;

type CommandResult = Result<(), Box<dyn Error>>;

/// All commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run a search and print its progress.
    #[command(alias = "r")]
    Run(Run),

    /// Print the algorithm catalog.
    #[command(alias = "ls")]
    List(List),
}

#[derive(clap::Args, Debug)]
pub struct List {
    /// Also print each algorithm's pseudocode.
    #[arg(short, long, default_value_t = false)]
    pseudocode: bool,
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Search algorithm (bfs, dfs, dls, iddfs, ucs, greedy, astar,
    /// weighted-astar, bidirectional).
    #[arg(short, long, default_value = "bfs")]
    algorithm: Algorithm,
    /// Heuristic for greedy and A* searches.
    #[arg(long, default_value = "manhattan")]
    heuristic: Heuristic,
    /// Allow diagonal moves.
    #[arg(short, long, default_value_t = false)]
    diagonal: bool,
    /// Depth limit of depth-limited search.
    #[arg(long, default_value_t = DEFAULT_DEPTH_LIMIT)]
    depth_limit: usize,
    /// Heuristic weight of weighted A*.
    #[arg(short, long, default_value_t = DEFAULT_WEIGHT)]
    weight: f64,
    /// Text grid to load (`#` wall, `.` free, `S` start, `G` goal). A
    /// random grid is generated when absent.
    #[arg(short, long)]
    map: Option<PathBuf>,
    /// Width of a generated grid.
    #[arg(long, default_value_t = 30)]
    width: i32,
    /// Height of a generated grid.
    #[arg(long, default_value_t = 15)]
    height: i32,
    /// Share of walls in a generated grid.
    #[arg(long, default_value_t = 0.25)]
    density: f64,
    /// Generate a recursive-division maze instead of scattered walls.
    #[arg(long, default_value_t = false, conflicts_with = "density")]
    maze: bool,
    /// Seed of a generated grid.
    #[arg(long)]
    seed: Option<u64>,
    /// Delay between steps in milliseconds.
    #[arg(short, long, default_value_t = 0)]
    interval: u64,
    /// Print the grid after every step.
    #[arg(short, long, default_value_t = false)]
    frames: bool,
}

impl Command {
    pub fn run(self) -> CommandResult {
        match self {
            Command::Run(args) => args.run(),
            Command::List(args) => args.run(),
        }
    }
}
