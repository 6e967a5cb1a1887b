//! Resumable graph searches on grids, advanced one node at a time.
//!
//! Nine algorithms share a single [`Engine`]:
//!
//! | Algorithm | Frontier | Optimal |
//! |---|---|---|
//! | breadth-first, bidirectional | [`Queue`] | in steps |
//! | depth-first, depth-limited, iterative deepening | [`Stack`] | iterative deepening only, in steps |
//! | uniform-cost, A* | [`PriorityQueue`] | yes (admissible heuristic for A*) |
//! | greedy best-first, weighted A* | [`PriorityQueue`] | no |
//!
//! Each [`Engine::step`] performs one frontier pop (one per side for
//! bidirectional search) and updates the [`Grid`](gridstep_core::Grid)'s
//! per-cell classification, so an observer can redraw between steps.
//!
//! ```
//! use gridstep_core::Grid;
//! use gridstep_search::{Algorithm, Engine, SearchConfig, StepResult};
//!
//! let grid = Grid::from_ascii("S..#\n.#.G").unwrap();
//! let mut engine = Engine::new(grid).with_config(SearchConfig::new(Algorithm::AStar));
//! engine.initialize().unwrap();
//! let result = loop {
//!     match engine.step().unwrap() {
//!         StepResult::Continue => continue,
//!         done => break done,
//!     }
//! };
//! assert!(matches!(result, StepResult::Found(_)));
//! assert_eq!(engine.statistics().path_cost, 4.0);
//! ```

mod algorithm;
mod bidirectional;
mod config;
mod engine;
mod error;
mod frontier;
mod heuristic;
mod neighbors;
mod path;
mod session;
mod single;
mod stats;
mod strategy;

pub use algorithm::{Algorithm, AlgorithmInfo};
pub use config::{
    DEFAULT_DEPTH_LIMIT, DEFAULT_WEIGHT, MAX_DEPTH_LIMIT, MAX_ITERATIVE_DEPTH, SearchConfig,
    endpoints,
};
pub use engine::{Engine, EngineState, Outcome, Status, StepResult};
pub use error::{ConfigError, EngineError, ParseNameError};
pub use frontier::{FrontierKind, PriorityQueue, Queue, Stack};
pub use heuristic::{Heuristic, chebyshev, euclidean, manhattan};
pub use neighbors::{DIAGONAL_COST, Move, Neighbors, ORTHOGONAL_COST, hop_cost};
pub use path::{Parents, Path, reconstruct, stitch};
pub use session::SearchSession;
pub use stats::Statistics;
