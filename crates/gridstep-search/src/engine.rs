//! The step-execution engine: one state machine driving every algorithm.
//!
//! ```text
//! Idle --initialize--> Running --step--> Finished(Found | Exhausted)
//!   ^                   |   ^
//!   |                pause resume
//!   |                   v   |
//!   +------reset------ Paused (any state resets to Idle)
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use gridstep_core::Grid;

use crate::algorithm::Algorithm;
use crate::config::SearchConfig;
use crate::error::EngineError;
use crate::path::Path;
use crate::session::{Progress, SearchSession};
use crate::stats::Statistics;

/// How a finished search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Found,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    #[default]
    Idle,
    Running,
    Paused,
    Finished(Outcome),
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Finished(Outcome::Found) => "finished (path found)",
            Self::Finished(Outcome::Exhausted) => "finished (no path)",
        })
    }
}

/// Status line reported to observers after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Status {
    Ready,
    Running,
    /// Iterative deepening is running with this depth limit.
    RunningAtDepth(usize),
    Paused,
    PathFound,
    NoPath,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("ready"),
            Self::Running => f.write_str("running"),
            Self::RunningAtDepth(depth) => write!(f, "running-depth-{depth}"),
            Self::Paused => f.write_str("paused"),
            Self::PathFound => f.write_str("pathFound"),
            Self::NoPath => f.write_str("noPath"),
        }
    }
}

/// Result of one [`Engine::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    Continue,
    Found(Path),
    Exhausted,
}

impl StepResult {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// Owns a grid and at most one live [`SearchSession`] over it.
///
/// The engine never sleeps or blocks: a driver either calls [`step`] in a
/// loop or calls [`tick`] from a timer, which is a no-op while paused.
///
/// [`step`]: Engine::step
/// [`tick`]: Engine::tick
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    config: SearchConfig,
    state: EngineState,
    session: Option<SearchSession>,
    stats: Statistics,
    started: Option<Instant>,
    elapsed: Duration,
}

impl Engine {
    /// An idle engine over `grid` with the default configuration.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            config: SearchConfig::default(),
            state: EngineState::Idle,
            session: None,
            stats: Statistics::default(),
            started: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Replace the configuration (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Change the configuration of an idle engine.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<(), EngineError> {
        self.expect_idle("configure")?;
        self.config = config;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for editing walls and endpoints. Occupancy must not
    /// change while a search is live.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn status(&self) -> Status {
        match self.state {
            EngineState::Idle => Status::Ready,
            EngineState::Paused => Status::Paused,
            EngineState::Finished(Outcome::Found) => Status::PathFound,
            EngineState::Finished(Outcome::Exhausted) => Status::NoPath,
            EngineState::Running => match self.session.as_ref().and_then(|s| s.depth()) {
                Some(depth) if depth > 0 => Status::RunningAtDepth(depth),
                _ => Status::Running,
            },
        }
    }

    /// Counters as of the last step.
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// The live session, if any. It outlives the search until [`reset`].
    ///
    /// [`reset`]: Engine::reset
    pub fn session(&self) -> Option<&SearchSession> {
        self.session.as_ref()
    }

    /// The path found by the last search.
    pub fn path(&self) -> Option<&Path> {
        self.session.as_ref().and_then(|s| s.path())
    }

    /// Validate the configuration against the grid and seed a new search.
    /// On error the engine stays idle.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        self.start(EngineState::Running)
    }

    /// Like [`initialize`](Engine::initialize), but land in the paused
    /// state so the search is driven one [`step`](Engine::step) at a time.
    pub fn initialize_paused(&mut self) -> Result<(), EngineError> {
        self.start(EngineState::Paused)
    }

    fn start(&mut self, state: EngineState) -> Result<(), EngineError> {
        self.expect_idle("initialize")?;
        self.grid.clear_search();
        let session = SearchSession::new(&self.config, &mut self.grid)?;
        log::debug!(
            "initialized {} from {} to {} ({})",
            self.config.algorithm,
            session.start(),
            session.goal(),
            state
        );
        self.stats = Statistics::collect(&session, Duration::ZERO);
        self.session = Some(session);
        self.state = state;
        self.started = Some(Instant::now());
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Perform exactly one unit of work. Allowed while running or paused.
    pub fn step(&mut self) -> Result<StepResult, EngineError> {
        if !matches!(self.state, EngineState::Running | EngineState::Paused) {
            return Err(self.invalid("step"));
        }
        let Some(session) = self.session.as_mut() else {
            return Err(self.invalid("step"));
        };
        let result = match session.step(&mut self.grid) {
            Progress::Continue => StepResult::Continue,
            Progress::Deepened(depth) => {
                log::debug!("iterative deepening: depth limit {depth}");
                StepResult::Continue
            }
            Progress::Found(path) => StepResult::Found(path),
            Progress::Exhausted => StepResult::Exhausted,
        };
        if let Some(started) = self.started {
            self.elapsed = started.elapsed();
        }
        match &result {
            StepResult::Continue => {}
            StepResult::Found(path) => {
                log::debug!(
                    "path found: {} nodes, cost {:.3}, {} expanded",
                    path.len(),
                    path.cost,
                    session.visited_count()
                );
                self.finish(Outcome::Found);
            }
            StepResult::Exhausted => {
                log::debug!("no path after {} expansions", session.visited_count());
                self.finish(Outcome::Exhausted);
            }
        }
        if let Some(session) = self.session.as_ref() {
            self.stats = Statistics::collect(session, self.elapsed);
        }
        Ok(result)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = EngineState::Finished(outcome);
        self.started = None;
    }

    /// Timer entry point: steps while running, otherwise does nothing.
    pub fn tick(&mut self) -> Option<StepResult> {
        match self.state {
            EngineState::Running => self.step().ok(),
            _ => None,
        }
    }

    /// Freeze a running search. Pausing a paused engine is a no-op.
    pub fn pause(&mut self) -> Result<(), EngineError> {
        match self.state {
            EngineState::Running => {
                log::debug!("paused");
                self.state = EngineState::Paused;
                Ok(())
            }
            EngineState::Paused => Ok(()),
            _ => Err(self.invalid("pause")),
        }
    }

    /// Unfreeze a paused search. Resuming a running engine is a no-op.
    pub fn resume(&mut self) -> Result<(), EngineError> {
        match self.state {
            EngineState::Paused => {
                log::debug!("resumed");
                self.state = EngineState::Running;
                Ok(())
            }
            EngineState::Running => Ok(()),
            _ => Err(self.invalid("resume")),
        }
    }

    /// Drop the session and restore every cell's scratch fields and
    /// classification. Occupancy, start and goal are kept.
    pub fn reset(&mut self) {
        if self.state != EngineState::Idle {
            log::debug!("reset from {}", self.state);
        }
        self.grid.clear_search();
        self.session = None;
        self.state = EngineState::Idle;
        self.stats = Statistics::default();
        self.started = None;
        self.elapsed = Duration::ZERO;
    }

    /// Step until the search ends, initializing first if idle.
    pub fn run_to_completion(&mut self) -> Result<StepResult, EngineError> {
        if self.state == EngineState::Idle {
            self.initialize()?;
        }
        loop {
            let result = self.step()?;
            if result.is_terminal() {
                return Ok(result);
            }
        }
    }

    /// Algorithm of the current configuration.
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    fn expect_idle(&self, op: &'static str) -> Result<(), EngineError> {
        match self.state {
            EngineState::Idle => Ok(()),
            _ => Err(self.invalid(op)),
        }
    }

    fn invalid(&self, op: &'static str) -> EngineError {
        EngineError::InvalidTransition {
            op,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::f64::consts::SQRT_2;

    use gridstep_core::{Classification, Point};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::config::MAX_ITERATIVE_DEPTH;
    use crate::error::ConfigError;
    use crate::heuristic::{Heuristic, manhattan};

    fn open_5x5() -> Grid {
        let mut grid = Grid::new(5, 5);
        grid.set_start(Point::new(0, 0));
        grid.set_goal(Point::new(4, 4));
        grid
    }

    fn walled_off() -> Grid {
        Grid::from_ascii(
            "
S.#..
..#..
..#.G
",
        )
        .unwrap()
    }

    fn run(grid: Grid, config: SearchConfig) -> Engine {
        let mut engine = Engine::new(grid).with_config(config);
        engine.run_to_completion().unwrap();
        engine
    }

    #[test]
    fn shortest_paths_agree_on_open_grid() {
        for algorithm in [
            Algorithm::BreadthFirst,
            Algorithm::UniformCost,
            Algorithm::AStar,
            Algorithm::Bidirectional,
        ] {
            let engine = run(open_5x5(), SearchConfig::new(algorithm));
            assert_eq!(engine.status(), Status::PathFound, "{algorithm}");
            let stats = engine.statistics();
            assert_eq!(stats.path_length, 9, "{algorithm}");
            assert_eq!(stats.path_cost, 8.0, "{algorithm}");
            let path = engine.path().unwrap();
            assert_eq!(path.nodes.first(), Some(&Point::new(0, 0)));
            assert_eq!(path.nodes.last(), Some(&Point::new(4, 4)));
        }
    }

    #[test]
    fn diagonal_astar_with_chebyshev() {
        let config = SearchConfig::new(Algorithm::AStar)
            .with_heuristic(Heuristic::Chebyshev)
            .with_diagonal(true);
        let engine = run(open_5x5(), config);
        let stats = engine.statistics();
        assert_eq!(stats.path_length, 5);
        assert!((stats.path_cost - 4.0 * SQRT_2).abs() < 1e-9);
        let path = engine.path().unwrap();
        for (i, p) in path.nodes.iter().enumerate() {
            assert_eq!(*p, Point::new(i as i32, i as i32));
        }
    }

    #[test]
    fn every_algorithm_reports_no_path_when_goal_is_walled_off() {
        for algorithm in Algorithm::ALL {
            for diagonal in [false, true] {
                let config = SearchConfig::new(algorithm).with_diagonal(diagonal);
                let engine = run(walled_off(), config);
                assert_eq!(
                    engine.state(),
                    EngineState::Finished(Outcome::Exhausted),
                    "{algorithm} diagonal={diagonal}"
                );
                assert_eq!(engine.status(), Status::NoPath);
                assert!(engine.path().is_none());
                assert_eq!(engine.statistics().path_length, 0);
                assert_eq!(engine.grid().count(Classification::Path), 0);
            }
        }
    }

    #[test]
    fn iterative_deepening_gives_up_at_max_depth() {
        let config = SearchConfig::new(Algorithm::IterativeDeepening);
        let engine = run(walled_off(), config);
        let session = engine.session().unwrap();
        assert_eq!(session.depth(), Some(MAX_ITERATIVE_DEPTH));
        // Six cells are reachable; later iterations expand no new ones.
        assert_eq!(session.visited_count(), 6);
    }

    #[test]
    fn iterative_deepening_matches_breadth_first_depth() {
        let grid = Grid::from_ascii(
            "
S...#...
.##.#.#.
.#..#.#.
.#.##.#.
...#..#G
.#...#..
",
        )
        .unwrap();
        let bfs = run(grid.clone(), SearchConfig::new(Algorithm::BreadthFirst));
        let iddfs = run(grid, SearchConfig::new(Algorithm::IterativeDeepening));
        assert_eq!(iddfs.status(), Status::PathFound);
        let bfs_len = bfs.statistics().path_length;
        assert_eq!(iddfs.statistics().path_length, bfs_len);
        assert_eq!(iddfs.session().unwrap().depth(), Some(bfs_len - 1));
    }

    #[test]
    fn weight_one_reproduces_astar() {
        let grid = Grid::from_ascii(
            "
S.....#...
.####.#.#.
......#.#.
.######.#.
........#G
",
        )
        .unwrap();
        for diagonal in [false, true] {
            let astar = run(
                grid.clone(),
                SearchConfig::new(Algorithm::AStar).with_diagonal(diagonal),
            );
            let weighted = run(
                grid.clone(),
                SearchConfig::new(Algorithm::WeightedAStar)
                    .with_weight(1.0)
                    .with_diagonal(diagonal),
            );
            assert_eq!(
                astar.session().unwrap().expansion_order(),
                weighted.session().unwrap().expansion_order()
            );
            assert_eq!(astar.path(), weighted.path());
        }
    }

    #[test]
    fn visited_count_is_distinct_expansions() {
        for algorithm in Algorithm::ALL {
            let engine = run(open_5x5(), SearchConfig::new(algorithm));
            let session = engine.session().unwrap();
            let distinct: HashSet<_> = session.expansion_order().iter().collect();
            assert_eq!(session.visited_count(), distinct.len(), "{algorithm}");
            assert_eq!(engine.statistics().visited_count, distinct.len());
            if algorithm != Algorithm::IterativeDeepening {
                assert_eq!(
                    session.expansion_order().len(),
                    distinct.len(),
                    "{algorithm}"
                );
            }
        }
    }

    #[test]
    fn bidirectional_path_has_no_duplicates() {
        let grid = Grid::from_ascii(
            "
S..#....
.#.#.##.
.#...#..
.####.#.
......#G
",
        )
        .unwrap();
        let bfs = run(grid.clone(), SearchConfig::new(Algorithm::BreadthFirst));
        let bidi = run(grid, SearchConfig::new(Algorithm::Bidirectional));
        let path = bidi.path().unwrap();
        let distinct: HashSet<_> = path.nodes.iter().collect();
        assert_eq!(distinct.len(), path.len());
        assert_eq!(path.cost, bfs.path().unwrap().cost);
        for w in path.nodes.windows(2) {
            let d = w[1] - w[0];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }

    #[test]
    fn reset_restores_a_fresh_engine() {
        let fresh = Engine::new(open_5x5());
        let mut engine = run(open_5x5(), SearchConfig::new(Algorithm::AStar));
        assert_ne!(engine.grid(), fresh.grid());

        engine.reset();
        assert_eq!(engine.grid(), fresh.grid());
        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.status(), Status::Ready);
        assert_eq!(engine.statistics(), Statistics::default());
        assert!(engine.session().is_none());

        engine.reset();
        assert_eq!(engine.grid(), fresh.grid());
        assert_eq!(engine.state(), EngineState::Idle);

        // A reset engine runs again.
        let result = engine.run_to_completion();
        assert!(matches!(result, Ok(StepResult::Found(_))));
    }

    #[test]
    fn reset_mid_run_keeps_walls_and_endpoints() {
        let grid = walled_off();
        let config = SearchConfig::new(Algorithm::DepthFirst);
        let mut engine = Engine::new(grid.clone()).with_config(config);
        engine.initialize().unwrap();
        engine.step().unwrap();
        engine.step().unwrap();
        engine.reset();
        assert_eq!(engine.grid(), &grid);
    }

    #[test]
    fn protocol_errors() {
        let mut engine = Engine::new(open_5x5());
        assert_eq!(
            engine.step(),
            Err(EngineError::InvalidTransition {
                op: "step",
                state: EngineState::Idle
            })
        );
        assert!(engine.pause().is_err());
        assert!(engine.resume().is_err());

        engine.initialize().unwrap();
        assert_eq!(
            engine.initialize(),
            Err(EngineError::InvalidTransition {
                op: "initialize",
                state: EngineState::Running
            })
        );
        assert!(engine.set_config(SearchConfig::default()).is_err());

        engine.run_to_completion().unwrap();
        let finished = EngineState::Finished(Outcome::Found);
        assert_eq!(engine.state(), finished);
        assert_eq!(
            engine.step(),
            Err(EngineError::InvalidTransition {
                op: "step",
                state: finished
            })
        );
        assert!(engine.pause().is_err());
        assert!(engine.resume().is_err());
        assert_eq!(engine.tick(), None);
    }

    #[test]
    fn configuration_errors_leave_engine_idle() {
        let mut engine = Engine::new(Grid::new(3, 3));
        assert_eq!(
            engine.initialize(),
            Err(EngineError::Config(ConfigError::MissingStart))
        );
        assert_eq!(engine.state(), EngineState::Idle);

        let center = Point::new(1, 1);
        engine.grid_mut().set_start(center);
        engine.grid_mut().set_goal(center);
        assert_eq!(
            engine.initialize(),
            Err(EngineError::Config(ConfigError::StartIsGoal(center)))
        );

        engine.grid_mut().set_goal(Point::new(2, 2));
        let config = SearchConfig::new(Algorithm::DepthLimited).with_depth_limit(0);
        engine.set_config(config).unwrap();
        assert_eq!(
            engine.initialize(),
            Err(EngineError::Config(ConfigError::DepthLimit(0)))
        );
        engine
            .set_config(SearchConfig::new(Algorithm::WeightedAStar).with_weight(0.5))
            .unwrap();
        assert_eq!(
            engine.initialize(),
            Err(EngineError::Config(ConfigError::Weight(0.5)))
        );
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn pause_resume_and_tick() {
        let mut engine = Engine::new(open_5x5());
        engine.initialize_paused().unwrap();
        assert_eq!(engine.status(), Status::Paused);
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.statistics().visited_count, 0);

        // Single-stepping while paused.
        assert_eq!(engine.step(), Ok(StepResult::Continue));
        assert_eq!(engine.state(), EngineState::Paused);
        assert_eq!(engine.statistics().visited_count, 1);

        engine.resume().unwrap();
        engine.resume().unwrap();
        assert_eq!(engine.tick(), Some(StepResult::Continue));
        assert_eq!(engine.statistics().visited_count, 2);

        engine.pause().unwrap();
        engine.pause().unwrap();
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.statistics().visited_count, 2);

        engine.resume().unwrap();
        let result = loop {
            if let Some(result) = engine.tick() {
                if result.is_terminal() {
                    break result;
                }
            }
        };
        assert!(matches!(result, StepResult::Found(_)));
        assert_eq!(engine.tick(), None);
    }

    #[test]
    fn iterative_deepening_status_reports_depth() {
        let grid = Grid::from_ascii("S.G").unwrap();
        let config = SearchConfig::new(Algorithm::IterativeDeepening);
        let mut engine = Engine::new(grid).with_config(config);
        engine.initialize().unwrap();
        assert_eq!(engine.status().to_string(), "running");
        // Expand the start, skip its too-deep child, then deepen.
        engine.step().unwrap();
        engine.step().unwrap();
        engine.step().unwrap();
        assert_eq!(engine.status(), Status::RunningAtDepth(1));
        assert_eq!(engine.status().to_string(), "running-depth-1");
        let result = engine.run_to_completion();
        assert!(matches!(result, Ok(StepResult::Found(_))));
        assert_eq!(engine.status().to_string(), "pathFound");
    }

    #[test]
    fn depth_limited_stops_at_its_limit() {
        let grid = Grid::from_ascii("S.....G").unwrap();
        let short = run(
            grid.clone(),
            SearchConfig::new(Algorithm::DepthLimited).with_depth_limit(5),
        );
        assert_eq!(short.status(), Status::NoPath);
        let enough = run(
            grid,
            SearchConfig::new(Algorithm::DepthLimited).with_depth_limit(6),
        );
        assert_eq!(enough.status(), Status::PathFound);
        assert_eq!(enough.statistics().path_length, 7);
    }

    #[test]
    fn greedy_and_depth_first_find_some_path() {
        for algorithm in [Algorithm::Greedy, Algorithm::DepthFirst] {
            let engine = run(open_5x5(), SearchConfig::new(algorithm));
            let stats = engine.statistics();
            assert_eq!(engine.status(), Status::PathFound, "{algorithm}");
            assert!(stats.path_cost >= 8.0, "{algorithm}");
            assert_eq!(stats.path_length as f64 - 1.0, stats.path_cost);
        }
    }

    #[test]
    fn frontier_and_path_classifications() {
        let mut engine = run(open_5x5(), SearchConfig::new(Algorithm::BreadthFirst));
        let grid = engine.grid();
        assert_eq!(grid.count(Classification::Path), 7);
        assert_eq!(grid.count(Classification::Current), 0);
        assert_eq!(
            grid.classification(Point::new(0, 0)),
            Classification::Unvisited
        );
        assert_eq!(
            grid.classification(Point::new(4, 4)),
            Classification::Unvisited
        );
        engine.reset();
        assert_eq!(engine.grid().count(Classification::Unvisited), 25);
    }

    #[test]
    fn bidirectional_classifies_both_sides() {
        let config = SearchConfig::new(Algorithm::Bidirectional);
        let mut engine = Engine::new(open_5x5()).with_config(config);
        engine.initialize().unwrap();
        engine.step().unwrap();
        engine.step().unwrap();
        let grid = engine.grid();
        assert!(grid.count(Classification::VisitedFromStart) > 0);
        assert!(grid.count(Classification::VisitedFromGoal) > 0);
    }

    #[test]
    fn cost_fields_follow_weighted_sum() {
        let config = SearchConfig::new(Algorithm::WeightedAStar).with_weight(2.0);
        let engine = run(open_5x5(), config);
        for (_, cell) in engine.grid().iter() {
            if cell.cost_so_far.is_finite() {
                assert_eq!(cell.total_cost, cell.cost_so_far + 2.0 * cell.heuristic);
            }
        }
    }

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn greedy_follows_the_heuristic() {
        let engine = run(open_5x5(), SearchConfig::new(Algorithm::Greedy));
        let session = engine.session().unwrap();
        // Ties on h pop in discovery order: along the top row, then down.
        let expected = points(&[
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (4, 0),
            (4, 1),
            (4, 2),
            (4, 3),
            (4, 4),
        ]);
        assert_eq!(session.expansion_order(), expected.as_slice());
        assert_eq!(session.visited_count(), 9);
        let goal = Point::new(4, 4);
        let h: Vec<f64> = expected.iter().map(|&p| manhattan(p, goal)).collect();
        assert!(h.windows(2).all(|w| w[1] < w[0]), "{h:?}");
    }

    #[test]
    fn astar_expands_fewer_nodes_than_uniform_cost() {
        let mut grid = Grid::new(5, 5);
        grid.set_start(Point::new(0, 2));
        grid.set_goal(Point::new(4, 2));

        let astar = run(grid.clone(), SearchConfig::new(Algorithm::AStar));
        let ucs = run(grid, SearchConfig::new(Algorithm::UniformCost));
        let expected = points(&[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
        assert_eq!(
            astar.session().unwrap().expansion_order(),
            expected.as_slice()
        );
        let astar_visited = astar.statistics().visited_count;
        let ucs_visited = ucs.statistics().visited_count;
        assert!(
            astar_visited < ucs_visited,
            "{astar_visited} vs {ucs_visited}"
        );
        // Every cell within three moves of the start is settled first.
        assert!(ucs_visited > 14);
        assert_eq!(astar.statistics().path_cost, ucs.statistics().path_cost);
    }

    #[test]
    fn weighted_astar_expands_no_more_than_astar() {
        // On the open grid every cell has f = 8, so A* degrades to
        // breadth-first order and settles the goal last.
        let astar = run(open_5x5(), SearchConfig::new(Algorithm::AStar));
        let config = SearchConfig::new(Algorithm::WeightedAStar).with_weight(2.0);
        let weighted = run(open_5x5(), config);
        let astar_visited = astar.statistics().visited_count;
        let weighted_visited = weighted.statistics().visited_count;
        assert_eq!(astar_visited, 25);
        assert_eq!(weighted_visited, 9);
        assert!(weighted_visited <= astar_visited);
        assert_eq!(weighted.statistics().path_cost, 8.0);

        let greedy = run(open_5x5(), SearchConfig::new(Algorithm::Greedy));
        assert_eq!(
            weighted.session().unwrap().expansion_order(),
            greedy.session().unwrap().expansion_order()
        );
    }

    fn random_grid(rng: &mut StdRng, width: i32, height: i32, density: f64) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(density) {
                    grid.set_blocked(Point::new(x, y), true);
                }
            }
        }
        let start = Point::new(0, 0);
        let goal = Point::new(width - 1, height - 1);
        grid.set_blocked(start, false);
        grid.set_blocked(goal, false);
        grid.set_start(start);
        grid.set_goal(goal);
        grid
    }

    #[test]
    fn random_grids_agree_on_optimal_cost() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..60 {
            let width = rng.random_range(4..14);
            let height = rng.random_range(4..10);
            let grid = random_grid(&mut rng, width, height, 0.3);
            let bfs = run(grid.clone(), SearchConfig::new(Algorithm::BreadthFirst));
            let expected = bfs.path().map(|p| p.cost);
            for algorithm in [
                Algorithm::UniformCost,
                Algorithm::AStar,
                Algorithm::Bidirectional,
            ] {
                let engine = run(grid.clone(), SearchConfig::new(algorithm));
                assert_eq!(
                    engine.path().map(|p| p.cost),
                    expected,
                    "{algorithm} on\n{}",
                    grid.to_ascii()
                );
            }
        }
    }

    #[test]
    fn random_grids_with_diagonals() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let grid = random_grid(&mut rng, 10, 8, 0.25);
            let ucs = run(
                grid.clone(),
                SearchConfig::new(Algorithm::UniformCost).with_diagonal(true),
            );
            let astar = run(
                grid.clone(),
                SearchConfig::new(Algorithm::AStar)
                    .with_heuristic(Heuristic::Euclidean)
                    .with_diagonal(true),
            );
            match (ucs.path(), astar.path()) {
                (Some(a), Some(b)) => assert!((a.cost - b.cost).abs() < 1e-9),
                (None, None) => {}
                other => panic!("disagreement {other:?} on\n{}", grid.to_ascii()),
            }
        }
    }
}
