//! [`SearchSession`]: the live state of one search run.

use std::collections::HashSet;

use gridstep_core::{Classification, Grid, Point};

use crate::algorithm::Algorithm;
use crate::bidirectional::Bidirectional;
use crate::config::{self, SearchConfig};
use crate::error::ConfigError;
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::single::SingleSource;
use crate::strategy::Strategy;

/// What one step accomplished.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Progress {
    Continue,
    /// Iterative deepening started a new iteration at this depth.
    Deepened(usize),
    Found(Path),
    Exhausted,
}

/// Expanded nodes in expansion order, plus the distinct set.
#[derive(Debug, Clone, Default)]
pub(crate) struct Expansions {
    order: Vec<Point>,
    distinct: HashSet<Point>,
}

impl Expansions {
    #[inline]
    pub(crate) fn record(&mut self, p: Point) {
        self.order.push(p);
        self.distinct.insert(p);
    }

    /// Number of distinct nodes expanded so far.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.distinct.len()
    }
}

#[derive(Debug, Clone)]
enum Search {
    Single(SingleSource),
    Bidirectional(Bidirectional),
}

/// Live state of one search: frontier(s), revisit sets, parent links and
/// the expansion record.
///
/// Created by [`Engine::initialize`](crate::Engine::initialize), advanced
/// only by [`Engine::step`](crate::Engine::step) and dropped on reset.
#[derive(Debug, Clone)]
pub struct SearchSession {
    algorithm: Algorithm,
    start: Point,
    goal: Point,
    neighbors: Neighbors,
    search: Search,
    expansions: Expansions,
    current: Option<Point>,
    path: Option<Path>,
    steps: u64,
}

impl SearchSession {
    /// Validate `config` against `grid` and seed a new search. The grid's
    /// scratch fields are expected to be at their defaults.
    pub(crate) fn new(config: &SearchConfig, grid: &mut Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        let (start, goal) = config::endpoints(grid)?;
        let search = match Strategy::for_config(config) {
            Some(strategy) => Search::Single(SingleSource::new(strategy, start, goal, grid)),
            None => Search::Bidirectional(Bidirectional::new(start, goal)),
        };
        Ok(Self {
            algorithm: config.algorithm,
            start,
            goal,
            neighbors: Neighbors::new(config.diagonal),
            search,
            expansions: Expansions::default(),
            current: None,
            path: None,
            steps: 0,
        })
    }

    /// Perform one unit of work.
    pub(crate) fn step(&mut self, grid: &mut Grid) -> Progress {
        self.steps += 1;
        // The node expanded by the previous step is no longer current.
        if let Some(prev) = self.current.take() {
            if grid.classification(prev) == Classification::Current {
                grid.classify(prev, Classification::Visited);
            }
        }

        let progress = match &mut self.search {
            Search::Single(s) => s.step(grid, &mut self.neighbors, &mut self.expansions),
            Search::Bidirectional(b) => b.step(grid, &mut self.neighbors, &mut self.expansions),
        };

        if let Progress::Continue = progress {
            if let Some(&last) = self.expansions.order.last() {
                if grid.classification(last) == Classification::Current {
                    self.current = Some(last);
                }
            }
        }
        if let Progress::Found(path) = &progress {
            path.mark(grid);
            self.path = Some(path.clone());
        }
        progress
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Number of distinct nodes expanded so far.
    pub fn visited_count(&self) -> usize {
        self.expansions.count()
    }

    /// Every expansion in order. Iterative deepening re-expands nodes, so
    /// a node may appear more than once.
    pub fn expansion_order(&self) -> &[Point] {
        &self.expansions.order
    }

    /// Entries waiting in the frontier (both sides for bidirectional
    /// search; stale priority-queue duplicates included).
    pub fn frontier_size(&self) -> usize {
        match &self.search {
            Search::Single(s) => s.frontier_len(),
            Search::Bidirectional(b) => b.frontier_len(),
        }
    }

    /// Active iterative-deepening limit, for that algorithm only.
    pub fn depth(&self) -> Option<usize> {
        match &self.search {
            Search::Single(s) if self.algorithm == Algorithm::IterativeDeepening => Some(s.depth),
            _ => None,
        }
    }

    /// The path, once found.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Number of `step` calls made on this session.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
