//! One-node-per-step driver shared by the eight single-source searches.

use std::collections::{HashMap, HashSet};

use gridstep_core::{Classification, Grid, Point};

use crate::config::MAX_ITERATIVE_DEPTH;
use crate::frontier::Frontier;
use crate::neighbors::Neighbors;
use crate::path::{self, Parents};
use crate::session::{Expansions, Progress};
use crate::strategy::{Entry, Strategy};

/// Frontier, revisit sets and parent links of a single-source search.
#[derive(Debug, Clone)]
pub(crate) struct SingleSource {
    pub(crate) strategy: Strategy,
    pub(crate) start: Point,
    pub(crate) goal: Point,
    pub(crate) frontier: Frontier<Entry>,
    /// Nodes already expanded (filter on pop).
    pub(crate) closed: HashSet<Point>,
    /// Nodes already pushed (filter before enqueue).
    pub(crate) discovered: HashSet<Point>,
    /// Shallowest depth each node was expanded at in the current
    /// iterative-deepening iteration.
    pub(crate) expanded_depth: HashMap<Point, usize>,
    pub(crate) parents: Parents,
    /// Active iterative-deepening limit.
    pub(crate) depth: usize,
}

impl SingleSource {
    pub(crate) fn new(strategy: Strategy, start: Point, goal: Point, grid: &mut Grid) -> Self {
        let mut search = Self {
            strategy,
            start,
            goal,
            frontier: Frontier::new(strategy.frontier_kind()),
            closed: HashSet::new(),
            discovered: HashSet::new(),
            expanded_depth: HashMap::new(),
            parents: Parents::new(),
            depth: 0,
        };
        strategy.seed(&mut search, grid);
        search
    }

    #[inline]
    pub(crate) fn is_goal(&self, p: Point) -> bool {
        p == self.goal
    }

    /// Pop one entry and expand it.
    pub(crate) fn step(
        &mut self,
        grid: &mut Grid,
        neighbors: &mut Neighbors,
        expansions: &mut Expansions,
    ) -> Progress {
        let strategy = self.strategy;
        let Some(entry) = self.frontier.pop() else {
            return match strategy {
                Strategy::IterativeDeepening => self.deepen(grid),
                _ => Progress::Exhausted,
            };
        };
        if strategy.should_skip(&entry, self) {
            return Progress::Continue;
        }

        self.closed.insert(entry.pos);
        self.expanded_depth.insert(entry.pos, entry.depth);
        if let Some(parent) = entry.parent {
            self.parents.insert(entry.pos, parent);
        }
        expansions.record(entry.pos);
        grid.classify(entry.pos, Classification::Current);
        log::trace!("expand {} at depth {}", entry.pos, entry.depth);

        if self.is_goal(entry.pos) {
            return Progress::Found(path::reconstruct(&self.parents, self.goal));
        }

        for &mv in neighbors.of(grid, entry.pos) {
            strategy.on_expand(self, grid, &entry, mv);
        }
        Progress::Continue
    }

    /// Start the next iterative-deepening iteration from scratch, or give
    /// up past [`MAX_ITERATIVE_DEPTH`].
    fn deepen(&mut self, grid: &mut Grid) -> Progress {
        if self.depth >= MAX_ITERATIVE_DEPTH {
            return Progress::Exhausted;
        }
        self.depth += 1;
        self.closed.clear();
        self.expanded_depth.clear();
        self.parents.clear();
        grid.clear_search();
        self.frontier.push(Entry::root(self.start), 0.0);
        Progress::Deepened(self.depth)
    }

    #[inline]
    pub(crate) fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
