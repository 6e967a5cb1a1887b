//! Expansion policies of the single-source searches.
//!
//! Each [`Strategy`] variant fixes three things: the frontier container, the
//! revisit filter applied when an entry is popped, and the rule deciding
//! which neighbors of an expanded node enter the frontier.

use gridstep_core::{Classification, Grid, Point};

use crate::algorithm::Algorithm;
use crate::config::SearchConfig;
use crate::frontier::FrontierKind;
use crate::heuristic::Heuristic;
use crate::neighbors::Move;
use crate::single::SingleSource;

/// A frontier entry: the node, the node it was reached from, and its depth
/// in the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) pos: Point,
    pub(crate) parent: Option<Point>,
    pub(crate) depth: usize,
}

impl Entry {
    pub(crate) fn root(pos: Point) -> Self {
        Self {
            pos,
            parent: None,
            depth: 0,
        }
    }

    fn child(&self, pos: Point) -> Self {
        Self {
            pos,
            parent: Some(self.pos),
            depth: self.depth + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Strategy {
    BreadthFirst,
    DepthFirst,
    DepthLimited { limit: usize },
    IterativeDeepening,
    UniformCost,
    Greedy { heuristic: Heuristic },
    /// A* proper uses a weight of 1.
    AStar { heuristic: Heuristic, weight: f64 },
}

impl Strategy {
    /// The strategy selected by `config`, or `None` for bidirectional
    /// search, which runs two breadth-first sides instead.
    pub(crate) fn for_config(config: &SearchConfig) -> Option<Self> {
        let heuristic = config.heuristic;
        let strategy = match config.algorithm {
            Algorithm::BreadthFirst => Self::BreadthFirst,
            Algorithm::DepthFirst => Self::DepthFirst,
            Algorithm::DepthLimited => Self::DepthLimited {
                limit: config.depth_limit,
            },
            Algorithm::IterativeDeepening => Self::IterativeDeepening,
            Algorithm::UniformCost => Self::UniformCost,
            Algorithm::Greedy => Self::Greedy { heuristic },
            Algorithm::AStar | Algorithm::WeightedAStar => Self::AStar {
                heuristic,
                weight: config.effective_weight(),
            },
            Algorithm::Bidirectional => return None,
        };
        Some(strategy)
    }

    pub(crate) fn frontier_kind(self) -> FrontierKind {
        match self {
            Self::BreadthFirst => FrontierKind::Queue,
            Self::DepthFirst | Self::DepthLimited { .. } | Self::IterativeDeepening => {
                FrontierKind::Stack
            }
            Self::UniformCost | Self::Greedy { .. } | Self::AStar { .. } => FrontierKind::Priority,
        }
    }

    /// Push the start node and fill in its scratch fields.
    pub(crate) fn seed(self, search: &mut SingleSource, grid: &mut Grid) {
        let start = search.start;
        let goal = search.goal;
        let (h, weight) = match self {
            Self::Greedy { heuristic } => (heuristic.estimate(start, goal), 1.0),
            Self::AStar { heuristic, weight } => (heuristic.estimate(start, goal), weight),
            _ => (0.0, 1.0),
        };
        if matches!(self, Self::BreadthFirst | Self::Greedy { .. }) {
            search.discovered.insert(start);
        }
        if self.frontier_kind() == FrontierKind::Priority {
            if let Some(cell) = grid.cell_mut(start) {
                cell.cost_so_far = 0.0;
                cell.heuristic = h;
                cell.total_cost = weight * h;
            }
        }
        search.frontier.push(Entry::root(start), weight * h);
    }

    /// Revisit filter applied to a popped entry.
    pub(crate) fn should_skip(self, entry: &Entry, search: &SingleSource) -> bool {
        match self {
            // Filtered before enqueue: every entry is a first discovery.
            Self::BreadthFirst => false,
            Self::DepthFirst | Self::UniformCost | Self::Greedy { .. } | Self::AStar { .. } => {
                search.closed.contains(&entry.pos)
            }
            Self::DepthLimited { limit } => {
                search.closed.contains(&entry.pos) || entry.depth > limit
            }
            // Within one iteration a node is expanded again only when it is
            // reached at a strictly smaller depth.
            Self::IterativeDeepening => {
                entry.depth > search.depth
                    || search
                        .expanded_depth
                        .get(&entry.pos)
                        .is_some_and(|&d| d <= entry.depth)
            }
        }
    }

    /// Offer neighbor `mv` of the expanded entry `from` to the frontier.
    pub(crate) fn on_expand(
        self,
        search: &mut SingleSource,
        grid: &mut Grid,
        from: &Entry,
        mv: Move,
    ) {
        let to = mv.to;
        let child = from.child(to);
        match self {
            Self::BreadthFirst => {
                if search.discovered.insert(to) {
                    search.frontier.push(child, 0.0);
                    grid.classify(to, Classification::Frontier);
                }
            }
            Self::DepthFirst | Self::DepthLimited { .. } => {
                if !search.closed.contains(&to) {
                    search.frontier.push(child, 0.0);
                    grid.classify(to, Classification::Frontier);
                }
            }
            Self::IterativeDeepening => {
                let shallower = search
                    .expanded_depth
                    .get(&to)
                    .is_none_or(|&d| d > child.depth);
                if shallower {
                    search.frontier.push(child, 0.0);
                    grid.classify(to, Classification::Frontier);
                }
            }
            Self::Greedy { heuristic } => {
                if !search.closed.contains(&to) && search.discovered.insert(to) {
                    let h = heuristic.estimate(to, search.goal);
                    if let Some(cell) = grid.cell_mut(to) {
                        cell.heuristic = h;
                    }
                    search.frontier.push(child, h);
                    grid.classify(to, Classification::Frontier);
                }
            }
            Self::UniformCost => Self::relax(search, grid, from, mv, None, 1.0),
            Self::AStar { heuristic, weight } => {
                Self::relax(search, grid, from, mv, Some(heuristic), weight)
            }
        }
    }

    /// Cost relaxation shared by UCS and (weighted) A*. Improvements are
    /// pushed as new entries; the outdated ones are skipped when popped.
    fn relax(
        search: &mut SingleSource,
        grid: &mut Grid,
        from: &Entry,
        mv: Move,
        heuristic: Option<Heuristic>,
        weight: f64,
    ) {
        if search.closed.contains(&mv.to) {
            return;
        }
        let g = grid.at(from.pos).cost_so_far + mv.cost;
        let goal = search.goal;
        let Some(cell) = grid.cell_mut(mv.to) else {
            return;
        };
        if g >= cell.cost_so_far {
            return;
        }
        let h = heuristic.map_or(0.0, |h| h.estimate(mv.to, goal));
        cell.cost_so_far = g;
        cell.heuristic = h;
        cell.total_cost = g + weight * h;
        let priority = cell.total_cost;
        search.frontier.push(from.child(mv.to), priority);
        grid.classify(mv.to, Classification::Frontier);
    }
}
