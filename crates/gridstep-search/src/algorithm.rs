//! The nine search algorithms and their catalog entries.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;
use crate::frontier::FrontierKind;

/// Identifier of a search algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "dls"))]
    DepthLimited,
    #[cfg_attr(feature = "serde", serde(rename = "iddfs"))]
    IterativeDeepening,
    #[cfg_attr(feature = "serde", serde(rename = "ucs"))]
    UniformCost,
    #[cfg_attr(feature = "serde", serde(rename = "greedy"))]
    Greedy,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "weighted-astar"))]
    WeightedAStar,
    #[cfg_attr(feature = "serde", serde(rename = "bidirectional"))]
    Bidirectional,
}

/// Static description of an algorithm, for display next to a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub complete: bool,
    pub optimal: bool,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    /// Outline of the search loop, one statement per line.
    pub pseudocode: &'static str,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::DepthLimited,
        Self::IterativeDeepening,
        Self::UniformCost,
        Self::Greedy,
        Self::AStar,
        Self::WeightedAStar,
        Self::Bidirectional,
    ];

    /// Textual identifier, e.g. `bfs` or `weighted-astar`.
    pub fn id(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::DepthLimited => "dls",
            Self::IterativeDeepening => "iddfs",
            Self::UniformCost => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
            Self::WeightedAStar => "weighted-astar",
            Self::Bidirectional => "bidirectional",
        }
    }

    /// Container the algorithm expands from. Bidirectional search runs one
    /// queue per side.
    pub fn frontier_kind(self) -> FrontierKind {
        match self {
            Self::BreadthFirst | Self::Bidirectional => FrontierKind::Queue,
            Self::DepthFirst | Self::DepthLimited | Self::IterativeDeepening => {
                FrontierKind::Stack
            }
            Self::UniformCost | Self::Greedy | Self::AStar | Self::WeightedAStar => {
                FrontierKind::Priority
            }
        }
    }

    /// Whether the algorithm fills in cost-so-far, heuristic and total cost.
    pub fn is_cost_aware(self) -> bool {
        self.frontier_kind() == FrontierKind::Priority
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::BreadthFirst => AlgorithmInfo {
                name: "Breadth-First Search (BFS)",
                description: "Explores nodes level by level using a queue. Guarantees the shortest path in steps.",
                complete: true,
                optimal: true,
                time_complexity: "O(b^d)",
                space_complexity: "O(b^d)",
                pseudocode: BFS,
            },
            Self::DepthFirst => AlgorithmInfo {
                name: "Depth-First Search (DFS)",
                description: "Explores the deepest path first using a stack. May not find the shortest path.",
                complete: false,
                optimal: false,
                time_complexity: "O(b^m)",
                space_complexity: "O(bm)",
                pseudocode: DFS,
            },
            Self::DepthLimited => AlgorithmInfo {
                name: "Depth-Limited Search (DLS)",
                description: "DFS that never expands nodes deeper than a fixed limit.",
                complete: false,
                optimal: false,
                time_complexity: "O(b^l)",
                space_complexity: "O(bl)",
                pseudocode: DLS,
            },
            Self::IterativeDeepening => AlgorithmInfo {
                name: "Iterative Deepening DFS (IDDFS)",
                description: "Repeats depth-limited search with growing limits: BFS completeness with DFS memory.",
                complete: true,
                optimal: true,
                time_complexity: "O(b^d)",
                space_complexity: "O(bd)",
                pseudocode: IDDFS,
            },
            Self::UniformCost => AlgorithmInfo {
                name: "Uniform-Cost Search (UCS)",
                description: "Expands the cheapest node first. Optimal for weighted moves.",
                complete: true,
                optimal: true,
                time_complexity: "O(b^(1+\u{230a}C*/\u{3b5}\u{230b}))",
                space_complexity: "O(b^(1+\u{230a}C*/\u{3b5}\u{230b}))",
                pseudocode: UCS,
            },
            Self::Greedy => AlgorithmInfo {
                name: "Greedy Best-First Search",
                description: "Expands the node the heuristic rates closest to the goal. Fast but not optimal.",
                complete: false,
                optimal: false,
                time_complexity: "O(b^m)",
                space_complexity: "O(b^m)",
                pseudocode: GREEDY,
            },
            Self::AStar => AlgorithmInfo {
                name: "A* Search",
                description: "Orders by f(n) = g(n) + h(n). Optimal and complete with an admissible heuristic.",
                complete: true,
                optimal: true,
                time_complexity: "O(b^d)",
                space_complexity: "O(b^d)",
                pseudocode: ASTAR,
            },
            Self::WeightedAStar => AlgorithmInfo {
                name: "Weighted A*",
                description: "Orders by f(n) = g(n) + w\u{b7}h(n) with w > 1. Trades optimality for speed.",
                complete: true,
                optimal: false,
                time_complexity: "O(b^d)",
                space_complexity: "O(b^d)",
                pseudocode: WEIGHTED_ASTAR,
            },
            Self::Bidirectional => AlgorithmInfo {
                name: "Bidirectional Search",
                description: "Runs breadth-first searches from start and goal until they meet.",
                complete: true,
                optimal: true,
                time_complexity: "O(b^(d/2))",
                space_complexity: "O(b^(d/2))",
                pseudocode: BIDIRECTIONAL,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Pseudocode
// ---------------------------------------------------------------------------

const BFS: &str = "\
bfs(start, goal):
    queue = [start]; discovered = {start}
    while queue not empty:
        node = queue.pop_front()
        if node == goal: return path(node)
        for next in neighbors(node):
            if next not in discovered:
                discovered.add(next); parent[next] = node
                queue.push_back(next)
    return no path";

const DFS: &str = "\
dfs(start, goal):
    stack = [(start, none)]; closed = {}
    while stack not empty:
        (node, from) = stack.pop()
        if node in closed: continue
        closed.add(node); parent[node] = from
        if node == goal: return path(node)
        for next in neighbors(node):
            if next not in closed: stack.push((next, node))
    return no path";

const DLS: &str = "\
dls(start, goal, limit):
    stack = [(start, 0)]; closed = {}
    while stack not empty:
        (node, depth) = stack.pop()
        if node in closed or depth > limit: continue
        closed.add(node)
        if node == goal: return path(node)
        for next in neighbors(node):
            if next not in closed:
                stack.push((next, depth + 1))
    return no path";

const IDDFS: &str = "\
iddfs(start, goal):
    for limit in 0..=50:
        stack = [(start, 0)]; expanded = {}
        while stack not empty:
            (node, depth) = stack.pop()
            if depth > limit or expanded[node] <= depth: continue
            expanded[node] = depth
            if node == goal: return path(node)
            for next in neighbors(node):
                if expanded[next] > depth + 1:
                    stack.push((next, depth + 1))
    return no path";

const UCS: &str = "\
ucs(start, goal):
    g[start] = 0; open = {start: 0}; closed = {}
    while open not empty:
        node = open.pop_min()
        if node in closed: continue
        closed.add(node)
        if node == goal: return path(node)
        for (next, cost) in neighbors(node):
            if next not in closed and g[node] + cost < g[next]:
                g[next] = g[node] + cost; parent[next] = node
                open.push(next, g[next])
    return no path";

const GREEDY: &str = "\
greedy(start, goal):
    open = {start: h(start)}; discovered = {start}; closed = {}
    while open not empty:
        node = open.pop_min()
        if node in closed: continue
        closed.add(node)
        if node == goal: return path(node)
        for next in neighbors(node):
            if next not in closed and next not in discovered:
                discovered.add(next); parent[next] = node
                open.push(next, h(next))
    return no path";

const ASTAR: &str = "\
astar(start, goal):
    g[start] = 0; open = {start: h(start)}; closed = {}
    while open not empty:
        node = open.pop_min()
        if node in closed: continue
        closed.add(node)
        if node == goal: return path(node)
        for (next, cost) in neighbors(node):
            if next not in closed and g[node] + cost < g[next]:
                g[next] = g[node] + cost; parent[next] = node
                open.push(next, g[next] + h(next))
    return no path";

const WEIGHTED_ASTAR: &str = "\
weighted_astar(start, goal, w):
    g[start] = 0; open = {start: w * h(start)}; closed = {}
    while open not empty:
        node = open.pop_min()
        if node in closed: continue
        closed.add(node)
        if node == goal: return path(node)
        for (next, cost) in neighbors(node):
            if next not in closed and g[node] + cost < g[next]:
                g[next] = g[node] + cost; parent[next] = node
                open.push(next, g[next] + w * h(next))
    return no path";

const BIDIRECTIONAL: &str = "\
bidirectional(start, goal):
    forward = (queue: [start], seen: {start})
    backward = (queue: [goal], seen: {goal})
    while either queue not empty:
        for side in [forward, backward]:
            node = side.queue.pop_front()
            if node in side.other.seen: return join(node)
            for next in neighbors(node):
                if next not in side.seen:
                    side.seen.add(next); side.queue.push_back(next)
    return no path";

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::new("algorithm", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.id().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!(
            "A*".parse::<Algorithm>().unwrap_err().to_string(),
            "unknown algorithm: \u{201c}A*\u{201d}"
        );
    }

    #[test]
    fn frontier_kinds() {
        assert_eq!(Algorithm::BreadthFirst.frontier_kind(), FrontierKind::Queue);
        assert_eq!(
            Algorithm::IterativeDeepening.frontier_kind(),
            FrontierKind::Stack
        );
        assert_eq!(Algorithm::Greedy.frontier_kind(), FrontierKind::Priority);
        let cost_aware: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_cost_aware())
            .collect();
        assert_eq!(
            cost_aware,
            vec![
                Algorithm::UniformCost,
                Algorithm::Greedy,
                Algorithm::AStar,
                Algorithm::WeightedAStar
            ]
        );
    }

    #[test]
    fn catalog_flags() {
        assert!(Algorithm::AStar.info().optimal);
        assert!(!Algorithm::WeightedAStar.info().optimal);
        assert!(!Algorithm::DepthFirst.info().complete);
        assert!(Algorithm::ALL.iter().all(|a| !a.info().name.is_empty()));
    }

    #[test]
    fn pseudocode_names_each_algorithm() {
        for a in Algorithm::ALL {
            let code = a.info().pseudocode;
            let header = code.lines().next().unwrap();
            let name = a.id().replace('-', "_");
            assert!(header.starts_with(&name), "{a}: {header}");
            assert!(code.ends_with("return no path"), "{a}");
        }
        let weighted = Algorithm::WeightedAStar.info().pseudocode;
        assert!(weighted.contains("w * h(next)"));
        let greedy = Algorithm::Greedy.info().pseudocode;
        assert!(greedy.contains("open.push(next, h(next))"));
    }
}
