//! Path reconstruction from parent links.

use std::collections::HashMap;

use gridstep_core::{Classification, Grid, Point};

use crate::neighbors::hop_cost;

/// Parent links keyed by child coordinate.
pub type Parents = HashMap<Point, Point>;

/// A start-to-goal node sequence and its total movement cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub nodes: Vec<Point>,
    pub cost: f64,
}

impl Path {
    /// Build a path from an ordered node sequence, summing √2 per diagonal
    /// hop and 1 per orthogonal hop.
    pub fn from_nodes(nodes: Vec<Point>) -> Self {
        let cost = nodes.windows(2).map(|w| hop_cost(w[0], w[1])).sum();
        Self { nodes, cost }
    }

    /// Number of nodes, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reclassify every node as `Path`. Start and goal keep theirs.
    pub fn mark(&self, grid: &mut Grid) {
        for &p in &self.nodes {
            grid.classify(p, Classification::Path);
        }
    }
}

/// Follow `parents` back from `end` to the node without a parent, returning
/// the chain in walk order (`end` first).
fn chain(parents: &Parents, end: Point) -> Vec<Point> {
    let mut nodes = vec![end];
    let mut cur = end;
    while let Some(&parent) = parents.get(&cur) {
        nodes.push(parent);
        cur = parent;
    }
    nodes
}

/// Reconstruct the single-source path ending at `goal`.
pub fn reconstruct(parents: &Parents, goal: Point) -> Path {
    let mut nodes = chain(parents, goal);
    nodes.reverse();
    Path::from_nodes(nodes)
}

/// Stitch the two halves of a bidirectional search at `meeting`.
///
/// `from_start` links lead from the meeting node back to the start and
/// `from_goal` links lead on to the goal. The meeting node appears once.
pub fn stitch(from_start: &Parents, from_goal: &Parents, meeting: Point) -> Path {
    let mut nodes = chain(from_start, meeting);
    nodes.reverse();
    nodes.extend(chain(from_goal, meeting).into_iter().skip(1));
    Path::from_nodes(nodes)
}
