//! Bidirectional breadth-first search: one queue grows from the start, one
//! from the goal, and the search ends where they meet.

use std::collections::HashSet;

use gridstep_core::{Classification, Grid, Point};

use crate::frontier::Queue;
use crate::neighbors::Neighbors;
use crate::path::{self, Parents};
use crate::session::{Expansions, Progress};

/// One half of a bidirectional search.
#[derive(Debug, Clone)]
pub(crate) struct Side {
    queue: Queue<Point>,
    discovered: HashSet<Point>,
    parents: Parents,
    visited: Classification,
}

impl Side {
    fn new(root: Point, visited: Classification) -> Self {
        let mut queue = Queue::new();
        queue.push(root);
        Self {
            queue,
            discovered: HashSet::from([root]),
            parents: Parents::new(),
            visited,
        }
    }

    /// Expand the next queued node. Returns the node if the other side has
    /// already discovered it.
    fn expand(
        &mut self,
        other: &Side,
        grid: &mut Grid,
        neighbors: &mut Neighbors,
        expansions: &mut Expansions,
    ) -> Option<Point> {
        let cur = self.queue.pop()?;
        if other.discovered.contains(&cur) {
            return Some(cur);
        }
        grid.classify(cur, self.visited);
        expansions.record(cur);
        log::trace!("expand {cur} ({:?})", self.visited);

        for mv in neighbors.of(grid, cur) {
            if self.discovered.insert(mv.to) {
                self.parents.insert(mv.to, cur);
                self.queue.push(mv.to);
                if grid.classification(mv.to) == Classification::Unvisited {
                    grid.classify(mv.to, Classification::Frontier);
                }
            }
        }
        None
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Bidirectional {
    from_start: Side,
    from_goal: Side,
}

impl Bidirectional {
    pub(crate) fn new(start: Point, goal: Point) -> Self {
        Self {
            from_start: Side::new(start, Classification::VisitedFromStart),
            from_goal: Side::new(goal, Classification::VisitedFromGoal),
        }
    }

    /// Expand one node from the start side, then one from the goal side.
    pub(crate) fn step(
        &mut self,
        grid: &mut Grid,
        neighbors: &mut Neighbors,
        expansions: &mut Expansions,
    ) -> Progress {
        if self.from_start.queue.is_empty() && self.from_goal.queue.is_empty() {
            return Progress::Exhausted;
        }
        let met = match self
            .from_start
            .expand(&self.from_goal, grid, neighbors, expansions)
        {
            Some(meeting) => Some(meeting),
            None => self
                .from_goal
                .expand(&self.from_start, grid, neighbors, expansions),
        };
        match met {
            Some(meeting) => {
                log::debug!("bidirectional sides met at {meeting}");
                Progress::Found(path::stitch(
                    &self.from_start.parents,
                    &self.from_goal.parents,
                    meeting,
                ))
            }
            None => Progress::Continue,
        }
    }

    #[inline]
    pub(crate) fn frontier_len(&self) -> usize {
        self.from_start.queue.len() + self.from_goal.queue.len()
    }
}
