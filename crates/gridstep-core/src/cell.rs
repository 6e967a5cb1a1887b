//! The [`Cell`] type: one grid position with its search scratch fields.

/// Whether a cell can be entered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Free,
    Blocked,
}

/// Endpoint role of a cell, derived from the grid's start and goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    None,
    Start,
    Goal,
}

/// Search progress of a cell, as reported to observers after each step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    #[default]
    Unvisited,
    /// Discovered and waiting in a frontier.
    Frontier,
    /// Expanded.
    Visited,
    /// Being expanded by the step in flight.
    Current,
    /// Part of the reconstructed path.
    Path,
    /// Expanded by the start side of a bidirectional search.
    VisitedFromStart,
    /// Expanded by the goal side of a bidirectional search.
    VisitedFromGoal,
}

/// A grid cell: occupancy, classification and search scratch.
///
/// For cost-driven searches `total_cost == cost_so_far + weight * heuristic`
/// whenever both terms are finite.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub occupancy: Occupancy,
    pub class: Classification,
    pub cost_so_far: f64,
    pub heuristic: f64,
    pub total_cost: f64,
}

impl Cell {
    /// A free cell with default scratch.
    pub const FREE: Self = Self {
        occupancy: Occupancy::Free,
        class: Classification::Unvisited,
        cost_so_far: f64::INFINITY,
        heuristic: 0.0,
        total_cost: f64::INFINITY,
    };

    /// A blocked cell with default scratch.
    pub const BLOCKED: Self = Self {
        occupancy: Occupancy::Blocked,
        ..Self::FREE
    };

    /// Set the occupancy (builder).
    #[inline]
    pub const fn with_occupancy(mut self, occupancy: Occupancy) -> Self {
        self.occupancy = occupancy;
        self
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.occupancy == Occupancy::Blocked
    }

    /// Restore scratch fields and classification, keeping occupancy.
    #[inline]
    pub fn clear_search(&mut self) {
        *self = Self::FREE.with_occupancy(self.occupancy);
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::FREE
    }
}
