use gridstep_core::{Grid, Point, Role};

use crate::algorithm::Algorithm;
use crate::error::ConfigError;
use crate::heuristic::Heuristic;

/// Depth limit used by depth-limited search unless configured otherwise.
pub const DEFAULT_DEPTH_LIMIT: usize = 20;

/// Largest accepted depth limit.
pub const MAX_DEPTH_LIMIT: usize = 1000;

/// Heuristic weight used by weighted A* unless configured otherwise.
pub const DEFAULT_WEIGHT: f64 = 1.5;

/// Iterative deepening gives up after this depth.
pub const MAX_ITERATIVE_DEPTH: usize = 50;

/// Search settings, fixed for the duration of one run.
///
/// `depth_limit` is only read by [`Algorithm::DepthLimited`] and `weight`
/// only by [`Algorithm::WeightedAStar`], but both are validated whatever
/// the algorithm.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
    pub diagonal: bool,
    pub depth_limit: usize,
    pub weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            heuristic: Heuristic::default(),
            diagonal: false,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            weight: DEFAULT_WEIGHT,
        }
    }
}

impl SearchConfig {
    /// Default settings for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Set the algorithm (builder).
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Allow or forbid diagonal moves (builder).
    pub fn with_diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    /// Set the depth-limited search cutoff (builder).
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Set the weighted A* heuristic weight (builder).
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Weight applied to the heuristic term of the priority. Only weighted
    /// A* scales it.
    #[inline]
    pub fn effective_weight(&self) -> f64 {
        match self.algorithm {
            Algorithm::WeightedAStar => self.weight,
            _ => 1.0,
        }
    }

    /// Check the numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH_LIMIT).contains(&self.depth_limit) {
            return Err(ConfigError::DepthLimit(self.depth_limit));
        }
        if !self.weight.is_finite() || self.weight < 1.0 {
            return Err(ConfigError::Weight(self.weight));
        }
        Ok(())
    }
}

/// Check that `grid` has a usable start and goal and return them.
pub fn endpoints(grid: &Grid) -> Result<(Point, Point), ConfigError> {
    let start = grid.start().ok_or(ConfigError::MissingStart)?;
    let goal = grid.goal().ok_or(ConfigError::MissingGoal)?;
    for (role, pos) in [(Role::Start, start), (Role::Goal, goal)] {
        if !grid.contains(pos) {
            return Err(ConfigError::OutOfBounds { role, pos });
        }
        if grid.is_blocked(pos) {
            return Err(ConfigError::Blocked { role, pos });
        }
    }
    if start == goal {
        return Err(ConfigError::StartIsGoal(start));
    }
    Ok((start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.algorithm, Algorithm::BreadthFirst);
        assert_eq!(cfg.heuristic, Heuristic::Manhattan);
        assert!(!cfg.diagonal);
        assert_eq!(cfg.depth_limit, 20);
        assert_eq!(cfg.weight, 1.5);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn numeric_ranges() {
        let cfg = SearchConfig::new(Algorithm::DepthLimited);
        assert_eq!(
            cfg.with_depth_limit(0).validate(),
            Err(ConfigError::DepthLimit(0))
        );
        assert_eq!(
            cfg.with_depth_limit(MAX_DEPTH_LIMIT + 1).validate(),
            Err(ConfigError::DepthLimit(MAX_DEPTH_LIMIT + 1))
        );
        assert_eq!(
            cfg.with_weight(0.5).validate(),
            Err(ConfigError::Weight(0.5))
        );
        assert!(cfg.with_weight(f64::NAN).validate().is_err());
        assert_eq!(cfg.with_weight(1.0).validate(), Ok(()));
    }

    #[test]
    fn weight_only_applies_to_weighted_astar() {
        let cfg = SearchConfig::new(Algorithm::AStar).with_weight(3.0);
        assert_eq!(cfg.effective_weight(), 1.0);
        assert_eq!(
            cfg.with_algorithm(Algorithm::WeightedAStar).effective_weight(),
            3.0
        );
    }

    #[test]
    fn endpoint_checks() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(endpoints(&grid), Err(ConfigError::MissingStart));
        grid.set_start(Point::new(0, 0));
        assert_eq!(endpoints(&grid), Err(ConfigError::MissingGoal));
        grid.set_goal(Point::new(0, 0));
        assert_eq!(
            endpoints(&grid),
            Err(ConfigError::StartIsGoal(Point::new(0, 0)))
        );
        grid.set_goal(Point::new(3, 0));
        assert_eq!(
            endpoints(&grid),
            Err(ConfigError::OutOfBounds {
                role: Role::Goal,
                pos: Point::new(3, 0)
            })
        );
        grid.set_goal(Point::new(2, 2));
        assert_eq!(endpoints(&grid), Ok((Point::new(0, 0), Point::new(2, 2))));
    }

    #[test]
    fn blocked_endpoint() {
        let mut grid = Grid::from_ascii("S#\n.G").unwrap();
        grid.set_blocked(Point::new(1, 0), false);
        grid.set_blocked(Point::new(0, 1), true);
        grid.set_start(Point::new(0, 1));
        assert_eq!(
            endpoints(&grid),
            Err(ConfigError::Blocked {
                role: Role::Start,
                pos: Point::new(0, 1)
            })
        );
    }
}
