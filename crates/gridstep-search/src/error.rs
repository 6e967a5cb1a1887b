use std::fmt;

use gridstep_core::{Point, Role};

use crate::engine::EngineState;

/// Invalid search configuration, reported by
/// [`Engine::initialize`](crate::Engine::initialize) and never mid-run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid has no start.
    MissingStart,
    /// The grid has no goal.
    MissingGoal,
    /// An endpoint lies outside the grid.
    OutOfBounds { role: Role, pos: Point },
    /// An endpoint sits on a wall.
    Blocked { role: Role, pos: Point },
    /// Start and goal are the same cell.
    StartIsGoal(Point),
    /// Depth limit outside `1..=MAX_DEPTH_LIMIT`.
    DepthLimit(usize),
    /// Weight not finite or below 1.
    Weight(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell"),
            Self::MissingGoal => f.write_str("no goal cell"),
            Self::OutOfBounds { role, pos } => write!(f, "{role:?} {pos} is outside the grid"),
            Self::Blocked { role, pos } => write!(f, "{role:?} {pos} is blocked"),
            Self::StartIsGoal(pos) => write!(f, "start and goal coincide at {pos}"),
            Self::DepthLimit(limit) => write!(
                f,
                "depth limit {limit} out of range 1..={}",
                crate::config::MAX_DEPTH_LIMIT
            ),
            Self::Weight(w) => write!(f, "weight {w} must be finite and at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Misuse of the engine's start / step / pause / resume protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Initialization rejected the configuration.
    Config(ConfigError),
    /// `op` has no transition from `state`.
    InvalidTransition {
        op: &'static str,
        state: EngineState,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::InvalidTransition { op, state } => {
                write!(f, "cannot {op} while the engine is {state}")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::InvalidTransition { .. } => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// An unknown algorithm or heuristic identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: \u{201c}{}\u{201d}", self.kind, self.name)
    }
}

impl std::error::Error for ParseNameError {}
