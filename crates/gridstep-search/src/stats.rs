use std::time::Duration;

use crate::session::SearchSession;

/// Snapshot of a search's counters.
///
/// `path_length` counts nodes including both endpoints; it and `path_cost`
/// stay zero until a path is found.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub visited_count: usize,
    pub frontier_size: usize,
    pub path_length: usize,
    pub path_cost: f64,
    pub elapsed_millis: u64,
}

impl Statistics {
    pub(crate) fn collect(session: &SearchSession, elapsed: Duration) -> Self {
        let (path_length, path_cost) = session
            .path()
            .map_or((0, 0.0), |path| (path.len(), path.cost));
        Self {
            visited_count: session.visited_count(),
            frontier_size: session.frontier_size(),
            path_length,
            path_cost,
            elapsed_millis: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
