//! Transfer overhead estimate for reporting.
//!
//! Raw graph times ignore waiting and transfers. For display, each route
//! gets one extra minute for roughly every two and a half stations passed.
//! The correction is applied after ranking and never changes which station
//! wins.

use super::aggregate::{Route, Stats};
use crate::domain::{StationId, TravelTime};

/// Penalty in whole minutes for a path visiting `path_len` stations.
///
/// Equal to `floor((path_len - 1) / 2.5)`.
pub fn penalty(path_len: usize) -> u32 {
    let hops = path_len.saturating_sub(1);
    // floor(hops / 2.5) == floor(2 * hops / 5) for whole hop counts
    u32::try_from(hops * 2 / 5).unwrap_or(u32::MAX)
}

/// Corrected travel time: `raw + floor((path_len - 1) / 2.5)`.
///
/// Unreachable stays unreachable.
pub fn correct(raw: TravelTime, path_len: usize) -> TravelTime {
    raw.delayed_by(penalty(path_len))
}

/// One traveler's corrected time.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedRoute {
    /// Where the traveler starts.
    pub start: StationId,

    /// Shortest time from the graph.
    pub raw: TravelTime,

    /// Added minutes.
    pub penalty: u32,

    /// `raw` plus `penalty`.
    pub corrected: TravelTime,
}

/// Corrected times for every traveler heading to one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectedReport {
    /// Per-traveler corrections, in start order.
    pub routes: Vec<CorrectedRoute>,

    /// Statistics over the corrected times.
    pub stats: Stats,
}

impl CorrectedReport {
    /// Apply the correction to each route.
    pub fn from_routes(routes: &[Route]) -> Self {
        let routes: Vec<CorrectedRoute> = routes
            .iter()
            .map(|r| {
                let penalty = penalty(r.path.len());
                CorrectedRoute {
                    start: r.start.clone(),
                    raw: r.time,
                    penalty,
                    corrected: r.time.delayed_by(penalty),
                }
            })
            .collect();

        let corrected: Vec<TravelTime> = routes.iter().map(|r| r.corrected).collect();

        Self {
            stats: Stats::from_times(&corrected),
            routes,
        }
    }
}
