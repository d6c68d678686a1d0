//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::midpoint::{Candidate, CorrectedReport, Route, Stats};

/// Request to find a meeting station.
#[derive(Debug, Deserialize)]
pub struct MidpointRequest {
    /// Start station identifiers, one per traveler
    pub starts: Vec<String>,

    /// Also return the balance-optimized station and its paths
    #[serde(default)]
    pub balance: bool,

    /// Attach transfer-corrected times to every path
    #[serde(default)]
    pub correction: bool,

    /// Per-request deadline in milliseconds (overrides the server default)
    pub deadline_ms: Option<u64>,
}

/// Summary of a chosen station.
#[derive(Debug, Serialize)]
pub struct CandidateResult {
    /// Station identifier
    pub station: String,

    /// Sum of travel times in minutes
    pub total: f64,

    /// Mean travel time in minutes
    pub avg: f64,

    /// Population standard deviation of travel times
    pub stddev: f64,
}

/// Transfer-corrected time for one path.
#[derive(Debug, Serialize)]
pub struct CorrectionResult {
    /// Added minutes
    pub penalty: u32,

    /// Raw time plus penalty
    pub time: f64,
}

/// One traveler's way to a chosen station.
#[derive(Debug, Serialize)]
pub struct PathResult {
    /// Shortest travel time in minutes
    pub time: f64,

    /// Stations from the start to the chosen station
    pub path: Vec<String>,

    /// Corrected time, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected: Option<CorrectionResult>,
}

/// Paths from one start to the total-optimized station.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPathEntry {
    /// Start station
    pub start: String,

    /// Path to the total-optimized station
    pub to_total: PathResult,
}

/// Paths from one start to the balance-optimized station.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancePathEntry {
    /// Start station
    pub start: String,

    /// Path to the balance-optimized station
    pub to_balance: PathResult,
}

/// Statistics over corrected times.
#[derive(Debug, Serialize)]
pub struct CorrectedStatsResult {
    /// Sum of corrected times
    pub total: f64,

    /// Mean corrected time
    pub avg: f64,

    /// Population standard deviation of corrected times
    pub stddev: f64,
}

/// Response for a midpoint request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MidpointResponse {
    /// Station with the smallest total travel time
    pub total_optimized: CandidateResult,

    /// Per-start paths to `total_optimized`
    pub paths: Vec<TotalPathEntry>,

    /// Station with the smallest stddev + mean, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_optimized: Option<CandidateResult>,

    /// Per-start paths to `balance_optimized`, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_paths: Option<Vec<BalancePathEntry>>,

    /// Corrected statistics for `total_optimized`, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_total: Option<CorrectedStatsResult>,
}

/// Request to search stations.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Substring to match (case-insensitive); empty lists all stations
    #[serde(default)]
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching station identifiers, in graph order
    pub stations: Vec<String>,
}

/// Summary of the loaded graph.
#[derive(Debug, Serialize)]
pub struct GraphSummaryResponse {
    /// Number of stations
    pub stations: usize,

    /// Number of directed edges
    pub edges: usize,

    /// When the graph was loaded (RFC 3339)
    pub loaded_at: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl CandidateResult {
    /// Create from a ranked candidate.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            station: candidate.station.to_string(),
            total: candidate.stats.total,
            avg: candidate.stats.mean,
            stddev: candidate.stats.stddev,
        }
    }
}

impl CorrectedStatsResult {
    /// Create from corrected statistics.
    pub fn from_stats(stats: &Stats) -> Self {
        Self {
            total: stats.total,
            avg: stats.mean,
            stddev: stats.stddev,
        }
    }
}

impl PathResult {
    /// Create path results for each route, optionally with corrections.
    pub fn from_routes(routes: &[Route], correction: Option<&CorrectedReport>) -> Vec<Self> {
        routes
            .iter()
            .enumerate()
            .map(|(i, route)| PathResult {
                time: route.time.minutes(),
                path: route.path.iter().map(ToString::to_string).collect(),
                corrected: correction
                    .and_then(|c| c.routes.get(i))
                    .map(|c| CorrectionResult {
                        penalty: c.penalty,
                        time: c.corrected.minutes(),
                    }),
            })
            .collect()
    }
}

impl GraphSummaryResponse {
    /// Create from a graph and its load time.
    pub fn from_graph(graph: &Graph, loaded_at: String) -> Self {
        Self {
            stations: graph.len(),
            edges: graph.edge_count(),
            loaded_at,
        }
    }
}
