//! Multi-source aggregation and candidate ranking.
//!
//! Runs the solver once per start, then scores every station of the graph
//! under two criteria:
//!
//! - **total**: smallest sum of travel times from all starts
//! - **balance**: smallest `stddev + mean`, favoring fairness over raw speed
//!
//! Stations unreachable from some start score `+∞` under both criteria.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use super::error::MidpointError;
use super::solver::{ShortestPaths, shortest_paths};
use crate::domain::{StationId, TravelTime};
use crate::graph::Graph;

/// Summary statistics over one travel time per start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Sum of the times.
    pub total: f64,

    /// Arithmetic mean.
    pub mean: f64,

    /// Population standard deviation.
    pub stddev: f64,
}

impl Stats {
    /// Compute statistics over a list of times.
    ///
    /// If any time is unreachable, every field is `+∞`. An empty list has
    /// all-zero statistics.
    pub fn from_times(times: &[TravelTime]) -> Self {
        if times.iter().any(|t| !t.is_reachable()) {
            return Self {
                total: f64::INFINITY,
                mean: f64::INFINITY,
                stddev: f64::INFINITY,
            };
        }
        if times.is_empty() {
            return Self {
                total: 0.0,
                mean: 0.0,
                stddev: 0.0,
            };
        }

        let n = times.len() as f64;
        let total: f64 = times.iter().map(TravelTime::minutes).sum();
        let mean = total / n;
        let variance = times
            .iter()
            .map(|t| (t.minutes() - mean).powi(2))
            .sum::<f64>()
            / n;

        Self {
            total,
            mean,
            stddev: variance.sqrt(),
        }
    }

    /// Combined fairness and speed score used by the balance criterion.
    pub fn balance_score(&self) -> f64 {
        self.stddev + self.mean
    }

    /// Returns true if every traveler can reach the station.
    pub fn is_feasible(&self) -> bool {
        self.total.is_finite()
    }
}

/// A station evaluated as a meeting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The station.
    pub station: StationId,

    /// Travel time from each start, in start order.
    pub times: Vec<TravelTime>,

    /// Statistics over `times`.
    pub stats: Stats,
}

impl Candidate {
    /// Score a station against a set of solver runs.
    pub fn score(station: &StationId, solutions: &[ShortestPaths]) -> Self {
        let times: Vec<TravelTime> = solutions
            .iter()
            .map(|s| s.time_to(station.as_str()))
            .collect();
        let stats = Stats::from_times(&times);

        Self {
            station: station.clone(),
            times,
            stats,
        }
    }
}

/// One traveler's way to a candidate station.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Where the traveler starts.
    pub start: StationId,

    /// Shortest travel time to the candidate.
    pub time: TravelTime,

    /// Stations visited, from the start to the candidate.
    pub path: Vec<StationId>,
}

/// Outcome of a midpoint evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    solutions: Vec<ShortestPaths>,
    by_total: Candidate,
    by_balance: Candidate,
}

impl Evaluation {
    /// Station with the smallest total travel time.
    pub fn by_total(&self) -> &Candidate {
        &self.by_total
    }

    /// Station with the smallest `stddev + mean`.
    pub fn by_balance(&self) -> &Candidate {
        &self.by_balance
    }

    /// Solver runs, one per start, in start order.
    pub fn solutions(&self) -> &[ShortestPaths] {
        &self.solutions
    }

    /// Returns false when no station is reachable from every start.
    ///
    /// In that case both candidates are arbitrary and must be reported as
    /// "no feasible midpoint".
    pub fn is_feasible(&self) -> bool {
        self.by_total.stats.is_feasible()
    }

    /// Route from each start to `candidate`, in start order.
    pub fn routes_to(&self, candidate: &Candidate) -> Vec<Route> {
        self.solutions
            .iter()
            .map(|s| Route {
                start: s.start().clone(),
                time: s.time_to(candidate.station.as_str()),
                path: s.path_to(&candidate.station),
            })
            .collect()
    }
}

/// Check that `starts` holds at least two distinct stations of the graph.
///
/// Runs before any traversal, so bad requests are rejected immediately.
pub fn validate_starts(graph: &Graph, starts: &[StationId]) -> Result<(), MidpointError> {
    let distinct: HashSet<&StationId> = starts.iter().collect();
    if distinct.len() < 2 {
        return Err(MidpointError::InsufficientStartPoints {
            distinct: distinct.len(),
        });
    }

    if let Some(unknown) = starts.iter().find(|s| !graph.contains(s.as_str())) {
        return Err(MidpointError::UnknownStartStation(unknown.clone()));
    }

    Ok(())
}

/// Find the best meeting stations for the given starts.
///
/// Repeated starts count as separate travelers, as long as at least two
/// distinct stations are given.
pub fn evaluate(graph: &Graph, starts: &[StationId]) -> Result<Evaluation, MidpointError> {
    evaluate_with_deadline(graph, starts, None)
}

/// Like [`evaluate`], but gives up between solver runs once `deadline`
/// has passed.
pub fn evaluate_with_deadline(
    graph: &Graph,
    starts: &[StationId],
    deadline: Option<Instant>,
) -> Result<Evaluation, MidpointError> {
    validate_starts(graph, starts)?;

    let mut solutions = Vec::with_capacity(starts.len());
    for start in starts {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(MidpointError::DeadlineExceeded {
                completed: solutions.len(),
                total: starts.len(),
            });
        }
        solutions.push(shortest_paths(graph, start)?);
    }

    aggregate(graph, solutions)
}

/// Rank every station of `graph` against finished solver runs.
///
/// This is the sequential reduction step; the runs themselves may have been
/// computed in parallel.
pub fn aggregate(graph: &Graph, solutions: Vec<ShortestPaths>) -> Result<Evaluation, MidpointError> {
    let starts: Vec<StationId> = solutions.iter().map(|s| s.start().clone()).collect();
    validate_starts(graph, &starts)?;

    // validate_starts guarantees every start, hence at least one station, is in the graph
    let [first, rest @ ..] = graph.stations() else {
        unreachable!("validated starts are stations of the graph");
    };
    let mut by_total = Candidate::score(first, &solutions);
    let mut by_balance = by_total.clone();

    for station in rest {
        let candidate = Candidate::score(station, &solutions);

        // Strict comparisons keep the first station on ties
        let better_total = candidate.stats.total < by_total.stats.total
            || (candidate.stats.total == by_total.stats.total
                && candidate.stats.stddev < by_total.stats.stddev);
        let better_balance = candidate.stats.balance_score() < by_balance.stats.balance_score();

        match (better_total, better_balance) {
            (true, true) => {
                by_total = candidate.clone();
                by_balance = candidate;
            }
            (true, false) => by_total = candidate,
            (false, true) => by_balance = candidate,
            (false, false) => {}
        }
    }

    debug!(
        starts = solutions.len(),
        stations = graph.len(),
        by_total = %by_total.station,
        total = by_total.stats.total,
        by_balance = %by_balance.station,
        balance = by_balance.stats.balance_score(),
        "Ranked midpoint candidates"
    );

    Ok(Evaluation {
        solutions,
        by_total,
        by_balance,
    })
}
