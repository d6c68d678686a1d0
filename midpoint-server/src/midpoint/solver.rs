//! Single-source shortest paths.
//!
//! Classic Dijkstra over non-negative edge weights, backed by a binary heap.
//! Runs are pure functions of `(graph, start)`: they only read the shared
//! graph and write to their own distance table.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::error::MidpointError;
use super::path::{Predecessors, reconstruct_path};
use super::queue::MinQueue;
use crate::domain::{StationId, TravelTime};
use crate::graph::Graph;

/// Result of one solver run: distances and predecessors from a start.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: StationId,
    distances: HashMap<StationId, TravelTime>,
    predecessors: Predecessors,
}

impl ShortestPaths {
    /// The station this run started from.
    pub fn start(&self) -> &StationId {
        &self.start
    }

    /// Shortest travel time to a station.
    ///
    /// Unreachable and unknown stations report [`TravelTime::UNREACHABLE`].
    pub fn time_to(&self, station: &str) -> TravelTime {
        self.distances
            .get(station)
            .copied()
            .unwrap_or(TravelTime::UNREACHABLE)
    }

    /// Route from the start to `target`; `[target]` if never reached.
    pub fn path_to(&self, target: &StationId) -> Vec<StationId> {
        reconstruct_path(&self.predecessors, target)
    }

    /// The predecessor map of this run.
    pub fn predecessors(&self) -> &Predecessors {
        &self.predecessors
    }

    /// Number of stations with a finite distance, including the start.
    pub fn reached(&self) -> usize {
        self.distances.values().filter(|t| t.is_reachable()).count()
    }
}

/// Compute shortest travel times from `start` to every station.
///
/// Fails with [`MidpointError::UnknownStartStation`] if `start` is not a
/// key of the graph. Stations that cannot be reached keep an infinite
/// distance and no predecessor.
pub fn shortest_paths(graph: &Graph, start: &StationId) -> Result<ShortestPaths, MidpointError> {
    if !graph.contains(start.as_str()) {
        return Err(MidpointError::UnknownStartStation(start.clone()));
    }

    let mut distances: HashMap<StationId, TravelTime> = graph
        .stations()
        .iter()
        .map(|s| (s.clone(), TravelTime::UNREACHABLE))
        .collect();
    let mut predecessors = Predecessors::new();
    let mut visited: HashSet<StationId> = HashSet::with_capacity(graph.len());
    let mut queue = MinQueue::new();

    distances.insert(start.clone(), TravelTime::ZERO);
    queue.push(start.clone(), TravelTime::ZERO);

    while let Some((current, current_time)) = queue.pop_min() {
        if !visited.insert(current.clone()) {
            continue;
        }

        for edge in graph.edges(current.as_str()) {
            // Neighbors that are not graph keys stay unreachable
            let Some(best) = distances.get_mut(edge.to.as_str()) else {
                continue;
            };

            let candidate = current_time + edge.weight;
            if candidate < *best {
                *best = candidate;
                predecessors.set(edge.to.clone(), current.clone());
                queue.push(edge.to.clone(), candidate);
            }
        }
    }

    let result = ShortestPaths {
        start: start.clone(),
        distances,
        predecessors,
    };

    trace!(
        start = %start,
        reached = result.reached(),
        stations = graph.len(),
        "Solved shortest paths"
    );

    Ok(result)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::EdgeWeight;
    use crate::graph::Edge;
    use proptest::prelude::*;

    const NAMES: [&str; 6] = ["S0", "S1", "S2", "S3", "S4", "S5"];

    /// Strategy for small directed graphs over up to 6 stations with
    /// integer weights, so sums stay exact.
    fn graph_strategy() -> impl Strategy<Value = Graph> {
        (2usize..=6).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, 1u32..20), 0..(n * 3)).prop_map(move |raw| {
                let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); n];
                for (from, to, w) in raw {
                    adjacency[from].push(Edge::new(
                        StationId::from(NAMES[to]),
                        EdgeWeight::new(f64::from(w)).unwrap(),
                    ));
                }
                Graph::build(
                    adjacency
                        .into_iter()
                        .enumerate()
                        .map(|(i, edges)| (StationId::from(NAMES[i]), edges)),
                )
            })
        })
    }

    /// Minimum path cost over all simple paths, by exhaustive search.
    fn brute_force(graph: &Graph, from: &str, to: &str) -> Option<f64> {
        fn walk(
            graph: &Graph,
            at: &str,
            to: &str,
            seen: &mut Vec<String>,
            cost: f64,
            best: &mut Option<f64>,
        ) {
            if at == to {
                if best.is_none_or(|b| cost < b) {
                    *best = Some(cost);
                }
                return;
            }
            for edge in graph.edges(at) {
                let next = edge.to.as_str();
                if seen.iter().any(|s| s == next) {
                    continue;
                }
                seen.push(next.to_string());
                walk(graph, next, to, seen, cost + edge.weight.minutes(), best);
                seen.pop();
            }
        }

        let mut best = None;
        walk(graph, from, to, &mut vec![from.to_string()], 0.0, &mut best);
        best
    }

    proptest! {
        /// Reported distances equal the exhaustive minimum
        #[test]
        fn matches_brute_force(graph in graph_strategy()) {
            for start in graph.stations() {
                let result = shortest_paths(&graph, start).unwrap();
                for target in graph.stations() {
                    let expected = brute_force(&graph, start.as_str(), target.as_str());
                    prop_assert_eq!(result.time_to(target.as_str()).finite_minutes(), expected);
                }
            }
        }

        /// distance(b) <= distance(a) + weight(a, b) for every edge
        #[test]
        fn triangle_inequality(graph in graph_strategy()) {
            for start in graph.stations() {
                let result = shortest_paths(&graph, start).unwrap();
                for a in graph.stations() {
                    for edge in graph.edges(a.as_str()) {
                        let via = result.time_to(a.as_str()) + edge.weight;
                        prop_assert!(result.time_to(edge.to.as_str()) <= via);
                    }
                }
            }
        }

        /// Paths start at the start and end at the target, and their edge
        /// weights add up to the reported distance
        #[test]
        fn paths_are_consistent(graph in graph_strategy()) {
            for start in graph.stations() {
                let result = shortest_paths(&graph, start).unwrap();
                for target in graph.stations() {
                    let path = result.path_to(target);
                    prop_assert_eq!(path.last(), Some(target));

                    let time = result.time_to(target.as_str());
                    if !time.is_reachable() {
                        prop_assert_eq!(path.len(), 1);
                        continue;
                    }
                    prop_assert_eq!(path.first(), Some(start));

                    let mut total = 0.0;
                    for pair in path.windows(2) {
                        let step = graph
                            .edges(pair[0].as_str())
                            .iter()
                            .filter(|e| e.to == pair[1])
                            .map(|e| e.weight.minutes())
                            .fold(f64::INFINITY, f64::min);
                        total += step;
                    }
                    prop_assert_eq!(total, time.minutes());
                }
            }
        }
    }
}
