//! Transit graph model.
//!
//! The graph maps each station to its outgoing edges and is built once
//! from static input. After construction it is never mutated, so a single
//! `Arc<Graph>` can be read by any number of concurrent requests.

mod loader;

use std::collections::HashMap;

use crate::domain::{EdgeWeight, StationId};

pub use loader::{
    LoadError, NeighborRecord, StationRecord, graph_from_records, load_graph, parse_graph,
};

/// A directed edge to a neighboring station.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Station the edge leads to.
    pub to: StationId,

    /// Time to traverse the edge.
    pub weight: EdgeWeight,
}

impl Edge {
    /// Create a new edge.
    pub fn new(to: StationId, weight: EdgeWeight) -> Self {
        Self { to, weight }
    }
}

/// Immutable adjacency structure for the transit network.
///
/// Edges are not assumed to be symmetric. A neighbor that never appears as
/// a station key is simply unreachable.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Stations in order of first appearance; this is the enumeration order
    /// used for every deterministic tie-break.
    order: Vec<StationId>,

    /// Outgoing edges per station.
    adjacency: HashMap<StationId, Vec<Edge>>,
}

impl Graph {
    /// Build a graph from `(station, edges)` records.
    ///
    /// A station listed twice keeps its first position in the enumeration
    /// order, but its edges are replaced by the later record.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (StationId, Vec<Edge>)>,
    {
        let mut order = Vec::new();
        let mut adjacency = HashMap::new();

        for (station, edges) in records {
            if adjacency.insert(station.clone(), edges).is_none() {
                order.push(station);
            }
        }

        Self { order, adjacency }
    }

    /// Outgoing edges of a station.
    ///
    /// Returns an empty slice for unknown stations and for stations with
    /// no recorded neighbors.
    pub fn edges(&self, station: &str) -> &[Edge] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether a station is a key of the graph.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Stations in deterministic enumeration order.
    pub fn stations(&self) -> &[StationId] {
        &self.order
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Builder for creating graphs by hand.
///
/// Provides a fluent API, mostly for tests and small fixtures.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    records: Vec<(StationId, Vec<Edge>)>,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with its outgoing edges.
    ///
    /// Edges with an invalid weight are skipped.
    pub fn station(mut self, station: &str, neighbors: &[(&str, f64)]) -> Self {
        let edges = neighbors
            .iter()
            .filter_map(|(to, minutes)| {
                EdgeWeight::new(*minutes)
                    .ok()
                    .map(|weight| Edge::new(StationId::from(*to), weight))
            })
            .collect();
        self.records.push((StationId::from(station), edges));
        self
    }

    /// Add an edge in both directions, creating stations as needed.
    ///
    /// Stations keep the position of their first mention.
    pub fn link(mut self, a: &str, b: &str, minutes: f64) -> Self {
        let Ok(weight) = EdgeWeight::new(minutes) else {
            return self;
        };
        self.push_edge(a, b, weight);
        self.push_edge(b, a, weight);
        self
    }

    fn push_edge(&mut self, from: &str, to: &str, weight: EdgeWeight) {
        let edge = Edge::new(StationId::from(to), weight);
        match self.records.iter_mut().find(|(s, _)| s.as_str() == from) {
            Some((_, edges)) => edges.push(edge),
            None => self.records.push((StationId::from(from), vec![edge])),
        }
    }

    /// Build the graph.
    pub fn build(self) -> Graph {
        Graph::build(self.records)
    }
}
