//! Graph file loading.
//!
//! The graph is stored as a JSON array of station records:
//!
//! ```json
//! [
//!   { "station": "Yaksu_3", "neighbors": [{ "station": "Geumho_3", "time": 2 }] }
//! ]
//! ```
//!
//! Validation happens here rather than in [`Graph::build`], which never fails.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Edge, Graph};
use crate::domain::{EdgeWeight, InvalidWeight, StationId};

/// Errors that can occur when loading a graph file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid list of station records
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An edge has a negative or non-finite travel time
    #[error("edge {station} -> {neighbor}: {source}")]
    InvalidWeight {
        station: String,
        neighbor: String,
        #[source]
        source: InvalidWeight,
    },
}

/// One station and its outgoing connections, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    /// Station identifier.
    pub station: String,

    /// Directly connected stations.
    pub neighbors: Vec<NeighborRecord>,
}

/// A connection to a neighboring station, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborRecord {
    /// Neighbor station identifier.
    pub station: String,

    /// Traversal time in minutes.
    pub time: f64,
}

/// Build a graph from decoded records, validating every edge weight.
pub fn graph_from_records(records: Vec<StationRecord>) -> Result<Graph, LoadError> {
    let mut built = Vec::with_capacity(records.len());

    for record in records {
        let mut edges = Vec::with_capacity(record.neighbors.len());
        for neighbor in record.neighbors {
            let weight =
                EdgeWeight::new(neighbor.time).map_err(|source| LoadError::InvalidWeight {
                    station: record.station.clone(),
                    neighbor: neighbor.station.clone(),
                    source,
                })?;
            edges.push(Edge::new(StationId::from(neighbor.station), weight));
        }
        built.push((StationId::from(record.station), edges));
    }

    Ok(Graph::build(built))
}

/// Parse a graph from a JSON string.
pub fn parse_graph(json: &str) -> Result<Graph, LoadError> {
    let records: Vec<StationRecord> = serde_json::from_str(json)?;
    graph_from_records(records)
}

/// Load a graph from a JSON file.
pub fn load_graph(path: &Path) -> Result<Graph, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = parse_graph(&contents)?;

    debug!(
        path = %path.display(),
        stations = graph.len(),
        edges = graph.edge_count(),
        "Loaded graph file"
    );

    Ok(graph)
}
