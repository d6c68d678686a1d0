//! Application state for the web layer.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::graph::Graph;
use crate::midpoint::MidpointConfig;

/// Shared application state.
///
/// The graph is read-only after start-up, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Transit graph
    pub graph: Arc<Graph>,

    /// Midpoint request configuration
    pub config: Arc<MidpointConfig>,

    /// When the graph was loaded
    pub loaded_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new app state, stamped with the current time.
    pub fn new(graph: Graph, config: MidpointConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
            loaded_at: Utc::now(),
        }
    }
}
