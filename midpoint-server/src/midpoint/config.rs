//! Configuration for midpoint requests.

use std::time::Duration;

/// Configuration parameters for midpoint evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct MidpointConfig {
    /// Maximum number of solver runs executed in parallel per request.
    /// The deadline is checked between batches.
    pub batch_size: usize,

    /// Deadline applied to requests that don't supply one (milliseconds).
    /// `None` means no deadline.
    pub default_deadline_ms: Option<u64>,

    /// Maximum number of start stations accepted per request.
    pub max_starts: usize,
}

impl MidpointConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(batch_size: usize, default_deadline_ms: Option<u64>, max_starts: usize) -> Self {
        Self {
            batch_size,
            default_deadline_ms,
            max_starts,
        }
    }

    /// Returns the default deadline as a Duration.
    pub fn default_deadline(&self) -> Option<Duration> {
        self.default_deadline_ms.map(Duration::from_millis)
    }
}

impl Default for MidpointConfig {
    fn default() -> Self {
        Self {
            batch_size: 4,
            default_deadline_ms: Some(2_000),
            max_starts: 16,
        }
    }
}
