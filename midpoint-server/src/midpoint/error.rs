//! Midpoint engine error types.
//!
//! Only malformed requests are errors. Unreachable stations and
//! disconnected graphs are valid outputs and never show up here.

use crate::domain::StationId;

/// Errors returned by the midpoint engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MidpointError {
    /// Fewer than two distinct start stations were supplied
    #[error("at least 2 distinct start stations are required, got {distinct}")]
    InsufficientStartPoints { distinct: usize },

    /// A start station is not a station of the graph
    #[error("unknown start station: {0}")]
    UnknownStartStation(StationId),

    /// The caller's deadline passed between solver runs
    #[error("deadline exceeded after {completed} of {total} solver runs")]
    DeadlineExceeded { completed: usize, total: usize },

    /// A solver task died before producing a result
    #[error("solver task failed: {0}")]
    Worker(String),
}

impl MidpointError {
    /// Returns true for errors caused by the request itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MidpointError::InsufficientStartPoints { .. } | MidpointError::UnknownStartStation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MidpointError::InsufficientStartPoints { distinct: 1 };
        assert_eq!(
            err.to_string(),
            "at least 2 distinct start stations are required, got 1"
        );

        let err = MidpointError::UnknownStartStation(StationId::from("Z"));
        assert_eq!(err.to_string(), "unknown start station: Z");

        let err = MidpointError::DeadlineExceeded {
            completed: 1,
            total: 3,
        };
        assert_eq!(err.to_string(), "deadline exceeded after 1 of 3 solver runs");

        let err = MidpointError::Worker("panicked".into());
        assert_eq!(err.to_string(), "solver task failed: panicked");
    }

    #[test]
    fn client_errors() {
        assert!(MidpointError::InsufficientStartPoints { distinct: 0 }.is_client_error());
        assert!(MidpointError::UnknownStartStation(StationId::from("Z")).is_client_error());
        assert!(!MidpointError::Worker("panicked".into()).is_client_error());
        assert!(
            !MidpointError::DeadlineExceeded {
                completed: 0,
                total: 2
            }
            .is_client_error()
        );
    }
}
