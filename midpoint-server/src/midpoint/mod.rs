//! Transit midpoint engine.
//!
//! Given two or more start stations, this module answers: "which station
//! should everyone meet at?"
//!
//! Every start gets one shortest path search over the shared graph. Each
//! station is then scored by the travel times from all starts, and two
//! winners are picked: the one with the smallest total time, and the one
//! with the smallest `stddev + mean`. Routes to a winner are rebuilt from
//! the predecessor chains of the searches.

mod aggregate;
mod batch;
mod config;
mod correction;
mod error;
mod path;
mod queue;
mod report;
mod solver;

pub use aggregate::{
    Candidate, Evaluation, Route, Stats, aggregate, evaluate, evaluate_with_deadline,
    validate_starts,
};
pub use batch::{evaluate_concurrently, solve_concurrently};
pub use config::MidpointConfig;
pub use correction::{CorrectedReport, CorrectedRoute, correct, penalty};
pub use error::MidpointError;
pub use path::{Predecessors, reconstruct_path};
pub use queue::MinQueue;
pub use report::{render_candidate, render_evaluation};
pub use solver::{ShortestPaths, shortest_paths};
