//! Parallel solver runs for async callers.
//!
//! Each start is solved on tokio's blocking pool. Runs are launched in
//! batches of `batch_size` and joined before the next batch starts, so a
//! request deadline is honored between batches without interrupting a
//! running search.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use tracing::{debug, warn};

use super::aggregate::{Evaluation, aggregate, validate_starts};
use super::config::MidpointConfig;
use super::error::MidpointError;
use super::solver::{ShortestPaths, shortest_paths};
use crate::domain::StationId;
use crate::graph::Graph;

/// Solve every start concurrently, then rank candidates.
pub async fn evaluate_concurrently(
    graph: Arc<Graph>,
    starts: &[StationId],
    config: &MidpointConfig,
    deadline: Option<Instant>,
) -> Result<Evaluation, MidpointError> {
    let solutions = solve_concurrently(graph.clone(), starts, config, deadline).await?;
    aggregate(&graph, solutions)
}

/// Run the solver for each start on the blocking pool.
///
/// Results come back in start order. Start validation happens up front,
/// before any search is launched.
pub async fn solve_concurrently(
    graph: Arc<Graph>,
    starts: &[StationId],
    config: &MidpointConfig,
    deadline: Option<Instant>,
) -> Result<Vec<ShortestPaths>, MidpointError> {
    validate_starts(&graph, starts)?;

    let mut solutions = Vec::with_capacity(starts.len());

    for batch in starts.chunks(config.batch_size.max(1)) {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            debug!(
                completed = solutions.len(),
                total = starts.len(),
                "Deadline passed between solver batches"
            );
            return Err(MidpointError::DeadlineExceeded {
                completed: solutions.len(),
                total: starts.len(),
            });
        }

        let tasks: Vec<_> = batch
            .iter()
            .map(|start| {
                let graph = graph.clone();
                let start = start.clone();
                tokio::task::spawn_blocking(move || shortest_paths(&graph, &start))
            })
            .collect();

        for joined in join_all(tasks).await {
            match joined {
                Ok(result) => solutions.push(result?),
                Err(e) => {
                    warn!(error = %e, "Solver task failed");
                    return Err(MidpointError::Worker(e.to_string()));
                }
            }
        }
    }

    Ok(solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;
    use crate::midpoint::evaluate;
    use std::time::Duration;

    fn id(s: &str) -> StationId {
        StationId::from(s)
    }

    fn ids(names: &[&str]) -> Vec<StationId> {
        names.iter().map(|s| id(s)).collect()
    }

    fn line_graph() -> Arc<Graph> {
        Arc::new(
            GraphBuilder::new()
                .link("A", "B", 2.0)
                .link("B", "C", 3.0)
                .link("C", "D", 4.0)
                .link("D", "E", 5.0)
                .build(),
        )
    }

    #[tokio::test]
    async fn matches_sequential_evaluation() {
        let graph = line_graph();
        let starts = ids(&["A", "E", "C"]);
        let config = MidpointConfig::new(2, None, 16);

        let parallel = evaluate_concurrently(graph.clone(), &starts, &config, None)
            .await
            .unwrap();
        let sequential = evaluate(&graph, &starts).unwrap();

        assert_eq!(parallel.by_total(), sequential.by_total());
        assert_eq!(parallel.by_balance(), sequential.by_balance());
        assert_eq!(
            parallel.routes_to(parallel.by_total()),
            sequential.routes_to(sequential.by_total())
        );
    }

    #[tokio::test]
    async fn results_keep_start_order() {
        let starts = ids(&["E", "A", "D", "B"]);
        let config = MidpointConfig::new(3, None, 16);

        let solutions = solve_concurrently(line_graph(), &starts, &config, None)
            .await
            .unwrap();

        let order: Vec<_> = solutions.iter().map(|s| s.start().clone()).collect();
        assert_eq!(order, starts);
    }

    #[tokio::test]
    async fn zero_batch_size_still_runs() {
        let config = MidpointConfig::new(0, None, 16);
        let solutions = solve_concurrently(line_graph(), &ids(&["A", "B"]), &config, None)
            .await
            .unwrap();
        assert_eq!(solutions.len(), 2);
    }

    #[tokio::test]
    async fn rejects_bad_starts_before_solving() {
        let config = MidpointConfig::default();

        let err = solve_concurrently(line_graph(), &ids(&["A"]), &config, None)
            .await
            .unwrap_err();
        assert_eq!(err, MidpointError::InsufficientStartPoints { distinct: 1 });

        let err = solve_concurrently(line_graph(), &ids(&["A", "Q"]), &config, None)
            .await
            .unwrap_err();
        assert_eq!(err, MidpointError::UnknownStartStation(id("Q")));
    }

    #[tokio::test]
    async fn expired_deadline_aborts() {
        let config = MidpointConfig::new(1, None, 16);
        let past = Instant::now() - Duration::from_millis(1);

        let err = solve_concurrently(line_graph(), &ids(&["A", "E"]), &config, Some(past))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            MidpointError::DeadlineExceeded {
                completed: 0,
                total: 2
            }
        );
    }
}
