//! HTTP route handlers.

use std::time::{Duration, Instant};

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::domain::StationId;
use crate::midpoint::{CorrectedReport, Evaluation, MidpointError, evaluate_concurrently};

use super::dto::*;
use super::state::AppState;

/// Default number of station search results.
const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Upper bound on station search results.
const MAX_SEARCH_LIMIT: usize = 200;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(search_stations))
        .route("/api/graph", get(graph_summary))
        .route("/midpoint", post(find_midpoint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Summary of the loaded graph.
async fn graph_summary(State(state): State<AppState>) -> Json<GraphSummaryResponse> {
    Json(GraphSummaryResponse::from_graph(
        &state.graph,
        state.loaded_at.to_rfc3339(),
    ))
}

/// Search stations by case-insensitive substring.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);
    let needle = req.q.trim().to_lowercase();

    let stations = state
        .graph
        .stations()
        .iter()
        .filter(|s| needle.is_empty() || s.as_str().to_lowercase().contains(&needle))
        .take(limit)
        .map(ToString::to_string)
        .collect();

    Json(StationSearchResponse { stations })
}

/// Find the best meeting station for a set of starts.
async fn find_midpoint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MidpointResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: MidpointRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(
            error = %e,
            body = %String::from_utf8_lossy(&body),
            "Invalid midpoint request JSON"
        );
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    if req.starts.len() > state.config.max_starts {
        return Err(AppError::BadRequest {
            message: format!(
                "too many start stations: {} (maximum {})",
                req.starts.len(),
                state.config.max_starts
            ),
        });
    }

    let starts: Vec<StationId> = req
        .starts
        .iter()
        .map(|s| StationId::from(s.as_str()))
        .collect();

    let deadline = req
        .deadline_ms
        .map(Duration::from_millis)
        .or_else(|| state.config.default_deadline())
        .map(|d| Instant::now() + d);

    let evaluation =
        evaluate_concurrently(state.graph.clone(), &starts, &state.config, deadline).await?;

    if !evaluation.is_feasible() {
        return Err(AppError::Unprocessable {
            message: "no feasible midpoint: no station is reachable from every start".to_string(),
        });
    }

    info!(
        starts = starts.len(),
        station = %evaluation.by_total().station,
        total = evaluation.by_total().stats.total,
        "Midpoint found"
    );

    Ok(Json(build_response(&evaluation, &req)))
}

/// Assemble the response body from a feasible evaluation.
fn build_response(evaluation: &Evaluation, req: &MidpointRequest) -> MidpointResponse {
    let by_total = evaluation.by_total();
    let total_routes = evaluation.routes_to(by_total);
    let total_report = req
        .correction
        .then(|| CorrectedReport::from_routes(&total_routes));

    let paths = total_routes
        .iter()
        .zip(PathResult::from_routes(&total_routes, total_report.as_ref()))
        .map(|(route, to_total)| TotalPathEntry {
            start: route.start.to_string(),
            to_total,
        })
        .collect();

    let (balance_optimized, balance_paths) = if req.balance {
        let by_balance = evaluation.by_balance();
        let routes = evaluation.routes_to(by_balance);
        let report = req.correction.then(|| CorrectedReport::from_routes(&routes));
        let entries = routes
            .iter()
            .zip(PathResult::from_routes(&routes, report.as_ref()))
            .map(|(route, to_balance)| BalancePathEntry {
                start: route.start.to_string(),
                to_balance,
            })
            .collect();
        (Some(CandidateResult::from_candidate(by_balance)), Some(entries))
    } else {
        (None, None)
    };

    MidpointResponse {
        total_optimized: CandidateResult::from_candidate(by_total),
        paths,
        balance_optimized,
        balance_paths,
        corrected_total: total_report
            .as_ref()
            .map(|r| CorrectedStatsResult::from_stats(&r.stats)),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    Timeout { message: String },
    Internal { message: String },
}

impl From<MidpointError> for AppError {
    fn from(e: MidpointError) -> Self {
        match e {
            MidpointError::InsufficientStartPoints { .. } | MidpointError::UnknownStartStation(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
            MidpointError::DeadlineExceeded { .. } => AppError::Timeout {
                message: e.to_string(),
            },
            MidpointError::Worker(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Timeout { message } => (StatusCode::GATEWAY_TIMEOUT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
