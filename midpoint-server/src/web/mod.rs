//! Web layer for the midpoint engine.
//!
//! Provides HTTP endpoints for finding meeting stations and browsing the
//! loaded graph.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
