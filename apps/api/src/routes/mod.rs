pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/agent", post(handlers::handle_generate))
        .route("/api/agent/csv", post(handlers::handle_export_csv))
        .with_state(state)
}
