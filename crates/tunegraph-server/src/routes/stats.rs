//! Stats and health routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tunegraph_graph::GraphStats;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/graph/stats", get(get_stats))
}

/// GET /api/health
async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "catalog": state.catalog.backend(),
        "childLimit": state.config.spotify.child_limit,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/graph/stats — node and edge counts.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<GraphStats> {
    Json(state.graph.read().stats())
}
