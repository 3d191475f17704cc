//! Graph read routes — full export and single-node lookup.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tunegraph_graph::{GraphExport, Neighbor};

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/graph", get(get_graph))
        .route("/graph/nodes/{id}", get(get_node))
}

#[derive(Debug, Serialize)]
pub struct NodeView {
    pub id: String,
    pub data: String,
    pub neighbors: Vec<Neighbor>,
}

/// GET /api/graph — every node plus every adjacency entry.
async fn get_graph(State(state): State<Arc<AppState>>) -> Json<GraphExport> {
    let export = state.graph.read().export();
    Json(export)
}

/// GET /api/graph/nodes/{id} — payload and adjacency list of one node.
async fn get_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NodeView>, ApiError> {
    let graph = state.graph.read();
    let Some(data) = graph.get_node_data(&id) else {
        return Err(ApiError::NotFound(format!("Node {} not found", id)));
    };

    Ok(Json(NodeView {
        data: data.to_string(),
        neighbors: graph.get_neighbors(&id),
        id,
    }))
}
