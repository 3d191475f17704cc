//! Search routes — resolve a query and grow the graph.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::Deserialize;
use tunegraph_core::EntityKind;

use crate::error::ApiError;
use crate::ingest::{search_and_ingest, AddedCounts, SearchOutcome};
use crate::state::AppState;

/// `POST /search`, the form endpoint the front end posts to.
pub fn form_routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", post(search_artist_form))
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", post(search))
}

#[derive(Debug, Deserialize)]
pub struct ArtistSearchForm {
    pub artist_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_kind")]
    pub kind: EntityKind,
}

fn default_kind() -> EntityKind {
    EntityKind::Artist
}

/// POST /search — artist lookup from the HTML form.
///
/// A miss is reported in the body with status 200.
async fn search_artist_form(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ArtistSearchForm>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match search_and_ingest(&state, &form.artist_name, EntityKind::Artist).await? {
        SearchOutcome::Found { entity, .. } => Ok(Json(serde_json::json!({
            "name": entity.name,
            "id": entity.id,
            "genres": entity.genres,
            "popularity": entity.popularity,
        }))),
        SearchOutcome::NotFound(_) => Ok(Json(serde_json::json!({
            "error": "Artist not found",
        }))),
    }
}

/// POST /api/search — `{ "query": "...", "kind": "artist|album|song" }`.
async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match search_and_ingest(&state, &req.query, req.kind).await? {
        SearchOutcome::Found { entity, added } => Ok(Json(serde_json::json!({
            "entity": entity,
            "added": AddedCounts::from(added),
        }))),
        SearchOutcome::NotFound(kind) => {
            Err(ApiError::NotFound(format!("{} not found", kind.label())))
        }
    }
}
