//! Search flow: resolve a query against the catalog and fold the result
//! into the shared graph.

use serde::Serialize;
use tracing::info;
use tunegraph_core::{Entity, EntityKind};
use tunegraph_graph::{BatchSummary, GraphAccumulator};

use crate::error::ApiError;
use crate::state::AppState;

/// Result of one search.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found { entity: Entity, added: BatchSummary },
    NotFound(EntityKind),
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AddedCounts {
    pub nodes: usize,
    pub edges: usize,
}

impl From<BatchSummary> for AddedCounts {
    fn from(summary: BatchSummary) -> Self {
        Self {
            nodes: summary.nodes_added,
            edges: summary.edges_added,
        }
    }
}

/// Register an entity and all of its children in one batch.
///
/// Every child gets an unweighted edge to the parent. Repeating the same
/// search adds parallel edges again while node payloads stay untouched.
pub fn ingest_entity(graph: &mut GraphAccumulator, entity: &Entity) -> BatchSummary {
    let nodes = std::iter::once((entity.id.as_str(), entity.name.as_str())).chain(
        entity
            .children
            .iter()
            .map(|child| (child.id.as_str(), child.name.as_str())),
    );
    let relationships = entity
        .children
        .iter()
        .map(|child| (entity.id.as_str(), child.id.as_str()));

    let summary = graph.add_data_with_relationships(nodes, relationships);
    info!(
        "Ingested {} {:?} ({}): {} new nodes, {} edges",
        entity.kind, entity.name, entity.id, summary.nodes_added, summary.edges_added
    );
    summary
}

/// Resolve `query` and ingest the match.
///
/// The catalog call runs without holding the graph lock.
pub async fn search_and_ingest(
    state: &AppState,
    query: &str,
    kind: EntityKind,
) -> Result<SearchOutcome, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::BadRequest("Query must not be empty".into()));
    }

    let Some(entity) = state.catalog.resolve(query, kind).await? else {
        return Ok(SearchOutcome::NotFound(kind));
    };

    let added = {
        let mut graph = state.graph.write();
        ingest_entity(&mut graph, &entity)
    };

    Ok(SearchOutcome::Found { entity, added })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunegraph_graph::Neighbor;

    fn radiohead() -> Entity {
        Entity::new("A1", "Radiohead", EntityKind::Artist).with_child("AL1", "OK Computer")
    }

    #[test]
    fn test_ingest_artist_with_album() {
        let mut graph = GraphAccumulator::new();
        let summary = ingest_entity(&mut graph, &radiohead());

        assert_eq!(summary, BatchSummary { nodes_added: 2, edges_added: 1 });
        assert_eq!(graph.get_node_data("A1"), Some("Radiohead"));
        assert_eq!(graph.get_node_data("AL1"), Some("OK Computer"));
        assert!(graph.get_neighbors("A1").contains(&Neighbor::new("AL1", None)));
        assert!(graph.get_neighbors("AL1").contains(&Neighbor::new("A1", None)));
    }

    #[test]
    fn test_repeat_ingest_adds_parallel_edges_only() {
        let mut graph = GraphAccumulator::new();
        ingest_entity(&mut graph, &radiohead());
        let again = ingest_entity(&mut graph, &radiohead());

        assert_eq!(again, BatchSummary { nodes_added: 0, edges_added: 1 });
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.get_neighbors("A1").len(), 2);
    }

    #[test]
    fn test_album_links_to_known_artist_graph() {
        let mut graph = GraphAccumulator::new();
        ingest_entity(&mut graph, &radiohead());

        let album = Entity::new("AL1", "OK Computer (renamed)", EntityKind::Album)
            .with_child("T1", "Airbag")
            .with_child("T2", "Paranoid Android");
        let summary = ingest_entity(&mut graph, &album);

        assert_eq!(summary, BatchSummary { nodes_added: 2, edges_added: 2 });
        assert_eq!(graph.get_node_data("AL1"), Some("OK Computer"));
        let ids: Vec<_> = graph.get_neighbors("AL1").into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["A1", "T1", "T2"]);
    }

    #[test]
    fn test_song_is_lone_node() {
        let mut graph = GraphAccumulator::new();
        let summary = ingest_entity(&mut graph, &Entity::new("T9", "Creep", EntityKind::Song));
        assert_eq!(summary, BatchSummary { nodes_added: 1, edges_added: 0 });
        assert!(graph.get_neighbors("T9").is_empty());
    }
}
