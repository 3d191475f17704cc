//! In-memory catalog for tests and offline runs.

use async_trait::async_trait;
use tunegraph_core::{Entity, EntityKind};

use crate::error::CatalogError;
use crate::CatalogLookup;

/// Catalog backed by a fixed list of entities.
///
/// A query matches an entity of the requested kind whose name equals the
/// query case-insensitively; failing that, the first entity whose name
/// contains it.
pub struct StaticCatalog {
    entities: Vec<Entity>,
}

impl StaticCatalog {
    pub fn with_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    fn find(&self, query: &str, kind: EntityKind) -> Option<Entity> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let of_kind: Vec<&Entity> = self.entities.iter().filter(|e| e.kind == kind).collect();

        of_kind
            .iter()
            .find(|e| e.name.to_lowercase() == needle)
            .or_else(|| {
                of_kind
                    .iter()
                    .find(|e| e.name.to_lowercase().contains(&needle))
            })
            .map(|e| (*e).clone())
    }
}

#[async_trait]
impl CatalogLookup for StaticCatalog {
    async fn resolve(&self, query: &str, kind: EntityKind) -> Result<Option<Entity>, CatalogError> {
        Ok(self.find(query, kind))
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}
