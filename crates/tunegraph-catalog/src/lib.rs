//! TuneGraph Catalog — resolves free-text queries to catalog entities.
//!
//! The `CatalogLookup` trait abstracts over the music catalog.
//! Implementations:
//! - `SpotifyCatalog`: Spotify Web API with client-credentials auth
//! - `StaticCatalog`: in-memory fixtures for tests and offline runs

pub mod error;
pub mod fixture;
pub mod spotify;
pub mod types;

pub use error::CatalogError;
pub use fixture::StaticCatalog;
pub use spotify::SpotifyCatalog;

use std::sync::Arc;

use async_trait::async_trait;
use tunegraph_core::{Entity, EntityKind, SpotifyConfig};

/// Resolves a query to at most one canonical entity plus its children.
///
/// `Ok(None)` means the catalog had no match. Any failure talking to the
/// catalog, including while listing children, is an `Err`.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn resolve(&self, query: &str, kind: EntityKind) -> Result<Option<Entity>, CatalogError>;

    /// Short backend name for logs and status output.
    fn backend(&self) -> &'static str;
}

/// Create the Spotify-backed catalog from configuration.
pub fn create_catalog(config: &SpotifyConfig) -> Result<Arc<dyn CatalogLookup>, CatalogError> {
    let catalog = SpotifyCatalog::new(config.clone())?;
    if config.credentials().is_none() {
        tracing::warn!("CLIENT_ID/CLIENT_SECRET not set; catalog lookups will fail until configured");
    }
    Ok(Arc::new(catalog))
}
