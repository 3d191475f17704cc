//! Shared application state.

use std::sync::Arc;

use parking_lot::RwLock;
use tunegraph_catalog::CatalogLookup;
use tunegraph_core::TuneGraphConfig;
use tunegraph_graph::GraphAccumulator;

/// Shared application state accessible from all route handlers.
///
/// Owns the one graph for the lifetime of the process. The accumulator has
/// no locking of its own, so every access goes through `graph`.
pub struct AppState {
    pub config: TuneGraphConfig,
    pub graph: RwLock<GraphAccumulator>,
    pub catalog: Arc<dyn CatalogLookup>,
}

impl AppState {
    pub fn new(config: TuneGraphConfig, catalog: Arc<dyn CatalogLookup>) -> Self {
        Self {
            config,
            graph: RwLock::new(GraphAccumulator::new()),
            catalog,
        }
    }
}
