//! TuneGraph Graph — accumulates catalog entities into an undirected multigraph.
//!
//! Nodes are keyed by the catalog's own identifiers and insert idempotently
//! (first write wins). Edges are undirected, optionally weighted and never
//! deduplicated. Edges naming an unknown endpoint are dropped silently.

pub mod accumulator;
pub mod export;
pub mod types;

pub use accumulator::GraphAccumulator;
pub use export::{ExportEdge, ExportNode, GraphExport};
pub use types::*;
