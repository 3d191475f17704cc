//! TuneGraph server — search the catalog, grow the graph, serve it.

pub mod error;
pub mod ingest;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
