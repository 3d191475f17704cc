//! TuneGraph Core — error types, configuration, catalog entity model.

pub mod config;
pub mod entity;
pub mod error;

pub use config::{SpotifyConfig, TuneGraphConfig};
pub use entity::{ChildEntity, Entity, EntityKind};
pub use error::{Error, Result};
