//! Error types for TuneGraph.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid entity kind: {0}")]
    InvalidKind(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
