//! Catalog lookup errors.

use thiserror::Error;

/// Failure to talk to the catalog. Never used for "no match".
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog credentials are not configured")]
    MissingCredentials,

    #[error("Token exchange failed: {0}")]
    Auth(String),

    #[error("Catalog API error {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected catalog response: {0}")]
    Decode(String),
}
