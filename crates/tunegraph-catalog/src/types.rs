//! Spotify Web API wire types (only the fields we read).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// `GET /search` response; only the section matching `type` is present.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub artists: Option<Page<ArtistObject>>,
    #[serde(default)]
    pub albums: Option<Page<SimpleObject>>,
    #[serde(default)]
    pub tracks: Option<Page<SimpleObject>>,
}

/// Paging object. Only the first page is ever read, so cursors are ignored.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
}

/// Album or track: we only need the identity.
#[derive(Debug, Deserialize)]
pub struct SimpleObject {
    pub id: String,
    pub name: String,
}
