//! Spotify Web API catalog client.
//!
//! Authenticates with the client-credentials flow, searches for the top
//! match of a given type and lists the match's albums (artist) or tracks
//! (album).

use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use tunegraph_core::{ChildEntity, Entity, EntityKind, SpotifyConfig};

use crate::error::CatalogError;
use crate::types::{Page, SearchResponse, SimpleObject, TokenResponse};
use crate::CatalogLookup;

/// Refresh the token this long before Spotify says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Spotify-backed catalog lookup.
pub struct SpotifyCatalog {
    config: SpotifyConfig,
    client: Client,
    token: Mutex<Option<CachedToken>>,
}

impl SpotifyCatalog {
    pub fn new(config: SpotifyConfig) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: SpotifyConfig, client: Client) -> Self {
        Self {
            config,
            client,
            token: Mutex::new(None),
        }
    }

    fn cached_token(&self) -> Option<String> {
        self.token
            .lock()
            .as_ref()
            .filter(|cached| Instant::now() < cached.expires_at)
            .map(|cached| cached.access_token.clone())
    }

    /// Return a cached bearer token, exchanging credentials when it is stale.
    async fn access_token(&self) -> Result<String, CatalogError> {
        if let Some(token) = self.cached_token() {
            return Ok(token);
        }

        let (client_id, client_secret) = self
            .config
            .credentials()
            .ok_or(CatalogError::MissingCredentials)?;

        let url = format!("{}/api/token", self.config.accounts_url);
        debug!("Requesting client-credentials token from {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Spotify token exchange failed ({}): {}", status, body);
            return Err(CatalogError::Auth(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = decode(response).await?;
        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        info!("Obtained Spotify access token (expires in {}s)", token.expires_in);

        *self.token.lock() = Some(CachedToken {
            access_token: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });

        Ok(token.access_token)
    }

    /// Authenticated GET against the Web API.
    async fn api_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let token = self.access_token().await?;
        let url = format!("{}{}", self.config.api_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.token.lock().take();
            }
            let body = response.text().await.unwrap_or_default();
            warn!("Spotify API error on {} ({}): {}", path, status, body);
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        decode(response).await
    }

    async fn search(&self, query: &str, kind: EntityKind) -> Result<SearchResponse, CatalogError> {
        self.api_get(
            "/search",
            &[
                ("q", query.to_string()),
                ("type", search_type(kind).to_string()),
                ("limit", "1".to_string()),
            ],
        )
        .await
    }

    async fn children(&self, path: &str) -> Result<Vec<ChildEntity>, CatalogError> {
        let page: Page<SimpleObject> = self
            .api_get(path, &[("limit", self.config.child_limit.to_string())])
            .await?;
        Ok(page.items.into_iter().map(into_child).collect())
    }

    async fn resolve_artist(&self, query: &str) -> Result<Option<Entity>, CatalogError> {
        let Some(artist) = self
            .search(query, EntityKind::Artist)
            .await?
            .artists
            .and_then(|page| page.items.into_iter().next())
        else {
            return Ok(None);
        };

        let albums = self.children(&format!("/artists/{}/albums", artist.id)).await?;

        Ok(Some(Entity {
            id: artist.id,
            name: artist.name,
            kind: EntityKind::Artist,
            children: albums,
            genres: artist.genres,
            popularity: artist.popularity,
        }))
    }

    async fn resolve_album(&self, query: &str) -> Result<Option<Entity>, CatalogError> {
        let Some(album) = self
            .search(query, EntityKind::Album)
            .await?
            .albums
            .and_then(|page| page.items.into_iter().next())
        else {
            return Ok(None);
        };

        let tracks = self.children(&format!("/albums/{}/tracks", album.id)).await?;

        let mut entity = Entity::new(album.id, album.name, EntityKind::Album);
        entity.children = tracks;
        Ok(Some(entity))
    }

    async fn resolve_song(&self, query: &str) -> Result<Option<Entity>, CatalogError> {
        let track = self
            .search(query, EntityKind::Song)
            .await?
            .tracks
            .and_then(|page| page.items.into_iter().next());

        Ok(track.map(|t| Entity::new(t.id, t.name, EntityKind::Song)))
    }
}

#[async_trait]
impl CatalogLookup for SpotifyCatalog {
    async fn resolve(&self, query: &str, kind: EntityKind) -> Result<Option<Entity>, CatalogError> {
        let entity = match kind {
            EntityKind::Artist => self.resolve_artist(query).await?,
            EntityKind::Album => self.resolve_album(query).await?,
            EntityKind::Song => self.resolve_song(query).await?,
        };

        if entity.is_none() {
            info!("No {} matches query {:?}", kind, query);
        }
        Ok(entity)
    }

    fn backend(&self) -> &'static str {
        "spotify"
    }
}

/// Spotify's `type` parameter for an entity kind.
fn search_type(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Artist => "artist",
        EntityKind::Album => "album",
        EntityKind::Song => "track",
    }
}

fn into_child(item: SimpleObject) -> ChildEntity {
    ChildEntity {
        id: item.id,
        name: item.name,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, CatalogError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_type_mapping() {
        assert_eq!(search_type(EntityKind::Artist), "artist");
        assert_eq!(search_type(EntityKind::Album), "album");
        assert_eq!(search_type(EntityKind::Song), "track");
    }

    #[test]
    fn test_search_response_decoding() {
        let raw = r#"{
            "artists": {
                "href": "https://api.spotify.com/v1/search?query=radiohead",
                "items": [
                    {"id": "4Z8W4fKeB5YxbusRsdQVPb", "name": "Radiohead",
                     "genres": ["art rock", "alternative rock"], "popularity": 79,
                     "type": "artist"}
                ],
                "next": null
            }
        }"#;
        let parsed: SearchResponse = serde_json::from_str(raw).unwrap();
        let artist = parsed.artists.unwrap().items.into_iter().next().unwrap();
        assert_eq!(artist.name, "Radiohead");
        assert_eq!(artist.genres.len(), 2);
        assert_eq!(artist.popularity, Some(79));
        assert!(parsed.albums.is_none());
    }

    #[tokio::test]
    async fn test_missing_credentials_is_error() {
        let catalog = SpotifyCatalog::new(SpotifyConfig::default()).unwrap();
        let err = catalog
            .resolve("Radiohead", EntityKind::Artist)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::MissingCredentials));
    }
}
