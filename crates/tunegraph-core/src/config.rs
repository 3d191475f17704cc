//! Configuration loaded from the process environment.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Spotify caps album and track listings at 50 items per page.
pub const MAX_CHILD_LIMIT: u32 = 50;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Spotify Web API credentials and endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyConfig {
    /// OAuth client id (`CLIENT_ID`).
    #[serde(skip_serializing)]
    pub client_id: Option<String>,
    /// OAuth client secret (`CLIENT_SECRET`).
    #[serde(skip_serializing)]
    pub client_secret: Option<String>,
    /// Accounts service base URL, token endpoint lives under `/api/token`.
    pub accounts_url: String,
    /// Web API base URL including the version segment.
    pub api_url: String,
    /// Maximum number of albums or tracks fetched per parent entity.
    pub child_limit: u32,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl SpotifyConfig {
    /// Both halves of the client credentials, if configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            accounts_url: DEFAULT_ACCOUNTS_URL.into(),
            api_url: DEFAULT_API_URL.into(),
            child_limit: MAX_CHILD_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Top-level TuneGraph configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuneGraphConfig {
    /// HTTP server port.
    pub port: u16,
    /// Catalog access.
    pub spotify: SpotifyConfig,
}

impl TuneGraphConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// Unset or blank variables take their defaults; a value that is set
    /// but does not parse is an error.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let port = parse_var(&non_empty, "PORT")?.unwrap_or(DEFAULT_PORT);

        let child_limit = parse_var::<u32, _>(&non_empty, "TUNEGRAPH_CHILD_LIMIT")?
            .unwrap_or(MAX_CHILD_LIMIT);
        if !(1..=MAX_CHILD_LIMIT).contains(&child_limit) {
            return Err(Error::Config(format!(
                "TUNEGRAPH_CHILD_LIMIT must be between 1 and {}, got {}",
                MAX_CHILD_LIMIT, child_limit
            )));
        }

        let timeout_secs =
            parse_var(&non_empty, "TUNEGRAPH_HTTP_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let spotify = SpotifyConfig {
            client_id: non_empty("CLIENT_ID"),
            client_secret: non_empty("CLIENT_SECRET"),
            accounts_url: non_empty("SPOTIFY_ACCOUNTS_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_ACCOUNTS_URL.into()),
            api_url: non_empty("SPOTIFY_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.into()),
            child_limit,
            timeout_secs,
        };

        Ok(Self { port, spotify })
    }
}

/// Parse a variable if present.
fn parse_var<T, F>(var: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e| Error::Config(format!("{}={:?}: {}", key, raw, e)))
        })
        .transpose()
}

impl Default for TuneGraphConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            spotify: SpotifyConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<TuneGraphConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TuneGraphConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.spotify.api_url, DEFAULT_API_URL);
        assert_eq!(config.spotify.child_limit, MAX_CHILD_LIMIT);
        assert!(config.spotify.credentials().is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("CLIENT_ID", "id"),
            ("CLIENT_SECRET", "secret"),
            ("SPOTIFY_API_URL", "http://127.0.0.1:9000/v1/"),
            ("TUNEGRAPH_CHILD_LIMIT", "20"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.spotify.credentials(), Some(("id", "secret")));
        assert_eq!(config.spotify.api_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.spotify.child_limit, 20);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("CLIENT_ID", "  "), ("PORT", "")]).unwrap();
        assert!(config.spotify.client_id.is_none());
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_unparsable_port_is_config_error() {
        let err = config_from(&[("PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("PORT")));
    }

    #[test]
    fn test_child_limit_out_of_range_is_config_error() {
        for raw in ["500", "0", "many"] {
            let err = config_from(&[("TUNEGRAPH_CHILD_LIMIT", raw)]).unwrap_err();
            assert!(matches!(err, Error::Config(ref msg) if msg.contains("TUNEGRAPH_CHILD_LIMIT")));
        }
    }
}
