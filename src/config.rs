//! Configuration system using TOML files.
//!
//! Config is read from the OS-standard config directory unless a path is
//! given on the command line:
//! - Windows: %APPDATA%\songscope\config.toml
//! - macOS: ~/Library/Application Support/songscope/config.toml
//! - Linux: ~/.config/songscope/config.toml
//!
//! Credentials may instead come from the environment (see `cli`). They are
//! checked once at startup; a missing one stops the process before any
//! request is served.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::aggregate::{PlaceholderPolicy, SearchMode, SearchOptions};
use crate::providers::{self, ProviderError};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider credentials
    pub credentials: Credentials,

    /// HTTP endpoint settings
    pub server: ServerConfig,

    /// Aggregation settings
    pub search: SearchConfig,

    /// Provider base URLs
    pub endpoints: EndpointConfig,
}

/// Provider credentials as read from file/env; any may be missing
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub spotify_client_id: Option<String>,
    pub spotify_client_secret: Option<String>,
    pub youtube_api_key: Option<String>,
    pub genius_access_token: Option<String>,
}

// Keep secrets out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn mask(value: &Option<String>) -> &'static str {
            if value.is_some() { "<set>" } else { "<missing>" }
        }
        f.debug_struct("Credentials")
            .field("spotify_client_id", &mask(&self.spotify_client_id))
            .field("spotify_client_secret", &mask(&self.spotify_client_secret))
            .field("youtube_api_key", &mask(&self.youtube_api_key))
            .field("genius_access_token", &mask(&self.genius_access_token))
            .finish()
    }
}

/// Every credential, guaranteed present
pub struct ServiceCredentials {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub youtube_api_key: String,
    pub genius_access_token: String,
}

impl Credentials {
    /// Check that every credential is set, naming all the missing ones
    pub fn require(&self) -> Result<ServiceCredentials, ConfigError> {
        let mut missing = Vec::new();
        let mut take = |value: &Option<String>, name: &'static str| -> String {
            match value.as_deref().map(str::trim) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let credentials = ServiceCredentials {
            spotify_client_id: take(&self.spotify_client_id, "spotify_client_id"),
            spotify_client_secret: take(&self.spotify_client_secret, "spotify_client_secret"),
            youtube_api_key: take(&self.youtube_api_key, "youtube_api_key"),
            genius_access_token: take(&self.genius_access_token, "genius_access_token"),
        };

        if missing.is_empty() {
            Ok(credentials)
        } else {
            Err(ConfigError::MissingCredentials(missing.join(", ")))
        }
    }

    /// Overlay values that are set in `other`
    pub fn merge(&mut self, other: Credentials) {
        if other.spotify_client_id.is_some() {
            self.spotify_client_id = other.spotify_client_id;
        }
        if other.spotify_client_secret.is_some() {
            self.spotify_client_secret = other.spotify_client_secret;
        }
        if other.youtube_api_key.is_some() {
            self.youtube_api_key = other.youtube_api_key;
        }
        if other.genius_access_token.is_some() {
            self.genius_access_token = other.genius_access_token;
        }
    }
}

/// HTTP endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8787)),
        }
    }
}

/// Aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// "multi" (up to ten results) or "single" (top result only)
    pub mode: SearchMode,

    /// Time limit for each provider call, in seconds
    pub provider_timeout_secs: u64,

    /// Fill genre / play count / chart position with marked synthetic values
    pub placeholders: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Multi,
            provider_timeout_secs: 5,
            placeholders: true,
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            mode: self.mode,
            provider_timeout: Duration::from_secs(self.provider_timeout_secs.max(1)),
            placeholders: PlaceholderPolicy::from_enabled(self.placeholders),
        }
    }
}

/// Provider base URLs, overridable for testing against fakes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub spotify_accounts: String,
    pub spotify_api: String,
    pub youtube_api: String,
    pub genius_api: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            spotify_accounts: providers::spotify::DEFAULT_ACCOUNTS_URL.to_string(),
            spotify_api: providers::spotify::DEFAULT_API_URL.to_string(),
            youtube_api: providers::youtube::DEFAULT_API_URL.to_string(),
            genius_api: providers::genius::DEFAULT_API_URL.to_string(),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("songscope"))
}

/// Get the full path to the default config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the given path, or the default location
///
/// Returns default config if the file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - credentials may still arrive via env.
pub fn load(path: Option<&Path>) -> Config {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => {
                tracing::warn!("Could not determine config directory, using defaults");
                return Config::default();
            }
        },
    };

    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match read(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::warn!("Using default configuration");
            Config::default()
        }
    }
}

/// Read and parse a config file, reporting any failure
pub fn read(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Failed to set up provider client: {0}")]
    Client(#[from] ProviderError),
}

// ============================================================================
// Tests
// ============================================================================
