//! Genius API HTTP client
//!
//! Search for the best hit, then fetch the song record for its description.
//! The description is requested with `text_format=plain`; without it Genius
//! only returns the DOM tree.

use super::{adapter, dto};
use crate::providers::build_http_client;
use crate::providers::domain::{LyricsExcerpt, ProviderError};

pub const DEFAULT_API_URL: &str = "https://api.genius.com";

/// Genius API client
pub struct GeniusClient {
    http_client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl GeniusClient {
    /// Create a new client with a client access token
    pub fn new(access_token: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_base_url(access_token, DEFAULT_API_URL)
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: build_http_client()?,
            access_token: access_token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Find the best hit for a query and return its description excerpt
    pub async fn lookup(&self, query: &str) -> Result<LyricsExcerpt, ProviderError> {
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(query));
        let search: dto::SearchResponse = self.get_json(&url).await?;

        let song_id = adapter::best_hit_id(&search).ok_or(ProviderError::NoMatch)?;

        let url = format!("{}/songs/{}?text_format=plain", self.base_url, song_id);
        let song: dto::SongResponse = self.get_json(&url).await?;

        adapter::to_excerpt(&song).ok_or(ProviderError::NoMatch)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ProviderError> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::http(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}
