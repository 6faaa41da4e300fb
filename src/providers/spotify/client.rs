//! Spotify Web API HTTP client
//!
//! Covers the three Spotify calls the aggregator needs:
//! - client-credentials token (accounts service)
//! - track search
//! - track recommendations
//!
//! See: https://developer.spotify.com/documentation/web-api

use super::{adapter, dto};
use crate::providers::build_http_client;
use crate::providers::domain::{Credential, ProviderError, RelatedTrackRef, TrackCandidate};

pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Spotify API client
pub struct SpotifyClient {
    http_client: reqwest::Client,
    client_id: String,
    client_secret: String,
    accounts_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Create a client against the public Spotify endpoints
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Self::with_base_urls(client_id, client_secret, DEFAULT_ACCOUNTS_URL, DEFAULT_API_URL)
    }

    /// Create a client with custom accounts and API base URLs
    pub fn with_base_urls(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        accounts_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: build_http_client()?,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            accounts_url: trim_base(accounts_url.into()),
            api_url: trim_base(api_url.into()),
        })
    }

    /// Obtain a bearer token with the client-credentials grant
    pub async fn request_token(&self) -> Result<Credential, ProviderError> {
        let url = format!("{}/api/token", self.accounts_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::http(status));
        }

        let token = response.json::<dto::TokenResponse>().await?;
        tracing::debug!(expires_in = ?token.expires_in, "Obtained Spotify token");
        Ok(Credential::new(token.access_token))
    }

    /// Search tracks, returning candidates in Spotify's relevance order.
    ///
    /// A non-success status is logged and reported as no candidates.
    pub async fn search_tracks(
        &self,
        query: &str,
        credential: &Credential,
        limit: u8,
    ) -> Result<Vec<TrackCandidate>, ProviderError> {
        let url = format!(
            "{}/search?q={}&type=track&limit={}",
            self.api_url,
            urlencoding::encode(query),
            limit
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&credential.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Spotify search failed: {}", status);
            return Ok(Vec::new());
        }

        let search = response.json::<dto::SearchResponse>().await?;
        Ok(adapter::to_candidates(search))
    }

    /// Fetch tracks related to a seed track
    pub async fn recommendations(
        &self,
        track_id: &str,
        credential: &Credential,
        limit: usize,
    ) -> Result<Vec<RelatedTrackRef>, ProviderError> {
        let url = format!(
            "{}/recommendations?seed_tracks={}&limit={}",
            self.api_url,
            urlencoding::encode(track_id),
            limit
        );

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&credential.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::http(status));
        }

        // The endpoint has been seen answering 200 with no body
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(ProviderError::EmptyBody);
        }

        let parsed: dto::RecommendationsResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;

        let mut related = adapter::to_related(parsed);
        related.truncate(limit);
        Ok(related)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
