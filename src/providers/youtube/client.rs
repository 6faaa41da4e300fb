//! YouTube Data API v3 HTTP client
//!
//! Two sequential calls per lookup: `search` for the best matching video,
//! then `videos?part=statistics` for its view count.
//!
//! Each search costs 100 quota units, so a multi-result aggregation spends
//! up to 1000 units per request.

use super::{adapter, dto};
use crate::providers::build_http_client;
use crate::providers::domain::{MediaStat, ProviderError};

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// YouTube Data API client
pub struct YouTubeClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_base_url(api_key, DEFAULT_API_URL)
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: build_http_client()?,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Find the best matching video for a query and fetch its view count.
    ///
    /// Returns `Err(NoMatch)` when the search has no video hits.
    pub async fn lookup(&self, query: &str) -> Result<MediaStat, ProviderError> {
        let search = self.search_video(query).await?;
        let video_id = adapter::first_video_id(&search).ok_or(ProviderError::NoMatch)?;

        let stats = self.video_statistics(&video_id).await?;
        Ok(adapter::to_media_stat(video_id, &stats))
    }

    async fn search_video(&self, query: &str) -> Result<dto::SearchResponse, ProviderError> {
        let url = format!(
            "{}/search?part=snippet&type=video&maxResults=1&q={}&key={}",
            self.base_url,
            urlencoding::encode(query),
            urlencoding::encode(&self.api_key)
        );
        self.get_json(&url).await
    }

    async fn video_statistics(&self, video_id: &str) -> Result<dto::VideosResponse, ProviderError> {
        let url = format!(
            "{}/videos?part=statistics&id={}&key={}",
            self.base_url,
            urlencoding::encode(video_id),
            urlencoding::encode(&self.api_key)
        );
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, ProviderError> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Google wraps quota and key errors in a JSON envelope
            if let Ok(error) = response.json::<dto::ErrorResponse>().await {
                return Err(ProviderError::Http {
                    status: error.error.code,
                    message: error.error.message,
                });
            }
            return Err(ProviderError::http(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}
