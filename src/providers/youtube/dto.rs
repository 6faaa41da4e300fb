//! YouTube Data API v3 Data Transfer Objects
//!
//! These types match what the YouTube Data API returns for the `search`
//! and `videos` endpoints. DO NOT use these types outside the youtube module.
//!
//! API Reference: https://developers.google.com/youtube/v3/docs

use serde::{Deserialize, Serialize};

/// `search.list` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    pub id: ResourceId,
}

/// Identifies what a search hit points at. `videoId` is only set for videos.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}

/// `videos.list?part=statistics` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideosResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Video {
    pub id: String,
    pub statistics: Option<Statistics>,
}

/// Counters are returned as decimal strings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

/// Google API error envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
