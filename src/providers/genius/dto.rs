//! Genius API Data Transfer Objects
//!
//! Every Genius response is wrapped in `{"meta": {...}, "response": {...}}`.
//! DO NOT use these types outside the genius module.
//!
//! API Reference: https://docs.genius.com

use serde::{Deserialize, Serialize};

/// `meta` block present on every response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Meta {
    pub status: u16,
    pub message: Option<String>,
}

/// `/search` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub meta: Option<Meta>,
    pub response: Option<SearchBody>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchBody {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Hit {
    /// Usually "song"
    #[serde(rename = "type")]
    pub hit_type: Option<String>,
    pub result: Option<HitResult>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HitResult {
    pub id: u64,
    pub title: Option<String>,
    pub full_title: Option<String>,
    pub url: Option<String>,
}

/// `/songs/:id` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongResponse {
    pub meta: Option<Meta>,
    pub response: Option<SongBody>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SongBody {
    pub song: Option<Song>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Song {
    pub id: u64,
    pub title: Option<String>,
    /// Only populated in the requested `text_format`
    pub description: Option<Description>,
}

/// Description in the formats requested via `text_format`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Description {
    pub plain: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
