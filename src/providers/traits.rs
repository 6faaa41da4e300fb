//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use crate::providers::traits::MediaApi;
//!
//! // In production code:
//! async fn views<T: MediaApi>(client: &T, query: &str) -> Option<u64> {
//!     client.lookup(query).await.ok()?.view_count
//! }
//!
//! // In tests:
//! struct MockMedia { ... }
//! impl MediaApi for MockMedia { ... }
//! ```

use async_trait::async_trait;

use super::domain::{
    Credential, LyricsExcerpt, MediaStat, ProviderError, RelatedTrackRef, TrackCandidate,
};

/// Issues bearer credentials for the primary provider.
#[async_trait]
pub trait TokenApi: Send + Sync {
    /// Request a fresh credential.
    async fn request_token(&self) -> Result<Credential, ProviderError>;
}

/// Track search on the primary provider.
#[async_trait]
pub trait TrackSearchApi: Send + Sync {
    /// Search tracks, best match first. Provider-side failures that should
    /// read as "no results" come back as an empty vector.
    async fn search_tracks(
        &self,
        query: &str,
        credential: &Credential,
        limit: u8,
    ) -> Result<Vec<TrackCandidate>, ProviderError>;
}

/// Related tracks for a seed track.
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    async fn recommendations(
        &self,
        track_id: &str,
        credential: &Credential,
        limit: usize,
    ) -> Result<Vec<RelatedTrackRef>, ProviderError>;
}

/// Video match plus view count for an "artist title" query.
#[async_trait]
pub trait MediaApi: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<MediaStat, ProviderError>;
}

/// Lyrics/description excerpt for an "artist title" query.
#[async_trait]
pub trait LyricsApi: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<LyricsExcerpt, ProviderError>;
}

// Implement traits for real clients

#[async_trait]
impl TokenApi for super::spotify::SpotifyClient {
    async fn request_token(&self) -> Result<Credential, ProviderError> {
        self.request_token().await
    }
}

#[async_trait]
impl TrackSearchApi for super::spotify::SpotifyClient {
    async fn search_tracks(
        &self,
        query: &str,
        credential: &Credential,
        limit: u8,
    ) -> Result<Vec<TrackCandidate>, ProviderError> {
        self.search_tracks(query, credential, limit).await
    }
}

#[async_trait]
impl RecommendationApi for super::spotify::SpotifyClient {
    async fn recommendations(
        &self,
        track_id: &str,
        credential: &Credential,
        limit: usize,
    ) -> Result<Vec<RelatedTrackRef>, ProviderError> {
        self.recommendations(track_id, credential, limit).await
    }
}

#[async_trait]
impl MediaApi for super::youtube::YouTubeClient {
    async fn lookup(&self, query: &str) -> Result<MediaStat, ProviderError> {
        self.lookup(query).await
    }
}

#[async_trait]
impl LyricsApi for super::genius::GeniusClient {
    async fn lookup(&self, query: &str) -> Result<LyricsExcerpt, ProviderError> {
        self.lookup(query).await
    }
}
