//! Provider integrations - fetch song data from external services.
//!
//! # Architecture
//!
//! Same layering for every provider:
//! - **Domain models** (`domain.rs`) - Internal types shared by all providers
//! - **API DTOs** (`spotify/dto.rs`, `youtube/dto.rs`, `genius/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Traits** (`traits.rs`) - Seams the aggregator depends on, with mocks for tests
//!
//! Clients report every failure as a [`ProviderError`]. Deciding which
//! failures are fatal is the aggregator's job, not the client's.

pub mod domain;
pub mod genius;
pub mod spotify;
pub mod traits;
pub mod youtube;

pub use domain::{
    Credential, LyricsExcerpt, MAX_RELATED_TRACKS, MediaStat, ProviderError, RelatedTrackRef,
    TrackCandidate,
};
pub use genius::GeniusClient;
pub use spotify::SpotifyClient;
pub use traits::{LyricsApi, MediaApi, RecommendationApi, TokenApi, TrackSearchApi};
pub use youtube::YouTubeClient;

use std::time::Duration;

/// User agent sent to every provider
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Connection establishment limit; whole-call limits are applied by the aggregator
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the HTTP client shared by a provider's calls
///
/// The client is configured to:
/// - Accept gzip-compressed responses
/// - Send a User-Agent header identifying the application
pub(crate) fn build_http_client() -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .gzip(true)
        .user_agent(USER_AGENT)
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("songscope/"));
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }
}
