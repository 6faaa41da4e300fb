//! Aggregator - orchestrates one search across all providers
//!
//! Call order within a request:
//! 1. Spotify token
//! 2. Spotify search
//! 3. Concurrently: YouTube per candidate, Genius and recommendations for the top candidate
//!
//! Only steps 1 and 2 can fail the request.

use std::sync::Arc;

use super::placeholder::PlaceholderPolicy;
use super::result::SongResult;
use super::settle::{self, Settled};
use super::{AggregateError, SearchMode, SearchOptions, SearchOutput};
use crate::config::{Config, ConfigError};
use crate::providers::{
    GeniusClient, LyricsApi, LyricsExcerpt, MAX_RELATED_TRACKS, MediaApi, MediaStat,
    RecommendationApi, RelatedTrackRef, SpotifyClient, TokenApi, TrackCandidate, TrackSearchApi,
    YouTubeClient,
};

/// The provider clients an [`Aggregator`] talks to
#[derive(Clone)]
pub struct Providers {
    pub token: Arc<dyn TokenApi>,
    pub search: Arc<dyn TrackSearchApi>,
    pub recommendations: Arc<dyn RecommendationApi>,
    pub media: Arc<dyn MediaApi>,
    pub lyrics: Arc<dyn LyricsApi>,
}

impl Providers {
    /// Build the real HTTP clients from configuration.
    ///
    /// Fails when any credential is missing.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let credentials = config.credentials.require()?;
        let endpoints = &config.endpoints;

        let spotify = Arc::new(SpotifyClient::with_base_urls(
            credentials.spotify_client_id,
            credentials.spotify_client_secret,
            &endpoints.spotify_accounts,
            &endpoints.spotify_api,
        )?);
        let youtube =
            YouTubeClient::with_base_url(credentials.youtube_api_key, &endpoints.youtube_api)?;
        let genius =
            GeniusClient::with_base_url(credentials.genius_access_token, &endpoints.genius_api)?;

        Ok(Self {
            token: spotify.clone(),
            search: spotify.clone(),
            recommendations: spotify,
            media: Arc::new(youtube),
            lyrics: Arc::new(genius),
        })
    }
}

/// Song search aggregator
///
/// Holds no per-request state; share it behind an `Arc`.
pub struct Aggregator {
    providers: Providers,
    options: SearchOptions,
}

impl Aggregator {
    pub fn new(providers: Providers, options: SearchOptions) -> Self {
        Self { providers, options }
    }

    /// Build an aggregator with real clients and the configured options
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(Providers::from_config(config)?, config.search.options()))
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run one search
    pub async fn search(&self, query: &str) -> Result<SearchOutput, AggregateError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AggregateError::missing_query());
        }

        let limit = self.options.mode.search_limit();
        let timeout = self.options.provider_timeout;

        let credential = settle::bounded(timeout, self.providers.token.request_token())
            .await
            .map_err(AggregateError::auth)?;

        let mut candidates = settle::bounded(
            timeout,
            self.providers.search.search_tracks(query, &credential, limit),
        )
        .await
        .map_err(|e| AggregateError::Unexpected(format!("Spotify search failed: {}", e)))?;

        candidates.truncate(limit as usize);
        let Some(top) = candidates.first() else {
            tracing::info!(query, "No Spotify candidates");
            return Err(AggregateError::NotFound);
        };

        tracing::info!(query, candidates = candidates.len(), "Enriching search results");

        let lookup_queries: Vec<String> =
            candidates.iter().map(TrackCandidate::lookup_query).collect();
        let top_query = &lookup_queries[0];

        let (media, lyrics, related) = tokio::join!(
            settle::settle_all(
                "youtube",
                timeout,
                lookup_queries.iter().map(|q| self.providers.media.lookup(q)),
            ),
            settle::settle("genius", timeout, self.providers.lyrics.lookup(top_query)),
            settle::settle(
                "spotify-recommendations",
                timeout,
                self.providers.recommendations.recommendations(
                    &top.provider_id,
                    &credential,
                    MAX_RELATED_TRACKS,
                ),
            ),
        );

        let degraded = media.iter().filter(|m| m.is_failed()).count();
        if degraded > 0 {
            tracing::debug!(degraded, "Some media lookups returned nothing");
        }

        let results = assemble(
            candidates,
            media,
            lyrics.ok(),
            related.ok().unwrap_or_default(),
            self.options.placeholders,
        );

        match self.options.mode {
            SearchMode::Multi => Ok(SearchOutput::Multi(results)),
            SearchMode::Single => results
                .into_iter()
                .next()
                .map(SearchOutput::Single)
                .ok_or(AggregateError::NotFound),
        }
    }
}

/// Merge candidates with whatever the secondary providers returned.
///
/// `media` lines up with `candidates`; lyrics and related tracks belong to
/// the first candidate.
fn assemble(
    candidates: Vec<TrackCandidate>,
    media: Vec<Settled<MediaStat>>,
    lyrics: Option<LyricsExcerpt>,
    mut related: Vec<RelatedTrackRef>,
    placeholders: PlaceholderPolicy,
) -> Vec<SongResult> {
    related.truncate(MAX_RELATED_TRACKS);
    let mut top_extras = Some((lyrics, related));
    let mut rng = rand::rng();

    candidates
        .into_iter()
        .zip(media.into_iter().map(Settled::ok).chain(std::iter::repeat(None)))
        .map(|(candidate, media)| {
            let mut result = SongResult::from_candidate(candidate);
            result.media = media;
            if let Some((lyrics, related)) = top_extras.take() {
                result.lyrics = lyrics;
                result.related = related;
            }
            placeholders.fill(&mut result, &mut rng);
            result
        })
        .collect()
}
