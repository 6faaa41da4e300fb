//! Song search aggregation - the core of songscope.
//!
//! Given a free-text query, the [`Aggregator`]:
//! 1. Gets a Spotify token (fatal on failure)
//! 2. Searches Spotify for candidates (fatal when empty)
//! 3. Fans out YouTube lookups for every candidate, plus Genius and
//!    Spotify recommendations for the top one, and waits for all of them
//! 4. Merges everything into [`SongResult`]s in Spotify's relevance order
//!
//! Secondary provider failures only blank the affected fields.

mod placeholder;
mod result;
pub mod service;
pub mod settle;

pub use placeholder::PlaceholderPolicy;
pub use result::{Placeholder, SongResult};
pub use service::{Aggregator, Providers};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::providers::ProviderError;

/// Which of the two result shapes to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Top result only, returned as a single object
    Single,
    /// Up to ten results, returned as an array
    #[default]
    Multi,
}

impl SearchMode {
    /// How many candidates to request from the primary search
    pub fn search_limit(self) -> u8 {
        match self {
            SearchMode::Single => 1,
            SearchMode::Multi => 10,
        }
    }
}

/// Tunables for the aggregator
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub mode: SearchMode,
    /// Applied to every individual provider call
    pub provider_timeout: Duration,
    pub placeholders: PlaceholderPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            provider_timeout: Duration::from_secs(5),
            placeholders: PlaceholderPolicy::default(),
        }
    }
}

/// What a successful search returns, depending on [`SearchMode`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchOutput {
    Single(SongResult),
    Multi(Vec<SongResult>),
}

/// Errors that abort a search
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("{0}")]
    Validation(String),

    #[error("Spotify auth failed: {0}")]
    Auth(String),

    #[error("Song not found")]
    NotFound,

    #[error("{0}")]
    Unexpected(String),
}

impl AggregateError {
    pub fn missing_query() -> Self {
        Self::Validation("Query is required".to_string())
    }

    /// Map a token failure, keeping just the status code for HTTP errors
    pub fn auth(e: ProviderError) -> Self {
        match e {
            ProviderError::Http { status, .. } => Self::Auth(status.to_string()),
            other => Self::Auth(other.to_string()),
        }
    }
}
