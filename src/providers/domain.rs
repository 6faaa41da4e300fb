//! Provider data as the aggregator sees it.
//!
//! Every client converts its API payloads into these types in its adapter,
//! so a provider changing its JSON only touches that provider's `dto.rs`.

use chrono::{DateTime, Utc};

/// Short-lived bearer credential for the primary provider
#[derive(Debug, Clone)]
pub struct Credential {
    /// Opaque access token
    pub token: String,
    /// When the token was issued to us
    pub obtained_at: DateTime<Utc>,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            obtained_at: Utc::now(),
        }
    }
}

/// A track returned by the primary provider's search, in relevance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCandidate {
    /// Provider track ID
    pub provider_id: String,
    pub title: String,
    /// Artist names in credit order
    pub artist_names: Vec<String>,
    pub album_name: String,
    /// Release date as reported (YYYY, YYYY-MM or YYYY-MM-DD)
    pub release_date: String,
    /// Cover images, largest first
    pub cover_image_urls: Vec<String>,
    /// Provider popularity, always within 0..=100
    pub popularity: u8,
    /// Link to the track on the provider's site
    pub external_url: String,
    /// 30 second preview clip
    pub preview_url: Option<String>,
}

impl TrackCandidate {
    /// Artist names joined for display ("A, B")
    pub fn artist_display(&self) -> String {
        self.artist_names.join(", ")
    }

    /// The "artist title" string used to query the secondary providers.
    ///
    /// Only the lead artist is used; featured artists tend to hurt matching.
    pub fn lookup_query(&self) -> String {
        match self.artist_names.first() {
            Some(artist) => format!("{} {}", artist, self.title),
            None => self.title.clone(),
        }
    }
}

/// Video match and its view count from the secondary provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStat {
    pub video_id: String,
    pub video_url: String,
    /// `None` when the statistic is missing or unparseable
    pub view_count: Option<u64>,
}

/// Truncated lyrics/description text from the tertiary provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsExcerpt {
    pub text: String,
    /// Whether the source was cut and the marker appended
    pub truncated: bool,
}

/// Maximum excerpt length before the marker is appended
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Appended to excerpts that were cut
pub const TRUNCATION_MARKER: &str = "...";

impl LyricsExcerpt {
    /// Build an excerpt from source text, cutting at [`EXCERPT_MAX_CHARS`] characters.
    ///
    /// Returns `None` for blank text. Counting is by `char`, so multi-byte
    /// text is never split inside a code point.
    pub fn from_text(source: &str) -> Option<Self> {
        let source = source.trim();
        if source.is_empty() {
            return None;
        }

        match source.char_indices().nth(EXCERPT_MAX_CHARS) {
            Some((cut, _)) => Some(Self {
                text: format!("{}{}", &source[..cut], TRUNCATION_MARKER),
                truncated: true,
            }),
            None => Some(Self {
                text: source.to_string(),
                truncated: false,
            }),
        }
    }
}

/// Related track reference from the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedTrackRef {
    pub provider_id: String,
    pub title: String,
    pub artist_names: Vec<String>,
    pub cover_image_url: Option<String>,
}

/// Upper bound on related tracks attached to a result
pub const MAX_RELATED_TRACKS: usize = 4;

/// Errors that can occur while talking to a provider
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Empty response body")]
    EmptyBody,

    #[error("No match found")]
    NoMatch,

    #[error("Timed out after {0} ms")]
    Timeout(u128),
}

impl ProviderError {
    /// Build an HTTP status error from a reqwest status code
    pub fn http(status: reqwest::StatusCode) -> Self {
        Self::Http {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Excerpts never exceed the limit plus the marker
        #[test]
        fn excerpt_is_bounded(input in "\\PC{1,400}") {
            if let Some(excerpt) = LyricsExcerpt::from_text(&input) {
                prop_assert!(
                    excerpt.text.chars().count() <= EXCERPT_MAX_CHARS + TRUNCATION_MARKER.len()
                );
            }
        }

        /// The marker is present exactly when the trimmed source was too long
        #[test]
        fn excerpt_marker_iff_truncated(input in "[a-zA-Zé日 ]{0,300}") {
            let trimmed = input.trim();
            match LyricsExcerpt::from_text(&input) {
                Some(excerpt) => {
                    let was_long = trimmed.chars().count() > EXCERPT_MAX_CHARS;
                    prop_assert_eq!(excerpt.truncated, was_long);
                    if was_long {
                        prop_assert!(excerpt.text.ends_with(TRUNCATION_MARKER));
                    } else {
                        prop_assert_eq!(excerpt.text.as_str(), trimmed);
                    }
                }
                None => prop_assert!(trimmed.is_empty()),
            }
        }
    }
}
