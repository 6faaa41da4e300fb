//! Synthetic filler for fields no provider supplies.
//!
//! Genre, play count and chart position have no real source. When enabled,
//! they are drawn at random and wrapped in [`Placeholder`] so consumers can
//! tell them apart from provider data.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::result::{Placeholder, SongResult};

const GENRES: [&str; 5] = ["Pop", "Rock", "Hip-Hop", "Electronic", "Country"];
const MAX_SPOTIFY_PLAYS: u64 = 1_000_000_000;
const MAX_CHART_POSITION: u8 = 100;

/// Whether to fill placeholder fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderPolicy {
    /// Random values, marked synthetic
    #[default]
    Synthetic,
    /// Leave them absent
    Off,
}

impl PlaceholderPolicy {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Synthetic } else { Self::Off }
    }

    /// Fill the placeholder fields of `result` according to the policy
    pub fn fill<R: Rng>(self, result: &mut SongResult, rng: &mut R) {
        if self == Self::Off {
            return;
        }

        let genre = GENRES.choose(rng).copied().unwrap_or(GENRES[0]);
        result.genre = Some(Placeholder::synthetic(vec![genre.to_string()]));
        result.spotify_plays = Some(Placeholder::synthetic(rng.random_range(0..MAX_SPOTIFY_PLAYS)));
        result.chart_position =
            Some(Placeholder::synthetic(rng.random_range(1..=MAX_CHART_POSITION)));
    }
}
