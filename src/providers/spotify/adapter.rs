//! Adapter layer: Convert Spotify DTOs to domain models
//!
//! This is the ONLY place where Spotify DTO types are converted to domain types.

use std::cmp::Reverse;

use super::dto;
use crate::providers::domain::{MAX_RELATED_TRACKS, RelatedTrackRef, TrackCandidate};

/// Convert a search response into candidates, preserving Spotify's relevance order
pub fn to_candidates(response: dto::SearchResponse) -> Vec<TrackCandidate> {
    response
        .tracks
        .map(|page| page.items)
        .unwrap_or_default()
        .into_iter()
        .map(to_candidate)
        .collect()
}

/// Convert a single track into a candidate
pub fn to_candidate(track: dto::Track) -> TrackCandidate {
    let cover_image_urls = sorted_image_urls(track.album.images);
    let external_url = track
        .external_urls
        .spotify
        .unwrap_or_else(|| format!("https://open.spotify.com/track/{}", track.id));

    TrackCandidate {
        provider_id: track.id,
        title: track.name,
        artist_names: track.artists.into_iter().map(|a| a.name).collect(),
        album_name: track.album.name,
        release_date: track.album.release_date,
        cover_image_urls,
        popularity: clamp_popularity(track.popularity),
        external_url,
        preview_url: track.preview_url.filter(|url| !url.is_empty()),
    }
}

/// Convert a recommendations response into at most [`MAX_RELATED_TRACKS`] references
pub fn to_related(response: dto::RecommendationsResponse) -> Vec<RelatedTrackRef> {
    response
        .tracks
        .into_iter()
        .take(MAX_RELATED_TRACKS)
        .map(|track| {
            let images = sorted_image_urls(track.album.images);
            // Third image is the 64px thumbnail when Spotify returns the usual three sizes
            let cover_image_url = images.get(2).or_else(|| images.first()).cloned();

            RelatedTrackRef {
                provider_id: track.id,
                title: track.name,
                artist_names: track.artists.into_iter().map(|a| a.name).collect(),
                cover_image_url,
            }
        })
        .collect()
}

/// Order image URLs by descending width. Images with no width go last.
fn sorted_image_urls(mut images: Vec<dto::Image>) -> Vec<String> {
    images.sort_by_key(|img| Reverse(img.width.unwrap_or(0)));
    images.into_iter().map(|img| img.url).collect()
}

pub(crate) fn clamp_popularity(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}
