//! Adapter layer: Convert YouTube DTOs to domain models

use super::dto;
use crate::providers::domain::MediaStat;

/// Pick the first video ID out of a search response
pub fn first_video_id(response: &dto::SearchResponse) -> Option<String> {
    response
        .items
        .iter()
        .find_map(|item| item.id.video_id.clone())
        .filter(|id| !id.is_empty())
}

/// Build the watch page URL for a video
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Combine a matched video with its statistics response
pub fn to_media_stat(video_id: String, stats: &dto::VideosResponse) -> MediaStat {
    let view_count = stats
        .items
        .iter()
        .find(|v| v.id == video_id)
        .or_else(|| stats.items.first())
        .and_then(|v| v.statistics.as_ref())
        .and_then(|s| s.view_count.as_deref())
        .and_then(parse_count);

    MediaStat {
        video_url: watch_url(&video_id),
        video_id,
        view_count,
    }
}

/// Parse a decimal counter string. Anything unparseable is unknown, not zero.
pub fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
