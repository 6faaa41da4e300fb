//! Adapter layer: Convert Genius DTOs to domain models

use super::dto;
use crate::providers::domain::LyricsExcerpt;

/// Genius fills empty descriptions with a lone question mark
const EMPTY_DESCRIPTION: &str = "?";

/// The song ID of the best search hit
pub fn best_hit_id(response: &dto::SearchResponse) -> Option<u64> {
    response
        .response
        .as_ref()?
        .hits
        .iter()
        .find_map(|hit| hit.result.as_ref().map(|r| r.id))
}

/// Extract the excerpt from a song detail response
pub fn to_excerpt(response: &dto::SongResponse) -> Option<LyricsExcerpt> {
    let plain = response
        .response
        .as_ref()?
        .song
        .as_ref()?
        .description
        .as_ref()?
        .plain
        .as_deref()?;

    if plain.trim() == EMPTY_DESCRIPTION {
        return None;
    }
    LyricsExcerpt::from_text(plain)
}
