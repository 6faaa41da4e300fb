//! The aggregated song record and its JSON contract.
//!
//! [`SongResult`] keeps provider data in domain types and wraps filler values
//! in [`Placeholder`]. Serialization flattens it into the camelCase shape the
//! display shell consumes and lists every placeholder field under
//! `syntheticFields`.

use serde::{Serialize, Serializer};

use crate::providers::{LyricsExcerpt, MediaStat, RelatedTrackRef, TrackCandidate};

/// A value that was synthesized, not read from any provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Placeholder<T>(T);

impl<T> Placeholder<T> {
    pub fn synthetic(value: T) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &T {
        &self.0
    }
}

/// One aggregated search result
#[derive(Debug, Clone, PartialEq)]
pub struct SongResult {
    pub candidate: TrackCandidate,
    pub media: Option<MediaStat>,
    pub lyrics: Option<LyricsExcerpt>,
    /// At most four, only ever filled on the top result
    pub related: Vec<RelatedTrackRef>,
    pub genre: Option<Placeholder<Vec<String>>>,
    pub spotify_plays: Option<Placeholder<u64>>,
    pub chart_position: Option<Placeholder<u8>>,
}

impl SongResult {
    /// A result carrying only the primary provider's data
    pub fn from_candidate(candidate: TrackCandidate) -> Self {
        Self {
            candidate,
            media: None,
            lyrics: None,
            related: Vec::new(),
            genre: None,
            spotify_plays: None,
            chart_position: None,
        }
    }

    /// JSON names of the fields holding synthetic values
    pub fn synthetic_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.genre.is_some() {
            fields.push("genre");
        }
        if self.spotify_plays.is_some() {
            fields.push("spotifyPlays");
        }
        if self.chart_position.is_some() {
            fields.push("chartPosition");
        }
        fields
    }
}

/// Wire shape of [`SongResult`]
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SongResultWire<'a> {
    id: &'a str,
    title: &'a str,
    artist: String,
    album: &'a str,
    release_date: &'a str,
    genre: &'a [String],
    popularity: u8,
    spotify_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    youtube_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spotify_plays: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    youtube_views: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    album_cover: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lyrics: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart_position: Option<u8>,
    related_songs: Vec<RelatedSongWire<'a>>,
    synthetic_fields: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RelatedSongWire<'a> {
    id: &'a str,
    title: &'a str,
    artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    album_cover: Option<&'a str>,
}

impl Serialize for SongResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let c = &self.candidate;
        SongResultWire {
            id: &c.provider_id,
            title: &c.title,
            artist: c.artist_display(),
            album: &c.album_name,
            release_date: &c.release_date,
            genre: self.genre.as_ref().map(|g| g.value().as_slice()).unwrap_or(&[]),
            popularity: c.popularity.min(100),
            spotify_url: &c.external_url,
            youtube_url: self.media.as_ref().map(|m| m.video_url.as_str()),
            spotify_plays: self.spotify_plays.map(|p| *p.value()),
            youtube_views: self.media.as_ref().and_then(|m| m.view_count),
            album_cover: c.cover_image_urls.first().map(String::as_str),
            preview: c.preview_url.as_deref(),
            lyrics: self.lyrics.as_ref().map(|l| l.text.as_str()),
            chart_position: self.chart_position.map(|p| *p.value()),
            related_songs: self
                .related
                .iter()
                .map(|r| RelatedSongWire {
                    id: &r.provider_id,
                    title: &r.title,
                    artist: r.artist_names.join(", "),
                    album_cover: r.cover_image_url.as_deref(),
                })
                .collect(),
            synthetic_fields: self.synthetic_fields(),
        }
        .serialize(serializer)
    }
}
