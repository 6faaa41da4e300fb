//! Test utilities and fixtures for songscope tests.
//!
//! Provides mock domain values with sensible defaults and a tiny fake
//! provider server for exercising the real HTTP clients.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{FakeResponse, spawn_fake_provider};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let base = spawn_fake_provider(vec![("/search", FakeResponse::json("{}"))]).await;
//!     let client = YouTubeClient::with_base_url("key", &base).unwrap();
//!     // ... test logic
//! }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::providers::{MediaStat, RelatedTrackRef, TrackCandidate};

/// Creates a mock TrackCandidate with sensible defaults.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let custom = TrackCandidate {
///     preview_url: None,
///     ..mock_candidate("t1")
/// };
/// ```
pub fn mock_candidate(id: &str) -> TrackCandidate {
    TrackCandidate {
        provider_id: id.to_string(),
        title: format!("Test Track {}", id),
        artist_names: vec!["Test Artist".to_string(), "Guest Artist".to_string()],
        album_name: "Test Album".to_string(),
        release_date: "2020-05-01".to_string(),
        cover_image_urls: vec![
            format!("https://i.scdn.co/image/{}-640", id),
            format!("https://i.scdn.co/image/{}-300", id),
            format!("https://i.scdn.co/image/{}-64", id),
        ],
        popularity: 50,
        external_url: format!("https://open.spotify.com/track/{}", id),
        preview_url: Some(format!("https://p.scdn.co/mp3-preview/{}", id)),
    }
}

/// Creates a mock MediaStat for the given video ID with 1000 views.
pub fn mock_media(video_id: &str) -> MediaStat {
    MediaStat {
        video_id: video_id.to_string(),
        video_url: format!("https://www.youtube.com/watch?v={}", video_id),
        view_count: Some(1000),
    }
}

/// Creates `count` related track references, IDs `r0`, `r1`, ...
pub fn mock_related(count: usize) -> Vec<RelatedTrackRef> {
    (0..count)
        .map(|i| RelatedTrackRef {
            provider_id: format!("r{}", i),
            title: format!("Related {}", i),
            artist_names: vec!["Related Artist".to_string()],
            cover_image_url: Some(format!("https://i.scdn.co/image/r{}-64", i)),
        })
        .collect()
}

/// Canned answer for one path of a fake provider
#[derive(Debug, Clone)]
pub struct FakeResponse {
    pub status: u16,
    pub body: String,
}

impl FakeResponse {
    /// 200 with a JSON body
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Arbitrary status with a body
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl IntoResponse for FakeResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// Serve canned responses keyed by request path on an ephemeral port.
///
/// Query strings and methods are ignored; unknown paths answer 404.
/// Returns the base URL, e.g. `http://127.0.0.1:40123`.
pub async fn spawn_fake_provider(routes: Vec<(&'static str, FakeResponse)>) -> String {
    let routes: Arc<HashMap<&'static str, FakeResponse>> = Arc::new(routes.into_iter().collect());

    let app = Router::new().fallback(move |uri: Uri| {
        let routes = routes.clone();
        async move {
            match routes.get(uri.path()) {
                Some(response) => response.clone().into_response(),
                None => FakeResponse::status(404, r#"{"error": "no route"}"#).into_response(),
            }
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake provider");
    let addr = listener.local_addr().expect("Fake provider has no address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_candidate_defaults() {
        let candidate = mock_candidate("t1");
        assert_eq!(candidate.provider_id, "t1");
        assert_eq!(candidate.artist_display(), "Test Artist, Guest Artist");
        assert_eq!(candidate.cover_image_urls.len(), 3);
        assert!(candidate.preview_url.is_some());
    }

    #[test]
    fn test_mock_related_ids() {
        let related = mock_related(3);
        let ids: Vec<_> = related.iter().map(|r| r.provider_id.as_str()).collect();
        assert_eq!(ids, ["r0", "r1", "r2"]);
    }

    #[tokio::test]
    async fn test_fake_provider_serves_routes() {
        let base = spawn_fake_provider(vec![
            ("/ok", FakeResponse::json(r#"{"hello": "world"}"#)),
            ("/fail", FakeResponse::status(503, "down")),
        ])
        .await;
        let client = reqwest::Client::new();

        let ok = client.get(format!("{}/ok?x=1", base)).send().await.unwrap();
        assert_eq!(ok.status().as_u16(), 200);
        assert_eq!(ok.text().await.unwrap(), r#"{"hello": "world"}"#);

        let fail = client.get(format!("{}/fail", base)).send().await.unwrap();
        assert_eq!(fail.status().as_u16(), 503);

        let missing = client.post(format!("{}/other", base)).send().await.unwrap();
        assert_eq!(missing.status().as_u16(), 404);
    }
}
