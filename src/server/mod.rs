//! HTTP boundary for the aggregator.
//!
//! `POST /` (or `/search-song`) with `{"query": "..."}` answers with the
//! aggregated result as JSON, or `{"error": "..."}` and status 400 for any
//! failure. Every response carries permissive CORS headers and any
//! `OPTIONS` request is answered directly, whatever the path.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::aggregate::{AggregateError, Aggregator};
use crate::error::{self, ResultExt};

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

#[derive(Clone)]
struct AppState {
    aggregator: Arc<Aggregator>,
}

/// Request body
#[derive(Debug, Deserialize)]
struct SearchRequest {
    #[serde(default)]
    query: Option<String>,
}

/// Error body
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Build the application router
pub fn router(aggregator: Arc<Aggregator>) -> Router {
    let routes = Router::new()
        .route("/", post(search_song))
        .route("/search-song", post(search_song))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(AppState { aggregator });

    // Wrapping the routes as a fallback lets the CORS layer see every request
    // before routing, so preflights never hit a 405.
    Router::new()
        .fallback_service(routes)
        .layer(middleware::from_fn(cors))
}

/// Serve until Ctrl-C
pub async fn serve(addr: SocketAddr, aggregator: Arc<Aggregator>) -> error::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(format!("binding {}", addr))?;
    let local = listener.local_addr()?;
    tracing::info!("Listening on http://{}", local);

    axum::serve(listener, router(aggregator))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context("serving HTTP")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

async fn cors(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        (StatusCode::OK, "ok").into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

async fn search_song(State(state): State<AppState>, body: Bytes) -> Response {
    let query = match parse_query(&body) {
        Ok(query) => query,
        Err(e) => return e.into_response(),
    };

    match state.aggregator.search(&query).await {
        Ok(output) => Json(output).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

fn parse_query(body: &[u8]) -> Result<String, AggregateError> {
    let invalid = |e: serde_json::Error| {
        AggregateError::Validation(format!("Invalid request body: {}", e))
    };

    // Serde would happily read a struct out of a JSON array
    let value: serde_json::Value = serde_json::from_slice(body).map_err(invalid)?;
    if !value.is_object() {
        return Err(AggregateError::Validation(
            "Invalid request body: expected a JSON object".to_string(),
        ));
    }
    let request: SearchRequest = serde_json::from_value(value).map_err(invalid)?;

    request
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(AggregateError::missing_query)
}

impl IntoResponse for AggregateError {
    fn into_response(self) -> Response {
        match &self {
            AggregateError::Validation(_) => tracing::warn!("Rejected request: {}", self),
            AggregateError::NotFound => tracing::info!("{}", self),
            AggregateError::Auth(_) | AggregateError::Unexpected(_) => {
                tracing::error!("Error: {}", self)
            }
        }

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::aggregate::{PlaceholderPolicy, Providers, SearchMode, SearchOptions};
    use crate::providers::traits::mocks::{MockLyrics, MockMedia, MockSpotify, Outcome};
    use crate::test_utils::{mock_candidate, mock_media};

    fn app_with(spotify: Arc<MockSpotify>, media: Arc<MockMedia>, mode: SearchMode) -> Router {
        let aggregator = Aggregator::new(
            Providers {
                token: spotify.clone(),
                search: spotify.clone(),
                recommendations: spotify,
                media,
                lyrics: Arc::new(MockLyrics::new()),
            },
            SearchOptions {
                mode,
                provider_timeout: Duration::from_millis(200),
                placeholders: PlaceholderPolicy::Off,
            },
        );
        router(Arc::new(aggregator))
    }

    fn post_json(uri: &str, body: &str) -> Request {
        http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
    }

    #[tokio::test]
    async fn test_preflight() {
        let spotify = Arc::new(MockSpotify::with_candidates(vec![]));
        let app = app_with(spotify.clone(), Arc::new(MockMedia::new()), SearchMode::Multi);

        for uri in ["/", "/search-song", "/anything"] {
            let response = app
                .clone()
                .oneshot(
                    http::Request::builder()
                        .method(Method::OPTIONS)
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_cors(&response);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&body[..], b"ok");
        }
        assert!(spotify.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_query_is_400_without_provider_calls() {
        let spotify = Arc::new(MockSpotify::with_candidates(vec![mock_candidate("a")]));
        let media = Arc::new(MockMedia::new());
        let app = app_with(spotify.clone(), media.clone(), SearchMode::Multi);

        for body in [r#"{"query": ""}"#, r#"{}"#, r#"{"query": "  "}"#] {
            let response = app.clone().oneshot(post_json("/", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_cors(&response);
            assert_eq!(body_json(response).await, json!({"error": "Query is required"}));
        }

        assert!(spotify.calls().is_empty());
        assert_eq!(media.call_count(), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let spotify = Arc::new(MockSpotify::with_candidates(vec![]));
        let app = app_with(spotify.clone(), Arc::new(MockMedia::new()), SearchMode::Multi);

        for raw in ["not json", r#"["song"]"#, r#""song""#, r#"{"query": 5}"#] {
            let response = app.clone().oneshot(post_json("/", raw)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{raw}");
            let body = body_json(response).await;
            assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
        }
        assert!(spotify.calls().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_is_400() {
        let spotify = Arc::new(MockSpotify::with_candidates(vec![]));
        let app = app_with(spotify, Arc::new(MockMedia::new()), SearchMode::Multi);

        let response = app
            .oneshot(post_json("/", r#"{"query": "zzzz"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_cors(&response);
        assert_eq!(body_json(response).await, json!({"error": "Song not found"}));
    }

    #[tokio::test]
    async fn test_auth_failure_is_400() {
        let spotify = Arc::new(MockSpotify::unauthorized());
        let app = app_with(spotify.clone(), Arc::new(MockMedia::new()), SearchMode::Multi);

        let response = app
            .oneshot(post_json("/search-song", r#"{"query": "song"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Spotify auth failed: 401"})
        );
        assert_eq!(spotify.call_count("search"), 0);
    }

    #[tokio::test]
    async fn test_multi_success_returns_array() {
        let spotify = Arc::new(MockSpotify::with_candidates(vec![
            mock_candidate("a"),
            mock_candidate("b"),
        ]));
        let media = Arc::new(
            MockMedia::new().on(
                &mock_candidate("a").lookup_query(),
                Outcome::Return(mock_media("va")),
            ),
        );
        let app = app_with(spotify, media, SearchMode::Multi);

        let response = app
            .oneshot(post_json("/", r#"{"query": "test"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = body_json(response).await;
        let results = body.as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["id"], "a");
        assert_eq!(results[0]["youtubeUrl"], "https://www.youtube.com/watch?v=va");
        assert!(results[1].get("youtubeUrl").is_none());
        assert_eq!(results[1]["title"], mock_candidate("b").title);
    }

    #[tokio::test]
    async fn test_single_success_returns_object() {
        let spotify = Arc::new(MockSpotify::with_candidates(vec![
            mock_candidate("a"),
            mock_candidate("b"),
        ]));
        let app = app_with(spotify, Arc::new(MockMedia::new()), SearchMode::Single);

        let response = app
            .oneshot(post_json("/", r#"{"query": "test"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.is_object());
        assert_eq!(body["id"], "a");
    }

    #[tokio::test]
    async fn test_health_and_unknown_route() {
        let app = app_with(
            Arc::new(MockSpotify::with_candidates(vec![])),
            Arc::new(MockMedia::new()),
            SearchMode::Multi,
        );

        let response = app
            .clone()
            .oneshot(http::Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);

        let response = app
            .oneshot(http::Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_cors(&response);
    }
}
