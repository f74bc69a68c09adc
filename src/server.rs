//! HTTP surface for the aggregation engine.
//!
//! Exposes `GET /search?q=...` for plain text queries, `POST /search` for
//! the image-augmented fused variant, and `GET /health`. Request validation
//! failures return 400, malformed POST bodies 500; provider failures never
//! surface here — they degrade to an empty contribution inside the engine.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::aggregator::search::aggregate;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::FusedResponse;

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    /// Validated search configuration, shared across requests.
    config: Arc<SearchConfig>,
}

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Body for `POST /search`.
#[derive(Debug, Deserialize)]
struct FuseRequest {
    query: Option<String>,
}

/// Build the application router for a validated configuration.
pub fn router(config: Arc<SearchConfig>) -> Router {
    Router::new()
        .route("/search", get(handle_search).post(handle_fuse))
        .route("/health", get(handle_health))
        .with_state(AppState { config })
}

/// The aggregation HTTP server.
///
/// Binds a TCP listener (use port `0` for auto-assign) and serves in a
/// background tokio task until dropped or [`SearchServer::shutdown`] is
/// called.
pub struct SearchServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl SearchServer {
    /// Start the server on `host:port`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid and
    /// [`SearchError::Http`] if the TCP listener cannot bind.
    pub async fn start(config: SearchConfig, host: &str, port: u16) -> Result<Self, SearchError> {
        config.validate()?;

        let app = router(Arc::new(config));
        let listener = TcpListener::bind((host, port))
            .await
            .map_err(|e| SearchError::Http(format!("server bind failed: {e}")))?;
        let addr = listener
            .local_addr()
            .map_err(|e| SearchError::Http(format!("failed to get local addr: {e}")))?;

        info!("search server listening on http://{addr}/search");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("search server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for SearchServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Extract a usable query string, rejecting missing or blank values.
fn validate_query(raw: Option<String>) -> Result<String, Response> {
    match raw.map(|q| q.trim().to_string()) {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing query" })),
        )
            .into_response()),
    }
}

/// `GET /search?q=...` — aggregate and return `{ warp, items }`.
async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match validate_query(params.q) {
        Ok(q) => q,
        Err(response) => return response,
    };

    let response = aggregate(&query, &state.config).await;
    (StatusCode::OK, Json(response)).into_response()
}

/// `POST /search` — image-augmented variant returning `{ warp, items, highlights }`.
async fn handle_fuse(
    State(state): State<AppState>,
    body: Result<Json<FuseRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": rejection.body_text() })),
            )
                .into_response();
        }
    };

    let query = match validate_query(request.query) {
        Ok(q) => q,
        Err(response) => return response,
    };

    let response = FusedResponse::from_aggregated(aggregate(&query, &state.config).await);
    (StatusCode::OK, Json(response)).into_response()
}

/// `GET /health` — liveness probe.
async fn handle_health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_config() -> SearchConfig {
        // Key-gated providers only, no credentials: every request settles
        // without a network call.
        SearchConfig {
            providers: vec![crate::types::SearchSource::Google],
            ..SearchConfig::new()
        }
    }

    async fn start_test_server() -> SearchServer {
        SearchServer::start(offline_config(), "127.0.0.1", 0)
            .await
            .expect("server should start")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_query_returns_400_without_invoking_adapters() {
        let server = start_test_server().await;
        let url = format!("http://{}/search", server.addr());

        let response = reqwest::get(&url).await.expect("request should succeed");
        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body, json!({ "error": "Missing query" }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn empty_query_returns_400() {
        let server = start_test_server().await;
        let url = format!("http://{}/search?q=", server.addr());

        let response = reqwest::get(&url).await.expect("request should succeed");
        assert_eq!(response.status(), 400);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn all_providers_unconfigured_returns_empty_200() {
        let server = start_test_server().await;
        let url = format!("http://{}/search?q=rust", server.addr());

        let response = reqwest::get(&url).await.expect("request should succeed");
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body, json!({ "warp": null, "items": [] }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_post_body_returns_500_with_error() {
        let server = start_test_server().await;
        let url = format!("http://{}/search", server.addr());

        let response = reqwest::Client::new()
            .post(&url)
            .header("Content-Type", "application/json")
            .body("{ not json")
            .send()
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert!(body.get("error").is_some());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn post_variant_returns_fused_shape() {
        let server = start_test_server().await;
        let url = format!("http://{}/search", server.addr());

        let response = reqwest::Client::new()
            .post(&url)
            .json(&json!({ "query": "rust" }))
            .send()
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body, json!({ "warp": null, "items": [], "highlights": [] }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn post_missing_query_returns_400() {
        let server = start_test_server().await;
        let url = format!("http://{}/search", server.addr());

        let response = reqwest::Client::new()
            .post(&url)
            .json(&json!({}))
            .send()
            .await
            .expect("request should succeed");
        assert_eq!(response.status(), 400);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn health_endpoint_responds() {
        let server = start_test_server().await;
        let url = format!("http://{}/health", server.addr());

        let response = reqwest::get(&url).await.expect("request should succeed");
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn invalid_config_rejected_at_startup() {
        let config = SearchConfig {
            providers: vec![],
            ..SearchConfig::new()
        };
        let result = SearchServer::start(config, "127.0.0.1", 0).await;
        assert!(matches!(result, Err(SearchError::Config(_))));
    }
}
