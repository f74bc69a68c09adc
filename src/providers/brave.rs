//! Brave Search API provider — key-gated, header-authenticated web search.
//!
//! Unlike the other gated providers, Brave authenticates via the
//! `X-Subscription-Token` request header rather than a query parameter.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{SearchResult, SearchSource};
use serde::Deserialize;

const ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Brave Search adapter. Gated on [`SearchConfig::brave_api_key`].
pub struct BraveProvider;

#[derive(Debug, Deserialize)]
struct BraveResponse {
    web: Option<BraveWeb>,
}

#[derive(Debug, Deserialize)]
struct BraveWeb {
    #[serde(default)]
    results: Vec<BraveHit>,
}

#[derive(Debug, Deserialize)]
struct BraveHit {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: String,
    thumbnail: Option<BraveThumbnail>,
}

#[derive(Debug, Deserialize)]
struct BraveThumbnail {
    src: Option<String>,
}

impl SearchProvider for BraveProvider {
    async fn fetch_results(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let Some(token) = &config.brave_api_key else {
            return Err(SearchError::Unavailable(
                "Brave subscription token not configured".into(),
            ));
        };

        tracing::trace!(query, "Brave search");

        let client = http::build_client(config)?;
        let response = client
            .get(ENDPOINT)
            .query(&[("q", query)])
            .header("X-Subscription-Token", token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Brave request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Brave HTTP error: {e}")))?;

        let body: BraveResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(format!("Brave response decode failed: {e}")))?;

        Ok(map_response(body))
    }

    fn source(&self) -> SearchSource {
        SearchSource::Brave
    }
}

fn map_response(body: BraveResponse) -> Vec<SearchResult> {
    let hits = body.web.map(|w| w.results).unwrap_or_default();
    let results: Vec<SearchResult> = hits
        .into_iter()
        .map(|hit| SearchResult {
            title: hit.title,
            link: hit.url,
            snippet: hit.description,
            source: SearchSource::Brave,
            image: hit
                .thumbnail
                .and_then(|t| t.src)
                .filter(|u| !u.is_empty()),
            timestamp: None,
        })
        .collect();

    tracing::debug!(count = results.len(), "Brave results mapped");
    results
}
