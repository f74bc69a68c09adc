//! Google Programmable Search (CSE) provider — key-gated web search.
//!
//! Requires an API key and an engine id, both sent as query parameters.
//! When either is missing the adapter self-reports unavailable without
//! touching the network.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{SearchResult, SearchSource};
use serde::Deserialize;

const ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Google CSE adapter. Gated on [`SearchConfig::google`].
pub struct GoogleProvider;

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    items: Vec<GoogleItem>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

impl SearchProvider for GoogleProvider {
    async fn fetch_results(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let Some(google) = &config.google else {
            return Err(SearchError::Unavailable(
                "Google CSE credentials not configured".into(),
            ));
        };

        tracing::trace!(query, "Google CSE search");

        let client = http::build_client(config)?;
        let response = client
            .get(ENDPOINT)
            .query(&[
                ("key", google.api_key.as_str()),
                ("cx", google.engine_id.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Google CSE request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Google CSE HTTP error: {e}")))?;

        let body: GoogleResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(format!("Google CSE response decode failed: {e}")))?;

        Ok(map_response(body))
    }

    fn source(&self) -> SearchSource {
        SearchSource::Google
    }
}

fn map_response(body: GoogleResponse) -> Vec<SearchResult> {
    let results: Vec<SearchResult> = body
        .items
        .into_iter()
        .map(|item| SearchResult {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
            source: SearchSource::Google,
            image: None,
            timestamp: None,
        })
        .collect();

    tracing::debug!(count = results.len(), "Google CSE results mapped");
    results
}
