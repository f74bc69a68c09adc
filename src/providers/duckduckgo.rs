//! DuckDuckGo Instant Answer provider — keyless community knowledge source.
//!
//! Uses the JSON API at `https://api.duckduckgo.com/` with `format=json`.
//! Related topics sometimes arrive as nested sub-topic groups; those are
//! flattened one level into individual results before mapping.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{SearchResult, SearchSource};
use serde::Deserialize;

const ENDPOINT: &str = "https://api.duckduckgo.com/";

/// DuckDuckGo Instant Answer adapter. Keyless — always available.
pub struct DuckDuckGoProvider;

#[derive(Debug, Deserialize)]
struct DdgResponse {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<DdgTopic>,
}

/// A related topic entry. Leaf entries carry `Text`/`FirstURL`; group
/// entries carry a nested `Topics` list instead.
#[derive(Debug, Deserialize)]
struct DdgTopic {
    #[serde(rename = "Text")]
    text: Option<String>,
    #[serde(rename = "FirstURL")]
    first_url: Option<String>,
    #[serde(rename = "Icon")]
    icon: Option<DdgIcon>,
    #[serde(rename = "Topics", default)]
    topics: Vec<DdgTopic>,
}

#[derive(Debug, Deserialize)]
struct DdgIcon {
    #[serde(rename = "URL")]
    url: Option<String>,
}

impl SearchProvider for DuckDuckGoProvider {
    async fn fetch_results(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");

        let client = http::build_client(config)?;
        let response = client
            .get(ENDPOINT)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("no_redirect", "1"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("DuckDuckGo request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("DuckDuckGo HTTP error: {e}")))?;

        let body: DdgResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(format!("DuckDuckGo response decode failed: {e}")))?;

        Ok(map_response(body))
    }

    fn source(&self) -> SearchSource {
        SearchSource::DuckDuckGo
    }
}

/// Flatten topic groups one level and map leaf entries to results.
///
/// Extracted as a separate function for testability with fixture JSON.
fn map_response(body: DdgResponse) -> Vec<SearchResult> {
    let leaves = body.related_topics.into_iter().flat_map(|topic| {
        if topic.topics.is_empty() {
            vec![topic]
        } else {
            topic.topics
        }
    });

    let results: Vec<SearchResult> = leaves
        .map(|topic| SearchResult {
            title: topic.text.clone().unwrap_or_default(),
            link: topic.first_url.unwrap_or_default(),
            // The Instant Answer API has no separate snippet; Text doubles as both.
            snippet: topic.text.unwrap_or_default(),
            source: SearchSource::DuckDuckGo,
            image: topic
                .icon
                .and_then(|icon| icon.url)
                .filter(|u| !u.is_empty()),
            timestamp: None,
        })
        .collect();

    tracing::debug!(count = results.len(), "DuckDuckGo results mapped");
    results
}
