//! Wikipedia search provider — keyless encyclopedia lookup.
//!
//! Uses the MediaWiki search API. The API returns article titles only; the
//! canonical article link is synthesized from the percent-encoded title,
//! not returned by the provider.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{SearchResult, SearchSource};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Wikipedia (MediaWiki) search adapter. Keyless — always available.
pub struct WikipediaProvider;

#[derive(Debug, Deserialize)]
struct WikiResponse {
    query: Option<WikiQuery>,
}

#[derive(Debug, Deserialize)]
struct WikiQuery {
    #[serde(default)]
    search: Vec<WikiHit>,
}

#[derive(Debug, Deserialize)]
struct WikiHit {
    title: String,
    #[serde(default)]
    snippet: String,
    timestamp: Option<DateTime<Utc>>,
}

impl SearchProvider for WikipediaProvider {
    async fn fetch_results(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "Wikipedia search");

        let client = http::build_client(config)?;
        let response = client
            .get(ENDPOINT)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Wikipedia request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Wikipedia HTTP error: {e}")))?;

        let body: WikiResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(format!("Wikipedia response decode failed: {e}")))?;

        Ok(map_response(body))
    }

    fn source(&self) -> SearchSource {
        SearchSource::Wikipedia
    }
}

fn map_response(body: WikiResponse) -> Vec<SearchResult> {
    let hits = body.query.map(|q| q.search).unwrap_or_default();
    let results: Vec<SearchResult> = hits
        .into_iter()
        .map(|hit| SearchResult {
            link: article_link(&hit.title),
            title: hit.title,
            snippet: strip_search_markup(&hit.snippet),
            source: SearchSource::Wikipedia,
            image: None,
            timestamp: hit.timestamp,
        })
        .collect();

    tracing::debug!(count = results.len(), "Wikipedia results mapped");
    results
}

/// Synthesize the canonical article URL from a title.
fn article_link(title: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{}", urlencoding::encode(title))
}

/// Remove the `<span class="searchmatch">` highlighting the API embeds in
/// snippets, leaving the plain excerpt text.
fn strip_search_markup(snippet: &str) -> String {
    snippet
        .replace(r#"<span class="searchmatch">"#, "")
        .replace("</span>", "")
}
