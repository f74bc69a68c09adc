//! NewsAPI provider — key-gated news article search.
//!
//! Queries the `everything` endpoint. Articles carry a thumbnail
//! (`urlToImage`) and a publication timestamp, both mapped into the
//! optional result fields.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{SearchResult, SearchSource};
use chrono::{DateTime, Utc};
use serde::Deserialize;

const ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// NewsAPI adapter. Gated on [`SearchConfig::news_api_key`].
pub struct NewsProvider;

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

#[derive(Debug, Deserialize)]
struct NewsArticle {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<DateTime<Utc>>,
}

impl SearchProvider for NewsProvider {
    async fn fetch_results(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let Some(api_key) = &config.news_api_key else {
            return Err(SearchError::Unavailable("NewsAPI key not configured".into()));
        };

        tracing::trace!(query, "NewsAPI search");

        let client = http::build_client(config)?;
        let response = client
            .get(ENDPOINT)
            .query(&[("q", query), ("apiKey", api_key.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("NewsAPI request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("NewsAPI HTTP error: {e}")))?;

        let body: NewsResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(format!("NewsAPI response decode failed: {e}")))?;

        Ok(map_response(body))
    }

    fn source(&self) -> SearchSource {
        SearchSource::News
    }
}

fn map_response(body: NewsResponse) -> Vec<SearchResult> {
    let results: Vec<SearchResult> = body
        .articles
        .into_iter()
        .map(|article| SearchResult {
            title: article.title.unwrap_or_default(),
            link: article.url.unwrap_or_default(),
            snippet: article.description.unwrap_or_default(),
            source: SearchSource::News,
            image: article.url_to_image.filter(|u| !u.is_empty()),
            timestamp: article.published_at,
        })
        .collect();

    tracing::debug!(count = results.len(), "NewsAPI results mapped");
    results
}
