//! Fan-out coordinator: concurrent multi-provider dispatch, merge, rank.
//!
//! Queries every configured provider concurrently and waits for all of them
//! to settle before merging — a join, not a race-to-first. A provider that
//! fails or is unconfigured contributes an empty set and never aborts the
//! batch, so the join always succeeds. The pipeline after the join
//! (normalize, dedup, rank) is synchronous and pure.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::providers::{
    BraveProvider, DuckDuckGoProvider, GoogleProvider, NewsProvider, WikipediaProvider,
};
use crate::types::{AggregatedResponse, SearchResult, SearchSource};

use super::dedup::deduplicate;
use super::normalize::normalize;
use super::ranking::rank;

/// Run one query through the full aggregation pipeline.
///
/// # Pipeline
///
/// 1. Fan out to every provider in `config.providers` concurrently
///    with [`futures::future::join_all`]
/// 2. Absorb per-provider failures into empty contributions
///    (debug log for missing credentials, warn for transport/decode)
/// 3. Normalize each surviving record; drop malformed links
/// 4. Concatenate in declaration order and deduplicate, first wins
/// 5. Rank by keyword score and select the warp result
///
/// Never fails: when every provider fails or is unconfigured the result is
/// an empty response, not an error.
pub async fn aggregate(query: &str, config: &SearchConfig) -> AggregatedResponse {
    let futures: Vec<_> = config
        .providers
        .iter()
        .map(|source| {
            let q = query.to_string();
            let cfg = config.clone();
            let src = *source;
            async move {
                let outcome = fetch_provider(src, &q, &cfg).await;
                (src, outcome)
            }
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    // Results are combined only after the join, so no provider's completion
    // order affects the merge and no locking is needed.
    let mut merged: Vec<SearchResult> = Vec::new();
    for (source, outcome) in outcomes {
        match outcome {
            Ok(raw) => {
                let fetched = raw.len();
                let normalized: Vec<SearchResult> = raw.into_iter().filter_map(normalize).collect();
                tracing::debug!(
                    %source,
                    fetched,
                    kept = normalized.len(),
                    "provider contribution normalized"
                );
                merged.extend(normalized);
            }
            Err(SearchError::Unavailable(reason)) => {
                tracing::debug!(%source, %reason, "provider unavailable, skipped");
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "provider query failed");
            }
        }
    }

    let deduped = deduplicate(merged);
    rank(deduped, query)
}

/// Query a single provider, dispatching to the concrete adapter.
async fn fetch_provider(
    source: SearchSource,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    match source {
        SearchSource::DuckDuckGo => DuckDuckGoProvider.fetch_results(query, config).await,
        SearchSource::Wikipedia => WikipediaProvider.fetch_results(query, config).await,
        SearchSource::Google => GoogleProvider.fetch_results(query, config).await,
        SearchSource::News => NewsProvider.fetch_results(query, config).await,
        SearchSource::Brave => BraveProvider.fetch_results(query, config).await,
    }
}
