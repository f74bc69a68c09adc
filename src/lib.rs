//! # ztab-search
//!
//! Multi-provider search aggregation for ZTab.
//!
//! Given a free-text query, this crate fans the request out concurrently to
//! five heterogeneous search providers (DuckDuckGo Instant Answers,
//! Wikipedia, Google CSE, NewsAPI, Brave Search), normalizes their very
//! different response shapes into one schema, deduplicates by canonical link
//! (first seen wins), and selects a single best "warp" result by keyword
//! relevance scoring.
//!
//! ## Design
//!
//! - One adapter per provider behind a common trait; each owns its request
//!   construction and response mapping
//! - The fan-out is a join, not a race: every provider settles before the
//!   merge, and a failing or unconfigured provider contributes an empty set
//!   instead of aborting the batch
//! - Everything after the join (normalize, dedup, rank) is synchronous and
//!   pure, so identical inputs produce identical output
//! - No query history, no response caching, one fan-out round per request
//!
//! ## Security
//!
//! - Credentials are explicit config values, never ambient lookups; absence
//!   is a checkable condition, not a crash
//! - Queries are logged only at trace level
//! - Credentials never appear in error messages

pub mod aggregator;
pub mod config;
pub mod error;
pub mod http;
pub mod provider;
pub mod providers;
pub mod server;
pub mod types;

pub use config::{GoogleCseConfig, SearchConfig};
pub use error::{Result, SearchError};
pub use provider::SearchProvider;
pub use server::SearchServer;
pub use types::{AggregatedResponse, FusedResponse, SearchResult, SearchSource};

/// Aggregate search results from all configured providers.
///
/// Fans out to every provider in `config.providers` concurrently, waits for
/// all of them to settle, then normalizes, deduplicates (first occurrence
/// wins, in provider declaration order) and ranks the merged list. The
/// returned response carries the ranked `items` and the top-scoring `warp`
/// result (`None` only when `items` is empty).
///
/// # Errors
///
/// Returns [`SearchError::Config`] when `config` is invalid. Provider
/// failures never surface here: a response with empty `items` and no `warp`
/// is the worst case when every provider fails or is unconfigured.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> ztab_search::Result<()> {
/// let config = ztab_search::SearchConfig::new();
/// let response = ztab_search::search("rust programming", &config).await?;
/// if let Some(warp) = &response.warp {
///     println!("warp: {} ({})", warp.title, warp.link);
/// }
/// for item in &response.items {
///     println!("{}: {}", item.source, item.link);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(query: &str, config: &SearchConfig) -> Result<AggregatedResponse> {
    config.validate()?;
    Ok(aggregator::search::aggregate(query, config).await)
}
