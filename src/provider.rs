//! Trait definition for pluggable search provider adapters.
//!
//! Each provider (DuckDuckGo, Wikipedia, Google CSE, NewsAPI, Brave)
//! implements [`SearchProvider`] to give the fan-out coordinator a uniform
//! interface for querying and mapping results.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{SearchResult, SearchSource};

/// A pluggable search provider adapter.
///
/// Implementors translate between one provider's native protocol/schema and
/// the common [`SearchResult`] shape. Each adapter handles its own:
///
/// - request construction (URL, query parameters, auth headers)
/// - credential check: a gated adapter whose credential is absent returns
///   [`SearchError::Unavailable`] immediately, without a network call
/// - response mapping, defaulting fields the provider does not offer to
///   empty strings
///
/// Adapters make exactly one attempt per query — no retries. Any error they
/// return is absorbed by the coordinator into an empty contribution; it never
/// fails the batch. All implementations must be `Send + Sync` for concurrent
/// fan-out.
pub trait SearchProvider: Send + Sync {
    /// Fetch results for `query` from this provider.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Unavailable`] when a required credential is
    /// missing, [`SearchError::Http`] on transport failure or a non-2xx
    /// status, or [`SearchError::Decode`] when the response body cannot be
    /// decoded.
    fn fetch_results(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;

    /// Returns which [`SearchSource`] this adapter represents.
    fn source(&self) -> SearchSource;
}
