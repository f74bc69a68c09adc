//! Core types for aggregated search results and provider identification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single normalized search result from any provider.
///
/// All string fields are always present — an adapter that cannot supply a
/// field maps it to an empty string, never omits it. `link` is the canonical
/// absolute URL and the deduplication key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title. May be empty, never absent.
    pub title: String,
    /// Canonical absolute URL of the result.
    pub link: String,
    /// Free-text excerpt; empty string when the provider offers none.
    pub snippet: String,
    /// Which provider returned this result.
    pub source: SearchSource,
    /// Representative thumbnail URL, when the provider offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// When the result was produced or published. Display ordering hint
    /// only — never consulted by the ranker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// The search providers ztab-search can fan out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchSource {
    /// DuckDuckGo Instant Answer API — keyless topic entries.
    DuckDuckGo,
    /// Wikipedia (MediaWiki) search API — keyless, links synthesized from titles.
    Wikipedia,
    /// Google Programmable Search (CSE) — requires API key and engine id.
    Google,
    /// NewsAPI article search — requires API key.
    News,
    /// Brave Search API — requires a subscription token sent as a header.
    Brave,
}

impl SearchSource {
    /// Returns the lowercase wire tag for this provider.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "duckduckgo",
            Self::Wikipedia => "wikipedia",
            Self::Google => "google",
            Self::News => "news",
            Self::Brave => "brave",
        }
    }

    /// All providers, in fan-out declaration order.
    ///
    /// This order is the cross-provider tie-break: when two providers return
    /// the same link, the earlier provider's fields win in deduplication.
    pub fn all() -> &'static [SearchSource] {
        &[
            Self::DuckDuckGo,
            Self::Wikipedia,
            Self::Google,
            Self::News,
            Self::Brave,
        ]
    }
}

impl fmt::Display for SearchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The engine's single output for one query.
///
/// `warp` is the top-ranked result and is also the first element of `items`
/// (clients that ignore `warp` see a plain ranked list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedResponse {
    /// The highest-scoring result, or `None` when `items` is empty.
    pub warp: Option<SearchResult>,
    /// The full deduplicated, ranked result list.
    pub items: Vec<SearchResult>,
}

/// The image-augmented response for the POST variant.
///
/// Identical aggregation contract, plus `highlights`: the subset of `items`
/// that carry a thumbnail, in rank order, capped at [`MAX_HIGHLIGHTS`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusedResponse {
    /// The highest-scoring result, or `None` when `items` is empty.
    pub warp: Option<SearchResult>,
    /// The full deduplicated, ranked result list.
    pub items: Vec<SearchResult>,
    /// Image-bearing results for visual display.
    pub highlights: Vec<SearchResult>,
}

/// Maximum number of entries in [`FusedResponse::highlights`].
pub const MAX_HIGHLIGHTS: usize = 8;

impl FusedResponse {
    /// Build the fused view from an aggregated response.
    pub fn from_aggregated(response: AggregatedResponse) -> Self {
        let highlights: Vec<SearchResult> = response
            .items
            .iter()
            .filter(|r| r.image.is_some())
            .take(MAX_HIGHLIGHTS)
            .cloned()
            .collect();
        Self {
            warp: response.warp,
            items: response.items,
            highlights,
        }
    }
}
