//! Keyword relevance scoring and warp result selection.
//!
//! The query is tokenized on whitespace into lowercase keywords. Each result
//! scores +3 per keyword appearing (case-insensitively) as a substring of
//! its title and +1 per keyword in its snippet — one contribution per
//! keyword/field pair, regardless of how often the keyword repeats inside
//! the field. The sort is stable and descending, so equal scores keep their
//! dedup (merge) order, and the first element becomes the warp result.

use std::cmp::Reverse;

use crate::types::{AggregatedResponse, SearchResult};

/// Score contribution for a keyword matching the title.
const TITLE_WEIGHT: u32 = 3;
/// Score contribution for a keyword matching the snippet.
const SNIPPET_WEIGHT: u32 = 1;

/// Tokenize a query into lowercase keywords.
pub fn keywords(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Score one result against a keyword set. Pure and side-effect-free.
pub fn keyword_score(result: &SearchResult, keywords: &[String]) -> u32 {
    let title = result.title.to_lowercase();
    let snippet = result.snippet.to_lowercase();

    keywords
        .iter()
        .map(|keyword| {
            let mut score = 0;
            if title.contains(keyword.as_str()) {
                score += TITLE_WEIGHT;
            }
            if snippet.contains(keyword.as_str()) {
                score += SNIPPET_WEIGHT;
            }
            score
        })
        .sum()
}

/// Rank a deduplicated sequence and select the warp result.
///
/// Stable-sorts descending by keyword score (ties keep incoming order) and
/// returns the response with `warp` set to the first element; `warp` remains
/// part of `items`. An empty sequence yields `warp: None`.
pub fn rank(items: Vec<SearchResult>, query: &str) -> AggregatedResponse {
    let keyword_set = keywords(query);

    let mut items = items;
    items.sort_by_key(|item| Reverse(keyword_score(item, &keyword_set)));

    AggregatedResponse {
        warp: items.first().cloned(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchSource;

    fn make_result(title: &str, snippet: &str, link: &str) -> SearchResult {
        SearchResult {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
            source: SearchSource::DuckDuckGo,
            image: None,
            timestamp: None,
        }
    }

    #[test]
    fn keywords_lowercased_and_split_on_whitespace() {
        assert_eq!(keywords("Rust  Programming"), vec!["rust", "programming"]);
        assert!(keywords("   ").is_empty());
    }

    #[test]
    fn title_match_scores_three_snippet_one() {
        let result = make_result(
            "Rust (programming language)",
            "Rust is a multi-paradigm...",
            "https://en.wikipedia.org/wiki/Rust_(programming_language)",
        );
        let kws = keywords("rust programming");
        // "rust": title + snippet = 4; "programming": title only = 3.
        assert_eq!(keyword_score(&result, &kws), 7);
    }

    #[test]
    fn single_keyword_both_fields_scores_four() {
        let result = make_result("Rust news", "All about rust.", "https://a.com");
        assert_eq!(keyword_score(&result, &keywords("rust")), 4);
    }

    #[test]
    fn repeated_keyword_in_field_counts_once() {
        let result = make_result("rust rust rust", "rust rust", "https://a.com");
        assert_eq!(keyword_score(&result, &keywords("rust")), 4);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = make_result("RUST Book", "Learn RUST here", "https://a.com");
        assert_eq!(keyword_score(&result, &keywords("Rust")), 4);
    }

    #[test]
    fn no_match_scores_zero() {
        let result = make_result("Weather today", "Sunny skies", "https://a.com");
        assert_eq!(keyword_score(&result, &keywords("rust programming")), 0);
    }

    #[test]
    fn warp_is_highest_scoring_and_first_item() {
        let items = vec![
            make_result("Unrelated", "nothing here", "https://a.com"),
            make_result("Rust guide", "a rust tutorial", "https://b.com"),
            make_result("rust mention", "unrelated snippet", "https://c.com"),
        ];
        let response = rank(items, "rust");
        let warp = response.warp.expect("warp present");
        assert_eq!(warp.link, "https://b.com");
        assert_eq!(response.items[0].link, "https://b.com");
        assert_eq!(response.items.len(), 3);
    }

    #[test]
    fn ties_keep_merge_order() {
        let items = vec![
            make_result("first", "no match", "https://first.com"),
            make_result("second", "no match", "https://second.com"),
            make_result("third", "no match", "https://third.com"),
        ];
        let response = rank(items, "weather");
        // All scores are 0; stable sort preserves merge order and warp is
        // still assigned to the first item.
        assert_eq!(response.warp.expect("warp").link, "https://first.com");
        assert_eq!(response.items[1].link, "https://second.com");
        assert_eq!(response.items[2].link, "https://third.com");
    }

    #[test]
    fn empty_items_yield_no_warp() {
        let response = rank(vec![], "anything");
        assert!(response.warp.is_none());
        assert!(response.items.is_empty());
    }

    #[test]
    fn ranking_is_deterministic() {
        let items = vec![
            make_result("Rust book", "learn rust", "https://a.com"),
            make_result("Go book", "learn go", "https://b.com"),
        ];
        let first = rank(items.clone(), "rust book");
        let second = rank(items, "rust book");
        let first_links: Vec<&str> = first.items.iter().map(|r| r.link.as_str()).collect();
        let second_links: Vec<&str> = second.items.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(first_links, second_links);
        assert_eq!(
            first.warp.expect("warp").link,
            second.warp.expect("warp").link
        );
    }
}
