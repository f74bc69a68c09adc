//! First-seen-wins deduplication by canonical link.
//!
//! The merged sequence arrives concatenated in adapter-declaration order, so
//! "first occurrence wins" makes declaration order the tie-break for which
//! provider owns a link that several providers return. Later duplicates are
//! silently discarded; relative order is otherwise preserved.

use std::collections::HashSet;

use crate::types::SearchResult;
use url::Url;

/// Deduplicate an ordered sequence of results by canonical link.
///
/// Keeps the first occurrence of each link and drops the rest. Records whose
/// link fails the well-formedness check are excluded (the normalizer should
/// already have dropped them; this guards the key contract regardless).
pub fn deduplicate(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen: HashSet<String> = HashSet::new();
    results
        .into_iter()
        .filter(|result| match canonical_link(&result.link) {
            Some(key) => seen.insert(key),
            None => false,
        })
        .collect()
}

/// Canonical dedup identity for a link.
///
/// Parses the URL (lowercasing scheme and host), strips the fragment and
/// default ports, and drops a single trailing slash from non-root paths, so
/// that trivially equivalent links compare equal. Returns `None` for links
/// that are not absolute http(s) URLs.
pub fn canonical_link(raw: &str) -> Option<String> {
    let mut parsed = Url::parse(raw).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    parsed.set_fragment(None);
    if matches!(
        (parsed.scheme(), parsed.port()),
        ("http", Some(80)) | ("https", Some(443))
    ) {
        let _ = parsed.set_port(None);
    }

    let path = parsed.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        parsed.set_path(&path[..path.len() - 1]);
    }

    Some(parsed.to_string())
}
