//! Canonicalisation of raw adapter results into the common schema.
//!
//! Enforces the schema invariants uniformly regardless of which adapter
//! produced a record: whitespace is collapsed in text fields, relative image
//! URLs are resolved against the owning link's origin, and records whose
//! link is not a parseable absolute http(s) URL are dropped (an empty-link
//! record would break the deduplicator's key contract).

use crate::types::SearchResult;
use url::Url;

/// Normalise one raw adapter record, or drop it.
///
/// Returns `None` when `link` cannot be parsed as an absolute http(s) URL.
/// The transform is idempotent: normalising an already-normalised record
/// yields an identical record.
pub fn normalize(mut result: SearchResult) -> Option<SearchResult> {
    let link = Url::parse(result.link.trim()).ok()?;
    if !matches!(link.scheme(), "http" | "https") {
        return None;
    }

    result.link = link.to_string();
    result.title = collapse_whitespace(&result.title);
    result.snippet = collapse_whitespace(&result.snippet);
    result.image = result
        .image
        .map(|image| resolve_image(&link, image.trim()))
        .filter(|image| !image.is_empty());

    Some(result)
}

/// Trim and collapse runs of whitespace to single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve an image URL against the origin of the owning result link.
///
/// Scheme-relative `//host/...` becomes `https://host/...`. Root-relative
/// `/path` is resolved against the link's origin. Anything else (absolute
/// URLs, data URIs, unreadable fragments) is left as-is.
fn resolve_image(link: &Url, image: &str) -> String {
    if let Some(rest) = image.strip_prefix("//") {
        return format!("https://{rest}");
    }
    if image.starts_with('/') {
        let origin = link.origin();
        if origin.is_tuple() {
            return format!("{}{image}", origin.ascii_serialization());
        }
    }
    image.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchSource;

    fn make_result(link: &str) -> SearchResult {
        SearchResult {
            title: "Title".into(),
            link: link.into(),
            snippet: "Snippet".into(),
            source: SearchSource::DuckDuckGo,
            image: None,
            timestamp: None,
        }
    }

    #[test]
    fn valid_link_passes_through() {
        let result = normalize(make_result("https://example.com/page")).expect("kept");
        assert_eq!(result.link, "https://example.com/page");
    }

    #[test]
    fn malformed_link_drops_record() {
        assert!(normalize(make_result("not a url")).is_none());
        assert!(normalize(make_result("")).is_none());
    }

    #[test]
    fn relative_link_drops_record() {
        assert!(normalize(make_result("/wiki/Rust")).is_none());
    }

    #[test]
    fn non_http_scheme_drops_record() {
        assert!(normalize(make_result("ftp://example.com/file")).is_none());
        assert!(normalize(make_result("javascript:alert(1)")).is_none());
    }

    #[test]
    fn whitespace_collapsed_in_text_fields() {
        let mut raw = make_result("https://example.com");
        raw.title = "  A   spaced\n\ttitle  ".into();
        raw.snippet = "two\n lines".into();
        let result = normalize(raw).expect("kept");
        assert_eq!(result.title, "A spaced title");
        assert_eq!(result.snippet, "two lines");
    }

    #[test]
    fn root_relative_image_resolved_against_link_origin() {
        let mut raw = make_result("https://example.com/page");
        raw.image = Some("/img/photo.jpg".into());
        let result = normalize(raw).expect("kept");
        assert_eq!(
            result.image.as_deref(),
            Some("https://example.com/img/photo.jpg")
        );
    }

    #[test]
    fn scheme_relative_image_gets_https() {
        let mut raw = make_result("https://example.com/page");
        raw.image = Some("//cdn.example.com/photo.jpg".into());
        let result = normalize(raw).expect("kept");
        assert_eq!(
            result.image.as_deref(),
            Some("https://cdn.example.com/photo.jpg")
        );
    }

    #[test]
    fn absolute_image_left_as_is() {
        let mut raw = make_result("https://example.com/page");
        raw.image = Some("https://other.com/photo.jpg".into());
        let result = normalize(raw).expect("kept");
        assert_eq!(result.image.as_deref(), Some("https://other.com/photo.jpg"));
    }

    #[test]
    fn empty_image_becomes_none() {
        let mut raw = make_result("https://example.com/page");
        raw.image = Some("   ".into());
        let result = normalize(raw).expect("kept");
        assert!(result.image.is_none());
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut raw = make_result("https://Example.com/page");
        raw.title = " Rust  (programming language) ".into();
        raw.image = Some("/img/a.png".into());
        let once = normalize(raw).expect("kept");
        let twice = normalize(once.clone()).expect("kept");
        assert_eq!(once.link, twice.link);
        assert_eq!(once.title, twice.title);
        assert_eq!(once.image, twice.image);
    }
}
