//! Error types for the ztab-search crate.
//!
//! All errors use stable string messages suitable for display to callers.
//! No API keys or subscription tokens appear in error messages.

/// Errors that can occur during search aggregation.
///
/// Provider-level errors (`Unavailable`, `Http`, `Decode`) never cross the
/// fan-out boundary: the coordinator absorbs them into an empty contribution
/// from that provider. Only `Config` surfaces to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A provider's required credential is missing; it was not queried.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// An HTTP request to a provider failed (transport error or non-2xx).
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider's response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for ztab-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
