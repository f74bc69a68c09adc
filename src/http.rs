//! Shared HTTP client for provider API requests.
//!
//! Provides a configured [`reqwest::Client`] with the uniform per-provider
//! timeout. The timeout is the only bound on how long the fan-out waits for
//! any single provider; on expiry the provider's contribution is treated as
//! empty, identically to a transport failure.

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// User-Agent sent with every provider request.
const USER_AGENT: &str = concat!("ztab-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for provider API calls.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
