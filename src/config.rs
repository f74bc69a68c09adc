//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which providers are queried, the uniform
//! per-provider timeout, and the credentials for the key-gated providers.
//! Credentials are explicit values injected here — the engine never reads
//! the process environment itself. [`SearchConfig::from_env`] exists for the
//! binary edge only.

use crate::error::SearchError;
use crate::types::SearchSource;

/// Credentials for Google Programmable Search (CSE).
#[derive(Debug, Clone)]
pub struct GoogleCseConfig {
    /// API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Search engine id, sent as the `cx` query parameter.
    pub engine_id: String,
}

/// Configuration for a search aggregation run.
///
/// Use [`Default::default()`] for the keyless providers only, or fill in the
/// credential options to enable the gated ones. A provider listed in
/// `providers` whose credential is `None` self-reports unavailable and
/// contributes an empty result set — it never fails the batch.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Which providers to query, in declaration order. Queried concurrently;
    /// declaration order is the dedup first-wins tie-break.
    pub providers: Vec<SearchSource>,
    /// Uniform per-provider HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Google CSE credentials; `None` disables the Google provider.
    pub google: Option<GoogleCseConfig>,
    /// NewsAPI key; `None` disables the News provider.
    pub news_api_key: Option<String>,
    /// Brave Search subscription token; `None` disables the Brave provider.
    pub brave_api_key: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfig {
    /// Default configuration: all providers in declaration order, 8 second
    /// timeout, no credentials (gated providers stay unavailable).
    pub fn new() -> Self {
        Self {
            providers: SearchSource::all().to_vec(),
            timeout_seconds: 8,
            google: None,
            news_api_key: None,
            brave_api_key: None,
        }
    }

    /// Build a configuration from the deployment environment.
    ///
    /// Reads `GOOGLE_API_KEY`/`GOOGLE_CSE_ID`, `NEWS_API_KEY` and
    /// `BRAVE_API_KEY`. A gated provider whose variables are unset or empty
    /// is left unconfigured. Intended for the server binary; library callers
    /// should construct the config explicitly.
    pub fn from_env() -> Self {
        let google = match (non_empty_var("GOOGLE_API_KEY"), non_empty_var("GOOGLE_CSE_ID")) {
            (Some(api_key), Some(engine_id)) => Some(GoogleCseConfig { api_key, engine_id }),
            _ => None,
        };
        Self {
            google,
            news_api_key: non_empty_var("NEWS_API_KEY"),
            brave_api_key: non_empty_var("BRAVE_API_KEY"),
            ..Self::new()
        }
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `providers` must not be empty
    /// - `timeout_seconds` must be greater than 0
    /// - configured credentials must not be empty strings
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.providers.is_empty() {
            return Err(SearchError::Config(
                "at least one provider must be enabled".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let Some(google) = &self.google {
            if google.api_key.is_empty() || google.engine_id.is_empty() {
                return Err(SearchError::Config(
                    "google credentials must not be empty".into(),
                ));
            }
        }
        if self.news_api_key.as_deref() == Some("") {
            return Err(SearchError::Config("news_api_key must not be empty".into()));
        }
        if self.brave_api_key.as_deref() == Some("") {
            return Err(SearchError::Config(
                "brave_api_key must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Read an environment variable, treating empty values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
