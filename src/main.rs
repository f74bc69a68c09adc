//! ztab-search server binary.
//!
//! Reads provider credentials and the bind address from the environment,
//! then serves the aggregation API until interrupted.

use tracing_subscriber::EnvFilter;
use ztab_search::{SearchConfig, SearchServer};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ztab_search::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SearchConfig::from_env();
    let host = std::env::var("ZTAB_HOST").unwrap_or_else(|_| "127.0.0.1".into());
    let port = std::env::var("ZTAB_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8787);

    let server = SearchServer::start(config, &host, port).await?;
    tracing::info!(addr = %server.addr(), "ztab-search ready");

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| ztab_search::SearchError::Http(format!("signal handler failed: {e}")))?;
    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}
