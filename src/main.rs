use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use natlas_api::api::server;
use natlas_api::config;
use natlas_api::corpus::CorpusStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} v{} starting", config::APP_NAME, config::APP_VERSION);

    // The load attempt finishes before the listener opens; a failed load
    // degrades to an empty store instead of aborting.
    let corpus = Arc::new(CorpusStore::load_or_empty(&config::cache_dir()));

    let mut server = match server::start(corpus, config::server_port()).await {
        Ok(server) => server,
        Err(err) => {
            tracing::error!(%err, "cannot start API server");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %server.addr(), "serving");

    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "cannot listen for shutdown signal");
    }
    tracing::info!("shutdown requested");
    server.shutdown();
}
