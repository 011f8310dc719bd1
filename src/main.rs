//! Binary entry point for the mock patient portal API server.

use std::sync::Arc;

use portal_mock::auth::AllowAll;
use portal_mock::config::ServerConfig;
use portal_mock::fixtures::DemoFixtures;
use portal_mock::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portal_mock=info,tower_http=warn")),
        )
        .init();

    let config = ServerConfig::from_env();
    let handle = server::start(
        &config,
        Arc::new(DemoFixtures::new()),
        Arc::new(AllowAll),
    )
    .await?;

    handle.join().await
}
