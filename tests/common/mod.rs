//! Shared helpers for integration tests.

use std::sync::Arc;

use portal_mock::auth::{AccessPolicy, AllowAll};
use portal_mock::config::ServerConfig;
use portal_mock::fixtures::DemoFixtures;
use portal_mock::server::{self, ServerHandle};

/// Any non-empty value passes the credential guard.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "Bearer test-token-12345";

/// Start a server on an ephemeral port with the demo fixtures and the
/// default allow-everything policy.
#[allow(dead_code)]
pub async fn spawn_server() -> ServerHandle {
    spawn_server_with_policy(Arc::new(AllowAll)).await
}

/// Start a server on an ephemeral port with a caller-chosen policy.
#[allow(dead_code)]
pub async fn spawn_server_with_policy(policy: Arc<dyn AccessPolicy>) -> ServerHandle {
    server::start(
        &ServerConfig::ephemeral(),
        Arc::new(DemoFixtures::new()),
        policy,
    )
    .await
    .expect("Failed to start mock server")
}
