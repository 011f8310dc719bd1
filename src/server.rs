//! Server construction and lifecycle.
//!
//! Nothing starts at module load: callers build a [`MockState`], obtain a
//! router or a running [`ServerHandle`], and stop the server by dropping
//! the handle or calling [`ServerHandle::shutdown`]. Tests run several
//! instances side by side on ephemeral ports.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::AccessPolicy;
use crate::config::ServerConfig;
use crate::fixtures::FixtureStore;
use crate::routes;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct MockState {
    pub fixtures: Arc<dyn FixtureStore>,
    pub policy: Arc<dyn AccessPolicy>,
}

impl MockState {
    pub fn new(fixtures: Arc<dyn FixtureStore>, policy: Arc<dyn AccessPolicy>) -> Self {
        Self { fixtures, policy }
    }
}

/// Build the full route table over the given state.
pub fn router(state: MockState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::index::root))
        .route("/demo", get(routes::index::demo))
        .route(
            "/demo/patients/:patient_id/basicId",
            get(routes::patients::basic_identity),
        )
        .route(
            "/demo/patients/:patient_id/messages",
            get(routes::patients::messages),
        )
        .route(
            "/demo/users/:user_id/authorizations",
            get(routes::users::authorizations),
        )
        .route("/ws", get(routes::ws::upgrade))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// A running server instance.
///
/// Dropping the handle signals shutdown; [`shutdown`](Self::shutdown)
/// does the same but waits for the serve task to finish.
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ServerHandle {
    /// The address the server actually bound, including any OS-assigned port.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL for HTTP requests against this instance.
    pub fn http_base(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// URL of the WebSocket endpoint on this instance.
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Stop the server and wait for in-flight connections to drain.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        let _ = self.task.await;
    }

    /// Run until the server exits on its own (shutdown signal or bind loss).
    pub async fn join(self) -> color_eyre::Result<()> {
        let Self {
            shutdown_tx, task, ..
        } = self;
        task.await?;
        drop(shutdown_tx);
        Ok(())
    }
}

/// Bind the listener, spawn the serve loop, and hand back its lifecycle.
pub async fn start(
    config: &ServerConfig,
    fixtures: Arc<dyn FixtureStore>,
    policy: Arc<dyn AccessPolicy>,
) -> color_eyre::Result<ServerHandle> {
    let app = router(MockState::new(fixtures, policy));
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tracing::info!("Mock API server listening on http://{}", addr);

    let task = tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
            tracing::debug!("Shutdown signal received");
        });
        if let Err(error) = serve.await {
            tracing::error!("Mock API server error: {}", error);
        }
    });

    Ok(ServerHandle {
        addr,
        shutdown_tx,
        task,
    })
}
