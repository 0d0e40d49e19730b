//! Router assembly and server lifecycle

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::gate::store::{FileVersionStore, VersionStore};
use crate::server::handlers;

/// Shared state for all handlers
pub struct AppState {
    pub config: ServerConfig,
    pub store: Box<dyn VersionStore>,
}

/// Build the service router. Separated from [`run_server`] so tests can drive
/// it without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/check-update", get(handlers::check_update))
        .route("/version.jpg", get(handlers::version_badge))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until a shutdown signal arrives.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let store = FileVersionStore::new(config.version_file.clone());
    let state = Arc::new(AppState {
        config,
        store: Box::new(store),
    });

    let app = router(state);

    info!("version gate listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("version gate shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
