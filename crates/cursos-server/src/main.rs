//! Binary entrypoint for the course registry HTTP server.
//!
//! Reads configuration from environment variables (see
//! [`cursos_server::config`]) and logs through `tracing`, filtered by
//! `RUST_LOG`.

use tracing_subscriber::EnvFilter;

use cursos_server::config::ServerConfig;
use cursos_server::error::ApiError;
use cursos_server::router::build_router;
use cursos_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("cursos server failed: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ApiError> {
    let config = ServerConfig::from_env()?;
    let app = build_router(AppState::new());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ApiError::InternalError(format!("failed to bind {}: {}", addr, e)))?;
    tracing::info!("cursos server starting on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::InternalError(format!("server error: {}", e)))?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM (SIGINT only on non-Unix platforms).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for SIGINT: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!("failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("SIGINT received, starting graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, starting graceful shutdown...");
        }
    }
}
