//! Standalone HTTP server.
//!
//! An axum router over the handlers in [`crate::handlers`], for hosts that
//! run a long-lived process listening on `$PORT` rather than serverless
//! functions.

pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use crate::config::ServerConfig;

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
