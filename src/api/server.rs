//! Listener setup and the serve loop.

use tokio::net::TcpListener;
use tracing::info;

use super::handlers::AppState;
use super::routes::create_router;
use crate::error::Result;
use crate::utils::shutdown_signal;

/// Bind the HTTP listener. `host` may be an IP literal or a host name.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the API on `listener` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
