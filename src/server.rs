//! Listener setup and the serve loop.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::{create_router, AppState};
use crate::error::{AppError, Result};

/// Bind the HTTP listener. Failure here is fatal for the process.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| {
        error!(%addr, error = %source, "Failed to bind HTTP listener");
        AppError::Bind { addr, source }
    })
}

/// Serve the API on `listener` until `shutdown` resolves.
///
/// In-flight requests are drained before this returns.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Starting ci-cd-demo server v{} on {}", state.version(), addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
