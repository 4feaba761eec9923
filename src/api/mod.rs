//! Web server: router, handlers and request plumbing

pub mod error;
pub mod handler;
pub mod middleware;
pub mod state;

use tokio::net::TcpListener;
use tracing::{error, info};

// Re-export the router builder for convenience
pub use handler::build_router;
pub use state::{AppState, SharedState};

/// Serve the summarizer on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, state: SharedState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "Listening");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            error!("Failed to listen for Ctrl-C, graceful shutdown disabled: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
