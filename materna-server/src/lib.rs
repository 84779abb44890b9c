//! materna-server: HTTP surface for materna
//!
//! Thin shim over [`materna_core`]: record ingestion endpoints that commit
//! and then fire the assessment trigger, read endpoints over stored records,
//! and the synchronous care priority query.

pub mod error;
pub mod http;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

pub use error::ServerError;
pub use state::AppState;

/// Serve the API on `addr` until the process exits
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<(), ServerError> {
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;

    info!(%addr, "materna server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))
}
