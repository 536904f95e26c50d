//! # HTTP Server for Label Generation
//!
//! Exposes label generation, dimension queries and previews over HTTP so
//! the inventory front-end can fetch ZPL downloads and previews.
//!
//! ## Usage
//!
//! ```bash
//! etiqueta serve --listen 0.0.0.0:8080
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | GET | `/api/labels/defaults` | | `LayoutConfig` JSON |
//! | POST | `/api/labels/dimensions` | `LayoutConfig` | `{width, height}` |
//! | POST | `/api/labels/zpl` | `{items, layout}` | ZPL attachment |
//! | POST | `/api/labels/preview` | `{items, layout}` | PNG |

mod handlers;
mod state;

pub use handlers::labels::LabelRequest;
pub use state::{AppState, DEFAULT_LISTEN_ADDR, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::EtiquetaError;

/// Build the application router.
pub fn router(config: ServerConfig) -> Router {
    let app_state = Arc::new(AppState::new(config));

    Router::new()
        .route("/api/labels/defaults", get(handlers::labels::defaults))
        .route("/api/labels/dimensions", post(handlers::labels::dimensions))
        .route("/api/labels/zpl", post(handlers::labels::zpl))
        .route("/api/labels/preview", post(handlers::labels::preview))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use etiqueta::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), etiqueta::error::EtiquetaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), EtiquetaError> {
    let listen_addr = config.listen_addr.clone();
    let app = router(config);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| EtiquetaError::Server(format!("Failed to bind to {}: {}", listen_addr, e)))?;

    log::info!("etiqueta HTTP server listening on http://{}/", listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| EtiquetaError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
