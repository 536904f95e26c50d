//! # Error Types
//!
//! Label generation itself cannot fail; these errors come from the layers
//! around it (reading job files, rendering previews, serving HTTP).

use thiserror::Error;

use crate::preview::PreviewError;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// Invalid command-line or request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed job file or request body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Preview rendering error
    #[error("Preview error: {0}")]
    Preview(#[from] PreviewError),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
