//! Server state and configuration.

use crate::layout::LayoutConfig;

/// Default address the server listens on.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Layout used when a request omits one
    pub default_layout: LayoutConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            default_layout: LayoutConfig::default(),
        }
    }
}

/// Application state shared across handlers. Read-only after startup.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
