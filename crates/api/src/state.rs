use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (snapshot limits are enforced by handlers).
    pub config: Arc<ServerConfig>,
}
