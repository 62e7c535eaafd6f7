use std::sync::Arc;

use smilecare_db::storage::ContentStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the storage pool and config are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Content persistence, possibly running without a database.
    pub storage: ContentStorage,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
