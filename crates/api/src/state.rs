use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is constructed once at startup and threaded through here into
/// every handler and repository call; there is no ambient/global pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sportlog_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
