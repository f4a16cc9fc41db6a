//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use wayfare_agent::Assistant;

use crate::config::Config;
use crate::entities::AnyStore;

/// State shared across all HTTP handlers.
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Persistent data store.
    pub store: Arc<AnyStore>,
    /// Stateless itinerary assistant (provider + tools + memory window).
    pub assistant: Arc<Assistant>,
}
