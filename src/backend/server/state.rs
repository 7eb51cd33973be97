/**
 * Application State
 *
 * This module defines the application state structure and the `FromRef`
 * implementations that let handlers extract the parts they need.
 *
 * # Thread Safety
 *
 * The state is cloned per request. Both fields are `Arc`s: the user store
 * is a shared trait object, the configuration is immutable after startup.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::store::UserStore;
use crate::backend::server::config::ServerConfig;

/// Central state container for the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// User persistence seam (PostgreSQL in production, in-memory in tests)
    pub users: Arc<dyn UserStore>,
    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, config: ServerConfig) -> Self {
        Self {
            users,
            config: Arc::new(config),
        }
    }
}

/// Allows handlers to extract the user store directly.
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

/// Allows handlers to extract the configuration directly.
impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
