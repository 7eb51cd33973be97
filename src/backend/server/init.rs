/**
 * Server Initialization
 *
 * This module assembles the Axum application: database pool, migrations,
 * application state, and the router.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool (the connection string was already
 *    validated by `ServerConfig::from_env`)
 * 2. Run database migrations
 * 3. Build `AppState` over the Postgres user store
 * 4. Configure the router
 *
 * Unlike configuration loading, which fails fast before this point, any
 * failure here is returned to `main` and terminates startup.
 */

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::store::PgUserStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Startup failures after configuration was validated.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application.
pub async fn create_app(config: ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let state = AppState::new(Arc::new(PgUserStore::new(pool)), config);
    Ok(create_router(state))
}
