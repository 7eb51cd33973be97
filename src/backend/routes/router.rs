/**
 * Router Configuration
 *
 * This module provides the main router creation function combining API
 * routes, static file serving, and the 404 fallback.
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let router = configure_api_routes(Router::new(), &state);

    // Built frontend assets, when deployed alongside the API
    let router = router.nest_service("/static", ServeDir::new("public"));

    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(state)
}
