/**
 * API Route Handlers
 *
 * This module wires the API endpoints onto the router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Clear the session cookie
 * - `GET /health` - Liveness probe
 *
 * ## Protected (behind the auth gate)
 * - `GET /api/auth/me` - Current user info
 * - `GET /api/chat/token` - Provider chat token
 */

use axum::{middleware, routing, Router};

use crate::backend::auth::handlers::{get_me, login, logout, signup};
use crate::backend::chat::token::issue_chat_token;
use crate::backend::middleware::auth::auth_gate;
use crate::backend::server::state::AppState;

/// Configure API routes.
///
/// Protected routes carry the auth gate as a route layer, so requests are
/// verified and the principal resolved before any handler runs.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", routing::get(get_me))
        .route("/api/chat/token", routing::get(issue_chat_token))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_gate));

    router
        .route("/api/auth/signup", routing::post(signup))
        .route("/api/auth/login", routing::post(login))
        .route("/api/auth/logout", routing::post(logout))
        .route("/health", routing::get(health))
        .merge(protected)
}

async fn health() -> &'static str {
    "ok"
}
