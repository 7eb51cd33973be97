/**
 * Logout Handler
 *
 * POST /api/auth/logout clears the session cookie. The token itself is not
 * revoked server-side; it simply stops being presented.
 */

use axum::{
    http::header,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::clear_session_cookie_value;

/// Logout handler
pub async fn logout() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, clear_session_cookie_value())],
        Json(serde_json::json!({ "message": "Logout successful" })),
    )
}
