/**
 * Login Handler
 *
 * This module implements user authentication for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a session token and set the `jwt` cookie
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 message, so the
 *   endpoint does not leak which accounts exist
 * - Passwords are never logged or returned
 */

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::{session_cookie_value, types::LoginRequest};
use crate::backend::auth::sessions::create_session_token;
use crate::backend::auth::users::UserProfile;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store or token issuance failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    let record = state
        .users
        .find_credentials(&request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error during login: {e}");
            ApiError::Internal
        })?
        .ok_or_else(|| {
            tracing::warn!("Login attempt for unknown email");
            ApiError::Unauthorized("Invalid email or password".to_string())
        })?;

    let valid = bcrypt::verify(&request.password, &record.password_hash).map_err(|e| {
        tracing::error!("Password verification failed: {e}");
        ApiError::Internal
    })?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", record.id);
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let secret = state.config.session_secret().ok_or_else(|| {
        tracing::error!("Session secret not configured");
        ApiError::Internal
    })?;
    let token = create_session_token(&record.id, secret).map_err(|e| {
        tracing::error!("Failed to create session token: {e}");
        ApiError::Internal
    })?;

    tracing::info!("User logged in: {} ({})", record.full_name, record.email);

    Ok((
        [(header::SET_COOKIE, session_cookie_value(&token))],
        Json(UserProfile::from(&record)),
    ))
}
