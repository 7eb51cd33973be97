/**
 * Signup Handler
 *
 * This module implements user registration for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate the request fields
 * 2. Hash the password with bcrypt
 * 3. Persist the user with a random stock avatar
 * 4. Issue a session token and set the `jwt` cookie
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt before storage
 * - The response never contains the password hash
 */

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::{session_cookie_value, types::SignupRequest};
use crate::backend::auth::sessions::create_session_token;
use crate::backend::auth::store::StoreError;
use crate::backend::auth::users::{random_avatar, NewUser};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Signup handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, weak password, malformed email,
///   or an email that is already registered
/// * `500 Internal Server Error` - store or token issuance failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.full_name.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }
    if request.password.len() < 6 {
        return Err(ApiError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    if !looks_like_email(&request.email) {
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("Password hashing failed: {e}");
        ApiError::Internal
    })?;

    let profile = state
        .users
        .create(NewUser {
            full_name: request.full_name,
            email: request.email,
            password_hash,
            profile_pic: random_avatar(),
        })
        .await
        .map_err(|e| match e {
            StoreError::DuplicateEmail => ApiError::BadRequest(
                "Email already exists, please use a different one".to_string(),
            ),
            StoreError::Database(e) => {
                tracing::error!("Database error during signup: {e}");
                ApiError::Internal
            }
        })?;

    let secret = state.config.session_secret().ok_or_else(|| {
        tracing::error!("Session secret not configured");
        ApiError::Internal
    })?;
    let token = create_session_token(&profile.id, secret).map_err(|e| {
        tracing::error!("Failed to create session token: {e}");
        ApiError::Internal
    })?;

    tracing::info!("User registered: {} ({})", profile.full_name, profile.email);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, session_cookie_value(&token))],
        Json(profile),
    ))
}

/// Minimal shape check; real deliverability is not this server's problem.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("user@example.com"));
        assert!(!looks_like_email("user"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("user@nodot"));
    }
}
