/**
 * Authentication Middleware
 *
 * This module provides the auth gate protecting routes that require an
 * authenticated user. It extracts the session token from the `jwt` cookie,
 * verifies it, resolves the user (excluding the credential field), and
 * attaches the principal to the request.
 *
 * The verification policy itself lives in `auth::sessions` as a pure
 * function; this middleware only adds the cookie extraction, the store
 * lookup, and the transport mapping.
 */

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::verify_session_token;
use crate::backend::auth::users::UserProfile;
use crate::backend::error::AuthRejection;
use crate::backend::server::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "jwt";

/// Authentication gate.
///
/// Sequential guards, first failure wins:
/// 1. Extract the token from the `jwt` cookie
/// 2. Verify signature/expiry/payload against the configured secret
/// 3. Resolve the user by the embedded identifier, credential excluded
/// 4. Attach the principal and forward
///
/// Every failure class is terminated here as a 401/500 JSON response;
/// nothing propagates to the transport layer unclassified.
pub async fn auth_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let token = session_cookie(request.headers());
    let user_id = verify_session_token(token.as_deref(), state.config.session_secret())
        .inspect_err(|rejection| {
            tracing::warn!("Auth gate rejected request: {rejection}");
        })?;

    let profile = state
        .users
        .find_profile(&user_id)
        .await
        .map_err(|e| {
            tracing::error!("User lookup failed in auth gate: {e}");
            AuthRejection::Internal
        })?
        .ok_or_else(|| {
            tracing::warn!("Token user not found: {user_id}");
            AuthRejection::UserNotFound
        })?;

    request.extensions_mut().insert(profile);
    Ok(next.run(request).await)
}

/// Extract the session token from the request's cookie header.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| match pair.split_once('=') {
            Some((name, value)) if name == SESSION_COOKIE => Some(value.to_string()),
            _ => None,
        })
}

/// Axum extractor for the principal resolved by the auth gate.
#[derive(Clone, Debug)]
pub struct AuthUser(pub UserProfile);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let profile = parts
            .extensions
            .get::<UserProfile>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Principal not found in request extensions");
                AuthRejection::NoToken
            })?;

        Ok(AuthUser(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_cookie_found() {
        let headers = headers_with_cookie("jwt=abc.def.ghi");
        assert_eq!(session_cookie(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_session_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; jwt=token123; lang=en");
        assert_eq!(session_cookie(&headers), Some("token123".to_string()));
    }

    #[test]
    fn test_session_cookie_missing() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn test_no_cookie_header() {
        assert_eq!(session_cookie(&HeaderMap::new()), None);
    }

    #[test]
    fn test_similar_cookie_name_not_matched() {
        let headers = headers_with_cookie("xjwt=nope");
        assert_eq!(session_cookie(&headers), None);
    }
}
