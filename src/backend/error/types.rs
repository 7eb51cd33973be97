/**
 * Backend Error Types
 *
 * This module defines the error types used by HTTP handlers and the
 * authentication gate. Both convert to flat JSON `{"message": ...}`
 * responses; no internal detail ever reaches the client.
 *
 * # Error Types
 *
 * - `AuthRejection` - the enumerated rejection kinds of the auth gate
 * - `ApiError` - errors produced by regular request handlers
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Terminal rejection kinds of the authentication gate.
///
/// The gate is a linear chain of guards; each variant is one terminal
/// state. The status/message mapping is fixed wire format: every
/// authentication failure is a 401, configuration and unexpected faults
/// are 500s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthRejection {
    /// No `jwt` cookie on the request
    #[error("Unauthorized - No token provided")]
    NoToken,

    /// The signing secret is not configured; a server fault, not a client error
    #[error("Server configuration error")]
    MissingSecret,

    /// Token signature verified but the token is past its expiry
    #[error("Unauthorized - Token expired")]
    TokenExpired,

    /// Token is malformed or its signature does not verify
    #[error("Unauthorized - Invalid token format")]
    MalformedToken,

    /// Token carries a not-before timestamp in the future
    #[error("Unauthorized - Token not active yet")]
    TokenNotYetValid,

    /// Any other verification failure
    #[error("Unauthorized - Token verification failed")]
    VerificationFailed,

    /// Decoded payload carries no user identifier
    #[error("Unauthorized - Invalid token payload")]
    InvalidPayload,

    /// No persisted user matches the token's identifier
    #[error("Unauthorized - User not found")]
    UserNotFound,

    /// Unexpected fault while evaluating the gate
    #[error("Internal Server Error")]
    Internal,
}

impl AuthRejection {
    /// HTTP status for this rejection.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingSecret | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Human-readable message carried in the response body.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors returned by regular (non-gate) request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request input
    #[error("{0}")]
    BadRequest(String),

    /// Authentication failure outside the gate (e.g. bad login credentials)
    #[error("{0}")]
    Unauthorized(String),

    /// Unexpected fault; details are logged, never returned
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_status_mapping() {
        assert_eq!(AuthRejection::NoToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthRejection::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthRejection::UserNotFound.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthRejection::MissingSecret.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthRejection::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            AuthRejection::NoToken.message(),
            "Unauthorized - No token provided"
        );
        assert_eq!(
            AuthRejection::MalformedToken.message(),
            "Unauthorized - Invalid token format"
        );
        assert_eq!(
            AuthRejection::TokenNotYetValid.message(),
            "Unauthorized - Token not active yet"
        );
        assert_eq!(
            AuthRejection::MissingSecret.message(),
            "Server configuration error"
        );
    }

    #[test]
    fn test_api_error_status_mapping() {
        assert_eq!(
            ApiError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("no".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
