/**
 * Session Tokens
 *
 * This module handles creation and verification of the signed session
 * tokens carried in the `jwt` cookie.
 *
 * Verification is a pure function kept separate from the HTTP layer: it
 * takes the raw token and the configured secret and returns either the
 * embedded user identifier or one of the enumerated `AuthRejection` kinds.
 * It never panics and never lets a library error escape unclassified.
 */

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::error::AuthRejection;

/// Session token lifetime: 30 days.
pub const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Claims embedded in every session token issued by the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated user.
    ///
    /// Optional on the wire so that a structurally valid token with a
    /// missing identifier is classified as an invalid payload rather than
    /// a decode failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Issued at (Unix timestamp, seconds)
    pub iat: u64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: u64,
    /// Not valid before (Unix timestamp, seconds); set to `iat` at creation
    pub nbf: u64,
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn validation() -> Validation {
    let mut validation = Validation::default();
    validation.validate_nbf = true;
    validation
}

/// Create a session token for a user.
pub fn create_session_token(
    user_id: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = now_unix();
    let claims = Claims {
        user_id: Some(user_id.to_string()),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
        nbf: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a session token and extract the user identifier.
///
/// Sequential guards, first failure wins:
/// 1. missing token
/// 2. missing secret (server misconfiguration, not a client error)
/// 3. signature/expiry verification, with failures classified
/// 4. missing or empty user identifier in the payload
///
/// The caller still has to resolve the returned identifier against the
/// user store; that lookup is deliberately outside this function.
pub fn verify_session_token(
    token: Option<&str>,
    secret: Option<&str>,
) -> Result<String, AuthRejection> {
    let token = token.ok_or(AuthRejection::NoToken)?;
    let secret = secret.ok_or(AuthRejection::MissingSecret)?;

    let key = DecodingKey::from_secret(secret.as_ref());
    let claims = decode::<Claims>(token, &key, &validation())
        .map(|data| data.claims)
        .map_err(classify_verification_error)?;

    match claims.user_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AuthRejection::InvalidPayload),
    }
}

/// Map a token library error onto the gate's rejection taxonomy.
fn classify_verification_error(error: jsonwebtoken::errors::Error) -> AuthRejection {
    match error.kind() {
        ErrorKind::ExpiredSignature => AuthRejection::TokenExpired,
        ErrorKind::ImmatureSignature => AuthRejection::TokenNotYetValid,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => AuthRejection::MalformedToken,
        _ => AuthRejection::VerificationFailed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn encode_claims(claims: &impl Serialize, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_and_verify_roundtrip() {
        let token = create_session_token("u1", SECRET).unwrap();
        let user_id = verify_session_token(Some(&token), Some(SECRET)).unwrap();
        assert_eq!(user_id, "u1");
    }

    #[test]
    fn test_no_token() {
        let result = verify_session_token(None, Some(SECRET));
        assert_eq!(result.unwrap_err(), AuthRejection::NoToken);
    }

    #[test]
    fn test_no_secret() {
        let token = create_session_token("u1", SECRET).unwrap();
        let result = verify_session_token(Some(&token), None);
        assert_eq!(result.unwrap_err(), AuthRejection::MissingSecret);
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let result = verify_session_token(Some("not.a.token"), Some(SECRET));
        assert_eq!(result.unwrap_err(), AuthRejection::MalformedToken);
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let token = create_session_token("u1", "other-secret").unwrap();
        let result = verify_session_token(Some(&token), Some(SECRET));
        assert_eq!(result.unwrap_err(), AuthRejection::MalformedToken);
    }

    #[test]
    fn test_expired_token() {
        let now = now_unix();
        let claims = Claims {
            user_id: Some("u1".to_string()),
            iat: now - 7200,
            exp: now - 3600,
            nbf: now - 7200,
        };
        let token = encode_claims(&claims, SECRET);
        let result = verify_session_token(Some(&token), Some(SECRET));
        assert_eq!(result.unwrap_err(), AuthRejection::TokenExpired);
    }

    #[test]
    fn test_not_yet_valid_token() {
        let now = now_unix();
        let claims = Claims {
            user_id: Some("u1".to_string()),
            iat: now,
            exp: now + 7200,
            nbf: now + 3600,
        };
        let token = encode_claims(&claims, SECRET);
        let result = verify_session_token(Some(&token), Some(SECRET));
        assert_eq!(result.unwrap_err(), AuthRejection::TokenNotYetValid);
    }

    #[test]
    fn test_missing_user_id_is_invalid_payload() {
        #[derive(Serialize)]
        struct Anonymous {
            iat: u64,
            exp: u64,
            nbf: u64,
        }
        let now = now_unix();
        let claims = Anonymous {
            iat: now,
            exp: now + 3600,
            nbf: now,
        };
        let token = encode_claims(&claims, SECRET);
        let result = verify_session_token(Some(&token), Some(SECRET));
        assert_eq!(result.unwrap_err(), AuthRejection::InvalidPayload);
    }

    #[test]
    fn test_empty_user_id_is_invalid_payload() {
        let token = create_session_token("", SECRET).unwrap();
        let result = verify_session_token(Some(&token), Some(SECRET));
        assert_eq!(result.unwrap_err(), AuthRejection::InvalidPayload);
    }
}
