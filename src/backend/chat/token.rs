/**
 * Provider Token Issuance
 *
 * GET /api/chat/token mints a token for the external chat provider, scoped
 * to the authenticated user. The provider accepts HS256 tokens signed with
 * the API secret whose payload names the user; the client SDK presents the
 * token when it connects.
 */

use axum::{extract::State, response::Json};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::config::ServerConfig;
use crate::shared::ProviderTokenResponse;

/// Payload of a provider token. No expiry; the provider treats these as
/// long-lived user tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderClaims {
    pub user_id: String,
}

/// Sign a provider token for a user.
pub fn mint_provider_token(
    user_id: &str,
    api_secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = ProviderClaims {
        user_id: user_id.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(api_secret.as_ref()),
    )
}

/// Provider token endpoint. Mounted behind the auth gate.
pub async fn issue_chat_token(
    State(config): State<Arc<ServerConfig>>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProviderTokenResponse>, ApiError> {
    let token = mint_provider_token(&user.id, &config.stream_api_secret).map_err(|e| {
        tracing::error!("Failed to mint provider token: {e}");
        ApiError::Internal
    })?;

    tracing::debug!("Issued provider token for user {}", user.id);
    Ok(Json(ProviderTokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn test_minted_token_carries_user_id() {
        let token = mint_provider_token("u1", "provider-secret").unwrap();

        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        let data = decode::<ProviderClaims>(
            &token,
            &DecodingKey::from_secret("provider-secret".as_ref()),
            &validation,
        )
        .unwrap();
        assert_eq!(data.claims.user_id, "u1");
    }

    #[test]
    fn test_minted_token_rejects_wrong_secret() {
        let token = mint_provider_token("u1", "provider-secret").unwrap();

        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        let result = decode::<ProviderClaims>(
            &token,
            &DecodingKey::from_secret("other-secret".as_ref()),
            &validation,
        );
        assert!(result.is_err());
    }
}
