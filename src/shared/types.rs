/**
 * Shared Wire Types
 *
 * Types serialized by the backend and deserialized by the client.
 */

use serde::{Deserialize, Serialize};

/// Response body of the provider token issuance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTokenResponse {
    /// Provider token consumable by the chat client SDK
    pub token: String,
}

/// Minimal user identity used by the chat client.
///
/// This is the subset of the authenticated user's profile that the provider
/// needs when a client session is connected: identifier, display name and
/// avatar. Extra fields in the `/api/auth/me` response are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier
    pub id: String,
    /// Display name
    pub full_name: String,
    /// Avatar image URL
    pub profile_pic: String,
}
