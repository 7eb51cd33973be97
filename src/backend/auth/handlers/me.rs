/**
 * Current User Handler
 *
 * GET /api/auth/me returns the principal resolved by the auth gate. The
 * route is mounted behind the gate, so by the time this handler runs the
 * user is already verified and loaded with the credential field excluded.
 */

use axum::response::Json;

use crate::backend::auth::users::UserProfile;
use crate::backend::middleware::auth::AuthUser;

/// Get current user handler
pub async fn get_me(AuthUser(user): AuthUser) -> Json<UserProfile> {
    Json(user)
}
