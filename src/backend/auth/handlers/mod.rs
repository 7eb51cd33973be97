/**
 * Authentication Handlers
 *
 * HTTP handlers for signup, login, logout, and the current-user endpoint.
 * Signup and login issue the `jwt` session cookie the auth gate consumes.
 */

pub mod login;
pub mod logout;
pub mod me;
pub mod signup;
pub mod types;

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;

use crate::backend::auth::sessions::TOKEN_TTL_SECS;
use crate::backend::middleware::auth::SESSION_COOKIE;

/// Build the `Set-Cookie` value carrying a freshly issued session token.
pub(crate) fn session_cookie_value(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; Max-Age={TOKEN_TTL_SECS}; HttpOnly; SameSite=Strict")
}

/// Build the `Set-Cookie` value that clears the session cookie.
pub(crate) fn clear_session_cookie_value() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Strict")
}
