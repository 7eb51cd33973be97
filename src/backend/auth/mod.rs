/**
 * Authentication Module
 *
 * Session tokens, user model, persistence seam, and auth HTTP handlers.
 */

pub mod handlers;
pub mod sessions;
pub mod store;
pub mod users;
