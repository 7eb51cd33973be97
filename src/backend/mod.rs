/**
 * Backend Module
 *
 * Server-side code: configuration, state, persistence, the authentication
 * gate, HTTP handlers, and router assembly.
 */

pub mod auth;
pub mod chat;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
