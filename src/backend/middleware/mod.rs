/**
 * Middleware Module
 *
 * Request middleware for the backend server.
 */

pub mod auth;
