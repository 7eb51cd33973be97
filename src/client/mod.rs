/**
 * Client Module
 *
 * Client-side chat bootstrap: API access to the backend, the abstract
 * chat provider seam, and the explicit bootstrap state machine that takes
 * an authenticated user from "page load" to a ready two-party channel.
 */

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod provider;
