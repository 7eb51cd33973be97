/**
 * Routes Module
 *
 * Router assembly for the backend server.
 */

pub mod api_routes;
pub mod router;
