/**
 * Backend Error Handling
 *
 * Error types for the HTTP backend and their conversion to responses.
 */

pub mod conversion;
pub mod types;

pub use types::{ApiError, AuthRejection};
