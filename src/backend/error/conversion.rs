/**
 * Error Conversion
 *
 * Converts backend errors into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are flat JSON with a single human-readable field:
 * ```json
 * { "message": "Unauthorized - No token provided" }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::backend::error::types::{ApiError, AuthRejection};

fn message_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        message_response(self.status_code(), self.message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        message_response(self.status_code(), self.message())
    }
}
