//! HTTP error type and response mapping.
//!
//! Every failure is caught at the handler boundary and converted to a JSON
//! body of the shape `{"error": <message>, "success": false}` with status
//! 400 for client input errors and 500 for everything else. No failure is
//! fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Missing or invalid client input.
    #[error("{0}")]
    BadRequest(String),

    /// Configuration, upstream or job failure; scoped to this request.
    #[error("{0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    success: bool,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = ErrorBody {
            error: message,
            success: false,
        };
        (status, axum::Json(body)).into_response()
    }
}
