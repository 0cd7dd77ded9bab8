//! Maps domain errors onto HTTP status codes and JSON error bodies.

use crate::error::Error;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Domain error carried to the HTTP layer.
///
/// The body is always `{"error": CODE}` with the stable machine-readable
/// code; state conflicts map to 409, rejected input to 400.
pub(super) struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::AlreadyRunning
            | Error::AlreadyStopped
            | Error::NotRunning
            | Error::CannotResetWhileRunning => StatusCode::CONFLICT,
            Error::InvalidTimezone(_) => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(code = self.0.code(), %status, "request rejected");
        (status, Json(serde_json::json!({ "error": self.0.code() }))).into_response()
    }
}
