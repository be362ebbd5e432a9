//! API error types and conversions

use ads_core::DeviceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Everything that can end a request unsuccessfully.
///
/// All variants share one wire shape, `{"error":"<message>"}` with status 500;
/// callers tell them apart by message text only.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body or path could not be parsed (no device call was made)
    #[error("{0}")]
    Request(String),
    /// The device reported a failure
    #[error(transparent)]
    Device(#[from] DeviceError),
    /// The device's payload could not be serialized
    #[error("{0}")]
    Encoding(#[source] serde_json::Error),
}

impl ApiError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Error envelope
#[derive(Serialize)]
struct ErrorResponse<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        match self {
            ApiError::Request(_) => tracing::debug!(%message, "Rejected request"),
            ApiError::Device(_) => tracing::error!(%message, "Device error"),
            ApiError::Encoding(_) => tracing::error!(%message, "Failed to encode device payload"),
        }

        (status, Json(ErrorResponse { error: &message })).into_response()
    }
}
