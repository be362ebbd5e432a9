//! Success side of the response envelope

use ads_core::DeviceResult;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// A device payload already serialized to JSON.
///
/// The body is exactly the serialized payload, unwrapped.
#[derive(Debug, Clone)]
pub struct Payload(Vec<u8>);

impl Payload {
    /// Serialize a payload, failing with [`ApiError::Encoding`]
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_vec(value)
            .map(Payload)
            .map_err(ApiError::Encoding)
    }

    /// Serialized bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl IntoResponse for Payload {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.0,
        )
            .into_response()
    }
}

/// Turn a device outcome into the envelope: payload on success, error otherwise
pub fn respond<T: Serialize>(result: DeviceResult<T>) -> Result<Payload, ApiError> {
    let value = result?;
    Payload::encode(&value)
}
