//! Request extractors that fail with [`ApiError`] instead of axum's rejections

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, MatchedPath, OriginalUri, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// The `{name}` path segment, exactly as it appeared in the URL.
///
/// No percent-decoding or normalization; unknown names are the device's
/// problem. axum's own path extractors decode captures, so the segment is
/// cut out of the original URI using the matched route pattern.
#[derive(Debug, Clone)]
pub struct SymbolName(pub String);

impl<S> FromRequestParts<S> for SymbolName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let matched = MatchedPath::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Request(e.body_text()))?;
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| original.0.clone())
            .unwrap_or_else(|| parts.uri.clone());

        raw_segment(matched.as_str(), uri.path(), "{name}")
            .map(|name| SymbolName(name.to_string()))
            .ok_or_else(|| ApiError::Request("missing path parameter: name".to_string()))
    }
}

/// Segment of `path` sitting where `capture` sits in `pattern`.
///
/// Counted from the end, so a prefix the pattern does not know about
/// (e.g. a service nested by the host) does not shift the result.
fn raw_segment<'a>(pattern: &str, path: &'a str, capture: &str) -> Option<&'a str> {
    let from_end = pattern.rsplit('/').position(|segment| segment == capture)?;
    path.rsplit('/').nth(from_end)
}

/// JSON request body.
///
/// The body is read in full and handed to `serde_json` regardless of
/// content-type; parse errors carry serde_json's message verbatim.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Request(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::Request(e.to_string()))
    }
}
