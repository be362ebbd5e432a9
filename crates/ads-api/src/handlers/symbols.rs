//! Symbol handlers (metadata, values, listing)

use ads_core::DeviceClient;
use axum::extract::State;
use serde_json::{Map, Value};

use crate::envelope::{respond, Payload};
use crate::error::ApiError;
use crate::extract::{JsonBody, SymbolName};
use crate::state::Gateway;

/// GET /symbolInfo/{name}
#[tracing::instrument(skip(gateway))]
pub async fn get_symbol_info<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
    SymbolName(name): SymbolName,
) -> Result<Payload, ApiError> {
    respond(gateway.device().get_symbol_info(&name).await)
}

/// GET /symbolInfo
pub async fn get_symbol_table<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
) -> Result<Payload, ApiError> {
    respond(gateway.device().get_symbol_table().await)
}

/// GET /symbolValue/{name}
#[tracing::instrument(skip(gateway))]
pub async fn get_symbol_value<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
    SymbolName(name): SymbolName,
) -> Result<Payload, ApiError> {
    respond(gateway.device().get_symbol_value(&name).await)
}

/// POST /symbolValue/{name}
///
/// Writes `body["data"]` when the key is present (even if `null`). Without
/// it the request is served as a plain read and nothing is written.
#[tracing::instrument(skip(gateway, body))]
pub async fn set_symbol_value<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
    SymbolName(name): SymbolName,
    JsonBody(mut body): JsonBody<Map<String, Value>>,
) -> Result<Payload, ApiError> {
    let device = gateway.device();
    match body.remove("data") {
        Some(value) => respond(device.set_symbol_value(&name, value).await),
        None => {
            tracing::debug!("No \"data\" key in body, reading instead");
            respond(device.get_symbol_value(&name).await)
        }
    }
}

/// GET /symbolList
pub async fn list_symbols<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
) -> Result<Payload, ApiError> {
    respond(gateway.device().list_symbols().await)
}
