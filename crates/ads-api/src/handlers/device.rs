//! Runtime and device handlers (version, state, identity)

use ads_core::{AdsState, DeviceClient};
use axum::extract::State;

use crate::envelope::{respond, Payload};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::Gateway;

/// GET /version
pub async fn get_version<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
) -> Result<Payload, ApiError> {
    respond(gateway.device().get_version().await)
}

/// GET /state
pub async fn get_state<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
) -> Result<Payload, ApiError> {
    respond(gateway.device().get_state().await)
}

/// POST /state
/// Apply a state transition (WriteControl). Missing keys are sent as zero.
#[tracing::instrument(skip(gateway))]
pub async fn set_state<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
    JsonBody(request): JsonBody<AdsState>,
) -> Result<Payload, ApiError> {
    respond(gateway.device().set_state(request).await)
}

/// GET /deviceInfo
pub async fn get_device_info<D: DeviceClient>(
    State(gateway): State<Gateway<D>>,
) -> Result<Payload, ApiError> {
    respond(gateway.device().get_device_info().await)
}
