//! DeviceClient trait - the core abstraction for ADS backends

use async_trait::async_trait;
use serde::Serialize;

use crate::error::DeviceResult;
use crate::models::AdsState;

/// Capability set the gateway needs from an ADS device.
///
/// Payload types are associated so each backend decides the exact JSON shape
/// of what it returns; the gateway only serializes them. Implementations are
/// shared between concurrent requests and must do their own synchronization.
///
/// Every method returns either a payload or an error. The gateway never
/// retries, caches or validates what comes back.
#[async_trait]
pub trait DeviceClient: Send + Sync + 'static {
    /// Runtime version record
    type Version: Serialize + Send;
    /// Runtime/device state record
    type State: Serialize + Send;
    /// Result of a state transition
    type StateChange: Serialize + Send;
    /// Device identity record
    type DeviceInfo: Serialize + Send;
    /// Metadata for a single symbol
    type Symbol: Serialize + Send;
    /// Metadata for every symbol
    type SymbolTable: Serialize + Send;
    /// Symbol value as returned after a read or write
    type Value: Serialize + Send;

    /// Query the runtime version
    async fn get_version(&self) -> DeviceResult<Self::Version>;

    /// Query the ADS/device state pair
    async fn get_state(&self) -> DeviceResult<Self::State>;

    /// Apply a state transition (ADS WriteControl).
    ///
    /// Keys missing from the request arrive as zero; whether zero means
    /// "unchanged" is up to the backend.
    async fn set_state(&self, state: AdsState) -> DeviceResult<Self::StateChange>;

    /// Query the device identity
    async fn get_device_info(&self) -> DeviceResult<Self::DeviceInfo>;

    /// Query metadata for one symbol
    async fn get_symbol_info(&self, name: &str) -> DeviceResult<Self::Symbol>;

    /// Query metadata for the whole symbol table
    async fn get_symbol_table(&self) -> DeviceResult<Self::SymbolTable>;

    /// Read a symbol value
    async fn get_symbol_value(&self, name: &str) -> DeviceResult<Self::Value>;

    /// Write a symbol value and return the value the device now holds,
    /// which may differ from `value` after type coercion.
    async fn set_symbol_value(
        &self,
        name: &str,
        value: serde_json::Value,
    ) -> DeviceResult<Self::Value>;

    /// Enumerate symbol names
    async fn list_symbols(&self) -> DeviceResult<Vec<String>>;
}
