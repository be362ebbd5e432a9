//! Simulated ADS device

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use ads_core::{
    AdsDeviceInfo, AdsRunState, AdsState, AdsSymbol, AdsSymbolTable, AdsVersion, DeviceClient,
    DeviceError, DeviceResult,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::{SimDeviceConfig, SymbolConfig};
use crate::types::AdsDataType;

/// Index group of the PLC data area
pub const PLC_DATA_INDEX_GROUP: u32 = 0x4040;

/// Errors building a simulator from configuration
#[derive(Debug, Error)]
pub enum SimError {
    #[error("symbol {symbol}: {reason}")]
    InvalidSymbol { symbol: String, reason: String },

    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),
}

/// A declared variable with its current value
#[derive(Debug, Clone)]
struct SimSymbol {
    meta: AdsSymbol,
    data_type: AdsDataType,
    value: Value,
}

/// Simulated PLC runtime
pub struct SimulatedDevice {
    info: AdsDeviceInfo,
    state: RwLock<AdsState>,
    symbols: RwLock<BTreeMap<String, SimSymbol>>,
    next_offset: RwLock<u32>,
    connected: AtomicBool,
}

impl SimulatedDevice {
    /// Create a device with no symbols, in Run state
    pub fn new(name: impl Into<String>, version: AdsVersion) -> Self {
        Self {
            info: AdsDeviceInfo {
                name: name.into(),
                version,
            },
            state: RwLock::new(AdsState::new(AdsRunState::Run.code(), 0)),
            symbols: RwLock::new(BTreeMap::new()),
            next_offset: RwLock::new(0),
            connected: AtomicBool::new(true),
        }
    }

    /// Create a device from its configuration
    pub fn from_config(config: &SimDeviceConfig) -> Result<Self, SimError> {
        let device = Self::new(config.name.clone(), config.version);
        *device.state.write() = AdsState::new(config.ads_state, config.device_state);

        for symbol in &config.symbols {
            device.add_symbol(symbol)?;
        }

        info!(
            name = %device.info.name,
            version = %device.info.version,
            symbols = config.symbols.len(),
            "Simulated device ready"
        );
        Ok(device)
    }

    /// Device with the built-in demo program
    pub fn demo() -> Self {
        match Self::from_config(&SimDeviceConfig::default()) {
            Ok(device) => device,
            Err(e) => {
                error!("Demo program rejected, starting without symbols: {}", e);
                Self::new("ADS Simulator", AdsVersion::default())
            }
        }
    }

    /// Declare a symbol
    pub fn add_symbol(&self, def: &SymbolConfig) -> Result<(), SimError> {
        let invalid = |reason: String| SimError::InvalidSymbol {
            symbol: def.name.clone(),
            reason,
        };

        let data_type: AdsDataType = def.data_type.parse().map_err(invalid)?;
        let value = match &def.value {
            Some(initial) => data_type.coerce(initial).map_err(invalid)?,
            None => data_type.default_value(),
        };

        let mut symbols = self.symbols.write();
        if symbols.contains_key(&def.name) {
            return Err(SimError::DuplicateSymbol(def.name.clone()));
        }

        let mut next_offset = self.next_offset.write();
        let index_offset = def.index_offset.unwrap_or(*next_offset);
        *next_offset = (*next_offset).max(index_offset.saturating_add(data_type.size()));

        let meta = AdsSymbol {
            name: def.name.clone(),
            index_group: def.index_group.unwrap_or(PLC_DATA_INDEX_GROUP),
            index_offset,
            size: data_type.size(),
            data_type: data_type.to_string(),
            comment: def.comment.clone(),
        };
        symbols.insert(
            def.name.clone(),
            SimSymbol {
                meta,
                data_type,
                value,
            },
        );
        Ok(())
    }

    /// Simulate losing (or regaining) the link to the device
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Current value of a symbol, bypassing the connection check
    pub fn peek(&self, name: &str) -> Option<Value> {
        self.symbols.read().get(name).map(|s| s.value.clone())
    }

    fn ensure_connected(&self) -> DeviceResult<()> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DeviceError::NotConnected)
        }
    }
}

/// Work out the state after a WriteControl request.
///
/// Zero in either field leaves that field unchanged.
fn next_state(current: AdsState, request: AdsState) -> DeviceResult<AdsState> {
    let mut next = current;

    if request.ads_state != 0 {
        let requested = AdsRunState::try_from(request.ads_state).map_err(|code| {
            DeviceError::InvalidState(format!("unknown ADS state {}", code))
        })?;
        let reached = match requested {
            AdsRunState::Run | AdsRunState::Stop | AdsRunState::Config => requested,
            AdsRunState::Reset => AdsRunState::Stop,
            AdsRunState::Reconfig => AdsRunState::Config,
            other => {
                return Err(DeviceError::InvalidState(format!(
                    "cannot switch runtime to {}",
                    other
                )))
            }
        };
        next.ads_state = reached.code();
    }

    if request.device_state != 0 {
        next.device_state = request.device_state;
    }

    Ok(next)
}

#[async_trait]
impl DeviceClient for SimulatedDevice {
    type Version = AdsVersion;
    type State = AdsState;
    type StateChange = AdsState;
    type DeviceInfo = AdsDeviceInfo;
    type Symbol = AdsSymbol;
    type SymbolTable = AdsSymbolTable;
    type Value = Value;

    async fn get_version(&self) -> DeviceResult<AdsVersion> {
        self.ensure_connected()?;
        Ok(self.info.version)
    }

    async fn get_state(&self) -> DeviceResult<AdsState> {
        self.ensure_connected()?;
        Ok(*self.state.read())
    }

    async fn set_state(&self, request: AdsState) -> DeviceResult<AdsState> {
        self.ensure_connected()?;
        let mut state = self.state.write();
        let previous = *state;
        let next = next_state(previous, request)?;
        debug!(from = ?previous, to = ?next, "WriteControl");
        *state = next;
        Ok(next)
    }

    async fn get_device_info(&self) -> DeviceResult<AdsDeviceInfo> {
        self.ensure_connected()?;
        Ok(self.info.clone())
    }

    async fn get_symbol_info(&self, name: &str) -> DeviceResult<AdsSymbol> {
        self.ensure_connected()?;
        self.symbols
            .read()
            .get(name)
            .map(|s| s.meta.clone())
            .ok_or_else(|| DeviceError::SymbolNotFound(name.to_string()))
    }

    async fn get_symbol_table(&self) -> DeviceResult<AdsSymbolTable> {
        self.ensure_connected()?;
        Ok(self
            .symbols
            .read()
            .iter()
            .map(|(name, s)| (name.clone(), s.meta.clone()))
            .collect())
    }

    async fn get_symbol_value(&self, name: &str) -> DeviceResult<Value> {
        self.ensure_connected()?;
        self.peek(name)
            .ok_or_else(|| DeviceError::SymbolNotFound(name.to_string()))
    }

    async fn set_symbol_value(&self, name: &str, value: Value) -> DeviceResult<Value> {
        self.ensure_connected()?;
        let mut symbols = self.symbols.write();
        let symbol = symbols
            .get_mut(name)
            .ok_or_else(|| DeviceError::SymbolNotFound(name.to_string()))?;

        let stored = symbol
            .data_type
            .coerce(&value)
            .map_err(|reason| DeviceError::TypeMismatch {
                symbol: name.to_string(),
                reason,
            })?;
        debug!(symbol = name, value = %stored, "Write symbol");
        symbol.value = stored.clone();
        Ok(stored)
    }

    async fn list_symbols(&self) -> DeviceResult<Vec<String>> {
        self.ensure_connected()?;
        Ok(self.symbols.read().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn device() -> SimulatedDevice {
        let device = SimulatedDevice::new("test", AdsVersion::default());
        device
            .add_symbol(&SymbolConfig::new("MAIN.b", "INT").with_value(json!(3)))
            .unwrap();
        device
            .add_symbol(&SymbolConfig::new("MAIN.a", "STRING(4)"))
            .unwrap();
        device
    }

    #[test]
    fn test_offsets_are_sequential() {
        let device = device();
        let symbols = device.symbols.read();
        assert_eq!(symbols["MAIN.b"].meta.index_offset, 0);
        assert_eq!(symbols["MAIN.b"].meta.size, 2);
        assert_eq!(symbols["MAIN.a"].meta.index_offset, 2);
        assert_eq!(symbols["MAIN.a"].meta.size, 5);
        assert_eq!(symbols["MAIN.a"].meta.index_group, PLC_DATA_INDEX_GROUP);
        assert_eq!(symbols["MAIN.a"].meta.data_type, "STRING(4)");
    }

    #[test]
    fn test_rejects_bad_declarations() {
        let device = device();
        assert!(matches!(
            device.add_symbol(&SymbolConfig::new("MAIN.b", "INT")),
            Err(SimError::DuplicateSymbol(_))
        ));
        assert!(matches!(
            device.add_symbol(&SymbolConfig::new("MAIN.c", "FOO")),
            Err(SimError::InvalidSymbol { .. })
        ));
        assert!(matches!(
            device.add_symbol(&SymbolConfig::new("MAIN.d", "BYTE").with_value(json!(300))),
            Err(SimError::InvalidSymbol { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let device = device();
        assert_eq!(device.list_symbols().await.unwrap(), vec!["MAIN.a", "MAIN.b"]);
        let table = device.get_symbol_table().await.unwrap();
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["MAIN.a", "MAIN.b"]);
    }

    #[tokio::test]
    async fn test_write_coerces_and_persists() {
        let device = device();
        let stored = device
            .set_symbol_value("MAIN.a", json!("abcdef"))
            .await
            .unwrap();
        assert_eq!(stored, json!("abcd"));
        assert_eq!(device.get_symbol_value("MAIN.a").await.unwrap(), json!("abcd"));
    }

    #[tokio::test]
    async fn test_write_type_mismatch_keeps_value() {
        let device = device();
        let err = device
            .set_symbol_value("MAIN.b", json!("x"))
            .await
            .unwrap_err();
        assert!(matches!(err, DeviceError::TypeMismatch { .. }));
        assert_eq!(device.peek("MAIN.b"), Some(json!(3)));
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let device = device();
        let err = device.get_symbol_value("MAIN.zz").await.unwrap_err();
        assert_eq!(err.to_string(), "symbol not found: MAIN.zz");
        assert!(device.get_symbol_info("main.b").await.is_err());
    }

    #[tokio::test]
    async fn test_disconnected_device_fails() {
        let device = device();
        device.set_connected(false);
        assert!(matches!(
            device.get_version().await,
            Err(DeviceError::NotConnected)
        ));
        assert!(device.list_symbols().await.is_err());
        device.set_connected(true);
        assert!(device.list_symbols().await.is_ok());
    }

    #[test]
    fn test_state_transitions() {
        let run = AdsState::new(5, 0);
        assert_eq!(next_state(run, AdsState::new(6, 0)).unwrap(), AdsState::new(6, 0));
        assert_eq!(next_state(run, AdsState::new(2, 0)).unwrap(), AdsState::new(6, 0));
        assert_eq!(next_state(run, AdsState::new(16, 0)).unwrap(), AdsState::new(15, 0));
        assert!(next_state(run, AdsState::new(11, 0)).is_err());
        assert!(next_state(run, AdsState::new(99, 0)).is_err());
    }

    #[test]
    fn test_zero_means_unchanged() {
        let current = AdsState::new(5, 3);
        assert_eq!(next_state(current, AdsState::new(0, 7)).unwrap(), AdsState::new(5, 7));
        assert_eq!(next_state(current, AdsState::new(6, 0)).unwrap(), AdsState::new(6, 3));
        assert_eq!(next_state(current, AdsState::default()).unwrap(), current);
    }

    #[tokio::test]
    async fn test_set_state_applies() {
        let device = device();
        let result = device.set_state(AdsState::new(6, 4)).await.unwrap();
        assert_eq!(result, AdsState::new(6, 4));
        assert_eq!(device.get_state().await.unwrap(), AdsState::new(6, 4));
    }

    #[tokio::test]
    async fn test_demo_program_loads() {
        let device = SimulatedDevice::demo();
        assert_eq!(device.get_device_info().await.unwrap().name, "ADS Simulator");
        assert_eq!(device.get_version().await.unwrap().to_string(), "3.1.4024");
        assert_eq!(device.list_symbols().await.unwrap().len(), 4);
        assert_eq!(device.peek("MAIN.setpoint"), Some(json!(21.5)));
    }

    #[test]
    fn test_rejects_unrepresentable_string_length() {
        let device = device();
        let err = device
            .add_symbol(&SymbolConfig::new("MAIN.huge", "STRING(4294967295)"))
            .unwrap_err();
        assert!(matches!(err, SimError::InvalidSymbol { .. }));
        assert_eq!(device.peek("MAIN.huge"), None);
    }
}
