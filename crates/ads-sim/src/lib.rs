//! ads-sim - In-memory ADS device simulator
//!
//! Provides [`SimulatedDevice`], a data-driven stand-in for a PLC runtime.
//! It keeps a symbol table with typed values, a run/device state pair and a
//! connection switch, and implements [`ads_core::DeviceClient`] so the gateway
//! can be run and tested without hardware.

pub mod config;
pub mod device;
pub mod types;

pub use config::{SimDeviceConfig, SymbolConfig};
pub use device::{SimError, SimulatedDevice, PLC_DATA_INDEX_GROUP};
pub use types::AdsDataType;
