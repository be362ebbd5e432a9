//! ads-core - Core traits and types for ADS gateways
//!
//! This crate provides the [`DeviceClient`] abstraction that lets the HTTP
//! gateway talk to any ADS runtime (real hardware, a simulator, a test double)
//! together with the record types those runtimes usually exchange.

pub mod backend;
pub mod error;
pub mod models;

pub use backend::DeviceClient;
pub use error::{DeviceError, DeviceResult};
pub use models::*;
