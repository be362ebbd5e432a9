//! Data models for ADS devices

pub mod device;
pub mod state;
pub mod symbol;

pub use device::*;
pub use state::*;
pub use symbol::*;
