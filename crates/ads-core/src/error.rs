//! Common error types for device backends

use thiserror::Error;

/// Result type for device operations
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors that can occur while talking to an ADS device
#[derive(Debug, Error)]
pub enum DeviceError {
    /// No route to the device
    #[error("device not connected")]
    NotConnected,

    /// Symbol name is unknown to the device
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// Value cannot be stored in the symbol's type
    #[error("type mismatch for {symbol}: {reason}")]
    TypeMismatch {
        /// Symbol that rejected the value
        symbol: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Requested state transition is not allowed
    #[error("invalid state transition: {0}")]
    InvalidState(String),

    /// Any other backend failure; displayed verbatim
    #[error("{0}")]
    Other(String),
}

impl DeviceError {
    /// Build an [`DeviceError::Other`] from anything printable
    pub fn other(msg: impl Into<String>) -> Self {
        DeviceError::Other(msg.into())
    }
}
