//! Error types for gateway client operations

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while calling the gateway
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Gateway returned the error envelope
    #[error("Gateway error {status}: {message}")]
    GatewayError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Message carried by the gateway's error envelope, if any
    pub fn gateway_message(&self) -> Option<&str> {
        match self {
            ClientError::GatewayError { message, .. } => Some(message),
            _ => None,
        }
    }
}
