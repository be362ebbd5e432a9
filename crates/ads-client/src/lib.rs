//! ads-client - HTTP client for the ADS REST gateway
//!
//! Typed access to every gateway route, returning the `ads-core` models.
//!
//! # Example
//!
//! ```ignore
//! use ads_client::AdsClient;
//!
//! let client = AdsClient::new("http://localhost:18090")?;
//! let state = client.state().await?;
//! let value = client.write_symbol_value("MAIN.counter", serde_json::json!(7)).await?;
//! ```

pub mod client;
pub mod error;
pub mod testing;

pub use client::AdsClient;
pub use error::{ClientError, Result};
