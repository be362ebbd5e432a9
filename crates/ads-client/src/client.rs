//! ADS gateway HTTP client implementation

use std::time::Duration;

use ads_core::{AdsDeviceInfo, AdsState, AdsSymbol, AdsSymbolTable, AdsVersion};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ClientError, Result};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error envelope returned by the gateway
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Body of a symbol write
#[derive(Serialize)]
struct WriteRequest<'a> {
    data: &'a Value,
}

/// ADS gateway REST client
#[derive(Debug, Clone)]
pub struct AdsClient {
    client: Client,
    /// Base URL without trailing slash, including any mount prefix
    base_url: String,
}

impl AdsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Gateway root, including the mount prefix if there is one
    ///   (e.g., "http://localhost:18090" or "http://plc-gw:8080/ads")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        // Validate early so every later join is a plain concatenation
        let parsed = Url::parse(base_url)?;
        let base_url = parsed.as_str().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    // =========================================================================
    // Runtime
    // =========================================================================

    /// GET /version
    #[instrument(skip(self))]
    pub async fn version(&self) -> Result<AdsVersion> {
        self.get_json("/version").await
    }

    /// GET /state
    #[instrument(skip(self))]
    pub async fn state(&self) -> Result<AdsState> {
        self.get_json("/state").await
    }

    /// POST /state
    #[instrument(skip(self))]
    pub async fn set_state(&self, state: AdsState) -> Result<AdsState> {
        self.post_json("/state", &state).await
    }

    /// GET /deviceInfo
    #[instrument(skip(self))]
    pub async fn device_info(&self) -> Result<AdsDeviceInfo> {
        self.get_json("/deviceInfo").await
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    /// GET /symbolInfo/{name}
    ///
    /// The name is placed in the URL as given.
    #[instrument(skip(self))]
    pub async fn symbol_info(&self, name: &str) -> Result<AdsSymbol> {
        self.get_json(&format!("/symbolInfo/{}", name)).await
    }

    /// GET /symbolInfo
    #[instrument(skip(self))]
    pub async fn symbol_table(&self) -> Result<AdsSymbolTable> {
        self.get_json("/symbolInfo").await
    }

    /// GET /symbolValue/{name}
    #[instrument(skip(self))]
    pub async fn symbol_value(&self, name: &str) -> Result<Value> {
        self.get_json(&format!("/symbolValue/{}", name)).await
    }

    /// POST /symbolValue/{name} with `{"data": value}`
    ///
    /// Returns the value the device stored, which may differ from `value`.
    #[instrument(skip(self, value))]
    pub async fn write_symbol_value(&self, name: &str, value: Value) -> Result<Value> {
        self.post_json(
            &format!("/symbolValue/{}", name),
            &WriteRequest { data: &value },
        )
        .await
    }

    /// GET /symbolList
    #[instrument(skip(self))]
    pub async fn list_symbols(&self) -> Result<Vec<String>> {
        self.get_json("/symbolList").await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        self.parse_response(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path)?;
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ErrorResponse>(&bytes) {
                Ok(err) => err.error,
                Err(_) => format!("HTTP {}", status),
            };
            return Err(ClientError::GatewayError {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::ParseError(e.to_string()))
    }
}
