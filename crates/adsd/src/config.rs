//! TOML configuration for the daemon

use std::net::SocketAddr;
use std::path::Path;

use ads_api::GatewayOptions;
use ads_sim::SimDeviceConfig;
use anyhow::Context;
use serde::Deserialize;

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DaemonConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Simulated device; the demo program when the section is missing
    #[serde(default)]
    pub device: SimDeviceConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
    /// Path prefix for the gateway routes
    #[serde(default)]
    pub base_path: String,
    /// Also serve the first-generation route names
    #[serde(default)]
    pub legacy_routes: bool,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 18090))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            base_path: String::new(),
            legacy_routes: false,
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// How the gateway is mounted
    pub fn gateway_options(&self) -> GatewayOptions {
        GatewayOptions {
            base_path: self.server.base_path.clone(),
            legacy_routes: self.server.legacy_routes,
        }
    }
}
