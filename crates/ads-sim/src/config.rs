//! Simulator configuration
//!
//! Usually embedded as the `[device]` section of the daemon's TOML file.

use ads_core::AdsVersion;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Simulated device definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimDeviceConfig {
    /// Device name reported by ReadDeviceInfo
    #[serde(default = "default_name")]
    pub name: String,
    /// Runtime version
    #[serde(default = "default_version")]
    pub version: AdsVersion,
    /// Initial ADS state (5 = Run)
    #[serde(default = "default_ads_state")]
    pub ads_state: u16,
    /// Initial device state
    #[serde(default)]
    pub device_state: u16,
    /// Symbol declarations
    #[serde(default)]
    pub symbols: Vec<SymbolConfig>,
}

/// A single symbol declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolConfig {
    /// Fully qualified name (e.g., "MAIN.counter")
    pub name: String,
    /// Type name (e.g., "INT", "STRING(20)")
    #[serde(rename = "type")]
    pub data_type: String,
    /// Initial value; the type's zero value if absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Declaration comment
    #[serde(default)]
    pub comment: String,
    /// Index group (defaults to the PLC data area)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_group: Option<u32>,
    /// Index offset (assigned sequentially if absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_offset: Option<u32>,
}

impl SymbolConfig {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            value: None,
            comment: String::new(),
            index_group: None,
            index_offset: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

fn default_name() -> String {
    "ADS Simulator".to_string()
}

fn default_version() -> AdsVersion {
    AdsVersion {
        version: 3,
        revision: 1,
        build: 4024,
    }
}

fn default_ads_state() -> u16 {
    5
}

impl Default for SimDeviceConfig {
    /// A small demo program, used when no `[device]` section is configured
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            ads_state: default_ads_state(),
            device_state: 0,
            symbols: vec![
                SymbolConfig::new("MAIN.counter", "INT").with_comment("cycle counter"),
                SymbolConfig::new("MAIN.enable", "BOOL")
                    .with_value(Value::Bool(true))
                    .with_comment("enable output stage"),
                SymbolConfig::new("MAIN.setpoint", "REAL")
                    .with_value(Value::from(21.5))
                    .with_comment("temperature setpoint"),
                SymbolConfig::new("MAIN.label", "STRING(20)")
                    .with_value(Value::from("line 1"))
                    .with_comment("station label"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_toml_section() {
        let toml_str = r#"
name = "Line 1 PLC"
version = { version = 3, revision = 1, build = 4026 }
device_state = 2

[[symbols]]
name = "MAIN.speed"
type = "DINT"
value = 1200
comment = "conveyor speed"

[[symbols]]
name = "GVL.mode"
type = "STRING(10)"
index_group = 16416
index_offset = 100
"#;
        let config: SimDeviceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.name, "Line 1 PLC");
        assert_eq!(config.version.build, 4026);
        assert_eq!(config.ads_state, 5);
        assert_eq!(config.device_state, 2);
        assert_eq!(config.symbols.len(), 2);
        assert_eq!(config.symbols[0].value, Some(Value::from(1200)));
        assert_eq!(config.symbols[1].index_offset, Some(100));
        assert_eq!(config.symbols[1].value, None);
    }

    #[test]
    fn test_section_without_symbols_is_empty() {
        let config: SimDeviceConfig = toml::from_str(r#"name = "Empty""#).unwrap();
        assert!(config.symbols.is_empty());
    }

    #[test]
    fn test_default_has_demo_symbols() {
        let config = SimDeviceConfig::default();
        assert_eq!(config.symbols.len(), 4);
    }
}
