//! Symbol (named variable) models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Symbol metadata as found in the device's symbol table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsSymbol {
    /// Fully qualified name (e.g., "MAIN.counter")
    pub name: String,
    /// ADS index group
    pub index_group: u32,
    /// ADS index offset
    pub index_offset: u32,
    /// Size in bytes
    pub size: u32,
    /// IEC 61131-3 type name (e.g., "INT", "STRING(80)")
    #[serde(rename = "type")]
    pub data_type: String,
    /// Declaration comment
    #[serde(default)]
    pub comment: String,
}

/// Full symbol table keyed by symbol name
pub type AdsSymbolTable = BTreeMap<String, AdsSymbol>;
