//! Device identity models

use serde::{Deserialize, Serialize};

/// ADS runtime version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsVersion {
    /// Major version
    pub version: u8,
    /// Revision
    pub revision: u8,
    /// Build number
    pub build: u16,
}

impl std::fmt::Display for AdsVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.version, self.revision, self.build)
    }
}

/// Device identity as reported by ReadDeviceInfo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsDeviceInfo {
    /// Device name
    pub name: String,
    /// Runtime version
    pub version: AdsVersion,
}
