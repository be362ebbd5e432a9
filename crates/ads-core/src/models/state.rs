//! Runtime state models

use serde::{Deserialize, Serialize};

/// ADS state / device state pair.
///
/// Used both as the state record and as the WriteControl request body.
/// Absent keys deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdsState {
    /// ADS runtime state code (see [`AdsRunState`])
    #[serde(rename = "adsState", default)]
    pub ads_state: u16,
    /// Device-specific state code
    #[serde(rename = "deviceState", default)]
    pub device_state: u16,
}

impl AdsState {
    pub fn new(ads_state: u16, device_state: u16) -> Self {
        Self {
            ads_state,
            device_state,
        }
    }
}

/// ADS runtime state codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum AdsRunState {
    Invalid = 0,
    Idle = 1,
    Reset = 2,
    Init = 3,
    Start = 4,
    Run = 5,
    Stop = 6,
    SaveConfig = 7,
    LoadConfig = 8,
    PowerFailure = 9,
    PowerGood = 10,
    Error = 11,
    Shutdown = 12,
    Suspend = 13,
    Resume = 14,
    Config = 15,
    Reconfig = 16,
}

impl AdsRunState {
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl TryFrom<u16> for AdsRunState {
    type Error = u16;

    fn try_from(code: u16) -> Result<Self, u16> {
        let state = match code {
            0 => AdsRunState::Invalid,
            1 => AdsRunState::Idle,
            2 => AdsRunState::Reset,
            3 => AdsRunState::Init,
            4 => AdsRunState::Start,
            5 => AdsRunState::Run,
            6 => AdsRunState::Stop,
            7 => AdsRunState::SaveConfig,
            8 => AdsRunState::LoadConfig,
            9 => AdsRunState::PowerFailure,
            10 => AdsRunState::PowerGood,
            11 => AdsRunState::Error,
            12 => AdsRunState::Shutdown,
            13 => AdsRunState::Suspend,
            14 => AdsRunState::Resume,
            15 => AdsRunState::Config,
            16 => AdsRunState::Reconfig,
            other => return Err(other),
        };
        Ok(state)
    }
}

impl std::fmt::Display for AdsRunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AdsRunState::Invalid => "invalid",
            AdsRunState::Idle => "idle",
            AdsRunState::Reset => "reset",
            AdsRunState::Init => "init",
            AdsRunState::Start => "start",
            AdsRunState::Run => "run",
            AdsRunState::Stop => "stop",
            AdsRunState::SaveConfig => "save_config",
            AdsRunState::LoadConfig => "load_config",
            AdsRunState::PowerFailure => "power_failure",
            AdsRunState::PowerGood => "power_good",
            AdsRunState::Error => "error",
            AdsRunState::Shutdown => "shutdown",
            AdsRunState::Suspend => "suspend",
            AdsRunState::Resume => "resume",
            AdsRunState::Config => "config",
            AdsRunState::Reconfig => "reconfig",
        };
        f.write_str(s)
    }
}
