//! Machine configuration, loaded from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TvMode {
    Pal,
    #[default]
    Ntsc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub tv_mode: TvMode,
    /// Hold OPTION during coldstart
    pub disable_basic: bool,
    pub loading_basic: bool,
    /// Hold START during coldstart (boot from tape)
    pub hold_start: bool,
    pub console_hold_frames: u32,
    /// Keep the SIO escape traps when the OS is patched
    pub enable_sio_patch: bool,
    pub rtime8_enabled: bool,
    /// Only accept raw images found in the fingerprint catalog
    pub strict_catalog: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            tv_mode: TvMode::Ntsc,
            disable_basic: true,
            loading_basic: false,
            hold_start: false,
            console_hold_frames: 2,
            enable_sio_patch: true,
            rtime8_enabled: false,
            strict_catalog: false,
        }
    }
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
