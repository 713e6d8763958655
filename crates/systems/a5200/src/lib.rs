//! Atari 5200 system implementation
//!
//! Covers the memory-mapped side of the machine: page-tagged address space,
//! chip register dispatch, ROM overlays, cartridge identification and bank
//! switching, the escape-trap table, reset sequencing and snapshots. The CPU
//! core and the video/audio pipelines are collaborators that plug in through
//! [`emu_core::CpuRegisters`] and [`chips::Chip`].

#![allow(clippy::upper_case_acronyms)]

pub mod bus;
pub mod cartridge;
pub mod chips;
pub mod config;
pub mod cpu;
pub mod detect;
pub mod escape;
mod machine;
pub mod memory;
pub mod overlay;
pub mod snapshot;

use emu_core::{CpuRegisters, MountPointInfo, System};
use serde::de::Error as _;
use serde_json::Value;
use thiserror::Error;

pub use cartridge::{CartInfo, CartType, CartridgeError};
pub use config::{ConfigError, MachineConfig, TvMode};
pub use detect::{FileType, FormatError};
pub use escape::{TrapContext, TrapError, TrapOutcome};
pub use machine::{Atari5200, MachineState, BIOS_SIZE};
pub use snapshot::{MachineSnapshot, SnapshotError};

#[derive(Debug, Error)]
pub enum A5200Error {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Cartridge error: {0}")]
    Cartridge(#[from] CartridgeError),
    #[error("Trap error: {0}")]
    Trap(#[from] TrapError),
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid mount point: {0}")]
    InvalidMountPoint(String),
    #[error("Machine crashed on escape {code:#04x} at {pc:#06x}")]
    MachineCrashed { code: u8, pc: u16 },
    #[error("BIOS must be {} bytes, got {size}", BIOS_SIZE)]
    InvalidBios { size: usize },
}

/// RAM saved in JSON states
const STATE_RAM_END: usize = 0x4000;

fn state_error(msg: impl std::fmt::Display) -> serde_json::Error {
    serde_json::Error::custom(msg)
}

impl<C: CpuRegisters> System for Atari5200<C> {
    type Error = A5200Error;

    fn reset(&mut self) {
        self.coldstart();
    }

    fn save_state(&self) -> Value {
        serde_json::json!({
            "version": 1,
            "system": "a5200",
            "snapshot": self.snapshot(),
            "ram": &self.space().bytes()[..STATE_RAM_END],
            "gtia": &self.bus.gtia,
            "pokey": &self.bus.pokey,
            "pia": &self.bus.pia,
            "antic": &self.bus.antic,
        })
    }

    fn load_state(&mut self, v: &Value) -> Result<(), serde_json::Error> {
        let version = v["version"].as_u64().unwrap_or(0);
        if version != 1 {
            return Err(state_error(format!("unsupported state version {}", version)));
        }
        let system = v["system"].as_str().unwrap_or("");
        if system != "a5200" {
            return Err(state_error(format!("state is for '{}', not a5200", system)));
        }

        let snapshot: MachineSnapshot = serde_json::from_value(v["snapshot"].clone())?;
        let ram: Vec<u8> = serde_json::from_value(v["ram"].clone())?;
        if ram.len() != STATE_RAM_END {
            return Err(state_error(format!("expected {} bytes of RAM", STATE_RAM_END)));
        }
        let inserted_super = self.bus.cartridge.cart_type().is_super();
        if snapshot.bank.is_some() != inserted_super {
            return Err(state_error("state was saved with a different cartridge"));
        }
        let gtia = serde_json::from_value(v["gtia"].clone())?;
        let pokey = serde_json::from_value(v["pokey"].clone())?;
        let pia = serde_json::from_value(v["pia"].clone())?;
        let antic = serde_json::from_value(v["antic"].clone())?;

        if let Some(bank) = snapshot.bank {
            let index = usize::try_from(bank).map_err(state_error)?;
            self.bus
                .cartridge
                .set_bank(&mut self.bus.space, index)
                .map_err(state_error)?;
        }
        self.bus.space.bytes_mut()[..STATE_RAM_END].copy_from_slice(&ram);
        self.bus.gtia = gtia;
        self.bus.pokey = pokey;
        self.bus.pia = pia;
        self.bus.antic = antic;
        Ok(())
    }

    fn supports_save_states(&self) -> bool {
        true
    }

    fn mount_points(&self) -> Vec<MountPointInfo> {
        vec![
            MountPointInfo {
                id: "Cartridge".to_string(),
                name: "Cartridge Slot".to_string(),
                extensions: vec![
                    "a52".to_string(),
                    "car".to_string(),
                    "bin".to_string(),
                    "rom".to_string(),
                ],
                required: true,
            },
            MountPointInfo {
                id: "BIOS".to_string(),
                name: "BIOS ROM".to_string(),
                extensions: vec!["rom".to_string(), "bin".to_string()],
                required: false,
            },
        ]
    }

    fn mount(&mut self, mount_point_id: &str, data: &[u8]) -> Result<(), Self::Error> {
        match mount_point_id {
            "Cartridge" => {
                self.open_file(data, true)?;
                Ok(())
            }
            "BIOS" => self.load_bios(data),
            _ => Err(A5200Error::InvalidMountPoint(mount_point_id.to_string())),
        }
    }

    fn unmount(&mut self, mount_point_id: &str) -> Result<(), Self::Error> {
        match mount_point_id {
            "Cartridge" => {
                self.remove_cartridge();
                Ok(())
            }
            "BIOS" => {
                self.unload_bios();
                Ok(())
            }
            _ => Err(A5200Error::InvalidMountPoint(mount_point_id.to_string())),
        }
    }

    fn is_mounted(&self, mount_point_id: &str) -> bool {
        match mount_point_id {
            "Cartridge" => self.cartridge().is_some(),
            "BIOS" => self.has_bios(),
            _ => false,
        }
    }
}
