//! Core emulator primitives and traits.

pub mod logging;

use serde_json::Value;

/// The CPU's byte read/write path.
///
/// Reads take `&mut self` because on memory-mapped machines a read can have
/// side effects: chip registers clear on read and some cartridges switch banks
/// on any access to a trigger address.
pub trait Memory6502 {
    /// Read a byte from memory at the given address
    fn read(&mut self, addr: u16) -> u8;

    /// Write a byte to memory at the given address
    fn write(&mut self, addr: u16, val: u8);
}

/// Register-level view of a CPU core.
///
/// Instruction execution lives in the core itself; machines only need to
/// observe and redirect the program counter and pulse the reset line.
pub trait CpuRegisters {
    /// Current program counter
    fn pc(&self) -> u16;

    /// Redirect execution
    fn set_pc(&mut self, pc: u16);

    /// Pulse the reset line. `vector` is the word the machine fetched from
    /// the reset vector, since only the machine knows what is mapped there.
    fn reset(&mut self, vector: u16);
}

/// Description of a mount point (media slot) that a system supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPointInfo {
    /// Unique identifier for this mount point (e.g., "Cartridge", "BIOS")
    pub id: String,
    /// User-friendly name for display (e.g., "Cartridge Slot", "BIOS ROM")
    pub name: String,
    /// File extensions accepted by this mount point (e.g., ["a52", "car"])
    pub extensions: Vec<String>,
    /// Whether this mount point is required for the system to function
    pub required: bool,
}

/// A high-level System trait tying components together.
pub trait System {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reset to initial power-on state
    fn reset(&mut self);

    /// Return a JSON-serializable save state.
    /// Note: Save states should NOT include ROM/cartridge data.
    fn save_state(&self) -> Value;

    /// Load a JSON save state.
    /// Returns error if the state is incompatible or requires different mounted media.
    fn load_state(&mut self, v: &Value) -> Result<(), serde_json::Error>;

    /// Check if this system supports save/load state functionality
    fn supports_save_states(&self) -> bool {
        false
    }

    /// Get the list of mount points this system supports
    fn mount_points(&self) -> Vec<MountPointInfo>;

    /// Load media into a specific mount point
    fn mount(&mut self, mount_point_id: &str, data: &[u8]) -> Result<(), Self::Error>;

    /// Unload media from a specific mount point
    fn unmount(&mut self, mount_point_id: &str) -> Result<(), Self::Error>;

    /// Check if a mount point has media loaded
    fn is_mounted(&self, mount_point_id: &str) -> bool;
}
