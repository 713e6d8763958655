//! Binary snapshot stream.
//!
//! ```text
//! header   "ATARI800" version:u8 verbose:u8
//! main     tv_mode:u8 machine:u8 os:i32 pil_on:i32 default_tv_mode:i32 default_system:i32
//! cart     type_tag:i32 [bank:i32 for Super carts]
//! memory   bytes:[u8; 65536] page_tags:[u8; 256]
//! ```
//!
//! Integers are little-endian. The four trailing `main` integers and the
//! cartridge type tag only exist for compatibility with older state files;
//! they are written with their historical values and skipped on restore.

use emu_core::logging::{log, LogCategory, LogLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cartridge::CartridgeError;
use crate::config::TvMode;
use crate::memory::{AddressSpace, ADDRESS_SPACE_SIZE, PAGE_COUNT};

pub const MAGIC: &[u8; 8] = b"ATARI800";
pub const VERSION: u8 = 1;

/// Machine byte for the 5200
pub const MACHINE_5200: u8 = 4;
const LEGACY_OS: i32 = 0;
const LEGACY_PIL_ON: i32 = 0;
const LEGACY_SYSTEM_5200: i32 = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Snapshot truncated at offset {offset} (needed {needed} more bytes)")]
    Truncated { offset: usize, needed: usize },
    #[error("Not a snapshot (bad magic)")]
    BadMagic,
    #[error("Unsupported snapshot version {0}")]
    UnsupportedVersion(u8),
    #[error("Unknown page tag {0}")]
    BadPageTag(u8),
    #[error("Snapshot bank is invalid: {0}")]
    Bank(#[from] CartridgeError),
    #[error("Negative bank index {0}")]
    NegativeBank(i32),
}

pub trait StateWriter {
    fn write_u8(&mut self, val: u8);
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_i32(&mut self, val: i32) {
        self.write_bytes(&val.to_le_bytes());
    }
}

impl StateWriter for Vec<u8> {
    fn write_u8(&mut self, val: u8) {
        self.push(val);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

pub trait StateReader {
    fn read_bytes(&mut self, len: usize) -> Result<&[u8], SnapshotError>;

    fn read_u8(&mut self) -> Result<u8, SnapshotError> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_i32(&mut self) -> Result<i32, SnapshotError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

/// Reader over an in-memory snapshot
pub struct StateCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> StateCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }
}

impl StateReader for StateCursor<'_> {
    fn read_bytes(&mut self, len: usize) -> Result<&[u8], SnapshotError> {
        if self.remaining() < len {
            return Err(SnapshotError::Truncated {
                offset: self.offset,
                needed: len - self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }
}

/// Everything the snapshot records about the machine besides memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub tv_mode: TvMode,
    pub machine: u8,
    /// Written for old readers, ignored on restore
    pub cart_type_tag: i32,
    /// Present for Super carts only
    pub bank: Option<i32>,
}

pub fn write_header<W: StateWriter>(w: &mut W, verbose: bool) {
    w.write_bytes(MAGIC);
    w.write_u8(VERSION);
    w.write_u8(verbose as u8);
}

/// Returns the verbose flag
pub fn read_header<R: StateReader>(r: &mut R) -> Result<bool, SnapshotError> {
    if r.read_bytes(MAGIC.len())? != MAGIC {
        return Err(SnapshotError::BadMagic);
    }
    let version = r.read_u8()?;
    if version != VERSION {
        return Err(SnapshotError::UnsupportedVersion(version));
    }
    Ok(r.read_u8()? != 0)
}

pub fn write_main<W: StateWriter>(w: &mut W, tv_mode: TvMode) {
    let (tv_byte, default_tv_mode) = match tv_mode {
        TvMode::Pal => (0, 1),
        TvMode::Ntsc => (1, 2),
    };
    w.write_u8(tv_byte);
    w.write_u8(MACHINE_5200);
    w.write_i32(LEGACY_OS);
    w.write_i32(LEGACY_PIL_ON);
    w.write_i32(default_tv_mode);
    w.write_i32(LEGACY_SYSTEM_5200);
}

/// Returns the TV mode and machine byte
pub fn read_main<R: StateReader>(r: &mut R) -> Result<(TvMode, u8), SnapshotError> {
    let tv_mode = if r.read_u8()? == 0 {
        TvMode::Pal
    } else {
        TvMode::Ntsc
    };
    let machine = r.read_u8()?;
    let os = r.read_i32()?;
    let pil_on = r.read_i32()?;
    let default_tv_mode = r.read_i32()?;
    let default_system = r.read_i32()?;
    log(LogCategory::Snapshot, LogLevel::Debug, || {
        format!(
            "Skipped legacy fields os={} pil_on={} default_tv_mode={} default_system={}",
            os, pil_on, default_tv_mode, default_system
        )
    });
    Ok((tv_mode, machine))
}

pub fn write_cart<W: StateWriter>(w: &mut W, type_tag: i32, bank: Option<i32>) {
    w.write_i32(type_tag);
    if let Some(bank) = bank {
        w.write_i32(bank);
    }
}

/// Read the cartridge block. The bank field is only present when the
/// currently inserted cartridge is a Super cart, whatever the stored tag says.
pub fn read_cart<R: StateReader>(
    r: &mut R,
    expect_bank: bool,
) -> Result<(i32, Option<i32>), SnapshotError> {
    let type_tag = r.read_i32()?;
    log(LogCategory::Snapshot, LogLevel::Debug, || {
        format!("Skipped legacy cartridge type {}", type_tag)
    });
    let bank = if expect_bank {
        Some(r.read_i32()?)
    } else {
        None
    };
    Ok((type_tag, bank))
}

pub fn write_memory<W: StateWriter>(w: &mut W, space: &AddressSpace) {
    w.write_bytes(space.bytes());
    w.write_bytes(&space.page_tags());
}

pub fn read_memory<R: StateReader>(r: &mut R, space: &mut AddressSpace) -> Result<(), SnapshotError> {
    let bytes = r.read_bytes(ADDRESS_SPACE_SIZE)?.to_vec();
    let mut tags = [0u8; PAGE_COUNT];
    tags.copy_from_slice(r.read_bytes(PAGE_COUNT)?);
    space
        .set_page_tags(&tags)
        .map_err(SnapshotError::BadPageTag)?;
    space.bytes_mut().copy_from_slice(&bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::RegionKind;

    #[test]
    fn test_header_layout() {
        let mut out = Vec::new();
        write_header(&mut out, true);
        assert_eq!(&out[..8], b"ATARI800");
        assert_eq!(out[8..], [1, 1]);

        let mut cursor = StateCursor::new(&out);
        assert_eq!(read_header(&mut cursor), Ok(true));
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_header_rejects_bad_input() {
        let mut cursor = StateCursor::new(b"ATARI801\x01\x00");
        assert_eq!(read_header(&mut cursor), Err(SnapshotError::BadMagic));

        let mut cursor = StateCursor::new(b"ATARI800\x07\x00");
        assert_eq!(read_header(&mut cursor), Err(SnapshotError::UnsupportedVersion(7)));

        let mut cursor = StateCursor::new(b"ATARI");
        assert_eq!(
            read_header(&mut cursor),
            Err(SnapshotError::Truncated { offset: 0, needed: 3 })
        );
    }

    #[test]
    fn test_main_block_legacy_fields() {
        let mut out = Vec::new();
        write_main(&mut out, TvMode::Pal);
        assert_eq!(out.len(), 2 + 4 * 4);
        assert_eq!(out[0], 0);
        assert_eq!(out[1], MACHINE_5200);
        // default_tv_mode for PAL, then default_system
        assert_eq!(out[10..14], 1i32.to_le_bytes());
        assert_eq!(out[14..18], 6i32.to_le_bytes());
    }

    #[test]
    fn test_legacy_fields_keep_stream_aligned() {
        // Legacy fields with values a newer writer would never produce
        let mut out = Vec::new();
        out.write_u8(1);
        out.write_u8(MACHINE_5200);
        for junk in [7, -1, 99, 12345] {
            out.write_i32(junk);
        }
        write_cart(&mut out, 999, Some(3));
        out.write_u8(0xEE);

        let mut cursor = StateCursor::new(&out);
        assert_eq!(read_main(&mut cursor), Ok((TvMode::Ntsc, MACHINE_5200)));
        assert_eq!(read_cart(&mut cursor, true), Ok((999, Some(3))));
        assert_eq!(cursor.read_u8(), Ok(0xEE));
    }

    #[test]
    fn test_cart_block_without_bank() {
        let mut out = Vec::new();
        write_cart(&mut out, 4, None);
        assert_eq!(out.len(), 4);
        let mut cursor = StateCursor::new(&out);
        assert_eq!(read_cart(&mut cursor, false), Ok((4, None)));
    }

    #[test]
    fn test_memory_block() {
        let mut space = AddressSpace::new();
        space.set_region(0x4000..=0xFFFF, RegionKind::Rom);
        space.set_region(0xC000..=0xC0FF, RegionKind::Hardware);
        space.poke(0x1234, 0x56);
        space.poke(0xFFFC, 0x78);

        let mut out = Vec::new();
        write_memory(&mut out, &space);
        assert_eq!(out.len(), ADDRESS_SPACE_SIZE + PAGE_COUNT);

        let mut restored = AddressSpace::new();
        read_memory(&mut StateCursor::new(&out), &mut restored).expect("restore");
        assert_eq!(restored.peek(0x1234), 0x56);
        assert_eq!(restored.peek(0xFFFC), 0x78);
        assert_eq!(restored.region(0xC000), RegionKind::Hardware);
        assert_eq!(restored.region(0x8000), RegionKind::Rom);

        out[ADDRESS_SPACE_SIZE] = 9;
        assert_eq!(
            read_memory(&mut StateCursor::new(&out), &mut restored),
            Err(SnapshotError::BadPageTag(9))
        );
    }
}
