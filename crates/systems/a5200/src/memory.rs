//! Flat 64 KiB address space with per-page region attributes.
//!
//! Every 256-byte page carries one tag:
//! - `Ram`: reads and writes hit the backing store
//! - `Rom`: reads hit the backing store, CPU writes are dropped
//! - `Hardware`: the bus dispatches the access to the page's handler
//!
//! The `peek`/`poke`/`copy_rom`/`fill` helpers bypass the tags; they are how
//! the machine itself loads ROM images and cartridge banks.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub const ADDRESS_SPACE_SIZE: usize = 0x10000;
pub const PAGE_SIZE: usize = 0x100;
pub const PAGE_COUNT: usize = ADDRESS_SPACE_SIZE / PAGE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    Ram,
    Rom,
    Hardware,
}

impl RegionKind {
    /// Stable byte encoding used by binary snapshots
    pub fn tag(self) -> u8 {
        match self {
            RegionKind::Ram => 0,
            RegionKind::Rom => 1,
            RegionKind::Hardware => 2,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(RegionKind::Ram),
            1 => Some(RegionKind::Rom),
            2 => Some(RegionKind::Hardware),
            _ => None,
        }
    }
}

#[inline]
pub fn page_of(addr: u16) -> usize {
    (addr >> 8) as usize
}

pub struct AddressSpace {
    memory: Box<[u8]>,
    pages: [RegionKind; PAGE_COUNT],
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSpace {
    /// All pages RAM, all bytes zero
    pub fn new() -> Self {
        Self {
            memory: vec![0; ADDRESS_SPACE_SIZE].into_boxed_slice(),
            pages: [RegionKind::Ram; PAGE_COUNT],
        }
    }

    #[inline]
    pub fn region(&self, addr: u16) -> RegionKind {
        self.pages[page_of(addr)]
    }

    /// Tag every page touched by `range`.
    pub fn set_region(&mut self, range: RangeInclusive<u16>, kind: RegionKind) {
        let first = page_of(*range.start());
        let last = page_of(*range.end());
        if first > last {
            return;
        }
        for page in &mut self.pages[first..=last] {
            *page = kind;
        }
    }

    /// Byte as stored, ignoring the page tag
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    /// Store a byte, ignoring the page tag
    #[inline]
    pub fn poke(&mut self, addr: u16, val: u8) {
        self.memory[addr as usize] = val;
    }

    /// CPU-side read for non-hardware pages
    #[inline]
    pub fn read_plain(&self, addr: u16) -> u8 {
        self.peek(addr)
    }

    /// CPU-side write for non-hardware pages. Writes to ROM are dropped.
    #[inline]
    pub fn write_plain(&mut self, addr: u16, val: u8) {
        if self.region(addr) == RegionKind::Ram {
            self.poke(addr, val);
        }
    }

    /// Fill `len` bytes starting at `start`, clamped to the end of memory.
    pub fn fill(&mut self, start: u16, val: u8, len: usize) {
        let start = start as usize;
        let end = (start + len).min(ADDRESS_SPACE_SIZE);
        self.memory[start..end].fill(val);
    }

    /// Copy `src` into `from..=to`. `src` must hold at least the window size.
    pub fn copy_rom(&mut self, from: u16, to: u16, src: &[u8]) {
        let len = (to as usize + 1).saturating_sub(from as usize);
        let from = from as usize;
        self.memory[from..from + len].copy_from_slice(&src[..len]);
    }

    pub fn slice(&self, range: RangeInclusive<u16>) -> &[u8] {
        &self.memory[*range.start() as usize..=*range.end() as usize]
    }

    pub fn bytes(&self) -> &[u8] {
        &self.memory
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.memory
    }

    pub fn page_tags(&self) -> [u8; PAGE_COUNT] {
        let mut tags = [0u8; PAGE_COUNT];
        for (tag, kind) in tags.iter_mut().zip(self.pages.iter()) {
            *tag = kind.tag();
        }
        tags
    }

    /// Restore page tags; returns the first unknown tag, if any, leaving the
    /// table untouched in that case.
    pub fn set_page_tags(&mut self, tags: &[u8; PAGE_COUNT]) -> Result<(), u8> {
        let mut pages = [RegionKind::Ram; PAGE_COUNT];
        for (kind, &tag) in pages.iter_mut().zip(tags.iter()) {
            *kind = RegionKind::from_tag(tag).ok_or(tag)?;
        }
        self.pages = pages;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rom_writes_are_dropped() {
        let mut space = AddressSpace::new();
        space.set_region(0x4000..=0x7FFF, RegionKind::Rom);
        space.poke(0x4000, 0xAA);

        space.write_plain(0x4000, 0x55);
        assert_eq!(space.read_plain(0x4000), 0xAA);

        space.write_plain(0x3FFF, 0x55);
        assert_eq!(space.read_plain(0x3FFF), 0x55);
    }

    #[test]
    fn test_set_region_is_page_granular() {
        let mut space = AddressSpace::new();
        space.set_region(0x4FF6..=0x4FF9, RegionKind::Hardware);

        assert_eq!(space.region(0x4F00), RegionKind::Hardware);
        assert_eq!(space.region(0x4FFF), RegionKind::Hardware);
        assert_eq!(space.region(0x4EFF), RegionKind::Ram);
        assert_eq!(space.region(0x5000), RegionKind::Ram);
    }

    #[test]
    fn test_regions_cover_whole_space() {
        let mut space = AddressSpace::new();
        space.set_region(0x0000..=0x3FFF, RegionKind::Ram);
        space.set_region(0x4000..=0xFFFF, RegionKind::Rom);
        space.set_region(0xC000..=0xC0FF, RegionKind::Hardware);

        let hardware = (0..PAGE_COUNT)
            .filter(|&p| space.region((p << 8) as u16) == RegionKind::Hardware)
            .count();
        assert_eq!(hardware, 1);
        assert_eq!(space.region(0xFFFF), RegionKind::Rom);
    }

    #[test]
    fn test_copy_rom_and_fill() {
        let mut space = AddressSpace::new();
        let src: Vec<u8> = (0..=255u8).cycle().take(0x1000).collect();

        space.copy_rom(0x8000, 0x8FFF, &src);
        assert_eq!(space.slice(0x8000..=0x8FFF), &src[..]);

        space.fill(0x8000, 0xFF, 0x800);
        assert!(space.slice(0x8000..=0x87FF).iter().all(|&b| b == 0xFF));
        assert_eq!(space.peek(0x8800), src[0x800]);
    }

    #[test]
    fn test_fill_clamps_at_top_of_memory() {
        let mut space = AddressSpace::new();
        space.fill(0xFFF0, 0x77, 0x100);
        assert_eq!(space.peek(0xFFFF), 0x77);
    }

    #[test]
    fn test_page_tags_roundtrip() {
        let mut space = AddressSpace::new();
        space.set_region(0xD400..=0xD4FF, RegionKind::Hardware);
        space.set_region(0xF800..=0xFFFF, RegionKind::Rom);
        let tags = space.page_tags();

        let mut other = AddressSpace::new();
        assert!(other.set_page_tags(&tags).is_ok());
        assert_eq!(other.region(0xD400), RegionKind::Hardware);
        assert_eq!(other.region(0xF900), RegionKind::Rom);

        let mut bad = tags;
        bad[3] = 9;
        assert_eq!(other.set_page_tags(&bad), Err(9));
    }
}
