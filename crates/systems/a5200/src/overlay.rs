//! ROM overlays switched by the PORTB memory-control latch.
//!
//! ```text
//! bit 0  set = OS ROM at $C000-$CFFF and $D800-$FFFF
//! bit 1  set = BASIC ROM at $A000-$BFFF disabled
//! bit 7  set = self-test ROM at $5000-$57FF disabled
//! ```
//!
//! Only bit transitions act. A disabled overlay floods its range with the
//! floating-bus value; whatever RAM was underneath is not restored. The 5200
//! has no BASIC, so bit 1 does nothing until a BASIC image is loaded.

use emu_core::logging::{log, LogCategory, LogLevel};

use crate::memory::AddressSpace;

pub const OS_ROM_SIZE: usize = 0x4000;
pub const BASIC_ROM_SIZE: usize = 0x2000;

const FLOATING_BUS: u8 = 0xFF;

const PORTB_OS: u8 = 0x01;
const PORTB_BASIC: u8 = 0x02;
const PORTB_SELFTEST: u8 = 0x80;

/// Something the machine must react to after a PORTB change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The OS ROM was mapped back in and needs re-patching
    OsRomEnabled,
}

pub struct Overlay {
    os_rom: Box<[u8]>,
    basic_rom: Option<Box<[u8]>>,
    selftest_enabled: bool,
    cart_809f_enabled: bool,
    cart_a0bf_enabled: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Overlay {
    pub fn new() -> Self {
        Self {
            os_rom: vec![FLOATING_BUS; OS_ROM_SIZE].into_boxed_slice(),
            basic_rom: None,
            selftest_enabled: false,
            cart_809f_enabled: false,
            cart_a0bf_enabled: false,
        }
    }

    /// Load the full 16 KiB OS image. Shorter images are padded with $FF.
    pub fn set_os_rom(&mut self, image: &[u8]) {
        load_padded(&mut self.os_rom, image);
    }

    /// Load a BIOS that only covers the top of the OS area. It lands at the
    /// end of the image so `$D800-$FFFF` maps it back to where it boots from.
    pub fn set_bios(&mut self, bios: &[u8]) {
        let len = bios.len().min(OS_ROM_SIZE);
        self.os_rom.fill(FLOATING_BUS);
        self.os_rom[OS_ROM_SIZE - len..].copy_from_slice(&bios[bios.len() - len..]);
    }

    pub fn clear_os_rom(&mut self) {
        self.os_rom.fill(FLOATING_BUS);
    }

    pub fn set_basic_rom(&mut self, image: &[u8]) {
        let mut rom = vec![FLOATING_BUS; BASIC_ROM_SIZE].into_boxed_slice();
        load_padded(&mut rom, image);
        self.basic_rom = Some(rom);
    }

    pub fn selftest_enabled(&self) -> bool {
        self.selftest_enabled
    }

    pub fn cart_809f_enabled(&self) -> bool {
        self.cart_809f_enabled
    }

    pub fn cart_a0bf_enabled(&self) -> bool {
        self.cart_a0bf_enabled
    }

    /// Apply a PORTB write that changed the latch from `old` to `new`.
    pub fn handle_portb(
        &mut self,
        space: &mut AddressSpace,
        new: u8,
        old: u8,
    ) -> Option<OverlayEvent> {
        let changed = new ^ old;
        let mut event = None;

        if changed & PORTB_OS != 0 {
            if new & PORTB_OS != 0 {
                log(LogCategory::Bus, LogLevel::Debug, || "OS ROM enabled".to_string());
                space.copy_rom(0xC000, 0xCFFF, &self.os_rom[..0x1000]);
                space.copy_rom(0xD800, 0xFFFF, &self.os_rom[0x1800..]);
                event = Some(OverlayEvent::OsRomEnabled);
            } else {
                log(LogCategory::Bus, LogLevel::Debug, || "OS ROM disabled".to_string());
                space.fill(0xC000, FLOATING_BUS, 0x1000);
                space.fill(0xD800, FLOATING_BUS, 0x2800);
                self.disable_selftest(space);
            }
        }

        if let Some(basic) = self.basic_rom.as_deref() {
            if !self.cart_a0bf_enabled && changed & PORTB_BASIC != 0 {
                if new & PORTB_BASIC != 0 {
                    log(LogCategory::Bus, LogLevel::Debug, || "BASIC ROM disabled".to_string());
                    space.fill(0xA000, FLOATING_BUS, 0x2000);
                } else {
                    log(LogCategory::Bus, LogLevel::Debug, || "BASIC ROM enabled".to_string());
                    space.copy_rom(0xA000, 0xBFFF, basic);
                }
            }
        }

        if new & PORTB_SELFTEST != 0 {
            self.disable_selftest(space);
        } else if new & PORTB_OS != 0 && !self.selftest_enabled {
            log(LogCategory::Bus, LogLevel::Debug, || "Self-test ROM enabled".to_string());
            space.copy_rom(0x5000, 0x57FF, &self.os_rom[0x1000..0x1800]);
            self.selftest_enabled = true;
        }

        event
    }

    fn disable_selftest(&mut self, space: &mut AddressSpace) {
        if self.selftest_enabled {
            log(LogCategory::Bus, LogLevel::Debug, || "Self-test ROM disabled".to_string());
            space.fill(0x5000, FLOATING_BUS, 0x800);
            self.selftest_enabled = false;
        }
    }

    pub fn enable_cart_809f(&mut self) {
        self.cart_809f_enabled = true;
    }

    pub fn disable_cart_809f(&mut self, space: &mut AddressSpace) {
        if self.cart_809f_enabled {
            space.fill(0x8000, FLOATING_BUS, 0x2000);
            self.cart_809f_enabled = false;
        }
    }

    pub fn enable_cart_a0bf(&mut self) {
        self.cart_a0bf_enabled = true;
    }

    pub fn disable_cart_a0bf(&mut self, space: &mut AddressSpace) {
        if self.cart_a0bf_enabled {
            space.fill(0xA000, FLOATING_BUS, 0x2000);
            self.cart_a0bf_enabled = false;
        }
    }
}

fn load_padded(dest: &mut [u8], image: &[u8]) {
    let len = image.len().min(dest.len());
    dest[..len].copy_from_slice(&image[..len]);
    dest[len..].fill(FLOATING_BUS);
}
