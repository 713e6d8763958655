//! Atari 5200 memory bus
//!
//! Every CPU access first checks the page tag of its address. RAM and ROM
//! pages are served from the flat address space. Hardware pages are
//! dispatched through a 256-entry route table:
//!
//! ```text
//! $C0xx, $D0xx         GTIA
//! $D2xx, $E8xx, $EBxx  POKEY
//! $D3xx                PIA (PORTB drives the ROM overlays)
//! $D4xx                ANTIC
//! $D5xx                cartridge I/O area (RTIME-8)
//! $4Fxx, $5Fxx, $BFxx  cartridge bank-switch triggers
//! ```
//!
//! A hardware page with no route floats high.

use emu_core::logging::{log, LogCategory, LogLevel};
use emu_core::Memory6502;

use crate::cartridge::CartridgeSlot;
use crate::chips::{Antic, CartIoArea, Chip, Gtia, Pia, Pokey};
use crate::memory::{page_of, AddressSpace, RegionKind, PAGE_COUNT};
use crate::overlay::{Overlay, OverlayEvent};

const PORTB_OFFSET: u16 = 1;

/// Who services a hardware page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    Unmapped,
    Gtia,
    Pokey,
    Pia,
    Antic,
    CartIo,
    Cartridge,
    /// Index into the chips registered with [`Atari5200Bus::register_chip`]
    External(usize),
}

fn default_routes() -> [PageRoute; PAGE_COUNT] {
    let mut routes = [PageRoute::Unmapped; PAGE_COUNT];
    for (page, route) in [
        (0xC0, PageRoute::Gtia),
        (0xD0, PageRoute::Gtia),
        (0xD2, PageRoute::Pokey),
        (0xE8, PageRoute::Pokey),
        (0xEB, PageRoute::Pokey),
        (0xD3, PageRoute::Pia),
        (0xD4, PageRoute::Antic),
        (0xD5, PageRoute::CartIo),
        (0x4F, PageRoute::Cartridge),
        (0x5F, PageRoute::Cartridge),
        (0xBF, PageRoute::Cartridge),
    ] {
        routes[page] = route;
    }
    routes
}

/// Atari 5200 memory bus
pub struct Atari5200Bus {
    pub space: AddressSpace,
    pub gtia: Gtia,
    pub pokey: Pokey,
    pub pia: Pia,
    pub antic: Antic,
    pub cart_io: CartIoArea,
    pub cartridge: CartridgeSlot,
    pub overlay: Overlay,
    routes: [PageRoute; PAGE_COUNT],
    external: Vec<Box<dyn Chip>>,
    overlay_event: Option<OverlayEvent>,
}

impl Default for Atari5200Bus {
    fn default() -> Self {
        Self::new(CartridgeSlot::default(), CartIoArea::default())
    }
}

impl Atari5200Bus {
    pub fn new(cartridge: CartridgeSlot, cart_io: CartIoArea) -> Self {
        Self {
            space: AddressSpace::new(),
            gtia: Gtia::new(),
            pokey: Pokey::new(),
            pia: Pia::new(),
            antic: Antic::new(),
            cart_io,
            cartridge,
            overlay: Overlay::new(),
            routes: default_routes(),
            external: Vec::new(),
            overlay_event: None,
        }
    }

    pub fn route(&self, page: usize) -> PageRoute {
        self.routes.get(page).copied().unwrap_or(PageRoute::Unmapped)
    }

    /// Hand `pages` over to a collaborator's chip. The pages are tagged as
    /// hardware. Returns the chip's index.
    pub fn register_chip(&mut self, pages: &[u8], chip: Box<dyn Chip>) -> usize {
        let index = self.external.len();
        self.external.push(chip);
        for &page in pages {
            self.routes[page as usize] = PageRoute::External(index);
            let base = (page as u16) << 8;
            self.space.set_region(base..=base | 0xFF, RegionKind::Hardware);
        }
        log(LogCategory::Bus, LogLevel::Debug, || {
            format!("Registered external chip {} on {} page(s)", index, pages.len())
        });
        index
    }

    /// Pending overlay side effect from the last PORTB change
    pub fn take_overlay_event(&mut self) -> Option<OverlayEvent> {
        self.overlay_event.take()
    }

    /// Pulse the reset line of every chip that has one.
    pub fn reset_chips(&mut self) {
        let old = self.pia.portb();
        self.pia.reset();
        self.portb_changed(old);

        let builtin: [&mut dyn Chip; 4] = [
            &mut self.gtia,
            &mut self.pokey,
            &mut self.antic,
            &mut self.cart_io,
        ];
        for chip in builtin {
            if chip.has_reset_line() {
                chip.reset();
            }
        }
        for chip in &mut self.external {
            if chip.has_reset_line() {
                chip.reset();
            }
        }
    }

    fn portb_changed(&mut self, old: u8) {
        let new = self.pia.portb();
        if new != old {
            if let Some(event) = self.overlay.handle_portb(&mut self.space, new, old) {
                self.overlay_event = Some(event);
            }
        }
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        if self.space.region(addr) != RegionKind::Hardware {
            return self.space.read_plain(addr);
        }
        match self.routes[page_of(addr)] {
            PageRoute::Gtia => self.gtia.get_byte(addr),
            PageRoute::Pokey => self.pokey.get_byte(addr),
            PageRoute::Pia => self.pia.get_byte(addr),
            PageRoute::Antic => self.antic.get_byte(addr),
            PageRoute::CartIo => self.cart_io.get_byte(addr),
            PageRoute::Cartridge => self.cartridge.read(&mut self.space, addr),
            PageRoute::External(index) => self
                .external
                .get_mut(index)
                .map_or(0xFF, |chip| chip.get_byte(addr)),
            PageRoute::Unmapped => {
                log(LogCategory::Bus, LogLevel::Trace, || {
                    format!("Read from unrouted hardware page {:04X}", addr)
                });
                0xFF
            }
        }
    }

    pub fn write(&mut self, addr: u16, val: u8) {
        if self.space.region(addr) != RegionKind::Hardware {
            self.space.write_plain(addr, val);
            return;
        }
        match self.routes[page_of(addr)] {
            PageRoute::Gtia => self.gtia.put_byte(addr, val),
            PageRoute::Pokey => self.pokey.put_byte(addr, val),
            PageRoute::Pia => {
                let old = self.pia.portb();
                self.pia.put_byte(addr, val);
                if addr & 0x03 == PORTB_OFFSET {
                    self.portb_changed(old);
                }
            }
            PageRoute::Antic => self.antic.put_byte(addr, val),
            PageRoute::CartIo => self.cart_io.put_byte(addr, val),
            PageRoute::Cartridge => self.cartridge.write(&mut self.space, addr),
            PageRoute::External(index) => {
                if let Some(chip) = self.external.get_mut(index) {
                    chip.put_byte(addr, val);
                }
            }
            PageRoute::Unmapped => {
                log(LogCategory::Bus, LogLevel::Trace, || {
                    format!("Write {:02X} to unrouted hardware page {:04X}", val, addr)
                });
            }
        }
    }
}

impl Memory6502 for Atari5200Bus {
    fn read(&mut self, addr: u16) -> u8 {
        Atari5200Bus::read(self, addr)
    }

    fn write(&mut self, addr: u16, val: u8) {
        Atari5200Bus::write(self, addr, val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::{fingerprint, Catalog, CatalogEntry, CartType};
    use std::borrow::Cow;
    use std::sync::Arc;

    struct Latch {
        last: u8,
        resets: u32,
    }

    impl Chip for Latch {
        fn get_byte(&mut self, _addr: u16) -> u8 {
            self.last
        }

        fn put_byte(&mut self, _addr: u16, val: u8) {
            self.last = val;
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.last = 0;
        }

        fn has_reset_line(&self) -> bool {
            true
        }
    }

    fn booted() -> Atari5200Bus {
        let mut bus = Atari5200Bus::default();
        bus.space.set_region(0x4000..=0xFFFF, RegionKind::Rom);
        for page in [0xC000u16, 0xD400, 0xE800, 0xEB00] {
            bus.space.set_region(page..=page | 0xFF, RegionKind::Hardware);
        }
        bus
    }

    #[test]
    fn test_ram_and_rom_pages() {
        let mut bus = booted();
        bus.write(0x1234, 0x56);
        assert_eq!(bus.read(0x1234), 0x56);

        bus.space.poke(0x8000, 0xAA);
        bus.write(0x8000, 0x55);
        assert_eq!(bus.read(0x8000), 0xAA);
    }

    #[test]
    fn test_chip_pages_dispatch() {
        let mut bus = booted();
        bus.pokey.set_pot(0, 0x33);
        assert_eq!(bus.read(0xE800), 0x33);
        assert_eq!(bus.read(0xEB00), 0x33);
        assert_eq!(bus.read(0xC01F), 0x0F);
        assert_eq!(bus.read(0xD40F), 0x1F);

        // $D200 is tagged ROM at boot, so the backing byte is returned.
        bus.space.poke(0xD200, 0x99);
        assert_eq!(bus.read(0xD200), 0x99);
    }

    #[test]
    fn test_unrouted_hardware_page_floats_high() {
        let mut bus = booted();
        bus.space.set_region(0x7000..=0x70FF, RegionKind::Hardware);
        bus.space.poke(0x7000, 0x12);
        assert_eq!(bus.read(0x7000), 0xFF);
        bus.write(0x7000, 0x34);
        assert_eq!(bus.space.peek(0x7000), 0x12);
    }

    #[test]
    fn test_portb_write_toggles_overlay() {
        let mut bus = booted();
        bus.space.set_region(0xD300..=0xD3FF, RegionKind::Hardware);
        bus.overlay.set_os_rom(&[0x5A; 0x4000]);

        bus.write(0xD301, 0xFE);
        assert_eq!(bus.take_overlay_event(), None);
        assert_eq!(bus.space.peek(0xC800), 0xFF);

        bus.write(0xD301, 0xFF);
        assert_eq!(bus.take_overlay_event(), Some(OverlayEvent::OsRomEnabled));
        assert_eq!(bus.take_overlay_event(), None);
        assert_eq!(bus.space.peek(0xC800), 0x5A);

        // PORTA writes never touch the overlay
        bus.write(0xD300, 0x00);
        assert_eq!(bus.take_overlay_event(), None);
    }

    #[test]
    fn test_external_chip_registration_and_reset() {
        let mut bus = booted();
        let index = bus.register_chip(&[0x70, 0x71], Box::new(Latch { last: 0, resets: 0 }));
        assert_eq!(bus.route(0x70), PageRoute::External(index));
        assert_eq!(bus.space.region(0x71FF), RegionKind::Hardware);

        bus.write(0x7180, 0x42);
        assert_eq!(bus.read(0x7000), 0x42);

        bus.reset_chips();
        assert_eq!(bus.read(0x7000), 0);
    }

    #[test]
    fn test_warm_reset_restores_portb() {
        let mut bus = booted();
        bus.space.set_region(0xD300..=0xD3FF, RegionKind::Hardware);
        bus.write(0xD301, 0x7E);
        bus.take_overlay_event();

        bus.reset_chips();
        assert_eq!(bus.pia.portb(), 0xFF);
        assert_eq!(bus.take_overlay_event(), Some(OverlayEvent::OsRomEnabled));
    }

    #[test]
    fn test_cartridge_trigger_pages() {
        let image: Vec<u8> = (0..0x10000).map(|i| (i / 0x8000) as u8 + 1).collect();
        let mut catalog = Catalog::empty();
        catalog.insert(CatalogEntry {
            fingerprint: Cow::Owned(fingerprint(&image)),
            cart_type: CartType::Super64,
            analog_joystick: true,
            analog_sensitivity: 1.0,
            analog_range: 1.0,
            name: "Bus Test",
        });
        let mut bus = Atari5200Bus::new(CartridgeSlot::new(catalog), CartIoArea::default());
        bus.space.set_region(0x4000..=0xFFFF, RegionKind::Rom);
        bus.cartridge
            .insert(&mut bus.space, Arc::from(image), true)
            .expect("insert");

        // Power-up bank 1
        assert_eq!(bus.read(0x4000), 2);
        // Reading $BFD0 selects bank 0 and $4000 follows.
        bus.read(0xBFD0);
        assert_eq!(bus.read(0x4000), 1);
        bus.write(0xBFD4, 0);
        assert_eq!(bus.read(0x4000), 2);
    }

    #[test]
    fn test_cartridge_page_without_hardware_tag_is_plain_rom() {
        let mut bus = booted();
        bus.space.poke(0x4FF6, 0x77);
        assert_eq!(bus.read(0x4FF6), 0x77);
    }
}
