//! Cartridge identification and bank switching.
//!
//! A raw image is identified by its MD5 fingerprint against the catalog.
//! Uncataloged images fall back to a default layout chosen by size, unless
//! the caller asks for strict matching.
//!
//! Fixed layouts are copied into the address space once, at start. The two
//! switching families are driven by plain accesses rather than register
//! writes:
//! - Super carts watch $BFC0-$BFFF and swap the whole 32 KiB window
//! - Bounty Bob carts watch $4FF6-$4FF9 and $5FF6-$5FF9 and swap a 4 KiB slice
//!
//! In both cases the switch happens before the access is serviced.

mod catalog;
mod layout;

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use emu_core::logging::{log, LogCategory, LogLevel};
use md5::{Digest, Md5};
use thiserror::Error;

use crate::memory::{page_of, AddressSpace, RegionKind};

pub use layout::{BankLayout, BountyBobBases, CartType, Switching, WindowCopy, SUPER_BANK_SIZE};

/// Anything shorter cannot be a cartridge
pub const MIN_IMAGE_SIZE: usize = 16;

pub const CART_WINDOW_START: u16 = 0x4000;
pub const CART_WINDOW_END: u16 = 0xBFFF;

const BOUNTY_BOB_LOW_TRIGGER: u16 = 0x4FF6;
const BOUNTY_BOB_HIGH_TRIGGER: u16 = 0x5FF6;
const SUPER_SELECT_PAGE: u16 = 0xBF00;

/// Super carts come up with bank 1 selected.
const SUPER_POWER_UP_BANK: usize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartridgeError {
    #[error("Cannot open cartridge: {size} bytes")]
    CantOpen { size: usize },
    #[error("Unrecognized cartridge image ({size} bytes, fingerprint {fingerprint})")]
    BadFormat { size: usize, fingerprint: String },
    #[error("Bank {index} out of range for a {total}-bank cartridge")]
    BankOutOfRange { index: usize, total: usize },
    #[error("No bank-switching cartridge inserted")]
    NotBankSwitched,
}

impl CartridgeError {
    /// Legacy numeric status for frontends that still expect it
    pub fn status_code(&self) -> i32 {
        match self {
            CartridgeError::CantOpen { .. } => -1,
            _ => -2,
        }
    }
}

/// One known dump.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Lowercase hex MD5 of the raw image
    pub fingerprint: Cow<'static, str>,
    pub cart_type: CartType,
    pub analog_joystick: bool,
    pub analog_sensitivity: f32,
    pub analog_range: f32,
    pub name: &'static str,
}

pub struct Catalog {
    entries: HashMap<Cow<'static, str>, CatalogEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        // A few dumps are listed twice; the first listing wins.
        for entry in catalog::BUILTIN_CATALOG {
            catalog
                .entries
                .entry(entry.fingerprint.clone())
                .or_insert_with(|| entry.clone());
        }
        catalog
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add or replace an entry
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.fingerprint.clone(), entry);
    }

    pub fn lookup(&self, fingerprint: &str) -> Option<&CatalogEntry> {
        self.entries.get(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Content fingerprint used for catalog lookups
pub fn fingerprint(image: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(image);
    format!("{:x}", hasher.finalize())
}

/// Description of the inserted cartridge.
#[derive(Debug, Clone, PartialEq)]
pub struct CartInfo {
    pub cart_type: CartType,
    pub layout: &'static BankLayout,
    pub fingerprint: String,
    pub name: Cow<'static, str>,
    pub analog_joystick: bool,
    pub analog_sensitivity: f32,
    pub analog_range: f32,
    /// False when the type was picked from the image size alone
    pub cataloged: bool,
}

/// Active bank of a switching cartridge. Always `index < total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankState {
    index: usize,
    total: usize,
}

impl BankState {
    pub fn new(index: usize, total: usize) -> Result<Self, CartridgeError> {
        if index < total {
            Ok(Self { index, total })
        } else {
            Err(CartridgeError::BankOutOfRange { index, total })
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

struct ActiveCart {
    info: CartInfo,
    image: Arc<[u8]>,
    bank: Option<BankState>,
}

/// The cartridge slot: identification, start-up mapping and bank switching.
pub struct CartridgeSlot {
    catalog: Catalog,
    active: Option<ActiveCart>,
}

impl Default for CartridgeSlot {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl CartridgeSlot {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn info(&self) -> Option<&CartInfo> {
        self.active.as_ref().map(|cart| &cart.info)
    }

    pub fn cart_type(&self) -> CartType {
        self.info().map_or(CartType::None, |info| info.cart_type)
    }

    pub fn bank(&self) -> Option<BankState> {
        self.active.as_ref().and_then(|cart| cart.bank)
    }

    pub fn is_inserted(&self) -> bool {
        self.active.is_some()
    }

    /// Identify `image` and map it. Any previous cartridge is removed first,
    /// so on error the slot is empty.
    pub fn insert(
        &mut self,
        space: &mut AddressSpace,
        image: Arc<[u8]>,
        strict_catalog: bool,
    ) -> Result<&CartInfo, CartridgeError> {
        self.remove(space);

        if image.len() < MIN_IMAGE_SIZE {
            log(LogCategory::Cartridge, LogLevel::Warn, || {
                format!("Cannot open cartridge of {} bytes", image.len())
            });
            return Err(CartridgeError::CantOpen { size: image.len() });
        }

        let info = self.identify(&image, strict_catalog)?;
        log(LogCategory::Cartridge, LogLevel::Info, || {
            format!(
                "Detected cart: {} type: {:?}{}",
                info.name,
                info.cart_type,
                if info.cataloged { "" } else { " (by size)" }
            )
        });

        let bank = if info.cart_type.is_super() {
            let total = (image.len() / SUPER_BANK_SIZE).max(1);
            Some(BankState::new(SUPER_POWER_UP_BANK & (total - 1), total)?)
        } else {
            None
        };

        let cart = self.active.insert(ActiveCart { info, image, bank });
        map_power_up(Some(&mut *cart), space);
        Ok(&cart.info)
    }

    fn identify(&self, image: &[u8], strict_catalog: bool) -> Result<CartInfo, CartridgeError> {
        let fingerprint = fingerprint(image);

        let info = match self.catalog.lookup(&fingerprint) {
            Some(entry) => CartInfo {
                cart_type: entry.cart_type,
                layout: entry.cart_type.layout(),
                fingerprint,
                name: Cow::Borrowed(entry.name),
                analog_joystick: entry.analog_joystick,
                analog_sensitivity: entry.analog_sensitivity,
                analog_range: entry.analog_range,
                cataloged: true,
            },
            None => match CartType::from_size(image.len()).filter(|_| !strict_catalog) {
                Some(cart_type) => CartInfo {
                    cart_type,
                    layout: cart_type.layout(),
                    name: Cow::Owned(format!("Unknown ({} KiB)", image.len() / 1024)),
                    fingerprint,
                    analog_joystick: true,
                    analog_sensitivity: 1.0,
                    analog_range: 1.0,
                    cataloged: false,
                },
                None => {
                    log(LogCategory::Cartridge, LogLevel::Warn, || {
                        format!("No catalog entry for {} ({} bytes)", fingerprint, image.len())
                    });
                    return Err(CartridgeError::BadFormat {
                        size: image.len(),
                        fingerprint,
                    });
                }
            },
        };

        if image.len() < info.cart_type.min_image_size() {
            log(LogCategory::Cartridge, LogLevel::Warn, || {
                format!(
                    "{} is cataloged as {:?} but only {} bytes long",
                    info.name,
                    info.cart_type,
                    image.len()
                )
            });
            return Err(CartridgeError::BadFormat {
                size: image.len(),
                fingerprint: info.fingerprint,
            });
        }
        Ok(info)
    }

    /// Drop the cartridge. The window reads as zeros afterwards.
    pub fn remove(&mut self, space: &mut AddressSpace) {
        if let Some(cart) = self.active.take() {
            log(LogCategory::Cartridge, LogLevel::Info, || {
                format!("Removed cart: {}", cart.info.name)
            });
        }
        self.start(space);
    }

    /// Re-apply the power-up mapping for the inserted cartridge.
    pub fn start(&mut self, space: &mut AddressSpace) {
        map_power_up(self.active.as_mut(), space);
    }

    /// CPU read on a cartridge-owned hardware page. Bank selection happens
    /// first; the returned byte comes from the newly mapped bank.
    pub fn read(&mut self, space: &mut AddressSpace, addr: u16) -> u8 {
        if self.access(space, addr) {
            // Bounty Bob trigger bytes do not drive the bus.
            return 0;
        }
        space.peek(addr)
    }

    /// CPU write on a cartridge-owned hardware page. ROM is not modified.
    pub fn write(&mut self, space: &mut AddressSpace, addr: u16) {
        self.access(space, addr);
    }

    /// Apply the access side effects. Returns true for Bounty Bob trigger
    /// addresses.
    fn access(&mut self, space: &mut AddressSpace, addr: u16) -> bool {
        let Some(cart) = self.active.as_mut() else {
            return false;
        };

        match cart.info.layout.switching {
            Switching::Super if page_of(addr) == page_of(SUPER_SELECT_PAGE) => {
                if let Some(bank) = cart.bank.as_mut() {
                    let selected = super_select(bank.index, addr, bank.total);
                    if selected != bank.index {
                        log(LogCategory::Cartridge, LogLevel::Trace, || {
                            format!("Super cart bank {} -> {} at {:04X}", bank.index, selected, addr)
                        });
                        bank.index = selected;
                        map_super_bank(space, &cart.image, selected);
                    }
                }
                false
            }
            Switching::BountyBob(bases) => {
                let (trigger, base, window) = match page_of(addr) {
                    0x4F => (BOUNTY_BOB_LOW_TRIGGER, bases.low, 0x4000),
                    0x5F => (BOUNTY_BOB_HIGH_TRIGGER, bases.high, 0x5000),
                    _ => return false,
                };
                if !(trigger..=trigger + 3).contains(&addr) {
                    return false;
                }
                let slice = (addr - trigger) as usize;
                log(LogCategory::Cartridge, LogLevel::Trace, || {
                    format!("Bounty Bob slice {} into {:04X} at {:04X}", slice, window, addr)
                });
                space.copy_rom(window, window + 0x0FFF, &cart.image[base + slice * 0x1000..]);
                true
            }
            _ => false,
        }
    }

    /// Select and map a bank directly (snapshot restore).
    pub fn set_bank(&mut self, space: &mut AddressSpace, index: usize) -> Result<(), CartridgeError> {
        let cart = self.active.as_mut().ok_or(CartridgeError::NotBankSwitched)?;
        let bank = cart.bank.as_mut().ok_or(CartridgeError::NotBankSwitched)?;
        *bank = BankState::new(index, bank.total)?;
        map_super_bank(space, &cart.image, index);
        Ok(())
    }
}

fn map_power_up(cart: Option<&mut ActiveCart>, space: &mut AddressSpace) {
    space.set_region(BOUNTY_BOB_LOW_TRIGGER..=BOUNTY_BOB_LOW_TRIGGER + 3, RegionKind::Rom);
    space.set_region(BOUNTY_BOB_HIGH_TRIGGER..=BOUNTY_BOB_HIGH_TRIGGER + 3, RegionKind::Rom);
    space.set_region(SUPER_SELECT_PAGE..=0xBFFF, RegionKind::Rom);

    let Some(cart) = cart else {
        space.fill(CART_WINDOW_START, 0, (CART_WINDOW_END - CART_WINDOW_START) as usize + 1);
        return;
    };

    for copy in cart.info.layout.copies {
        space.copy_rom(
            copy.dest,
            copy.dest + (copy.len - 1) as u16,
            &cart.image[copy.source..],
        );
    }

    match cart.info.layout.switching {
        Switching::Fixed => {}
        Switching::Super => {
            if let Some(bank) = cart.bank.as_mut() {
                bank.index = SUPER_POWER_UP_BANK & (bank.total - 1);
                map_super_bank(space, &cart.image, bank.index);
            }
            space.set_region(SUPER_SELECT_PAGE..=0xBFFF, RegionKind::Hardware);
        }
        Switching::BountyBob(_) => {
            space.set_region(
                BOUNTY_BOB_LOW_TRIGGER..=BOUNTY_BOB_LOW_TRIGGER + 3,
                RegionKind::Hardware,
            );
            space.set_region(
                BOUNTY_BOB_HIGH_TRIGGER..=BOUNTY_BOB_HIGH_TRIGGER + 3,
                RegionKind::Hardware,
            );
        }
    }
}

/// Bank selected by an access to `addr` in the $BFxx page.
///
/// - `$BFCx`: address bits 2-3 become bank bits 2-3
/// - `$BFDx`: address bits 2-3 become bank bits 0-1
/// - `$BFEx`, `$BFFx`: bank 15
///
/// The result is masked to the number of banks fitted.
fn super_select(current: usize, addr: u16, total: usize) -> usize {
    if addr & 0xC0 != 0xC0 {
        return current;
    }
    let addr = addr as usize;
    let selected = match addr & 0x30 {
        0x00 => (current & 0x03) | (addr & 0x0C),
        0x10 => (current & 0x0C) | ((addr & 0x0C) >> 2),
        _ => 0x0F,
    };
    selected & (total - 1)
}

fn map_super_bank(space: &mut AddressSpace, image: &[u8], index: usize) {
    space.copy_rom(CART_WINDOW_START, CART_WINDOW_END, &image[index * SUPER_BANK_SIZE..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image where every byte encodes its own offset, so a mismatch names the
    /// source location.
    fn patterned(size: usize) -> Vec<u8> {
        (0..size).map(|i| ((i >> 8) ^ i) as u8).collect()
    }

    /// Image where each 4 KiB slice is filled with its slice number.
    fn sliced(size: usize) -> Vec<u8> {
        (0..size).map(|i| (i / 0x1000) as u8).collect()
    }

    fn slot_with(image: &[u8], cart_type: CartType) -> CartridgeSlot {
        let mut catalog = Catalog::empty();
        catalog.insert(CatalogEntry {
            fingerprint: Cow::Owned(fingerprint(image)),
            cart_type,
            analog_joystick: true,
            analog_sensitivity: 0.5,
            analog_range: 0.25,
            name: "Test Cart",
        });
        CartridgeSlot::new(catalog)
    }

    fn insert_as(image: Vec<u8>, cart_type: CartType) -> (CartridgeSlot, AddressSpace, Vec<u8>) {
        let mut slot = slot_with(&image, cart_type);
        let mut space = AddressSpace::new();
        let info = slot
            .insert(&mut space, Arc::from(image.clone()), true)
            .expect("insert");
        assert_eq!(info.cart_type, cart_type);
        (slot, space, image)
    }

    fn assert_window(space: &AddressSpace, dest: u16, image: &[u8], source: usize, len: usize) {
        for i in 0..len {
            let addr = dest + i as u16;
            assert_eq!(
                space.peek(addr),
                image[source + i],
                "{:04X} should mirror image {:05X}",
                addr,
                source + i
            );
        }
    }

    #[test]
    fn test_fingerprint_is_lowercase_md5() {
        assert_eq!(fingerprint(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(fingerprint(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_builtin_catalog_loaded() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 260);
        let pengo = catalog
            .lookup("a301a449fc20ad345b04932d3ca3ef54")
            .expect("Pengo is cataloged");
        assert_eq!(pengo.cart_type, CartType::Std32);
        assert_eq!(pengo.analog_sensitivity, 0.5);
        let bounty = catalog
            .lookup("5d5a75ac53230915701bc918249f1055")
            .expect("Bounty Bob is cataloged");
        assert_eq!(bounty.cart_type, CartType::BountyBob40Alt);
    }

    #[test]
    fn test_split16_golden_mapping() {
        let (_, space, image) = insert_as(patterned(0x4000), CartType::Split16);

        assert_window(&space, 0x4000, &image, 0x0000, 0x2000);
        assert_window(&space, 0x6000, &image, 0x0000, 0x2000);
        assert_window(&space, 0x8000, &image, 0x2000, 0x2000);
        assert_window(&space, 0xA000, &image, 0x2000, 0x2000);
    }

    #[test]
    fn test_fixed_layout_golden_mappings() {
        for cart_type in [
            CartType::Std4,
            CartType::Std8,
            CartType::NonSplit16,
            CartType::Split16,
            CartType::Std32,
            CartType::BountyBob40,
            CartType::BountyBob40Alt,
        ] {
            let size = cart_type.min_image_size();
            let (_, space, image) = insert_as(patterned(size), cart_type);
            for copy in cart_type.layout().copies {
                assert_window(&space, copy.dest, &image, copy.source, copy.len);
            }
        }
    }

    #[test]
    fn test_std4_is_mirrored_four_times() {
        let (_, space, image) = insert_as(patterned(0x1000), CartType::Std4);
        for dest in [0x8000u16, 0x9000, 0xA000, 0xB000] {
            assert_window(&space, dest, &image, 0, 0x1000);
        }
    }

    #[test]
    fn test_catalog_entry_carries_calibration() {
        let (slot, _, image) = insert_as(patterned(0x2000), CartType::Std8);
        let info = slot.info().expect("inserted");
        assert_eq!(info.name, "Test Cart");
        assert_eq!(info.fingerprint, fingerprint(&image));
        assert_eq!(info.analog_sensitivity, 0.5);
        assert_eq!(info.analog_range, 0.25);
        assert!(info.cataloged);
    }

    #[test]
    fn test_catalog_type_overrides_size() {
        // A 16 KiB image defaults to NonSplit16 but the catalog says Split16.
        let image = patterned(0x4000);
        let mut slot = slot_with(&image, CartType::Split16);
        let mut space = AddressSpace::new();
        let info = slot.insert(&mut space, Arc::from(image), false).expect("insert");
        assert_eq!(info.cart_type, CartType::Split16);
    }

    #[test]
    fn test_size_fallback_and_strict_mode() {
        let image: Arc<[u8]> = Arc::from(patterned(0x2000));
        let mut slot = CartridgeSlot::new(Catalog::empty());
        let mut space = AddressSpace::new();

        let info = slot.insert(&mut space, image.clone(), false).expect("by size");
        assert_eq!(info.cart_type, CartType::Std8);
        assert!(!info.cataloged);

        let err = slot.insert(&mut space, image, true).unwrap_err();
        assert!(matches!(err, CartridgeError::BadFormat { size: 0x2000, .. }));
        assert!(!slot.is_inserted());
    }

    #[test]
    fn test_bad_format_for_odd_size() {
        let mut slot = CartridgeSlot::new(Catalog::empty());
        let mut space = AddressSpace::new();
        let err = slot
            .insert(&mut space, Arc::from(patterned(24 * 1024 + 3)), false)
            .unwrap_err();
        assert!(matches!(err, CartridgeError::BadFormat { .. }));
        assert_eq!(err.status_code(), -2);
    }

    #[test]
    fn test_cant_open_small_buffer() {
        let mut slot = CartridgeSlot::default();
        let mut space = AddressSpace::new();
        assert_eq!(
            slot.insert(&mut space, Arc::from(Vec::new()), false).unwrap_err(),
            CartridgeError::CantOpen { size: 0 }
        );
        let err = slot.insert(&mut space, Arc::from(vec![0u8; 15]), false).unwrap_err();
        assert_eq!(err.status_code(), -1);
    }

    #[test]
    fn test_cataloged_type_too_large_for_image() {
        let image = patterned(0x2000);
        let mut slot = slot_with(&image, CartType::Std32);
        let mut space = AddressSpace::new();
        assert!(matches!(
            slot.insert(&mut space, Arc::from(image), false),
            Err(CartridgeError::BadFormat { .. })
        ));
    }

    #[test]
    fn test_remove_zero_fills_window_and_is_idempotent() {
        let (mut slot, mut space, _) = insert_as(vec![0xA5; 0x8000], CartType::Std32);
        assert_eq!(space.peek(0x4000), 0xA5);

        slot.remove(&mut space);
        assert!(space.slice(0x4000..=0xBFFF).iter().all(|&b| b == 0));
        assert!(!slot.is_inserted());
        assert_eq!(slot.cart_type(), CartType::None);

        slot.remove(&mut space);
        assert!(space.slice(0x4000..=0xBFFF).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_super_power_up_bank() {
        let (slot, space, image) = insert_as(patterned(0x20000), CartType::Super128);
        let bank = slot.bank().expect("super carts track a bank");
        assert_eq!(bank.index(), 1);
        assert_eq!(bank.total(), 4);
        assert_window(&space, 0x4000, &image, 0x8000, 0x8000);
        assert_eq!(space.region(0xBFC0), RegionKind::Hardware);
    }

    #[test]
    fn test_super_select_pattern() {
        // $BFCx sets the high bits, $BFDx the low bits
        assert_eq!(super_select(0, 0xBFCC, 16), 0x0C);
        assert_eq!(super_select(0x0C, 0xBFD4, 16), 0x0D);
        assert_eq!(super_select(0x0D, 0xBFD0, 16), 0x0C);
        assert_eq!(super_select(3, 0xBFE0, 16), 0x0F);
        assert_eq!(super_select(3, 0xBFFF, 16), 0x0F);
        // masked to fitted banks
        assert_eq!(super_select(0, 0xBFFF, 2), 1);
        assert_eq!(super_select(1, 0xBFC8, 4), 1);
        // $BF00-$BFBF never switches
        assert_eq!(super_select(5, 0xBF00, 16), 5);
        assert_eq!(super_select(5, 0xBFBF, 16), 5);
    }

    #[test]
    fn test_super_switch_happens_before_read() {
        let mut image = sliced(0x80000);
        // Mark each bank's copy of $BFF0 with the bank number + 0x80.
        for bank in 0..16 {
            image[bank * SUPER_BANK_SIZE + 0x7FF0] = 0x80 | bank as u8;
        }
        let (mut slot, mut space, _) = insert_as(image, CartType::Super512);

        // Reading $BFF0 selects bank 15 and returns bank 15's byte.
        assert_eq!(slot.read(&mut space, 0xBFF0), 0x8F);
        assert_eq!(slot.bank().map(|b| b.index()), Some(15));

        // Select bank 0: high bits from $BFC0, low bits from $BFD0.
        slot.write(&mut space, 0xBFC0);
        slot.write(&mut space, 0xBFD0);
        assert_eq!(slot.bank().map(|b| b.index()), Some(0));
        assert_eq!(space.peek(0x4000), 0x00);

        // Bank 6 = 01 10: $BFC4 then $BFD8.
        slot.read(&mut space, 0xBFC4);
        slot.read(&mut space, 0xBFD8);
        let bank = slot.bank().expect("bank");
        assert_eq!(bank.index(), 6);
        assert!(bank.index() < bank.total());
        // Bank 0's first slice is gone from the window.
        assert_eq!(space.peek(0x4000), (6 * SUPER_BANK_SIZE / 0x1000) as u8);
    }

    #[test]
    fn test_super_bank_invariant_holds_for_all_selects() {
        let (mut slot, mut space, _) = insert_as(sliced(0x10000), CartType::Super64);
        for addr in 0xBF00..=0xBFFFu16 {
            slot.read(&mut space, addr);
            let bank = slot.bank().expect("bank");
            assert!(bank.index() < bank.total());
        }
    }

    #[test]
    fn test_bounty_bob_triggers() {
        let (mut slot, mut space, image) = insert_as(sliced(0xA000), CartType::BountyBob40);
        assert_eq!(space.region(0x4FF6), RegionKind::Hardware);
        assert_eq!(space.region(0x5FF6), RegionKind::Hardware);

        for n in 0..4u16 {
            assert_eq!(slot.read(&mut space, 0x4FF6 + n), 0);
            assert_window(&space, 0x4000, &image, n as usize * 0x1000, 0x1000);

            slot.write(&mut space, 0x5FF6 + n);
            assert_window(&space, 0x5000, &image, 0x4000 + n as usize * 0x1000, 0x1000);
        }

        // Bytes around the window are ordinary ROM reads.
        let before = space.peek(0x4FF5);
        assert_eq!(slot.read(&mut space, 0x4FF5), before);
        assert_eq!(slot.read(&mut space, 0x4FFA), space.peek(0x4FFA));
    }

    #[test]
    fn test_bounty_bob_alt_offsets() {
        let (mut slot, mut space, image) = insert_as(sliced(0xA000), CartType::BountyBob40Alt);
        for n in 0..4u16 {
            slot.read(&mut space, 0x4FF6 + n);
            assert_window(&space, 0x4000, &image, 0x2000 + n as usize * 0x1000, 0x1000);
            slot.read(&mut space, 0x5FF6 + n);
            assert_window(&space, 0x5000, &image, 0x6000 + n as usize * 0x1000, 0x1000);
        }
    }

    #[test]
    fn test_start_restores_power_up_mapping() {
        let (mut slot, mut space, image) = insert_as(sliced(0x10000), CartType::Super64);
        slot.read(&mut space, 0xBFD0);
        assert_eq!(slot.bank().map(|b| b.index()), Some(0));

        slot.start(&mut space);
        assert_eq!(slot.bank().map(|b| b.index()), Some(1));
        assert_window(&space, 0x4000, &image, SUPER_BANK_SIZE, SUPER_BANK_SIZE);
    }

    #[test]
    fn test_set_bank_validates_range() {
        let (mut slot, mut space, image) = insert_as(sliced(0x20000), CartType::Super128);
        assert!(slot.set_bank(&mut space, 3).is_ok());
        assert_window(&space, 0x4000, &image, 3 * SUPER_BANK_SIZE, SUPER_BANK_SIZE);
        assert_eq!(
            slot.set_bank(&mut space, 4),
            Err(CartridgeError::BankOutOfRange { index: 4, total: 4 })
        );
        assert_eq!(slot.bank().map(|b| b.index()), Some(3));

        let (mut fixed, mut space, _) = insert_as(sliced(0x8000), CartType::Std32);
        assert_eq!(fixed.set_bank(&mut space, 0), Err(CartridgeError::NotBankSwitched));
    }

    #[test]
    fn test_insert_replaces_previous_cart_mapping() {
        let (mut slot, mut space, _) = insert_as(sliced(0xA000), CartType::BountyBob40);
        let image: Arc<[u8]> = Arc::from(vec![0x42u8; 0x8000]);
        slot.insert(&mut space, image, false).expect("std32 by size");
        assert_eq!(slot.cart_type(), CartType::Std32);
        assert_eq!(space.region(0x4FF6), RegionKind::Rom);
        assert_eq!(space.peek(0x4FF6), 0x42);
    }
}
