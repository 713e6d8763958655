//! Machine lifecycle: construction, warm and cold reset, trap dispatch,
//! file opening and snapshots.

use std::sync::Arc;

use emu_core::logging::{log, LogCategory, LogLevel};
use emu_core::{CpuRegisters, Memory6502};

use crate::bus::Atari5200Bus;
use crate::cartridge::{BankState, CartInfo, CartridgeSlot, Catalog};
use crate::chips::{CartIoArea, Rtime8, CONSOL_OPTION, CONSOL_START};
use crate::config::MachineConfig;
use crate::cpu::RegisterFile;
use crate::detect::{self, FileType, FormatError};
use crate::escape::{
    EscapeTable, TrapContext, TrapError, TrapOutcome, ESC_COPENLOAD, ESC_COPENSAVE, ESC_SIOV,
};
use crate::memory::{AddressSpace, RegionKind};
use crate::overlay::OverlayEvent;
use crate::snapshot::{self, MachineSnapshot, SnapshotError, StateCursor, MACHINE_5200};
use crate::A5200Error;

pub const BIOS_SIZE: usize = 0x800;
pub const BIOS_BASE: u16 = 0xF800;
const RESET_VECTOR: u16 = 0xFFFC;
/// OS coldstart flag (COLDST)
const COLDST: u16 = 0x0244;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    Running,
    /// An escape decode did not match any installed trap. Stays until the
    /// next coldstart.
    Crashed { code: u8, pc: u16 },
}

/// Atari 5200 SuperSystem
pub struct Atari5200<C: CpuRegisters = RegisterFile> {
    pub cpu: C,
    pub bus: Atari5200Bus,
    traps: EscapeTable,
    config: MachineConfig,
    state: MachineState,
    bios: Option<Box<[u8]>>,
}

impl Default for Atari5200 {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

impl Atari5200 {
    pub fn new(config: MachineConfig) -> Self {
        Self::with_cpu(RegisterFile::default(), config)
    }
}

impl<C: CpuRegisters> Atari5200<C> {
    pub fn with_cpu(cpu: C, config: MachineConfig) -> Self {
        Self::with_catalog(cpu, config, Catalog::builtin())
    }

    pub fn with_catalog(cpu: C, config: MachineConfig, catalog: Catalog) -> Self {
        let rtime8 = config.rtime8_enabled.then(Rtime8::new);
        let mut machine = Self {
            cpu,
            bus: Atari5200Bus::new(CartridgeSlot::new(catalog), CartIoArea::new(rtime8)),
            traps: EscapeTable::new(),
            config,
            state: MachineState::Running,
            bios: None,
        };
        machine.traps.clear_all();
        machine.initialise_memory();
        machine.coldstart();
        machine
    }

    /// Power-up memory map: RAM below $4000, ROM above, four chip pages and
    /// the BIOS at $F800.
    fn initialise_memory(&mut self) {
        let space = &mut self.bus.space;
        match &self.bios {
            Some(bios) => space.copy_rom(BIOS_BASE, 0xFFFF, bios),
            None => space.fill(BIOS_BASE, 0, BIOS_SIZE),
        }
        space.fill(0x0000, 0x00, BIOS_BASE as usize);
        space.set_region(0x0000..=0x3FFF, RegionKind::Ram);
        space.set_region(0x4000..=0xFFFF, RegionKind::Rom);
        space.set_region(0xC000..=0xC0FF, RegionKind::Hardware);
        space.set_region(0xD400..=0xD4FF, RegionKind::Hardware);
        space.set_region(0xE800..=0xE8FF, RegionKind::Hardware);
        space.set_region(0xEB00..=0xEBFF, RegionKind::Hardware);
        if self.bus.cart_io.rtime8_enabled() {
            space.set_region(0xD500..=0xD5FF, RegionKind::Hardware);
        }
        // The cartridge mapping was wiped along with the rest of memory.
        self.bus.cartridge.start(&mut self.bus.space);
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn is_crashed(&self) -> bool {
        matches!(self.state, MachineState::Crashed { .. })
    }

    pub fn traps(&self) -> &EscapeTable {
        &self.traps
    }

    pub fn traps_mut(&mut self) -> &mut EscapeTable {
        &mut self.traps
    }

    pub fn cartridge(&self) -> Option<&CartInfo> {
        self.bus.cartridge.info()
    }

    pub fn bank(&self) -> Option<BankState> {
        self.bus.cartridge.bank()
    }

    pub fn space(&self) -> &AddressSpace {
        &self.bus.space
    }

    /// Load the 2 KiB BIOS and rebuild the power-up memory map.
    pub fn load_bios(&mut self, data: &[u8]) -> Result<(), A5200Error> {
        if data.len() != BIOS_SIZE {
            return Err(A5200Error::InvalidBios { size: data.len() });
        }
        self.bios = Some(data.into());
        self.bus.overlay.set_bios(data);
        self.initialise_memory();
        self.coldstart();
        Ok(())
    }

    pub fn unload_bios(&mut self) {
        self.bios = None;
        self.bus.overlay.clear_os_rom();
        self.initialise_memory();
    }

    pub fn has_bios(&self) -> bool {
        self.bios.is_some()
    }

    /// Reset the chips with a reset line and the CPU. Cartridge banking is
    /// left alone.
    pub fn warmstart(&mut self) {
        self.bus.reset_chips();
        self.handle_overlay_event();
        // The vector must be fetched after the PIA reset has remapped the OS.
        let vector = u16::from_le_bytes([
            self.bus.space.peek(RESET_VECTOR),
            self.bus.space.peek(RESET_VECTOR + 1),
        ]);
        self.cpu.reset(vector);
    }

    /// Power cycle: warmstart, put the cartridge back to its power-up
    /// mapping, flag a cold boot to the OS and hold the boot console keys.
    pub fn coldstart(&mut self) {
        self.warmstart();
        self.bus.cartridge.start(&mut self.bus.space);
        self.bus.space.poke(COLDST, 1);

        let mut keys = 0;
        if self.config.disable_basic && !self.config.loading_basic {
            keys |= CONSOL_OPTION;
        }
        if self.config.hold_start {
            keys |= CONSOL_START;
        }
        self.bus
            .gtia
            .console
            .hold(keys, self.config.console_hold_frames);

        if self.is_crashed() {
            log(LogCategory::CPU, LogLevel::Info, || "Recovered from crash".to_string());
        }
        self.state = MachineState::Running;
    }

    /// Frame boundary bookkeeping
    pub fn end_frame(&mut self) {
        self.bus.gtia.console.end_frame();
    }

    /// Apply the OS patch phase after the OS ROM was (re)mapped.
    pub fn patch_os(&mut self) {
        if self.config.enable_sio_patch {
            return;
        }
        for code in [ESC_COPENLOAD, ESC_COPENSAVE, ESC_SIOV] {
            self.traps.remove(code);
        }
    }

    fn handle_overlay_event(&mut self) {
        if let Some(OverlayEvent::OsRomEnabled) = self.bus.take_overlay_event() {
            self.patch_os();
        }
    }

    fn ensure_running(&self) -> Result<(), A5200Error> {
        match self.state {
            MachineState::Running => Ok(()),
            MachineState::Crashed { code, pc } => Err(A5200Error::MachineCrashed { code, pc }),
        }
    }

    fn trap_result(
        &mut self,
        result: Result<TrapOutcome, TrapError>,
    ) -> Result<TrapOutcome, A5200Error> {
        self.handle_overlay_event();
        match result {
            Ok(outcome) => Ok(outcome),
            Err(TrapError::Crash { code, pc, installed_at }) => {
                self.state = MachineState::Crashed { code, pc };
                Err(TrapError::Crash { code, pc, installed_at }.into())
            }
        }
    }

    /// Fetch-stage hook: run the trap installed at the current program
    /// counter, if any.
    pub fn fetch_hook(&mut self) -> Result<Option<TrapOutcome>, A5200Error> {
        self.ensure_running()?;
        let result = {
            let mut ctx = TrapContext {
                cpu: &mut self.cpu,
                memory: &mut self.bus,
            };
            self.traps.intercept(&mut ctx)
        };
        match result {
            Some(result) => self.trap_result(result).map(Some),
            None => Ok(None),
        }
    }

    /// The CPU decoded escape `code`; the program counter is already past it.
    pub fn run_escape(&mut self, code: u8) -> Result<TrapOutcome, A5200Error> {
        self.ensure_running()?;
        let result = {
            let mut ctx = TrapContext {
                cpu: &mut self.cpu,
                memory: &mut self.bus,
            };
            self.traps.fire(code, &mut ctx)
        };
        self.trap_result(result)
    }

    /// Identify and map a raw image. The `$8000` and `$A000` window latches
    /// follow what the layout occupies.
    pub fn insert_cartridge(&mut self, image: impl Into<Arc<[u8]>>) -> Result<&CartInfo, A5200Error> {
        self.remove_cartridge();
        let strict = self.config.strict_catalog;
        let info = self
            .bus
            .cartridge
            .insert(&mut self.bus.space, image.into(), strict)?;
        let overlay = &mut self.bus.overlay;
        if info.layout.covers(0x8000, 0x9FFF) {
            overlay.enable_cart_809f();
        }
        if info.layout.covers(0xA000, 0xBFFF) {
            overlay.enable_cart_a0bf();
        }
        Ok(info)
    }

    pub fn remove_cartridge(&mut self) {
        self.bus.overlay.disable_cart_809f(&mut self.bus.space);
        self.bus.overlay.disable_cart_a0bf(&mut self.bus.space);
        self.bus.cartridge.remove(&mut self.bus.space);
    }

    /// Open a loaded file. Only cartridges are accepted; the current
    /// cartridge is removed whatever the outcome.
    pub fn open_file(&mut self, data: &[u8], reboot: bool) -> Result<FileType, A5200Error> {
        self.remove_cartridge();

        let file_type = detect::detect(data)?;
        let payload = match file_type {
            FileType::Cart => detect::parse_cart_container(data)?.payload,
            FileType::Rom => data,
            other => {
                log(LogCategory::Cartridge, LogLevel::Warn, || {
                    format!("Cannot open {:?} file on this machine", other)
                });
                return Err(FormatError::Unsupported(other).into());
            }
        };
        self.insert_cartridge(payload)?;
        if reboot {
            self.coldstart();
        }
        Ok(file_type)
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        let cart_type = self.bus.cartridge.cart_type();
        MachineSnapshot {
            tv_mode: self.config.tv_mode,
            machine: MACHINE_5200,
            cart_type_tag: cart_type.tag(),
            bank: self
                .bank()
                .filter(|_| cart_type.is_super())
                .map(|bank| bank.index() as i32),
        }
    }

    pub fn save_snapshot(&self, verbose: bool) -> Vec<u8> {
        let meta = self.snapshot();
        let mut out = Vec::new();
        snapshot::write_header(&mut out, verbose);
        snapshot::write_main(&mut out, meta.tv_mode);
        snapshot::write_cart(&mut out, meta.cart_type_tag, meta.bank);
        snapshot::write_memory(&mut out, &self.bus.space);
        log(LogCategory::Snapshot, LogLevel::Info, || {
            format!("Saved snapshot ({} bytes)", out.len())
        });
        out
    }

    /// Restore a snapshot taken with the same cartridge inserted. Nothing is
    /// changed unless the whole stream is valid.
    pub fn load_snapshot(&mut self, data: &[u8]) -> Result<MachineSnapshot, A5200Error> {
        let expect_bank = self.bus.cartridge.cart_type().is_super();

        let mut cursor = StateCursor::new(data);
        snapshot::read_header(&mut cursor)?;
        let (tv_mode, machine) = snapshot::read_main(&mut cursor)?;
        let (cart_type_tag, bank) = snapshot::read_cart(&mut cursor, expect_bank)?;
        let mut space = AddressSpace::new();
        snapshot::read_memory(&mut cursor, &mut space)?;

        let bank_index = match bank {
            Some(index) if index < 0 => return Err(SnapshotError::NegativeBank(index).into()),
            Some(index) => {
                let total = self.bank().map_or(0, |bank| bank.total());
                BankState::new(index as usize, total).map_err(SnapshotError::from)?;
                Some(index as usize)
            }
            None => None,
        };

        self.config.tv_mode = tv_mode;
        self.bus.space = space;
        if let Some(index) = bank_index {
            self.bus
                .cartridge
                .set_bank(&mut self.bus.space, index)
                .map_err(SnapshotError::from)?;
        }
        log(LogCategory::Snapshot, LogLevel::Info, || {
            format!("Loaded snapshot, bank {:?}", bank_index)
        });
        Ok(MachineSnapshot {
            tv_mode,
            machine,
            cart_type_tag,
            bank,
        })
    }
}

impl<C: CpuRegisters> Memory6502 for Atari5200<C> {
    fn read(&mut self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    fn write(&mut self, addr: u16, val: u8) {
        self.bus.write(addr, val);
        self.handle_overlay_event();
    }
}
