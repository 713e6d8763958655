//! Escape traps: host-side handlers that replace OS routines.
//!
//! A trap is a `(code, address, handler)` slot. The fetch stage asks
//! [`EscapeTable::intercept`] before executing the instruction at the program
//! counter; a hit runs the handler instead. ROM bytes are never rewritten.
//!
//! A CPU core that still decodes the two-byte escape opcode calls
//! [`EscapeTable::fire`] with the program counter already past it. The slot's
//! recorded address must then equal `pc - 2`; anything else is an illegal
//! instruction in guest code and crashes the machine.

use std::collections::HashMap;
use std::fmt;

use emu_core::logging::{log, LogCategory, LogLevel};
use emu_core::{CpuRegisters, Memory6502};
use thiserror::Error;

/// Bytes occupied by an escape opcode and its code
pub const SENTINEL_WIDTH: u16 = 2;

pub const ESC_COPENLOAD: u8 = 0xA8;
pub const ESC_COPENSAVE: u8 = 0xA9;
pub const ESC_SIOV: u8 = 0xB0;

/// What a handler sees of the machine.
pub struct TrapContext<'a> {
    pub cpu: &'a mut dyn CpuRegisters,
    pub memory: &'a mut dyn Memory6502,
}

pub type TrapHandler = Box<dyn FnMut(&mut TrapContext<'_>)>;

/// How execution resumes after a handler ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// Continue at the current program counter
    Continue,
    /// The CPU must perform an RTS next
    ReturnFromSubroutine,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrapError {
    #[error("Illegal instruction: escape code {code:#04x} at {pc:#06x} (installed at {})", .installed_at.map_or_else(|| "nowhere".to_string(), |a| format!("{:#06x}", a)))]
    Crash {
        code: u8,
        pc: u16,
        installed_at: Option<u16>,
    },
}

#[derive(Default)]
struct EscapeSlot {
    address: Option<u16>,
    handler: Option<TrapHandler>,
    returns: bool,
}

pub struct EscapeTable {
    slots: Vec<EscapeSlot>,
    by_address: HashMap<u16, u8>,
}

impl Default for EscapeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EscapeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EscapeTable")
            .field("installed", &self.by_address.len())
            .finish()
    }
}

impl EscapeTable {
    pub fn new() -> Self {
        Self {
            slots: (0..256).map(|_| EscapeSlot::default()).collect(),
            by_address: HashMap::new(),
        }
    }

    /// Install `handler` for `code` at `address`. A previous installation of
    /// the same code is replaced and its old address stops trapping.
    pub fn install<F>(&mut self, address: u16, code: u8, handler: F)
    where
        F: FnMut(&mut TrapContext<'_>) + 'static,
    {
        self.set(address, code, Box::new(handler), false);
    }

    /// Like [`EscapeTable::install`], followed by a return from subroutine.
    pub fn install_with_return<F>(&mut self, address: u16, code: u8, handler: F)
    where
        F: FnMut(&mut TrapContext<'_>) + 'static,
    {
        self.set(address, code, Box::new(handler), true);
    }

    fn set(&mut self, address: u16, code: u8, handler: TrapHandler, returns: bool) {
        let slot = &mut self.slots[code as usize];
        if let Some(old) = slot.address.filter(|&old| old != address) {
            if self.by_address.get(&old) == Some(&code) {
                self.by_address.remove(&old);
            }
            log(LogCategory::Traps, LogLevel::Debug, || {
                format!("Escape {:02X} moved from {:04X} to {:04X}", code, old, address)
            });
        }
        slot.address = Some(address);
        slot.handler = Some(handler);
        slot.returns = returns;
        if let Some(previous) = self.by_address.insert(address, code) {
            if previous != code {
                // The displaced code no longer owns any address.
                self.slots[previous as usize].address = None;
                log(LogCategory::Traps, LogLevel::Debug, || {
                    format!("Escape {:02X} displaced {:02X} at {:04X}", code, previous, address)
                });
            }
        }
        log(LogCategory::Traps, LogLevel::Debug, || {
            format!("Installed escape {:02X} at {:04X}", code, address)
        });
    }

    /// Drop the handler for `code`. The slot keeps its address, so a decode
    /// of this code afterwards is a crash.
    pub fn remove(&mut self, code: u8) {
        let slot = &mut self.slots[code as usize];
        if slot.handler.take().is_some() {
            log(LogCategory::Traps, LogLevel::Debug, || format!("Removed escape {:02X}", code));
        }
        if let Some(address) = slot.address {
            if self.by_address.get(&address) == Some(&code) {
                self.by_address.remove(&address);
            }
        }
    }

    pub fn clear_all(&mut self) {
        for slot in &mut self.slots {
            slot.handler = None;
        }
        self.by_address.clear();
    }

    pub fn is_installed(&self, code: u8) -> bool {
        self.slots[code as usize].handler.is_some()
    }

    pub fn address_of(&self, code: u8) -> Option<u16> {
        self.slots[code as usize].address
    }

    /// Code whose handler is live at `pc`
    pub fn lookup(&self, pc: u16) -> Option<u8> {
        self.by_address.get(&pc).copied()
    }

    /// Run the handler for a decoded escape `code`. The program counter has
    /// already advanced past the sentinel.
    pub fn fire(&mut self, code: u8, ctx: &mut TrapContext<'_>) -> Result<TrapOutcome, TrapError> {
        let pc = ctx.cpu.pc();
        let slot = &mut self.slots[code as usize];
        let installed_at = slot.address;

        match (installed_at, slot.handler.as_mut()) {
            (Some(address), Some(handler)) if address == pc.wrapping_sub(SENTINEL_WIDTH) => {
                log(LogCategory::Traps, LogLevel::Trace, || {
                    format!("Escape {:02X} at {:04X}", code, address)
                });
                handler(ctx);
                Ok(if slot.returns {
                    TrapOutcome::ReturnFromSubroutine
                } else {
                    TrapOutcome::Continue
                })
            }
            _ => {
                let pc = pc.wrapping_sub(SENTINEL_WIDTH);
                log(LogCategory::Traps, LogLevel::Error, || {
                    format!("Illegal instruction: escape {:02X} at {:04X}", code, pc)
                });
                Err(TrapError::Crash {
                    code,
                    pc,
                    installed_at,
                })
            }
        }
    }

    /// Fetch-stage hook. Returns `None` when no trap is live at the program
    /// counter.
    pub fn intercept(&mut self, ctx: &mut TrapContext<'_>) -> Option<Result<TrapOutcome, TrapError>> {
        let pc = ctx.cpu.pc();
        let code = self.lookup(pc)?;
        ctx.cpu.set_pc(pc.wrapping_add(SENTINEL_WIDTH));
        Some(self.fire(code, ctx))
    }
}
