//! GTIA register stub (mapped at $C000 on the 5200, mirrored at $D000).

use emu_core::logging::{log, LogCategory, LogLevel};
use serde::{Deserialize, Serialize};

use super::Chip;

pub const CONSOL_START: u8 = 0x01;
pub const CONSOL_SELECT: u8 = 0x02;
pub const CONSOL_OPTION: u8 = 0x04;

const TRIG0: u8 = 0x10;
const TRIG3: u8 = 0x13;
const CONSOL: u8 = 0x1F;

/// Console keys held down by the machine itself for a few frames after a
/// coldstart. Bits follow the CONSOL register (set = held).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleKeys {
    held: u8,
    frames: u32,
}

impl ConsoleKeys {
    pub fn hold(&mut self, keys: u8, frames: u32) {
        self.held = keys & 0x07;
        self.frames = frames;
    }

    pub fn release(&mut self) {
        self.held = 0;
        self.frames = 0;
    }

    /// Keys currently held, or 0 once the hold has run out
    pub fn held(&self) -> u8 {
        if self.frames > 0 {
            self.held
        } else {
            0
        }
    }

    pub fn frames_left(&self) -> u32 {
        self.frames
    }

    pub fn end_frame(&mut self) {
        self.frames = self.frames.saturating_sub(1);
    }

    /// CONSOL value: active low, upper nibble clear
    pub fn consol(&self) -> u8 {
        0x0F & !self.held()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gtia {
    regs: [u8; 32],
    pub console: ConsoleKeys,
}

impl Gtia {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Chip for Gtia {
    fn get_byte(&mut self, addr: u16) -> u8 {
        match (addr & 0x1F) as u8 {
            // Triggers read as released
            TRIG0..=TRIG3 => 1,
            CONSOL => self.console.consol(),
            reg => {
                log(LogCategory::Stubs, LogLevel::Trace, || {
                    format!("GTIA read of unmodeled register {:02X}", reg)
                });
                0
            }
        }
    }

    fn put_byte(&mut self, addr: u16, val: u8) {
        self.regs[(addr & 0x1F) as usize] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consol_reflects_held_keys() {
        let mut gtia = Gtia::new();
        assert_eq!(gtia.get_byte(0xC01F), 0x0F);

        gtia.console.hold(CONSOL_OPTION | CONSOL_START, 2);
        assert_eq!(gtia.get_byte(0xC01F), 0x0A);
        // mirrored every 32 bytes
        assert_eq!(gtia.get_byte(0xD03F), 0x0A);

        gtia.console.end_frame();
        assert_eq!(gtia.get_byte(0xC01F), 0x0A);
        gtia.console.end_frame();
        assert_eq!(gtia.get_byte(0xC01F), 0x0F);
        gtia.console.end_frame();
        assert_eq!(gtia.console.frames_left(), 0);
    }

    #[test]
    fn test_triggers_read_released() {
        let mut gtia = Gtia::new();
        for addr in 0xC010..=0xC013 {
            assert_eq!(gtia.get_byte(addr), 1);
        }
        assert_eq!(gtia.get_byte(0xC000), 0);
        assert!(!gtia.has_reset_line());
    }
}
