//! ANTIC register stub at $D400.

use emu_core::logging::{log, LogCategory, LogLevel};
use serde::{Deserialize, Serialize};

use super::Chip;

const VCOUNT: u8 = 0x0B;
const NMIST: u8 = 0x0F;
const NMIRES: u8 = 0x0F;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Antic {
    regs: [u8; 16],
    vcount: u8,
    nmist: u8,
}

impl Default for Antic {
    fn default() -> Self {
        Self::new()
    }
}

impl Antic {
    pub fn new() -> Self {
        Self {
            regs: [0; 16],
            vcount: 0,
            nmist: 0x1F,
        }
    }
}

impl Chip for Antic {
    fn get_byte(&mut self, addr: u16) -> u8 {
        match (addr & 0x0F) as u8 {
            VCOUNT => self.vcount,
            NMIST => self.nmist,
            reg => {
                log(LogCategory::Stubs, LogLevel::Trace, || {
                    format!("ANTIC read of write-only register {:02X}", reg)
                });
                0xFF
            }
        }
    }

    fn put_byte(&mut self, addr: u16, val: u8) {
        let reg = (addr & 0x0F) as u8;
        if reg == NMIRES {
            self.nmist = 0x1F;
        }
        self.regs[reg as usize] = val;
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn has_reset_line(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_registers() {
        let mut antic = Antic::new();
        assert_eq!(antic.get_byte(0xD40B), 0);
        assert_eq!(antic.get_byte(0xD40F), 0x1F);
        assert_eq!(antic.get_byte(0xD400), 0xFF);
        antic.put_byte(0xD400, 0x22);
        antic.reset();
        assert_eq!(antic.regs[0], 0);
    }
}
