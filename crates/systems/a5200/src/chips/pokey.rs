//! POKEY register stub (mapped at $E800/$EB00 on the 5200, mirrored at $D200).

use emu_core::logging::{log, LogCategory, LogLevel};
use serde::{Deserialize, Serialize};

use super::Chip;

const ALLPOT: u8 = 0x08;
const KBCODE: u8 = 0x09;
const RANDOM: u8 = 0x0A;
const IRQST: u8 = 0x0E;
const SKSTAT: u8 = 0x0F;

/// Analog stick centre position
pub const POT_CENTRE: u8 = 114;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokey {
    regs: [u8; 16],
    pots: [u8; 8],
    kbcode: u8,
    lfsr: u32,
}

impl Default for Pokey {
    fn default() -> Self {
        Self::new()
    }
}

impl Pokey {
    pub fn new() -> Self {
        Self {
            regs: [0; 16],
            pots: [POT_CENTRE; 8],
            kbcode: 0xFF,
            lfsr: 0x1FFFF,
        }
    }

    pub fn set_pot(&mut self, index: usize, val: u8) {
        if let Some(pot) = self.pots.get_mut(index) {
            *pot = val;
        }
    }

    pub fn set_kbcode(&mut self, code: u8) {
        self.kbcode = code;
    }

    /// 17-bit polynomial counter
    fn next_random(&mut self) -> u8 {
        let bit = (self.lfsr ^ (self.lfsr >> 5)) & 1;
        self.lfsr = (self.lfsr >> 1) | (bit << 16);
        self.lfsr as u8
    }
}

impl Chip for Pokey {
    fn get_byte(&mut self, addr: u16) -> u8 {
        match (addr & 0x0F) as u8 {
            pot @ 0x00..=0x07 => self.pots[pot as usize],
            ALLPOT => 0,
            KBCODE => self.kbcode,
            RANDOM => self.next_random(),
            IRQST | SKSTAT => 0xFF,
            reg => {
                log(LogCategory::Stubs, LogLevel::Trace, || {
                    format!("POKEY read of unmodeled register {:02X}", reg)
                });
                0xFF
            }
        }
    }

    fn put_byte(&mut self, addr: u16, val: u8) {
        self.regs[(addr & 0x0F) as usize] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pots_default_to_centre() {
        let mut pokey = Pokey::new();
        assert_eq!(pokey.get_byte(0xE800), POT_CENTRE);
        pokey.set_pot(1, 7);
        assert_eq!(pokey.get_byte(0xEB01), 7);
        assert_eq!(pokey.get_byte(0xD201), 7);
        pokey.set_pot(99, 0);
    }

    #[test]
    fn test_random_changes() {
        let mut pokey = Pokey::new();
        let samples: Vec<u8> = (0..16).map(|_| pokey.get_byte(0xE80A)).collect();
        assert!(samples.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_status_registers_idle() {
        let mut pokey = Pokey::new();
        assert_eq!(pokey.get_byte(0xE80E), 0xFF);
        assert_eq!(pokey.get_byte(0xE80F), 0xFF);
        assert!(!pokey.has_reset_line());
    }
}
