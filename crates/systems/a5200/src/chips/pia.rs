//! PIA at $D300. Port B doubles as the XL/XE memory-control latch; the bus
//! watches it for overlay changes.

use serde::{Deserialize, Serialize};

use super::Chip;

pub const PORTA: u16 = 0;
pub const PORTB: u16 = 1;
const PACTL: u16 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pia {
    port: [u8; 2],
    ctl: [u8; 2],
}

impl Default for Pia {
    fn default() -> Self {
        Self::new()
    }
}

impl Pia {
    pub fn new() -> Self {
        Self {
            port: [0xFF; 2],
            ctl: [0x3F; 2],
        }
    }

    pub fn portb(&self) -> u8 {
        self.port[1]
    }
}

impl Chip for Pia {
    fn get_byte(&mut self, addr: u16) -> u8 {
        match addr & 0x03 {
            PORTA => self.port[0],
            PORTB => self.port[1],
            PACTL => self.ctl[0],
            _ => self.ctl[1],
        }
    }

    fn put_byte(&mut self, addr: u16, val: u8) {
        match addr & 0x03 {
            PORTA => self.port[0] = val,
            PORTB => self.port[1] = val,
            PACTL => self.ctl[0] = val,
            _ => self.ctl[1] = val,
        }
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
    fn test_reset_restores_ports() {
        let mut pia = Pia::new();
        pia.put_byte(0xD301, 0x7C);
        pia.put_byte(0xD303, 0x00);
        assert_eq!(pia.portb(), 0x7C);
        assert_eq!(pia.get_byte(0xD307), 0x00);

        pia.reset();
        assert_eq!(pia.portb(), 0xFF);
        assert_eq!(pia.get_byte(0xD302), 0x3F);
        assert!(pia.has_reset_line());
    }
}
