//! The $D500 cartridge I/O page and the RTIME-8 clock cartridge.
//!
//! RTIME-8 talks a nibble-serial protocol over $D5B8/$D5B9: the guest writes
//! a register number, then either reads two nibbles (high first) or writes
//! two nibbles. Registers 0-6 read the host clock in BCD; the rest are
//! scratch.

use chrono::{Datelike, Local, NaiveDateTime, Timelike};

use super::Chip;

pub const RTIME8_PORTS: [u16; 2] = [0xD5B8, 0xD5B9];

/// Source of wall-clock time
pub type HostClock = Box<dyn Fn() -> NaiveDateTime + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Register,
    HighNibble,
    LowNibble,
}

pub struct Rtime8 {
    phase: Phase,
    register: u8,
    pending: u8,
    scratch: [u8; 16],
    clock: HostClock,
}

impl Default for Rtime8 {
    fn default() -> Self {
        Self::new()
    }
}

fn bcd(val: u32) -> u8 {
    let val = (val % 100) as u8;
    ((val / 10) << 4) | (val % 10)
}

impl Rtime8 {
    pub fn new() -> Self {
        Self::with_clock(Box::new(|| Local::now().naive_local()))
    }

    pub fn with_clock(clock: HostClock) -> Self {
        Self {
            phase: Phase::Register,
            register: 0,
            pending: 0,
            scratch: [0; 16],
            clock,
        }
    }

    fn value(&self, register: u8) -> u8 {
        if register > 6 {
            return self.scratch[register as usize];
        }
        let now = (self.clock)();
        match register {
            0 => bcd(now.second()),
            1 => bcd(now.minute()),
            2 => bcd(now.hour()),
            3 => bcd(now.day()),
            4 => bcd(now.month()),
            5 => bcd(now.year().rem_euclid(100) as u32),
            _ => bcd(now.weekday().number_from_sunday()),
        }
    }

    pub fn read(&mut self) -> u8 {
        match self.phase {
            Phase::Register => 0,
            Phase::HighNibble => {
                self.phase = Phase::LowNibble;
                self.value(self.register) >> 4
            }
            Phase::LowNibble => {
                self.phase = Phase::Register;
                self.value(self.register) & 0x0F
            }
        }
    }

    pub fn write(&mut self, val: u8) {
        let val = val & 0x0F;
        match self.phase {
            Phase::Register => {
                self.register = val;
                self.phase = Phase::HighNibble;
            }
            Phase::HighNibble => {
                self.pending = val << 4;
                self.phase = Phase::LowNibble;
            }
            Phase::LowNibble => {
                self.pending |= val;
                if self.register > 6 {
                    self.scratch[self.register as usize] = self.pending;
                }
                self.phase = Phase::Register;
            }
        }
    }
}

/// Chip on the $D500 page. Without an RTIME-8 fitted the page floats high.
#[derive(Default)]
pub struct CartIoArea {
    rtime8: Option<Rtime8>,
}

impl CartIoArea {
    pub fn new(rtime8: Option<Rtime8>) -> Self {
        Self { rtime8 }
    }

    pub fn rtime8_enabled(&self) -> bool {
        self.rtime8.is_some()
    }
}

impl Chip for CartIoArea {
    fn get_byte(&mut self, addr: u16) -> u8 {
        match self.rtime8.as_mut() {
            Some(clock) if RTIME8_PORTS.contains(&addr) => clock.read(),
            _ => 0xFF,
        }
    }

    fn put_byte(&mut self, addr: u16, val: u8) {
        if let Some(clock) = self.rtime8.as_mut() {
            if RTIME8_PORTS.contains(&addr) {
                clock.write(val);
            }
        }
    }
}
