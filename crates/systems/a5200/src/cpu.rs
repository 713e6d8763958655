//! Default CPU collaborator: the 6502C register file without an execution
//! core. A real core plugs in through [`CpuRegisters`].

use emu_core::logging::{log, LogCategory, LogLevel};
use emu_core::CpuRegisters;
use serde::{Deserialize, Serialize};

const FLAG_I: u8 = 0x04;
const FLAG_UNUSED: u8 = 0x20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterFile {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub status: u8,
    pub pc: u16,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            status: FLAG_UNUSED | FLAG_I,
            pc: 0,
        }
    }
}

impl CpuRegisters for RegisterFile {
    fn pc(&self) -> u16 {
        self.pc
    }

    fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    fn reset(&mut self, vector: u16) {
        // Reset runs three dummy pushes and masks interrupts.
        self.sp = self.sp.wrapping_sub(3);
        self.status |= FLAG_I;
        self.pc = vector;
        log(LogCategory::CPU, LogLevel::Debug, || {
            format!("CPU reset, PC={:04X}", vector)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_loads_vector_and_masks_irq() {
        let mut cpu = RegisterFile {
            status: FLAG_UNUSED,
            ..Default::default()
        };
        cpu.reset(0xFE00);
        assert_eq!(cpu.pc(), 0xFE00);
        assert_eq!(cpu.sp, 0xFC);
        assert_ne!(cpu.status & FLAG_I, 0);
    }
}
