//! CPU register file.

use std::fmt;

use crate::{Status, Word};

/// Stack pointer value after power-on and reset.
pub const POWER_ON_SP: u8 = 0xFD;

/// The 6502 register file.
///
/// Owned by the [`CPU`](crate::CPU); callers get copies of it through
/// [`CPU::registers`](crate::CPU::registers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Accumulator
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Processor status flags
    pub status: Status,
}

impl Registers {
    /// Power-on register state with PC at zero.
    pub fn new() -> Self {
        Self {
            pc: 0x0000,
            sp: POWER_ON_SP,
            a: 0x00,
            x: 0x00,
            y: 0x00,
            status: Status::UNUSED | Status::INTERRUPT_DISABLE,
        }
    }

    /// Program counter as a little-endian word.
    pub fn pc_word(&self) -> Word {
        Word::new(self.pc)
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{}",
            self.pc, self.a, self.x, self.y, self.sp, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let regs = Registers::new();
        assert_eq!(regs.sp, 0xFD);
        assert_eq!(regs.status.to_byte(), 0x24);
        assert_eq!((regs.a, regs.x, regs.y), (0, 0, 0));
    }

    #[test]
    fn test_display() {
        let mut regs = Registers::new();
        regs.pc = 0xC000;
        regs.a = 0x42;
        assert_eq!(
            regs.to_string(),
            "PC:C000 A:42 X:00 Y:00 SP:FD P:nv-bdIzc"
        );
    }
}
