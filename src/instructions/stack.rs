//! # Stack Operations
//!
//! - PHA / PLA: Push / pull the accumulator
//! - PHP / PLP: Push / pull the status register
//!
//! The 6502 stack lives at 0x0100-0x01FF and grows downward. SP is an 8-bit
//! offset into that page: a push writes to 0x0100 | SP and then decrements,
//! a pull increments and then reads. Both wrap within the page.

use crate::memory::Bus;
use crate::{Status, CPU};

/// Base address of the hardware stack.
pub(crate) const STACK_PAGE: u16 = 0x0100;

impl<B: Bus> CPU<B> {
    pub(crate) fn push(&mut self, value: u8) {
        self.mmu.write(STACK_PAGE | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.mmu.read(STACK_PAGE | self.regs.sp as u16)
    }

    /// Pushes high byte first, so the word sits little-endian in memory.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull() as u16;
        let hi = self.pull() as u16;
        (hi << 8) | lo
    }

    pub(crate) fn execute_pha(&mut self) {
        let a = self.regs.a;
        self.push(a);
    }

    /// PLA updates N and Z from the pulled value.
    pub(crate) fn execute_pla(&mut self) {
        let value = self.pull();
        self.regs.a = value;
        self.regs.status.set_nz(value);
    }

    /// PHP always pushes B set.
    pub(crate) fn execute_php(&mut self) {
        let image = self.regs.status.to_byte_brk();
        self.push(image);
    }

    pub(crate) fn execute_plp(&mut self) {
        let image = self.pull();
        self.regs.status = Status::from_stack(image);
    }
}
