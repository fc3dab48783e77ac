//! # Control Flow Instructions
//!
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from interrupt
//! - BRK: Software interrupt
//! - Hardware interrupt entry shared by NMI and IRQ
//!
//! JMP needs no helper here: the dispatcher loads PC straight from the
//! resolved address.
//!
//! JSR pushes the address of its own last byte, and RTS adds one after
//! pulling. BRK is a one-byte instruction followed by a padding byte, so the
//! address it pushes skips that byte.

use log::debug;

use crate::memory::Bus;
use crate::{Status, CPU};

pub(crate) const NMI_VECTOR: u16 = 0xFFFA;
pub(crate) const RESET_VECTOR: u16 = 0xFFFC;
pub(crate) const IRQ_VECTOR: u16 = 0xFFFE;

impl<B: Bus> CPU<B> {
    /// PC already points past the operand when this runs.
    pub(crate) fn execute_jsr(&mut self, target: u16) {
        let return_address = self.regs.pc.wrapping_sub(1);
        self.push_word(return_address);
        self.regs.pc = target;
    }

    pub(crate) fn execute_rts(&mut self) {
        self.regs.pc = self.pull_word().wrapping_add(1);
    }

    pub(crate) fn execute_rti(&mut self) {
        let image = self.pull();
        self.regs.status = Status::from_stack(image);
        self.regs.pc = self.pull_word();
    }

    /// PC already points past the opcode when this runs.
    pub(crate) fn execute_brk(&mut self) {
        let return_address = self.regs.pc.wrapping_add(1);
        self.push_word(return_address);
        let image = self.regs.status.to_byte_brk();
        self.push(image);
        self.regs.status.insert(Status::INTERRUPT_DISABLE);
        self.regs.pc = self.mmu.read_word(IRQ_VECTOR).value();
        debug!("BRK -> ${:04X}", self.regs.pc);
    }

    /// Hardware interrupt entry: pushes PC and status with B clear, sets I
    /// and jumps through `vector`.
    pub(crate) fn enter_interrupt(&mut self, vector: u16) {
        let return_address = self.regs.pc;
        self.push_word(return_address);
        let image = self.regs.status.to_byte_irq();
        self.push(image);
        self.regs.status.insert(Status::INTERRUPT_DISABLE);
        self.regs.pc = self.mmu.read_word(vector).value();
    }
}
