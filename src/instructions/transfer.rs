//! # Load and Register Transfer Instructions
//!
//! - LDA, LDX, LDY: Load a register from memory
//! - TAX, TAY, TXA, TYA, TSX: Copy one register into another
//! - TXS: Copy X into the stack pointer
//!
//! Loads and transfers set Z and N from the destination. TXS is the one
//! exception: it leaves the flags alone.

use crate::Status;

/// Copies `source` into `destination` and updates Z and N.
pub(crate) fn transfer(destination: &mut u8, source: u8, status: &mut Status) {
    *destination = source;
    status.set_nz(source);
}

/// Loads a register from a memory operand. Same flag rules as [`transfer`].
pub(crate) fn load(register: &mut u8, value: u8, status: &mut Status) {
    transfer(register, value, status);
}

/// TXS: copies X into SP. No flags are affected.
pub(crate) fn transfer_to_stack_pointer(sp: &mut u8, x: u8) {
    *sp = x;
}
