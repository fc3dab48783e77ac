//! Faults reported by [`CPU::step`](crate::CPU::step).

use thiserror::Error;

/// Cycles charged for an opcode byte that decodes to no instruction.
///
/// Matches the two-cycle cost of the one-byte NMOS `NOP`, which is how such
/// bytes are treated: the opcode is consumed and execution continues.
pub const ILLEGAL_OPCODE_CYCLES: u32 = 2;

/// Errors that can occur during CPU execution.
///
/// A fault never leaves the CPU in an undefined state. The caller decides
/// whether to keep stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The byte at `address` is not a documented 6502 opcode.
    #[error("illegal opcode ${opcode:02X} at ${address:04X}")]
    IllegalOpcode { opcode: u8, address: u16 },
}
