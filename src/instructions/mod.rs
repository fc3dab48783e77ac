//! # 6502 Instruction Implementations
//!
//! Instruction semantics, organized by category. Register and flag
//! operations are plain functions over `&mut u8` and `&mut Status` so the
//! dispatcher can aim them at any register or at a byte read from memory.
//! Stack and control-flow instructions need the bus and are methods on the
//! CPU.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Branch condition table (BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **transfer**: Loads and register transfers (LDA, LDX, LDY, TAX, TAY, TXA, TYA, TSX, TXS)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **control**: Control flow (JSR, RTS, RTI, BRK) and interrupt entry
//!
//! Stores, flag operations, JMP and NOP are one-liners handled in the
//! dispatcher.

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod inc_dec;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;
