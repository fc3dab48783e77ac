//! # NES 6502 CPU Core
//!
//! A cycle-counting NMOS 6502 interpreter as found in the NES 2A03, paired
//! with the NES CPU memory map: 2 KiB of internal RAM mirrored across
//! 0x0000-0x1FFF and an external bus for everything above.
//!
//! The crate stops at the CPU's pins. Cartridge mapping, PPU/APU registers
//! and program loading belong to whatever implements [`Bus`] for the upper
//! address range.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes_cpu::{FlatMemory, Mmu, CPU};
//!
//! // 64KB flat memory behind the internal RAM
//! let mut mmu = Mmu::with_bus(FlatMemory::new());
//!
//! // Set reset vector to point to program start at 0x8000
//! mmu.write(0xFFFC, 0x00); // Low byte
//! mmu.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$05; ADC #$03
//! for (i, byte) in [0xA9, 0x05, 0x69, 0x03].into_iter().enumerate() {
//!     mmu.write(0x8000 + i as u16, byte);
//! }
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(mmu);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! let cycles = cpu.step().cycles + cpu.step().cycles;
//! assert_eq!(cpu.a(), 0x08);
//! assert_eq!(cycles, 4);
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Decode**: Opcode bytes are split into their `aaabbbcc`
//!   fields once, at compile time, into a 256-entry table
//! - **Separate Resolution and Semantics**: Addressing modes compute an
//!   operand; instruction semantics never touch the bus
//! - **Cycle Counting**: Every step reports base cycles plus page-cross and
//!   branch penalties
//! - **No Panics on Bad Input**: Illegal opcodes and unmapped addresses have
//!   defined outcomes
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - Bus trait, the MMU and its implementations
//! - `opcodes` - Opcode decoding and the opcode table
//! - `addressing` - Addressing modes and operand resolution
//! - `status`, `registers`, `word` - Register file building blocks
//! - `error` - Faults reported by `step`
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `trace` for every executed
//! instruction, `debug` for reset and interrupts, `warn` for illegal
//! opcodes. Install any `log` backend to see them.

pub mod addressing;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod status;
pub mod word;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{resolve, AddressingMode, Operand, Resolved, Target};
pub use cpu::{Step, CPU, INTERRUPT_CYCLES};
pub use error::{Fault, ILLEGAL_OPCODE_CYCLES};
pub use memory::{Bus, FlatMemory, Mmu, OpenBus};
pub use opcodes::{decode, lookup, Instruction, Mnemonic, Opcode, OPCODE_TABLE};
pub use registers::Registers;
pub use status::Status;
pub use word::Word;
