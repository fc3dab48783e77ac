//! # Addressing Modes
//!
//! This module defines the eight memory addressing modes of the 6502 and the
//! resolver that turns a mode plus the bytes following an opcode into an
//! effective address.
//!
//! The mode numbering is the one encoded in bits 2-4 of every group-1 opcode
//! (`aaabbbcc`, `bbb` = mode), so `AddressingMode::from_bits` decodes it
//! directly.
//!
//! Instructions outside that matrix use a handful of operand forms that are
//! not memory addressing modes (implied, accumulator, branch offsets) or are
//! special cases of one (zero page,Y and the `JMP` pointer). Those are
//! described by [`Operand`].

use crate::memory::{Bus, Mmu};
use crate::{Registers, Word};

/// 6502 memory addressing mode, in opcode encoding order.
///
/// # Operand Sizes
///
/// - **1 byte**: XIndexedIndirect, ZeroPage, Immediate, IndirectYIndexed, ZeroPageX
/// - **2 bytes**: Absolute, AbsoluteY, AbsoluteX
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    XIndexedIndirect,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// Full 16-bit address.
    ///
    /// Example: LDA $1234
    Absolute,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectYIndexed,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,
}

impl AddressingMode {
    /// All modes in encoding order.
    pub const ALL: [AddressingMode; 8] = [
        AddressingMode::XIndexedIndirect,
        AddressingMode::ZeroPage,
        AddressingMode::Immediate,
        AddressingMode::Absolute,
        AddressingMode::IndirectYIndexed,
        AddressingMode::ZeroPageX,
        AddressingMode::AbsoluteY,
        AddressingMode::AbsoluteX,
    ];

    /// Decodes a 3-bit mode field. Higher bits are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// Cycle cost of a read through this mode, before any page-cross penalty.
    pub const fn base_cycles(self) -> u8 {
        match self {
            AddressingMode::XIndexedIndirect => 6,
            AddressingMode::ZeroPage => 3,
            AddressingMode::Immediate => 2,
            AddressingMode::Absolute => 4,
            AddressingMode::IndirectYIndexed => 5,
            AddressingMode::ZeroPageX => 4,
            AddressingMode::AbsoluteY => 4,
            AddressingMode::AbsoluteX => 4,
        }
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Absolute | AddressingMode::AbsoluteY | AddressingMode::AbsoluteX => 2,
            _ => 1,
        }
    }

    /// Whether the effective address comes from a 16-bit indexed add that
    /// can spill into the next page.
    pub const fn can_cross_page(self) -> bool {
        matches!(
            self,
            AddressingMode::IndirectYIndexed | AddressingMode::AbsoluteY | AddressingMode::AbsoluteX
        )
    }
}

/// How an instruction finds its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// No operand bytes. Examples: CLC, RTS, TAX
    Implied,

    /// Operates on the accumulator. Examples: ASL A, ROR A
    Accumulator,

    /// Signed 8-bit branch displacement.
    Relative,

    /// One of the eight memory addressing modes.
    Memory(AddressingMode),

    /// Zero page indexed by Y, used by LDX and STX only.
    ZeroPageY,

    /// 16-bit pointer, used by `JMP ($xxxx)` only.
    AbsoluteIndirect,
}

impl Operand {
    /// Total instruction size in bytes, opcode included.
    pub const fn size_bytes(self) -> u8 {
        match self {
            Operand::Implied | Operand::Accumulator => 1,
            Operand::Relative | Operand::ZeroPageY => 2,
            Operand::AbsoluteIndirect => 3,
            Operand::Memory(mode) => 1 + mode.operand_bytes(),
        }
    }
}

/// Where a resolved operand lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The operand byte itself (immediate mode).
    Value(u8),

    /// An effective address.
    Address(u16),
}

/// Outcome of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub target: Target,

    /// The indexed add changed the high byte of the base address.
    pub page_crossed: bool,
}

impl Resolved {
    /// Extra cycle owed by a read that crossed a page.
    pub fn penalty(&self) -> u8 {
        u8::from(self.page_crossed)
    }
}

/// Reads the byte at PC and advances PC.
pub(crate) fn fetch<B: Bus>(regs: &mut Registers, mmu: &Mmu<B>) -> u8 {
    let byte = mmu.read(regs.pc);
    regs.pc = regs.pc.wrapping_add(1);
    byte
}

/// Reads the little-endian word at PC and advances PC by two.
pub(crate) fn fetch_word<B: Bus>(regs: &mut Registers, mmu: &Mmu<B>) -> Word {
    let lo = fetch(regs, mmu);
    let hi = fetch(regs, mmu);
    Word::from_bytes(lo, hi)
}

/// Resolves `mode` at the current PC.
///
/// Consumes the operand bytes (advancing `regs.pc`), performs any
/// indirection and indexing through `mmu`, and records in the MMU whether
/// the indexed add crossed a page.
///
/// # Examples
///
/// ```
/// use nes_cpu::{resolve, AddressingMode, Mmu, Registers, Target};
///
/// let mut mmu = Mmu::new();
/// let mut regs = Registers::new();
/// regs.pc = 0x0600;
/// regs.y = 0x10;
///
/// // ($20),Y with the pointer at $20 = $01F8
/// mmu.write(0x0600, 0x20);
/// mmu.write(0x0020, 0xF8);
/// mmu.write(0x0021, 0x01);
///
/// let resolved = resolve(AddressingMode::IndirectYIndexed, &mut regs, &mut mmu);
/// assert_eq!(resolved.target, Target::Address(0x0208));
/// assert!(resolved.page_crossed);
/// assert!(mmu.boundary_crossed());
/// assert_eq!(regs.pc, 0x0601);
/// ```
pub fn resolve<B: Bus>(mode: AddressingMode, regs: &mut Registers, mmu: &mut Mmu<B>) -> Resolved {
    let effective = match mode {
        AddressingMode::Immediate => {
            let value = fetch(regs, mmu);
            mmu.settle(regs.pc_word());
            return Resolved {
                target: Target::Value(value),
                page_crossed: false,
            };
        }
        AddressingMode::ZeroPage => {
            let zp = fetch(regs, mmu);
            mmu.settle(Word::zero_page(zp))
        }
        AddressingMode::ZeroPageX => {
            let zp = fetch(regs, mmu);
            mmu.settle(Word::zero_page(zp.wrapping_add(regs.x)))
        }
        AddressingMode::Absolute => {
            let address = fetch_word(regs, mmu);
            mmu.settle(address)
        }
        AddressingMode::AbsoluteX => {
            let base = fetch_word(regs, mmu);
            mmu.index(base, regs.x)
        }
        AddressingMode::AbsoluteY => {
            let base = fetch_word(regs, mmu);
            mmu.index(base, regs.y)
        }
        AddressingMode::XIndexedIndirect => {
            // Index first, then dereference
            let zp = fetch(regs, mmu);
            let pointer = mmu.read_zero_page_word(zp.wrapping_add(regs.x));
            mmu.settle(pointer)
        }
        AddressingMode::IndirectYIndexed => {
            // Dereference first, then index
            let zp = fetch(regs, mmu);
            let base = mmu.read_zero_page_word(zp);
            mmu.index(base, regs.y)
        }
    };

    Resolved {
        target: Target::Address(effective.value()),
        page_crossed: mmu.boundary_crossed(),
    }
}

/// Resolves `zp,Y` (LDX/STX). Wraps within zero page like `zp,X`.
pub(crate) fn resolve_zero_page_y<B: Bus>(regs: &mut Registers, mmu: &mut Mmu<B>) -> Resolved {
    let zp = fetch(regs, mmu);
    let effective = mmu.settle(Word::zero_page(zp.wrapping_add(regs.y)));
    Resolved {
        target: Target::Address(effective.value()),
        page_crossed: false,
    }
}

/// Resolves the `JMP ($xxxx)` pointer, including the NMOS bug where a pointer
/// at `$xxFF` takes its high byte from `$xx00`.
pub(crate) fn resolve_indirect<B: Bus>(regs: &mut Registers, mmu: &mut Mmu<B>) -> Resolved {
    let pointer = fetch_word(regs, mmu);
    let destination = mmu.read_word_in_page(pointer);
    let effective = mmu.settle(destination);
    Resolved {
        target: Target::Address(effective.value()),
        page_crossed: false,
    }
}

/// Computes a branch target from the displacement byte at PC.
///
/// The displacement is relative to the address of the next instruction. The
/// page check compares against that address as well.
pub(crate) fn resolve_relative<B: Bus>(regs: &mut Registers, mmu: &mut Mmu<B>) -> Resolved {
    let displacement = fetch(regs, mmu) as i8;
    let target = mmu.displace(regs.pc_word(), displacement);
    Resolved {
        target: Target::Address(target.value()),
        page_crossed: mmu.boundary_crossed(),
    }
}
