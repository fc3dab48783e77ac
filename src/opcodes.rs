//! # Opcode Decoding
//!
//! Every 6502 opcode byte has the shape `aaabbbcc`:
//!
//! - `cc` (bits 0-1): instruction group
//! - `bbb` (bits 2-4): addressing mode within the group
//! - `aaa` (bits 5-7): operation within the group
//!
//! [`Instruction`] exposes that triple with explicit masks and shifts.
//! [`decode`] maps a triple to its [`Opcode`] record, and [`OPCODE_TABLE`]
//! caches the result for all 256 byte values at compile time, so the
//! dispatcher does a single indexed load per fetch.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! byte values have no entry and decode to `None`.

use std::fmt;

use crate::addressing::{AddressingMode, Operand};

/// Instruction mnemonics of the documented 6502 instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Upper-case assembler name.
    pub const fn name(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }

    /// Read instructions take one extra cycle when indexing crosses a page.
    ///
    /// Stores and read-modify-write instructions always spend that cycle, so
    /// it is already part of their base cost.
    pub const fn pays_page_penalty(self) -> bool {
        use Mnemonic::*;
        matches!(self, Adc | And | Cmp | Eor | Lda | Ldx | Ldy | Ora | Sbc)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An opcode byte split into its `aaabbbcc` fields.
///
/// # Examples
///
/// ```
/// use nes_cpu::Instruction;
///
/// // LDA #imm = 101 010 01
/// let lda = Instruction::new(0xA9);
/// assert_eq!(lda.group(), 1);
/// assert_eq!(lda.mode(), 2);
/// assert_eq!(lda.operation(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction(u8);

impl Instruction {
    pub const fn new(opcode: u8) -> Self {
        Self(opcode)
    }

    /// The raw opcode byte.
    pub const fn opcode(self) -> u8 {
        self.0
    }

    /// Bits 0-1.
    pub const fn group(self) -> u8 {
        self.0 & 0b11
    }

    /// Bits 2-4.
    pub const fn mode(self) -> u8 {
        (self.0 >> 2) & 0b111
    }

    /// Bits 5-7.
    pub const fn operation(self) -> u8 {
        self.0 >> 5
    }
}

/// Decoded instruction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: Mnemonic,

    /// How the operand is located.
    pub operand: Operand,

    /// Cycle cost before any page-cross or branch penalty.
    pub cycles: u8,
}

impl Opcode {
    /// Total instruction size in bytes, opcode included.
    pub const fn size_bytes(&self) -> u8 {
        self.operand.size_bytes()
    }
}

const fn entry(mnemonic: Mnemonic, operand: Operand, cycles: u8) -> Option<Opcode> {
    Some(Opcode {
        mnemonic,
        operand,
        cycles,
    })
}

const fn memory(mnemonic: Mnemonic, mode: AddressingMode, cycles: u8) -> Option<Opcode> {
    entry(mnemonic, Operand::Memory(mode), cycles)
}

/// Decodes an instruction triple. Returns `None` for illegal opcodes.
pub const fn decode(instruction: Instruction) -> Option<Opcode> {
    let operation = instruction.operation();
    let mode = instruction.mode();
    match instruction.group() {
        0b00 => decode_control(operation, mode),
        0b01 => decode_alu(operation, mode),
        0b10 => decode_read_modify_write(operation, mode),
        _ => None,
    }
}

/// `cc = 01`: the eight accumulator operations across all eight modes.
const fn decode_alu(operation: u8, mode_bits: u8) -> Option<Opcode> {
    use AddressingMode::*;
    use Mnemonic::*;

    const OPERATIONS: [Mnemonic; 8] = [Ora, And, Eor, Adc, Sta, Lda, Cmp, Sbc];

    let mnemonic = OPERATIONS[operation as usize];
    let mode = AddressingMode::from_bits(mode_bits);
    match (mnemonic, mode) {
        (Sta, Immediate) => None,
        (Sta, AbsoluteX | AbsoluteY) => memory(Sta, mode, 5),
        (Sta, IndirectYIndexed) => memory(Sta, mode, 6),
        _ => memory(mnemonic, mode, mode.base_cycles()),
    }
}

/// `cc = 10`: shifts, rotates, INC/DEC, LDX/STX and the X-register
/// transfers that share the encoding space.
const fn decode_read_modify_write(operation: u8, mode_bits: u8) -> Option<Opcode> {
    use AddressingMode::*;
    use Mnemonic::*;

    const OPERATIONS: [Mnemonic; 8] = [Asl, Rol, Lsr, Ror, Stx, Ldx, Dec, Inc];

    let mnemonic = OPERATIONS[operation as usize];
    let modifies = !matches!(mnemonic, Stx | Ldx);
    match mode_bits {
        0 => match mnemonic {
            Ldx => memory(Ldx, Immediate, 2),
            _ => None,
        },
        1 => memory(mnemonic, ZeroPage, if modifies { 5 } else { 3 }),
        2 => match operation {
            0..=3 => entry(mnemonic, Operand::Accumulator, 2),
            4 => entry(Txa, Operand::Implied, 2),
            5 => entry(Tax, Operand::Implied, 2),
            6 => entry(Dex, Operand::Implied, 2),
            _ => entry(Nop, Operand::Implied, 2),
        },
        3 => memory(mnemonic, Absolute, if modifies { 6 } else { 4 }),
        5 => match mnemonic {
            Stx | Ldx => entry(mnemonic, Operand::ZeroPageY, 4),
            _ => memory(mnemonic, ZeroPageX, 6),
        },
        6 => match mnemonic {
            Stx => entry(Txs, Operand::Implied, 2),
            Ldx => entry(Tsx, Operand::Implied, 2),
            _ => None,
        },
        7 => match mnemonic {
            Stx => None,
            Ldx => memory(Ldx, AbsoluteY, 4),
            _ => memory(mnemonic, AbsoluteX, 7),
        },
        _ => None,
    }
}

/// `cc = 00`: control flow, stack, flags, Y-register and compare-index
/// instructions.
const fn decode_control(operation: u8, mode_bits: u8) -> Option<Opcode> {
    use AddressingMode::*;
    use Mnemonic::*;

    const BRANCHES: [Mnemonic; 8] = [Bpl, Bmi, Bvc, Bvs, Bcc, Bcs, Bne, Beq];
    const STACK_AND_INDEX: [(Mnemonic, u8); 8] = [
        (Php, 3),
        (Plp, 4),
        (Pha, 3),
        (Pla, 4),
        (Dey, 2),
        (Tay, 2),
        (Iny, 2),
        (Inx, 2),
    ];
    const FLAGS_AND_TYA: [Mnemonic; 8] = [Clc, Sec, Cli, Sei, Tya, Clv, Cld, Sed];

    match (mode_bits, operation) {
        (0, 0) => entry(Brk, Operand::Implied, 7),
        (0, 1) => memory(Jsr, Absolute, 6),
        (0, 2) => entry(Rti, Operand::Implied, 6),
        (0, 3) => entry(Rts, Operand::Implied, 6),
        (0, 5) => memory(Ldy, Immediate, 2),
        (0, 6) => memory(Cpy, Immediate, 2),
        (0, 7) => memory(Cpx, Immediate, 2),

        (1, 1) => memory(Bit, ZeroPage, 3),
        (1, 4) => memory(Sty, ZeroPage, 3),
        (1, 5) => memory(Ldy, ZeroPage, 3),
        (1, 6) => memory(Cpy, ZeroPage, 3),
        (1, 7) => memory(Cpx, ZeroPage, 3),

        (2, _) => {
            let (mnemonic, cycles) = STACK_AND_INDEX[operation as usize];
            entry(mnemonic, Operand::Implied, cycles)
        }

        (3, 1) => memory(Bit, Absolute, 4),
        (3, 2) => memory(Jmp, Absolute, 3),
        (3, 3) => entry(Jmp, Operand::AbsoluteIndirect, 5),
        (3, 4) => memory(Sty, Absolute, 4),
        (3, 5) => memory(Ldy, Absolute, 4),
        (3, 6) => memory(Cpy, Absolute, 4),
        (3, 7) => memory(Cpx, Absolute, 4),

        (4, _) => entry(BRANCHES[operation as usize], Operand::Relative, 2),

        (5, 4) => memory(Sty, ZeroPageX, 4),
        (5, 5) => memory(Ldy, ZeroPageX, 4),

        (6, _) => entry(FLAGS_AND_TYA[operation as usize], Operand::Implied, 2),

        (7, 5) => memory(Ldy, AbsoluteX, 4),

        _ => None,
    }
}

const fn build_table() -> [Option<Opcode>; 256] {
    let mut table = [None; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = decode(Instruction::new(opcode as u8));
        opcode += 1;
    }
    table
}

/// All 256 opcode bytes, decoded once at compile time.
///
/// # Examples
///
/// ```
/// use nes_cpu::{AddressingMode, Mnemonic, Operand, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.operand, Operand::Memory(AddressingMode::Immediate));
/// assert_eq!(lda_imm.cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
///
/// // Illegal opcodes have no entry
/// assert!(OPCODE_TABLE[0x02].is_none());
/// ```
pub static OPCODE_TABLE: [Option<Opcode>; 256] = build_table();

/// Looks up the decoded record for an opcode byte.
pub fn lookup(opcode: u8) -> Option<&'static Opcode> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENTED: [u8; 151] = [
        0x00, 0x01, 0x05, 0x06, 0x08, 0x09, 0x0A, 0x0D, 0x0E, 0x10, 0x11, 0x15, 0x16, 0x18,
        0x19, 0x1D, 0x1E, 0x20, 0x21, 0x24, 0x25, 0x26, 0x28, 0x29, 0x2A, 0x2C, 0x2D, 0x2E,
        0x30, 0x31, 0x35, 0x36, 0x38, 0x39, 0x3D, 0x3E, 0x40, 0x41, 0x45, 0x46, 0x48, 0x49,
        0x4A, 0x4C, 0x4D, 0x4E, 0x50, 0x51, 0x55, 0x56, 0x58, 0x59, 0x5D, 0x5E, 0x60, 0x61,
        0x65, 0x66, 0x68, 0x69, 0x6A, 0x6C, 0x6D, 0x6E, 0x70, 0x71, 0x75, 0x76, 0x78, 0x79,
        0x7D, 0x7E, 0x81, 0x84, 0x85, 0x86, 0x88, 0x8A, 0x8C, 0x8D, 0x8E, 0x90, 0x91, 0x94,
        0x95, 0x96, 0x98, 0x99, 0x9A, 0x9D, 0xA0, 0xA1, 0xA2, 0xA4, 0xA5, 0xA6, 0xA8, 0xA9,
        0xAA, 0xAC, 0xAD, 0xAE, 0xB0, 0xB1, 0xB4, 0xB5, 0xB6, 0xB8, 0xB9, 0xBA, 0xBC, 0xBD,
        0xBE, 0xC0, 0xC1, 0xC4, 0xC5, 0xC6, 0xC8, 0xC9, 0xCA, 0xCC, 0xCD, 0xCE, 0xD0, 0xD1,
        0xD5, 0xD6, 0xD8, 0xD9, 0xDD, 0xDE, 0xE0, 0xE1, 0xE4, 0xE5, 0xE6, 0xE8, 0xE9, 0xEA,
        0xEC, 0xED, 0xEE, 0xF0, 0xF1, 0xF5, 0xF6, 0xF8, 0xF9, 0xFD, 0xFE,
    ];

    #[test]
    fn test_exactly_documented_opcodes_decode() {
        for opcode in 0..=255u8 {
            assert_eq!(
                lookup(opcode).is_some(),
                DOCUMENTED.contains(&opcode),
                "opcode 0x{opcode:02X}"
            );
        }
    }

    #[test]
    fn test_group_three_is_illegal() {
        for opcode in (0..=255u8).filter(|op| op & 0b11 == 0b11) {
            assert!(lookup(opcode).is_none(), "opcode 0x{opcode:02X}");
        }
    }

    #[test]
    fn test_instruction_fields() {
        let instruction = Instruction::new(0b101_110_10);
        assert_eq!(instruction.group(), 0b10);
        assert_eq!(instruction.mode(), 0b110);
        assert_eq!(instruction.operation(), 0b101);
        assert_eq!(instruction.opcode(), 0xBA);
    }

    #[test]
    fn test_alu_group_cycles_follow_mode() {
        for operation in [0u8, 1, 2, 3, 5, 6, 7] {
            for (bits, mode) in AddressingMode::ALL.iter().enumerate() {
                let opcode = (operation << 5) | ((bits as u8) << 2) | 0b01;
                let decoded = lookup(opcode).unwrap();
                assert_eq!(decoded.operand, Operand::Memory(*mode));
                assert_eq!(decoded.cycles, mode.base_cycles(), "opcode 0x{opcode:02X}");
            }
        }
    }

    #[test]
    fn test_store_and_modify_timings() {
        let cases = [
            (0x9D, Mnemonic::Sta, 5),
            (0x99, Mnemonic::Sta, 5),
            (0x91, Mnemonic::Sta, 6),
            (0x06, Mnemonic::Asl, 5),
            (0x16, Mnemonic::Asl, 6),
            (0x0E, Mnemonic::Asl, 6),
            (0x1E, Mnemonic::Asl, 7),
            (0xFE, Mnemonic::Inc, 7),
            (0x96, Mnemonic::Stx, 4),
            (0x6C, Mnemonic::Jmp, 5),
            (0x4C, Mnemonic::Jmp, 3),
            (0x20, Mnemonic::Jsr, 6),
            (0x00, Mnemonic::Brk, 7),
        ];

        for (opcode, mnemonic, cycles) in cases {
            let decoded = lookup(opcode).unwrap();
            assert_eq!(decoded.mnemonic, mnemonic, "opcode 0x{opcode:02X}");
            assert_eq!(decoded.cycles, cycles, "opcode 0x{opcode:02X}");
        }
    }

    #[test]
    fn test_x_register_operands() {
        assert_eq!(lookup(0xB6).unwrap().operand, Operand::ZeroPageY);
        assert_eq!(
            lookup(0xBE).unwrap().operand,
            Operand::Memory(AddressingMode::AbsoluteY)
        );
        assert_eq!(lookup(0x0A).unwrap().operand, Operand::Accumulator);
        assert_eq!(lookup(0x9A).unwrap().mnemonic, Mnemonic::Txs);
        assert_eq!(lookup(0xEA).unwrap().mnemonic, Mnemonic::Nop);
    }

    #[test]
    fn test_branches_follow_selector() {
        let names: Vec<&str> = (0..8u8)
            .map(|op| lookup((op << 5) | 0x10).unwrap().mnemonic.name())
            .collect();
        assert_eq!(
            names,
            vec!["BPL", "BMI", "BVC", "BVS", "BCC", "BCS", "BNE", "BEQ"]
        );
    }

    #[test]
    fn test_sizes() {
        assert_eq!(lookup(0x20).unwrap().size_bytes(), 3);
        assert_eq!(lookup(0xD0).unwrap().size_bytes(), 2);
        assert_eq!(lookup(0x48).unwrap().size_bytes(), 1);
    }
}
