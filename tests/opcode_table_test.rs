//! Tests for the opcode table and the `aaabbbcc` decoder.

use nes_cpu::{decode, lookup, AddressingMode, Instruction, Mnemonic, Operand, OPCODE_TABLE};

#[test]
fn test_documented_opcode_count() {
    let documented = OPCODE_TABLE.iter().filter(|entry| entry.is_some()).count();
    assert_eq!(documented, 151);
}

#[test]
fn test_table_matches_decoder() {
    for opcode in 0..=255u8 {
        assert_eq!(
            OPCODE_TABLE[opcode as usize],
            decode(Instruction::new(opcode)),
            "{:02X}",
            opcode
        );
        assert_eq!(lookup(opcode).copied(), OPCODE_TABLE[opcode as usize]);
    }
}

#[test]
fn test_instruction_fields() {
    for opcode in 0..=255u8 {
        let instruction = Instruction::new(opcode);
        let rebuilt = (instruction.operation() << 5) | (instruction.mode() << 2) | instruction.group();
        assert_eq!(rebuilt, opcode);
    }
}

#[test]
fn test_spot_checks() {
    let lda = lookup(0xA9).unwrap();
    assert_eq!(lda.mnemonic, Mnemonic::Lda);
    assert_eq!(lda.operand, Operand::Memory(AddressingMode::Immediate));
    assert_eq!(lda.cycles, 2);
    assert_eq!(lda.size_bytes(), 2);

    let sta = lookup(0x91).unwrap();
    assert_eq!(sta.mnemonic, Mnemonic::Sta);
    assert_eq!(sta.operand, Operand::Memory(AddressingMode::IndirectYIndexed));
    assert_eq!(sta.cycles, 6);

    let jmp = lookup(0x6C).unwrap();
    assert_eq!(jmp.operand, Operand::AbsoluteIndirect);
    assert_eq!(jmp.size_bytes(), 3);

    let stx = lookup(0x96).unwrap();
    assert_eq!(stx.mnemonic, Mnemonic::Stx);
    assert_eq!(stx.operand, Operand::ZeroPageY);

    let ldx = lookup(0xBE).unwrap();
    assert_eq!(ldx.operand, Operand::Memory(AddressingMode::AbsoluteY));

    let asl = lookup(0x0A).unwrap();
    assert_eq!(asl.operand, Operand::Accumulator);
    assert_eq!(asl.mnemonic.to_string(), "ASL");
}

#[test]
fn test_illegal_opcodes_absent() {
    for opcode in [0x02, 0x03, 0x04, 0x0B, 0x1A, 0x80, 0x89, 0x9E, 0x9C, 0xFF] {
        assert!(lookup(opcode).is_none(), "{:02X}", opcode);
    }
}

#[test]
fn test_group_one_cycles_follow_mode() {
    for opcode in 0..=255u8 {
        let instruction = Instruction::new(opcode);
        if instruction.group() != 0b01 {
            continue;
        }
        if let Some(decoded) = lookup(opcode) {
            if decoded.mnemonic != Mnemonic::Sta {
                let mode = AddressingMode::from_bits(instruction.mode());
                assert_eq!(decoded.cycles, mode.base_cycles(), "{:02X}", opcode);
            }
        }
    }
}
