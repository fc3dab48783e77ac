//! Tests for register transfers and flag instructions.

use nes_cpu::{FlatMemory, Mmu, Status, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut mmu = Mmu::with_bus(FlatMemory::new());
    mmu.write(0xFFFC, 0x00);
    mmu.write(0xFFFD, 0x80);
    CPU::new(mmu)
}

fn run(cpu: &mut CPU<FlatMemory>, opcode: u8) -> u32 {
    let pc = cpu.pc();
    cpu.mmu_mut().write(pc, opcode);
    cpu.step().into_result().unwrap()
}

// ========== Transfers ==========

#[test]
fn test_tax_tay() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);

    assert_eq!(run(&mut cpu, 0xAA), 2); // TAX
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());

    cpu.set_a(0x00);
    run(&mut cpu, 0xA8); // TAY
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_txa_tya() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x12);
    cpu.set_y(0x34);

    run(&mut cpu, 0x8A); // TXA
    assert_eq!(cpu.a(), 0x12);

    run(&mut cpu, 0x98); // TYA
    assert_eq!(cpu.a(), 0x34);
}

#[test]
fn test_tsx_sets_flags() {
    let mut cpu = setup_cpu();

    run(&mut cpu, 0xBA); // TSX
    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_copies_x_without_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);
    cpu.set_status(Status::NEGATIVE);

    assert_eq!(run(&mut cpu, 0x9A), 2); // TXS
    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

// ========== Flags ==========

#[test]
fn test_flag_instructions() {
    let mut cpu = setup_cpu();

    run(&mut cpu, 0x38); // SEC
    assert!(cpu.flag_c());
    run(&mut cpu, 0x18); // CLC
    assert!(!cpu.flag_c());

    run(&mut cpu, 0x58); // CLI
    assert!(!cpu.flag_i());
    run(&mut cpu, 0x78); // SEI
    assert!(cpu.flag_i());

    run(&mut cpu, 0xF8); // SED
    assert!(cpu.flag_d());
    run(&mut cpu, 0xD8); // CLD
    assert!(!cpu.flag_d());

    cpu.set_flag(Status::OVERFLOW, true);
    run(&mut cpu, 0xB8); // CLV
    assert!(!cpu.flag_v());

    assert_eq!(cpu.cycles(), 14);
}
