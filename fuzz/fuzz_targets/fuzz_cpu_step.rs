//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory image, executes one
//! instruction and checks the step report against the opcode table.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes_cpu::{lookup, FlatMemory, Mmu, Status, CPU, ILLEGAL_OPCODE_CYCLES};

#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction and operands at 0x8000
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Mapped at 0x4000 for absolute operands
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut mmu = Mmu::with_bus(FlatMemory::new());

    mmu.write(0xFFFC, 0x00);
    mmu.write(0xFFFD, 0x80);
    mmu.write(0xFFFE, 0x00);
    mmu.write(0xFFFF, 0x90);

    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        mmu.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        mmu.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        mmu.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        mmu.write(0x4000 + i as u16, byte);
    }

    let mut cpu = CPU::new(mmu);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_byte(input.cpu_state.status));

    let opcode = input.memory.instruction_bytes[0];
    let step = cpu.step();

    match lookup(opcode) {
        Some(decoded) => {
            assert!(step.is_ok());
            assert!(step.cycles >= u32::from(decoded.cycles));
            assert!(step.cycles <= u32::from(decoded.cycles) + 2);
        }
        None => {
            assert!(step.fault.is_some());
            assert_eq!(step.cycles, ILLEGAL_OPCODE_CYCLES);
            assert_eq!(cpu.pc(), 0x8001);
        }
    }
    assert_eq!(cpu.cycles(), u64::from(step.cycles));
    assert!(cpu.status().contains(Status::UNUSED));
});
