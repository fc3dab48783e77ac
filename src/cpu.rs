//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: PC, SP, A, X, Y and the status flags, as one [`Registers`] value
//! - **MMU**: the owned [`Mmu`] holding internal RAM and the external bus
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction and report its cycles and any fault
//! - `run_for_cycles()`: Execute until cycle budget exhausted
//!
//! Each step goes Fetch -> Decode -> Resolve -> Execute -> Writeback. The
//! decode is a single lookup in [`OPCODE_TABLE`](crate::OPCODE_TABLE); the
//! resolver in [`addressing`](crate::addressing) consumes the operand bytes;
//! the semantics live in the private `instructions` modules.

use log::{debug, trace, warn};

use crate::addressing::{fetch, resolve, resolve_indirect, resolve_relative, resolve_zero_page_y};
use crate::instructions::control::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::instructions::{alu, branches, inc_dec, shifts, transfer};
use crate::memory::{Bus, Mmu, OpenBus};
use crate::opcodes::{lookup, Instruction, Mnemonic, Opcode};
use crate::{Fault, Operand, Registers, Resolved, Status, Target, ILLEGAL_OPCODE_CYCLES};

/// Cycles spent by reset and by NMI/IRQ entry.
pub const INTERRUPT_CYCLES: u32 = 7;

/// Outcome of executing one instruction.
///
/// `cycles` is always the number of cycles the instruction took, including
/// page-cross and branch penalties. `fault` is set when the opcode was not a
/// documented instruction; the CPU has still moved past it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub cycles: u32,
    pub fault: Option<Fault>,
}

impl Step {
    /// True when the instruction executed without a fault.
    pub fn is_ok(&self) -> bool {
        self.fault.is_none()
    }

    /// Converts into a `Result`, keeping the cycle count on success.
    pub fn into_result(self) -> Result<u32, Fault> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(self.cycles),
        }
    }
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its registers, its cycle counter and the [`Mmu`] it executes
/// against. It is generic over the external bus plugged into that MMU; the
/// default is [`OpenBus`], i.e. nothing mapped above internal RAM.
///
/// # Examples
///
/// ```
/// use nes_cpu::{FlatMemory, Mmu, CPU};
///
/// // Program area and reset vector live on the external bus
/// let mut mmu = Mmu::with_bus(FlatMemory::new());
/// mmu.write(0xFFFC, 0x00); // Low byte
/// mmu.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(mmu);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert!(cpu.flag_i()); // Interrupt disable set on reset
/// assert_eq!(cpu.cycles(), 0);
/// ```
pub struct CPU<B: Bus = OpenBus> {
    pub(crate) regs: Registers,

    pub(crate) mmu: Mmu<B>,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,
}

impl<B: Bus> CPU<B> {
    /// Creates a new CPU that executes against `mmu`.
    ///
    /// The CPU is initialized to the 6502 power-on state:
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is 0xFD
    /// - Interrupt Disable is set
    /// - A, X, Y and the cycle counter are zero
    pub fn new(mmu: Mmu<B>) -> Self {
        let mut regs = Registers::new();
        regs.pc = mmu.read_word(RESET_VECTOR).value();

        Self {
            regs,
            mmu,
            cycles: 0,
        }
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at PC and advance PC
    /// 2. Look up the opcode record in the table
    /// 3. Resolve the operand, consuming its bytes
    /// 4. Execute and write back
    /// 5. Add base cycles plus penalties to the cycle counter
    ///
    /// An illegal opcode is skipped: PC moves past the single opcode byte,
    /// [`ILLEGAL_OPCODE_CYCLES`] are charged and the fault is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{Fault, FlatMemory, Mmu, CPU};
    ///
    /// let mut mmu = Mmu::with_bus(FlatMemory::new());
    /// mmu.write(0xFFFC, 0x00);
    /// mmu.write(0xFFFD, 0x80);
    /// mmu.write(0x8000, 0xEA); // NOP
    /// mmu.write(0x8001, 0x02); // illegal
    ///
    /// let mut cpu = CPU::new(mmu);
    ///
    /// let step = cpu.step();
    /// assert_eq!(step.cycles, 2);
    /// assert!(step.is_ok());
    ///
    /// let step = cpu.step();
    /// assert_eq!(
    ///     step.fault,
    ///     Some(Fault::IllegalOpcode { opcode: 0x02, address: 0x8001 })
    /// );
    /// assert_eq!(cpu.pc(), 0x8002);
    /// ```
    pub fn step(&mut self) -> Step {
        let address = self.regs.pc;
        let opcode = fetch(&mut self.regs, &self.mmu);

        let decoded = match lookup(opcode) {
            Some(decoded) => *decoded,
            None => {
                warn!("illegal opcode ${:02X} at ${:04X}", opcode, address);
                self.cycles += u64::from(ILLEGAL_OPCODE_CYCLES);
                return Step {
                    cycles: ILLEGAL_OPCODE_CYCLES,
                    fault: Some(Fault::IllegalOpcode { opcode, address }),
                };
            }
        };

        trace!(
            "{:04X}  {:02X}  {}  {}",
            address,
            opcode,
            decoded.mnemonic,
            self.regs
        );

        let penalty = self.execute(Instruction::new(opcode), decoded);
        let cycles = u32::from(decoded.cycles) + u32::from(penalty);
        self.cycles += u64::from(cycles);

        Step {
            cycles,
            fault: None,
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an
    /// illegal opcode is hit. Returns the actual number of cycles consumed
    /// (may be slightly more than budget due to instruction granularity).
    ///
    /// This is useful for frame-locked execution models where the CPU must run for
    /// an exact number of cycles per frame (e.g., 29780 cycles for 60Hz NTSC).
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{FlatMemory, Mmu, CPU};
    ///
    /// let mut mmu = Mmu::with_bus(FlatMemory::new());
    /// mmu.write(0xFFFC, 0x00);
    /// mmu.write(0xFFFD, 0x80);
    /// for addr in 0x8000..0x8010 {
    ///     mmu.write(addr, 0xEA); // NOP
    /// }
    ///
    /// let mut cpu = CPU::new(mmu);
    /// assert_eq!(cpu.run_for_cycles(10), Ok(10));
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, Fault> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step().into_result()?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Warm reset: reloads PC from the reset vector, drops SP by three and
    /// sets I. Other registers keep their values. Returns the cycles spent.
    pub fn reset(&mut self) -> u32 {
        self.regs.sp = self.regs.sp.wrapping_sub(3);
        self.regs.status.insert(Status::INTERRUPT_DISABLE);
        self.regs.pc = self.mmu.read_word(RESET_VECTOR).value();
        self.cycles += u64::from(INTERRUPT_CYCLES);
        debug!("reset -> ${:04X}", self.regs.pc);
        INTERRUPT_CYCLES
    }

    /// Services a non-maskable interrupt. Returns the cycles spent.
    pub fn nmi(&mut self) -> u32 {
        self.enter_interrupt(NMI_VECTOR);
        self.cycles += u64::from(INTERRUPT_CYCLES);
        debug!("NMI -> ${:04X}", self.regs.pc);
        INTERRUPT_CYCLES
    }

    /// Services a maskable interrupt unless I is set. Returns the cycles
    /// spent, 0 when the request was masked.
    pub fn irq(&mut self) -> u32 {
        if self.regs.status.interrupt_disable() {
            return 0;
        }
        self.enter_interrupt(IRQ_VECTOR);
        self.cycles += u64::from(INTERRUPT_CYCLES);
        debug!("IRQ -> ${:04X}", self.regs.pc);
        INTERRUPT_CYCLES
    }

    /// Runs a decoded instruction and returns the penalty cycles it owes on
    /// top of its base cost.
    fn execute(&mut self, instruction: Instruction, decoded: Opcode) -> u8 {
        match decoded.operand {
            Operand::Implied => {
                self.execute_implied(decoded.mnemonic);
                0
            }
            Operand::Accumulator => {
                modify(decoded.mnemonic, &mut self.regs.a, &mut self.regs.status);
                0
            }
            Operand::Relative => self.execute_branch(instruction.operation()),
            Operand::Memory(mode) => {
                let resolved = resolve(mode, &mut self.regs, &mut self.mmu);
                self.execute_memory(decoded.mnemonic, resolved)
            }
            Operand::ZeroPageY => {
                let resolved = resolve_zero_page_y(&mut self.regs, &mut self.mmu);
                self.execute_memory(decoded.mnemonic, resolved)
            }
            Operand::AbsoluteIndirect => {
                let resolved = resolve_indirect(&mut self.regs, &mut self.mmu);
                self.execute_memory(decoded.mnemonic, resolved)
            }
        }
    }

    fn execute_implied(&mut self, mnemonic: Mnemonic) {
        use Mnemonic::*;

        let regs = &mut self.regs;
        match mnemonic {
            Nop => {}

            Clc => regs.status.remove(Status::CARRY),
            Sec => regs.status.insert(Status::CARRY),
            Cli => regs.status.remove(Status::INTERRUPT_DISABLE),
            Sei => regs.status.insert(Status::INTERRUPT_DISABLE),
            Clv => regs.status.remove(Status::OVERFLOW),
            Cld => regs.status.remove(Status::DECIMAL),
            Sed => regs.status.insert(Status::DECIMAL),

            Tax => transfer::transfer(&mut regs.x, regs.a, &mut regs.status),
            Tay => transfer::transfer(&mut regs.y, regs.a, &mut regs.status),
            Txa => transfer::transfer(&mut regs.a, regs.x, &mut regs.status),
            Tya => transfer::transfer(&mut regs.a, regs.y, &mut regs.status),
            Tsx => transfer::transfer(&mut regs.x, regs.sp, &mut regs.status),
            Txs => transfer::transfer_to_stack_pointer(&mut regs.sp, regs.x),

            Inx => inc_dec::increment(&mut regs.x, &mut regs.status),
            Iny => inc_dec::increment(&mut regs.y, &mut regs.status),
            Dex => inc_dec::decrement(&mut regs.x, &mut regs.status),
            Dey => inc_dec::decrement(&mut regs.y, &mut regs.status),

            Pha => self.execute_pha(),
            Pla => self.execute_pla(),
            Php => self.execute_php(),
            Plp => self.execute_plp(),

            Brk => self.execute_brk(),
            Rti => self.execute_rti(),
            Rts => self.execute_rts(),

            _ => unreachable!("{} has no implied form", mnemonic),
        }
    }

    /// Taken branches cost one cycle, plus one more onto a new page.
    fn execute_branch(&mut self, selector: u8) -> u8 {
        let resolved = resolve_relative(&mut self.regs, &mut self.mmu);
        if !branches::should_branch(selector, self.regs.status) {
            return 0;
        }
        self.regs.pc = effective_address(resolved.target);
        1 + resolved.penalty()
    }

    fn execute_memory(&mut self, mnemonic: Mnemonic, resolved: Resolved) -> u8 {
        use Mnemonic::*;

        match mnemonic {
            Sta | Stx | Sty => {
                let value = match mnemonic {
                    Sta => self.regs.a,
                    Stx => self.regs.x,
                    _ => self.regs.y,
                };
                self.mmu.write(effective_address(resolved.target), value);
                0
            }
            Jmp => {
                self.regs.pc = effective_address(resolved.target);
                0
            }
            Jsr => {
                self.execute_jsr(effective_address(resolved.target));
                0
            }
            Asl | Lsr | Rol | Ror | Inc | Dec => {
                let address = effective_address(resolved.target);
                let mut value = self.mmu.read(address);
                modify(mnemonic, &mut value, &mut self.regs.status);
                self.mmu.write(address, value);
                0
            }
            _ => {
                let value = match resolved.target {
                    Target::Value(value) => value,
                    Target::Address(address) => self.mmu.read(address),
                };
                self.execute_read(mnemonic, value);
                if mnemonic.pays_page_penalty() {
                    resolved.penalty()
                } else {
                    0
                }
            }
        }
    }

    fn execute_read(&mut self, mnemonic: Mnemonic, value: u8) {
        use Mnemonic::*;

        let regs = &mut self.regs;
        match mnemonic {
            Adc => alu::adc(&mut regs.a, value, &mut regs.status),
            Sbc => alu::sbc(&mut regs.a, value, &mut regs.status),
            And => alu::and(&mut regs.a, value, &mut regs.status),
            Ora => alu::ora(&mut regs.a, value, &mut regs.status),
            Eor => alu::eor(&mut regs.a, value, &mut regs.status),
            Cmp => alu::compare(regs.a, value, &mut regs.status),
            Cpx => alu::compare(regs.x, value, &mut regs.status),
            Cpy => alu::compare(regs.y, value, &mut regs.status),
            Bit => alu::bit(regs.a, value, &mut regs.status),
            Lda => transfer::load(&mut regs.a, value, &mut regs.status),
            Ldx => transfer::load(&mut regs.x, value, &mut regs.status),
            Ldy => transfer::load(&mut regs.y, value, &mut regs.status),
            _ => unreachable!("{} does not read memory", mnemonic),
        }
    }

    // ========== Register Getters ==========

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register. Use [`Status::to_byte`] for the packed
    /// NV-BDIZC byte.
    pub fn status(&self) -> Status {
        self.regs.status
    }

    /// Returns the total number of CPU cycles executed since initialization.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The address space the CPU executes against.
    pub fn mmu(&self) -> &Mmu<B> {
        &self.mmu
    }

    /// Mutable access to the address space, e.g. to load a program.
    pub fn mmu_mut(&mut self) -> &mut Mmu<B> {
        &mut self.mmu
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.status.negative()
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.status.overflow()
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.status.decimal()
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.status.interrupt_disable()
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.status.zero()
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.status.carry()
    }

    // ========== Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces the status register. Bit 5 is kept set.
    pub fn set_status(&mut self, status: Status) {
        self.regs.status = status | Status::UNUSED;
    }

    /// Sets or clears individual flags.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.regs.status.set(flag, value);
    }
}

/// Read-modify-write semantics shared by the accumulator and memory forms.
fn modify(mnemonic: Mnemonic, value: &mut u8, status: &mut Status) {
    use Mnemonic::*;

    match mnemonic {
        Asl => shifts::asl(value, status),
        Lsr => shifts::lsr(value, status),
        Rol => shifts::rol(value, status),
        Ror => shifts::ror(value, status),
        Inc => inc_dec::increment(value, status),
        Dec => inc_dec::decrement(value, status),
        _ => unreachable!("{} is not a read-modify-write instruction", mnemonic),
    }
}

/// Immediate operands only decode for read instructions.
fn effective_address(target: Target) -> u16 {
    match target {
        Target::Address(address) => address,
        Target::Value(_) => unreachable!("immediate operand has no address"),
    }
}
