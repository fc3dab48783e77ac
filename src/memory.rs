//! # Memory Bus
//!
//! This module provides the CPU's view of the 16-bit address space:
//!
//! - [`Bus`]: the read/write contract implemented by whatever the surrounding
//!   system maps outside internal RAM (cartridge, PPU/APU registers, ...)
//! - [`Mmu`]: the NES CPU address space. 2 KiB of internal RAM mirrored four
//!   times across 0x0000-0x1FFF, everything else forwarded to a [`Bus`]
//! - [`OpenBus`]: the default external bus, nothing mapped
//! - [`FlatMemory`]: 64 KiB of plain RAM, handy for tests and tools
//!
//! ## Design Principles
//!
//! The bus follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return 0 and unmapped writes are dropped
//! - The MMU is owned by exactly one CPU. A system that shares it with other
//!   chips must drive them all from the same thread.

use crate::Word;

/// Size of the internal work RAM.
pub const RAM_SIZE: usize = 0x0800;

/// Last address of the mirrored internal RAM window.
pub const RAM_MIRROR_END: u16 = 0x1FFF;

/// Memory bus trait for reading and writing bytes.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use nes_cpu::{Bus, Mmu};
///
/// struct Cartridge {
///     prg: Vec<u8>,
/// }
///
/// impl Bus for Cartridge {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x8000..=0xFFFF => self.prg[(addr as usize - 0x8000) % self.prg.len()],
///             _ => 0,
///         }
///     }
///
///     fn write(&mut self, _addr: u16, _value: u8) {
///         // ROM: writes are ignored
///     }
/// }
///
/// let mmu = Mmu::with_bus(Cartridge { prg: vec![0xEA; 0x4000] });
/// assert_eq!(mmu.read(0xC000), 0xEA);
/// assert_eq!(mmu.read(0x0000), 0x00);
/// ```
pub trait Bus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Writes to read-only or unmapped
    /// addresses are ignored.
    fn write(&mut self, addr: u16, value: u8);
}

/// An external bus with nothing attached.
///
/// Reads return 0 and writes are discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenBus;

impl Bus for OpenBus {
    fn read(&self, _addr: u16) -> u8 {
        0x00
    }

    fn write(&mut self, _addr: u16, _value: u8) {}
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
/// Attached to an [`Mmu`] it backs everything above the RAM mirrors, which
/// gives tests a writable reset vector and program area.
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

/// The CPU address space: mirrored internal RAM plus an external bus.
///
/// Besides plain reads and writes the MMU remembers whether the most recent
/// effective-address computation crossed a page boundary. The addressing
/// resolver records that through [`Mmu::index`] and friends; reads and writes
/// leave it untouched.
///
/// # Examples
///
/// ```
/// use nes_cpu::Mmu;
///
/// let mut mmu = Mmu::new();
/// mmu.write(0x0001, 0x42);
///
/// // 0x0801, 0x1001 and 0x1801 are mirrors of 0x0001
/// assert_eq!(mmu.read(0x1801), 0x42);
///
/// // Nothing is mapped above 0x1FFF yet
/// mmu.write(0x6000, 0x99);
/// assert_eq!(mmu.read(0x6000), 0x00);
/// ```
pub struct Mmu<B: Bus = OpenBus> {
    ram: Box<[u8; RAM_SIZE]>,
    bus: B,
    boundary_crossed: bool,
}

impl Mmu<OpenBus> {
    /// Internal RAM only; everything above 0x1FFF is unmapped.
    pub fn new() -> Self {
        Self::with_bus(OpenBus)
    }
}

impl Default for Mmu<OpenBus> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bus> Mmu<B> {
    /// Internal RAM with `bus` answering for 0x2000-0xFFFF.
    pub fn with_bus(bus: B) -> Self {
        Self {
            ram: Box::new([0; RAM_SIZE]),
            bus,
            boundary_crossed: false,
        }
    }

    /// Reads a byte. Addresses up to 0x1FFF hit RAM modulo 0x800.
    pub fn read(&self, address: u16) -> u8 {
        if address <= RAM_MIRROR_END {
            self.ram[address as usize % RAM_SIZE]
        } else {
            self.bus.read(address)
        }
    }

    /// Writes a byte. Addresses up to 0x1FFF hit RAM modulo 0x800.
    pub fn write(&mut self, address: u16, value: u8) {
        if address <= RAM_MIRROR_END {
            self.ram[address as usize % RAM_SIZE] = value;
        } else {
            self.bus.write(address, value);
        }
    }

    /// Whether the last effective-address computation crossed a page.
    pub fn boundary_crossed(&self) -> bool {
        self.boundary_crossed
    }

    /// The external bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// The external bus, mutably.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// The 2 KiB of internal RAM.
    pub fn ram(&self) -> &[u8] {
        &self.ram[..]
    }

    /// Reads a little-endian word at `address` and `address + 1`.
    pub fn read_word(&self, address: u16) -> Word {
        let lo = self.read(address);
        let hi = self.read(address.wrapping_add(1));
        Word::from_bytes(lo, hi)
    }

    /// Reads a pointer from page zero. The high byte wraps to 0x00 when the
    /// pointer sits at 0xFF.
    pub(crate) fn read_zero_page_word(&self, pointer: u8) -> Word {
        let lo = self.read(pointer as u16);
        let hi = self.read(pointer.wrapping_add(1) as u16);
        Word::from_bytes(lo, hi)
    }

    /// Reads a word without carrying into the high byte of the pointer, the
    /// NMOS `JMP ($xxFF)` behavior.
    pub(crate) fn read_word_in_page(&self, pointer: Word) -> Word {
        let lo = self.read(pointer.value());
        let hi = self.read(pointer.next_in_page().value());
        Word::from_bytes(lo, hi)
    }

    /// Indexes `base` and records whether the page changed.
    pub(crate) fn index(&mut self, base: Word, index: u8) -> Word {
        let (effective, crossed) = base.offset(index);
        self.boundary_crossed = crossed;
        effective
    }

    /// Displaces `origin` by a signed branch offset and records whether the
    /// page changed.
    pub(crate) fn displace(&mut self, origin: Word, displacement: i8) -> Word {
        let (target, crossed) = origin.displace(displacement);
        self.boundary_crossed = crossed;
        target
    }

    /// Records an address computation that cannot cross a page.
    pub(crate) fn settle(&mut self, effective: Word) -> Word {
        self.boundary_crossed = false;
        effective
    }
}

impl<B: Bus> Bus for Mmu<B> {
    fn read(&self, addr: u16) -> u8 {
        Mmu::read(self, addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        Mmu::write(self, addr, value)
    }
}
