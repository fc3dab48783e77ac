//! # Little-Endian Words
//!
//! The 6502 stores every 16-bit quantity (operand addresses, pointers, vectors,
//! the return address on the stack) as a low byte followed by a high byte.
//! `Word` keeps the 16-bit value and derives both halves with shifts, so the
//! same code behaves identically regardless of host endianness.

use std::fmt;

/// A 16-bit address value with byte-level accessors.
///
/// # Examples
///
/// ```
/// use nes_cpu::Word;
///
/// let word = Word::from_bytes(0x34, 0x12);
/// assert_eq!(word.value(), 0x1234);
/// assert_eq!(word.lo(), 0x34);
/// assert_eq!(word.hi(), 0x12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Word(u16);

impl Word {
    /// Wraps a full 16-bit value.
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Combines a low and a high byte (little-endian order).
    pub const fn from_bytes(lo: u8, hi: u8) -> Self {
        Self(((hi as u16) << 8) | lo as u16)
    }

    /// Address in page zero.
    pub const fn zero_page(offset: u8) -> Self {
        Self(offset as u16)
    }

    /// Low byte (bits 0-7).
    pub const fn lo(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// High byte (bits 8-15), also the page number.
    pub const fn hi(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The combined 16-bit value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Adds an unsigned index, wrapping at 0xFFFF.
    ///
    /// Returns the indexed word and whether the high byte changed, i.e.
    /// whether the addition crossed a 256-byte page.
    pub const fn offset(self, index: u8) -> (Self, bool) {
        let indexed = Self(self.0.wrapping_add(index as u16));
        (indexed, indexed.hi() != self.hi())
    }

    /// Adds a signed displacement, wrapping at both ends of the address space.
    ///
    /// Returns the displaced word and whether it landed on another page.
    pub const fn displace(self, displacement: i8) -> (Self, bool) {
        let displaced = Self(self.0.wrapping_add_signed(displacement as i16));
        (displaced, displaced.hi() != self.hi())
    }

    /// Increments the low byte only, leaving the page untouched.
    ///
    /// This is how the NMOS 6502 steps through a pointer that sits on the
    /// last byte of a page.
    pub const fn next_in_page(self) -> Self {
        Self::from_bytes(self.lo().wrapping_add(1), self.hi())
    }
}

impl From<u16> for Word {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Word> for u16 {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:04X}", self.0)
    }
}
