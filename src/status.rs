//! # Processor Status Register
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: (unused, always reads as 1)
//! - Bit 4: B (Break, only meaningful in the pushed copy)
//! - Bit 3: D (Decimal)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// The P register.
    ///
    /// Individual flags are read with [`Status::contains`] and written with
    /// [`Status::set`], e.g. `status.set(Status::CARRY, true)`.
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::UNUSED
    }
}

impl Status {
    /// Builds a status register from a raw byte. Bit 5 is forced on.
    pub const fn from_byte(value: u8) -> Self {
        Self::from_bits_truncate(value | Self::UNUSED.bits())
    }

    /// Raw byte view with bit 5 set.
    pub const fn to_byte(self) -> u8 {
        self.bits() | Self::UNUSED.bits()
    }

    /// Byte pushed by PHP and BRK: B and bit 5 set.
    pub const fn to_byte_brk(self) -> u8 {
        self.to_byte() | Self::BREAK.bits()
    }

    /// Byte pushed on NMI/IRQ entry: bit 5 set, B clear.
    pub const fn to_byte_irq(self) -> u8 {
        self.to_byte() & !Self::BREAK.bits()
    }

    /// Status restored by PLP and RTI. B does not exist as a latch, so the
    /// pulled copy of it is dropped.
    pub const fn from_stack(value: u8) -> Self {
        Self::from_byte(value & !Self::BREAK.bits())
    }

    /// N = bit 7 of `value`, Z = `value == 0`.
    pub fn set_nz(&mut self, value: u8) {
        self.set(Status::NEGATIVE, value & 0x80 != 0);
        self.set(Status::ZERO, value == 0);
    }

    pub fn carry(self) -> bool {
        self.contains(Status::CARRY)
    }

    pub fn zero(self) -> bool {
        self.contains(Status::ZERO)
    }

    pub fn interrupt_disable(self) -> bool {
        self.contains(Status::INTERRUPT_DISABLE)
    }

    pub fn decimal(self) -> bool {
        self.contains(Status::DECIMAL)
    }

    pub fn overflow(self) -> bool {
        self.contains(Status::OVERFLOW)
    }

    pub fn negative(self) -> bool {
        self.contains(Status::NEGATIVE)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Status, char); 8] = [
            (Status::NEGATIVE, 'N'),
            (Status::OVERFLOW, 'V'),
            (Status::UNUSED, '-'),
            (Status::BREAK, 'B'),
            (Status::DECIMAL, 'D'),
            (Status::INTERRUPT_DISABLE, 'I'),
            (Status::ZERO, 'Z'),
            (Status::CARRY, 'C'),
        ];

        for (flag, name) in NAMES {
            let shown = if self.contains(flag) {
                name
            } else {
                name.to_ascii_lowercase()
            };
            write!(f, "{shown}")?;
        }
        Ok(())
    }
}
