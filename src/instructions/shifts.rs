//! # Shift and Rotate Instructions
//!
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates on a byte in place, so the dispatcher can point it at the
//! accumulator or at a byte fetched from memory.

use crate::Status;

/// Shifts left. Bit 7 goes to C, bit 0 becomes 0.
pub(crate) fn asl(value: &mut u8, status: &mut Status) {
    status.set(Status::CARRY, *value & 0x80 != 0);
    *value <<= 1;
    status.set_nz(*value);
}

/// Shifts right. Bit 0 goes to C, bit 7 becomes 0 so N always clears.
pub(crate) fn lsr(value: &mut u8, status: &mut Status) {
    status.set(Status::CARRY, *value & 0x01 != 0);
    *value >>= 1;
    status.set_nz(*value);
}

/// Rotates left. The old C fills bit 0; bit 7 goes to C.
pub(crate) fn rol(value: &mut u8, status: &mut Status) {
    let carry_in = status.carry() as u8;
    status.set(Status::CARRY, *value & 0x80 != 0);
    *value = (*value << 1) | carry_in;
    status.set_nz(*value);
}

/// Rotates right. The old C fills bit 7; bit 0 goes to C.
pub(crate) fn ror(value: &mut u8, status: &mut Status) {
    let carry_in = status.carry() as u8;
    status.set(Status::CARRY, *value & 0x01 != 0);
    *value = (*value >> 1) | (carry_in << 7);
    status.set_nz(*value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asl() {
        let mut status = Status::default();
        let mut value = 0b1100_0001;
        asl(&mut value, &mut status);
        assert_eq!(value, 0b1000_0010);
        assert!(status.carry());
        assert!(status.negative());

        let mut value = 0x80;
        asl(&mut value, &mut status);
        assert_eq!(value, 0x00);
        assert!(status.carry());
        assert!(status.zero());
    }

    #[test]
    fn test_lsr_stores_result() {
        let mut status = Status::NEGATIVE | Status::UNUSED;
        let mut value = 0b1000_0011;
        lsr(&mut value, &mut status);
        assert_eq!(value, 0b0100_0001);
        assert!(status.carry());
        assert!(!status.negative());
        assert!(!status.zero());

        let mut value = 0x01;
        lsr(&mut value, &mut status);
        assert_eq!(value, 0x00);
        assert!(status.zero());
        assert!(status.carry());
    }

    #[test]
    fn test_rol_through_carry() {
        let mut status = Status::CARRY | Status::UNUSED;
        let mut value = 0b0100_0000;
        rol(&mut value, &mut status);
        assert_eq!(value, 0b1000_0001);
        assert!(!status.carry());
        assert!(status.negative());

        rol(&mut value, &mut status);
        assert_eq!(value, 0b0000_0010);
        assert!(status.carry());
    }

    #[test]
    fn test_ror_through_carry() {
        let mut status = Status::CARRY | Status::UNUSED;
        let mut value = 0b0000_0010;
        ror(&mut value, &mut status);
        assert_eq!(value, 0b1000_0001);
        assert!(!status.carry());
        assert!(status.negative());

        ror(&mut value, &mut status);
        assert_eq!(value, 0b0100_0000);
        assert!(status.carry());
        assert!(!status.negative());
    }

    #[test]
    fn test_rotate_zero_without_carry() {
        let mut status = Status::default();
        let mut value = 0x80;
        rol(&mut value, &mut status);
        assert_eq!(value, 0x00);
        assert!(status.zero());
        assert!(status.carry());
    }
}
