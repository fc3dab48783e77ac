//! # Increment and Decrement
//!
//! INC/DEC on memory and INX/INY/DEX/DEY on the index registers. All wrap at
//! 8 bits and update Z and N only.

use crate::Status;

pub(crate) fn increment(value: &mut u8, status: &mut Status) {
    *value = value.wrapping_add(1);
    status.set_nz(*value);
}

pub(crate) fn decrement(value: &mut u8, status: &mut Status) {
    *value = value.wrapping_sub(1);
    status.set_nz(*value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_wraps() {
        let mut status = Status::CARRY | Status::UNUSED;
        let mut value = 0xFF;
        increment(&mut value, &mut status);
        assert_eq!(value, 0x00);
        assert!(status.zero());
        // Carry untouched
        assert!(status.carry());
    }

    #[test]
    fn test_decrement_wraps() {
        let mut status = Status::default();
        let mut value = 0x00;
        decrement(&mut value, &mut status);
        assert_eq!(value, 0xFF);
        assert!(status.negative());
        assert!(!status.carry());
    }
}
