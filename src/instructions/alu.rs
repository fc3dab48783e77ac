//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Test bits in memory against the accumulator
//!
//! Decimal mode is not modelled: the 2A03 ignores the D flag, so ADC and SBC
//! are always binary.

use crate::Status;

/// Executes ADC: `a = a + value + C`.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Overflow (V): Set if both operands share a sign and the result does not
/// - Zero (Z), Negative (N): From the new accumulator
pub(crate) fn adc(a: &mut u8, value: u8, status: &mut Status) {
    let sum = *a as u16 + value as u16 + status.carry() as u16;
    let result = sum as u8;

    status.set(Status::CARRY, sum > 0xFF);
    status.set(Status::OVERFLOW, !(*a ^ value) & (*a ^ result) & 0x80 != 0);
    status.set_nz(result);

    *a = result;
}

/// Executes SBC: `a = a - value - !C`.
///
/// Subtraction is addition of the one's complement. With C as "no borrow"
/// the carry and overflow logic of ADC carries over unchanged.
pub(crate) fn sbc(a: &mut u8, value: u8, status: &mut Status) {
    adc(a, !value, status);
}

/// Executes AND: `a = a & value`. Updates Z and N.
pub(crate) fn and(a: &mut u8, value: u8, status: &mut Status) {
    *a &= value;
    status.set_nz(*a);
}

/// Executes ORA: `a = a | value`. Updates Z and N.
pub(crate) fn ora(a: &mut u8, value: u8, status: &mut Status) {
    *a |= value;
    status.set_nz(*a);
}

/// Executes EOR: `a = a ^ value`. Updates Z and N.
pub(crate) fn eor(a: &mut u8, value: u8, status: &mut Status) {
    *a ^= value;
    status.set_nz(*a);
}

/// Executes CMP/CPX/CPY: flags from `register - value`, nothing stored.
///
/// # Flag Behavior
///
/// - Carry (C): Set if `register >= value` (no borrow)
/// - Zero (Z): Set if `register == value`
/// - Negative (N): Bit 7 of the 8-bit difference
pub(crate) fn compare(register: u8, value: u8, status: &mut Status) {
    let difference = (register as u16).wrapping_sub(value as u16);

    status.set(Status::CARRY, difference <= 0xFF);
    status.set_nz(difference as u8);
}

/// Executes BIT.
///
/// Z reflects `a & value`; N and V are copied from bits 7 and 6 of the
/// memory operand. The accumulator is not modified.
pub(crate) fn bit(a: u8, value: u8, status: &mut Status) {
    status.set(Status::ZERO, a & value == 0);
    status.set(Status::NEGATIVE, value & 0x80 != 0);
    status.set(Status::OVERFLOW, value & 0x40 != 0);
}
