//! # Branch Conditions
//!
//! All eight conditional branches share one encoding: `xxy10000`. Bits 6-7
//! (`xx`) pick the flag and bit 5 (`y`) the value it must have, so the 3-bit
//! operation field indexes straight into [`CONDITIONS`].
//!
//! | selector | mnemonic | takes branch when |
//! |----------|----------|-------------------|
//! | 0        | BPL      | N clear           |
//! | 1        | BMI      | N set             |
//! | 2        | BVC      | V clear           |
//! | 3        | BVS      | V set             |
//! | 4        | BCC      | C clear           |
//! | 5        | BCS      | C set             |
//! | 6        | BNE      | Z clear           |
//! | 7        | BEQ      | Z set             |
//!
//! Timing: 2 cycles not taken, 3 taken, 4 taken onto another page.

use crate::Status;

/// Flag tested by each selector and the value that takes the branch.
pub(crate) static CONDITIONS: [(Status, bool); 8] = [
    (Status::NEGATIVE, false),
    (Status::NEGATIVE, true),
    (Status::OVERFLOW, false),
    (Status::OVERFLOW, true),
    (Status::CARRY, false),
    (Status::CARRY, true),
    (Status::ZERO, false),
    (Status::ZERO, true),
];

/// Evaluates branch condition `selector` (only the low 3 bits are used).
pub(crate) fn should_branch(selector: u8, status: Status) -> bool {
    let (flag, wanted) = CONDITIONS[(selector & 0b111) as usize];
    status.contains(flag) == wanted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_condition_pairs_with_its_complement() {
        for flag in [Status::NEGATIVE, Status::OVERFLOW, Status::CARRY, Status::ZERO] {
            for status in [Status::UNUSED, Status::UNUSED | flag] {
                let selectors: Vec<u8> = (0..8).filter(|&s| CONDITIONS[s as usize].0 == flag).collect();
                assert_eq!(selectors.len(), 2);
                assert_ne!(
                    should_branch(selectors[0], status),
                    should_branch(selectors[1], status)
                );
            }
        }
    }

    #[test]
    fn test_selector_table() {
        let all_clear = Status::UNUSED;
        let taken: Vec<u8> = (0..8).filter(|&s| should_branch(s, all_clear)).collect();
        assert_eq!(taken, vec![0, 2, 4, 6]);

        let all_set = Status::all();
        let taken: Vec<u8> = (0..8).filter(|&s| should_branch(s, all_set)).collect();
        assert_eq!(taken, vec![1, 3, 5, 7]);
    }
}
