//! The Feistel round function: expansion, round-key mix, S-box
//! substitution, P-box permutation.

use bitvec::prelude::*;

use crate::crypto::des_tables::{EXPANSION, P_BOX, S_BOXES};

/// Transforms a 32-bit half-block under one 48-bit round key.
pub fn round_function(right: &BitSlice, round_key: &BitSlice) -> BitVec {
    debug_assert_eq!(right.len(), 32);
    debug_assert_eq!(round_key.len(), 48);

    let expanded: BitVec = EXPANSION.iter().map(|&pos| right[pos]).collect();
    let mixed: BitVec = expanded
        .iter()
        .by_vals()
        .zip(round_key.iter().by_vals())
        .map(|(a, b)| a ^ b)
        .collect();

    let substituted = substitute(&mixed);
    P_BOX.iter().map(|&pos| substituted[pos]).collect()
}

/// Runs the 48-bit expanded value through the eight S-boxes.
///
/// For each 6-bit group the outer two bits select the row and the inner
/// four the column; the looked-up 4-bit value is emitted most significant
/// bit first.
fn substitute(mixed: &BitSlice) -> BitVec {
    let mut output = BitVec::with_capacity(32);
    for (box_index, group) in mixed.chunks(6).enumerate() {
        let row = (usize::from(group[0]) << 1) | usize::from(group[5]);
        let column = (usize::from(group[1]) << 3)
            | (usize::from(group[2]) << 2)
            | (usize::from(group[3]) << 1)
            | usize::from(group[4]);

        let value = S_BOXES[box_index][row][column];
        for shift in (0..4).rev() {
            output.push((value >> shift) & 1 == 1);
        }
    }
    output
}
