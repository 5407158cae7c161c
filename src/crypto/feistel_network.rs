//! The 16-round Feistel pass over one 64-bit block.

use bitvec::prelude::*;

use crate::crypto::des_key_schedule::{ROUND_COUNT, derive_round_keys};
use crate::crypto::des_tables::{FINAL_PERMUTATION, INITIAL_PERMUTATION};
use crate::crypto::des_transformation::round_function;

/// Encrypts one 64-bit block under one 64-bit key block.
pub fn encrypt_block(block: &BitSlice, key_block: &BitSlice) -> BitVec {
    run_rounds(block, key_block, Direction::Encrypt)
}

/// Decrypts one 64-bit block under one 64-bit key block.
///
/// Identical to encryption except the round keys are consumed in reverse
/// index order, so `decrypt_block(encrypt_block(b, k), k) == b` holds for
/// every block and key.
pub fn decrypt_block(block: &BitSlice, key_block: &BitSlice) -> BitVec {
    run_rounds(block, key_block, Direction::Decrypt)
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn run_rounds(block: &BitSlice, key_block: &BitSlice, direction: Direction) -> BitVec {
    debug_assert_eq!(block.len(), 64);

    // Round keys are derived fresh per pass and dropped with it.
    let round_keys = derive_round_keys(key_block);

    let permuted: BitVec = INITIAL_PERMUTATION.iter().map(|&pos| block[pos]).collect();
    let mut left = permuted[..32].to_bitvec();
    let mut right = permuted[32..].to_bitvec();

    let schedule: Vec<usize> = match direction {
        Direction::Encrypt => (0..ROUND_COUNT).collect(),
        Direction::Decrypt => (0..ROUND_COUNT).rev().collect(),
    };

    for round in schedule {
        let mixed = round_function(&right, &round_keys[round]);
        let new_right: BitVec = left
            .iter()
            .by_vals()
            .zip(mixed.iter().by_vals())
            .map(|(a, b)| a ^ b)
            .collect();
        left = right;
        right = new_right;
    }

    // The halves swap once more on the way out.
    let mut swapped: BitVec = BitVec::with_capacity(64);
    swapped.extend(right.iter().by_vals());
    swapped.extend(left.iter().by_vals());

    FINAL_PERMUTATION.iter().map(|&pos| swapped[pos]).collect()
}
