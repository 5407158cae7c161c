//! Round-key derivation for one 64-bit key block.

use bitvec::prelude::*;

use crate::crypto::des_tables::{KEY_FOLD, PC2, ROTATIONS};

/// Rounds per Feistel pass.
pub const ROUND_COUNT: usize = 16;
/// Bits in one round key.
pub const ROUND_KEY_BITS: usize = 48;

/// Derives the 16 48-bit round keys for a key block.
///
/// The 64-bit key folds to 56 bits through [`KEY_FOLD`], splits into two
/// 28-bit halves, and each round rotates both halves left by that round's
/// count before applying PC-2 to the concatenation. Rotations accumulate:
/// every round rotates the halves left by the previous round.
///
/// Index 0 is consumed by encryption round 0; decryption walks the same
/// list backwards.
pub fn derive_round_keys(key_block: &BitSlice) -> Vec<BitVec> {
    debug_assert_eq!(key_block.len(), 64);

    let mut c: BitVec = KEY_FOLD[..28].iter().map(|&pos| key_block[pos]).collect();
    let mut d: BitVec = KEY_FOLD[28..].iter().map(|&pos| key_block[pos]).collect();

    let mut round_keys = Vec::with_capacity(ROUND_COUNT);
    for &shift in &ROTATIONS {
        c.rotate_left(shift);
        d.rotate_left(shift);

        let mut cd: BitVec = BitVec::with_capacity(56);
        cd.extend(c.iter().by_vals());
        cd.extend(d.iter().by_vals());

        round_keys.push(PC2.iter().map(|&pos| cd[pos]).collect());
    }
    round_keys
}
