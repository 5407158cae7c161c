use bitvec::prelude::*;

use cascade_des::crypto::bit_codec::text_to_bits;
use cascade_des::crypto::des_key_schedule::{ROUND_COUNT, ROUND_KEY_BITS, derive_round_keys};
use cascade_des::crypto::des_tables::KEY_FOLD;

fn bits_from_str(pattern: &str) -> BitVec {
    pattern.chars().map(|c| c == '1').collect()
}

#[test]
fn test_sixteen_round_keys_of_48_bits() {
    let round_keys = derive_round_keys(&text_to_bits(&['k', 'e', 'y']));
    assert_eq!(round_keys.len(), ROUND_COUNT);
    for round_key in &round_keys {
        assert_eq!(round_key.len(), ROUND_KEY_BITS);
    }
}

#[test]
fn test_key_fold_selects_byte_reversed_columns() {
    // Output byte i draws bit column i from the input bytes in reverse
    // order; column 7 of every input byte is discarded.
    for (out_pos, &in_pos) in KEY_FOLD.iter().enumerate() {
        let column = out_pos / 8;
        let byte = 7 - (out_pos % 8);
        assert_eq!(in_pos, byte * 8 + column);
    }

    let key_block = text_to_bits(&['1']);
    let folded: BitVec = KEY_FOLD.iter().map(|&pos| key_block[pos]).collect();
    assert_eq!(
        folded,
        bits_from_str("00000000000000000000001000000010000000000000000000000000")
    );
}

#[test]
fn test_round_key_vectors_for_known_key_block() {
    let round_keys = derive_round_keys(&text_to_bits(&['1']));
    assert_eq!(
        round_keys[0],
        bits_from_str("000000000000000000000000000000100000000000000000")
    );
    assert_eq!(
        round_keys[1],
        bits_from_str("000000000010000000000000000000000000000000000010")
    );
    assert_eq!(
        round_keys[15],
        bits_from_str("000000000000100000000000001000000000000000000000")
    );
}

#[test]
fn test_rotations_accumulate_across_rounds() {
    // Rounds 0 and 1 both rotate by one; if round 1 restarted from the
    // folded key instead of the rotated halves, these two would be equal.
    let round_keys = derive_round_keys(&text_to_bits(&['1']));
    assert_ne!(round_keys[0], round_keys[1]);
}

#[test]
fn test_derivation_is_deterministic() {
    let key_block = text_to_bits(&['a', 'b']);
    assert_eq!(derive_round_keys(&key_block), derive_round_keys(&key_block));
}
