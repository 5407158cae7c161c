use bitvec::prelude::*;
use rand::Rng;

use cascade_des::crypto::bit_codec::{bits_to_hex, text_to_bits};
use cascade_des::crypto::feistel_network::{decrypt_block, encrypt_block};

#[test]
fn test_known_block_vector() {
    let block = text_to_bits(&['a', 'b', 'c', 'd']);
    let key_block = text_to_bits(&['1']);

    let ciphertext = encrypt_block(&block, &key_block);
    assert_eq!(bits_to_hex(&ciphertext), "4A60B51D4FD386C1");
    assert_eq!(decrypt_block(&ciphertext, &key_block), block);
}

#[test]
fn test_decrypt_inverts_encrypt_for_random_blocks() {
    let mut rng = rand::rng();
    for _ in 0..64 {
        let block: BitVec = (0..64).map(|_| rng.random_bool(0.5)).collect();
        let key_block: BitVec = (0..64).map(|_| rng.random_bool(0.5)).collect();

        let ciphertext = encrypt_block(&block, &key_block);
        assert_eq!(ciphertext.len(), 64);
        assert_eq!(decrypt_block(&ciphertext, &key_block), block);
    }
}

#[test]
fn test_different_keys_produce_different_ciphertexts() {
    let block = text_to_bits(&['t', 'e', 's', 't']);
    let first = encrypt_block(&block, &text_to_bits(&['1']));
    let second = encrypt_block(&block, &text_to_bits(&['2']));
    assert_ne!(first, second);
}

#[test]
fn test_encryption_is_not_the_identity() {
    let block = text_to_bits(&['t', 'e', 's', 't']);
    assert_ne!(encrypt_block(&block, &text_to_bits(&['k'])), block);
}
