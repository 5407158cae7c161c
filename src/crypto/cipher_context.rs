//! The block pipeline: text chunking, subkey cascading, hex assembly.

use bitvec::prelude::*;
use rayon::prelude::*;

use crate::crypto::bit_codec::{self, BLOCK_BITS, CHARS_PER_BLOCK};
use crate::crypto::error::FormatError;
use crate::crypto::feistel_network;

/// Block count at which per-block work moves onto the rayon pool. Blocks
/// are independent, so the split is safe at any point.
const PARALLEL_BLOCK_THRESHOLD: usize = 32;

/// Derived key material for one cascade.
///
/// Each supplied key string is chunked into groups of up to four
/// characters, one 64-bit key block per group; an empty key string
/// contributes no stage at all (it is a skip, not a zero key). Encryption
/// applies every block of key one, then key two, then key three, one full
/// 16-round pass each; decryption applies the exact reverse sequence.
#[derive(Clone)]
pub struct CipherContext {
    stages: Vec<Vec<BitVec>>,
}

impl CipherContext {
    pub fn new(first_key: &str, second_key: &str, third_key: &str) -> Self {
        let stages: Vec<Vec<BitVec>> = [first_key, second_key, third_key]
            .into_iter()
            .filter(|key| !key.is_empty())
            .map(key_blocks)
            .collect();

        log::debug!(
            "cascade with {} stage(s), {} pass(es) per block",
            stages.len(),
            stages.iter().map(Vec::len).sum::<usize>(),
        );
        Self { stages }
    }

    /// Encrypts `text` to an undelimited string of 16-digit hex blocks.
    ///
    /// Empty input yields empty output. Every 4-character chunk of the
    /// input maps to exactly one hex block, independently of its
    /// neighbors.
    pub fn encrypt(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let chunks: Vec<&[char]> = chars.chunks(CHARS_PER_BLOCK).collect();

        let blocks: Vec<String> = if chunks.len() >= PARALLEL_BLOCK_THRESHOLD {
            chunks.par_iter().map(|chunk| self.encrypt_chunk(chunk)).collect()
        } else {
            chunks.iter().map(|chunk| self.encrypt_chunk(chunk)).collect()
        };
        blocks.concat()
    }

    /// Decrypts a string of 16-digit hex blocks back to text.
    ///
    /// Fails with [`FormatError`] if the length is not a multiple of 16
    /// digits or a non-hex character appears. Zero-valued character slots
    /// are dropped from the output (see the crate docs).
    pub fn decrypt(&self, hex_text: &str) -> Result<String, FormatError> {
        let bits = bit_codec::hex_to_bits(hex_text)?;
        let chunks: Vec<&BitSlice> = bits.chunks(BLOCK_BITS).collect();

        let blocks: Vec<String> = if chunks.len() >= PARALLEL_BLOCK_THRESHOLD {
            chunks.par_iter().map(|chunk| self.decrypt_chunk(chunk)).collect()
        } else {
            chunks.iter().map(|chunk| self.decrypt_chunk(chunk)).collect()
        };
        Ok(blocks.concat())
    }

    fn encrypt_chunk(&self, chunk: &[char]) -> String {
        let mut block = bit_codec::text_to_bits(chunk);
        for key_block in self.stages.iter().flatten() {
            block = feistel_network::encrypt_block(&block, key_block);
        }
        bit_codec::bits_to_hex(&block)
    }

    fn decrypt_chunk(&self, chunk: &BitSlice) -> String {
        let mut block = chunk.to_bitvec();
        for key_block in self.stages.iter().flatten().rev() {
            block = feistel_network::decrypt_block(&block, key_block);
        }
        bit_codec::bits_to_text(&block)
    }
}

fn key_blocks(key: &str) -> Vec<BitVec> {
    let chars: Vec<char> = key.chars().collect();
    chars
        .chunks(CHARS_PER_BLOCK)
        .map(bit_codec::text_to_bits)
        .collect()
}

/// Encrypts `text` under up to three cascaded keys. An empty key string
/// skips that stage.
pub fn encrypt(text: &str, first_key: &str, second_key: &str, third_key: &str) -> String {
    CipherContext::new(first_key, second_key, third_key).encrypt(text)
}

/// Decrypts hex ciphertext produced by [`encrypt`] with the same keys.
pub fn decrypt(
    hex_text: &str,
    first_key: &str,
    second_key: &str,
    third_key: &str,
) -> Result<String, FormatError> {
    CipherContext::new(first_key, second_key, third_key).decrypt(hex_text)
}
