//! Conversions between text, 64-bit blocks, and hex strings.
//!
//! One block carries up to four characters, each as a 16-bit big-endian
//! field of its code point's low 16 bits. The wide fields let the scheme
//! carry double-byte characters at the cost of wasting half the block on
//! single-byte text. Slots without a character hold a zero field, and
//! decoding drops zero-valued fields instead of emitting U+0000 — genuine
//! NUL characters are therefore lost on a round trip.

use bitvec::prelude::*;

use crate::crypto::error::FormatError;

/// Bits in one cipher block.
pub const BLOCK_BITS: usize = 64;
/// Character slots per block.
pub const CHARS_PER_BLOCK: usize = 4;
/// Width of one character field.
pub const BITS_PER_CHAR: usize = 16;
/// Hex digits encoding one block.
pub const HEX_DIGITS_PER_BLOCK: usize = 16;

const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Encodes up to four characters into a 64-bit block, most significant
/// bit first within each field. Unused slots become zero fields.
pub fn text_to_bits(chars: &[char]) -> BitVec {
    assert!(
        chars.len() <= CHARS_PER_BLOCK,
        "block holds at most {CHARS_PER_BLOCK} characters"
    );

    let mut bits = BitVec::with_capacity(BLOCK_BITS);
    for slot in 0..CHARS_PER_BLOCK {
        let code = chars
            .get(slot)
            .map_or(0, |&c| (c as u32 & 0xFFFF) as u16);
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((code >> shift) & 1 == 1);
        }
    }
    bits
}

/// Decodes the four 16-bit fields of a block back to text.
///
/// A field whose value is zero is omitted entirely, and a field that is
/// not a valid Unicode scalar value decodes to U+FFFD. Both are inherited
/// from the original scheme and must not raise or log.
pub fn bits_to_text(block: &BitSlice) -> String {
    debug_assert_eq!(block.len(), BLOCK_BITS);

    let mut text = String::new();
    for field in block.chunks(BITS_PER_CHAR) {
        let mut value = 0u32;
        for bit in field.iter().by_vals() {
            value = (value << 1) | u32::from(bit);
        }
        if value != 0 {
            text.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
    }
    text
}

/// Renders a bit sequence as uppercase hex, one digit per 4-bit group.
pub fn bits_to_hex(block: &BitSlice) -> String {
    let mut hex = String::with_capacity(block.len() / 4);
    for nibble in block.chunks(4) {
        let mut value = 0usize;
        for bit in nibble.iter().by_vals() {
            value = (value << 1) | usize::from(bit);
        }
        hex.push(HEX_DIGITS[value]);
    }
    hex
}

/// Parses a hex string into bits, 4 bits per digit.
///
/// The length must be a whole number of 16-digit blocks. Digits are
/// accepted in either case; the cipher itself always emits uppercase.
pub fn hex_to_bits(hex: &str) -> Result<BitVec, FormatError> {
    let digits = hex.chars().count();
    if digits % HEX_DIGITS_PER_BLOCK != 0 {
        return Err(FormatError::UnalignedLength(digits));
    }

    let mut bits = BitVec::with_capacity(digits * 4);
    for (position, digit) in hex.chars().enumerate() {
        let value = digit
            .to_digit(16)
            .ok_or(FormatError::InvalidDigit { digit, position })?;
        for shift in (0..4).rev() {
            bits.push((value >> shift) & 1 == 1);
        }
    }
    Ok(bits)
}
