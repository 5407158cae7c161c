use thiserror::Error;

/// Malformed ciphertext rejected during hex decoding.
///
/// This is the only failure mode in the crate: encryption of any text and
/// decryption of any well-formed hex string are total. Surfaced directly
/// to the caller, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("hex input length {0} is not a multiple of 16 digits")]
    UnalignedLength(usize),
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}
