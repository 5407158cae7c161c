//! A DES-shaped cascade cipher for login-credential obfuscation.
//!
//! This crate reimplements, bit for bit, the portal login scheme's block
//! cipher: a 16-round Feistel network over 64-bit blocks with a
//! non-standard character encoding (one 16-bit big-endian field per
//! character slot) and a non-standard 64→56 key fold in the key schedule.
//! Up to three key strings cascade; a key longer than four characters
//! contributes one full 16-round pass per 4-character group.
//!
//! # This is not a secure cipher
//!
//! There is no authentication, no IV, and blocks are independent
//! (ECB-like). Use it only where compatibility with previously issued
//! ciphertext is required.
//!
//! # Known information loss
//!
//! Decoding drops any 16-bit character field whose value is zero, so a
//! U+0000 character in the plaintext is indistinguishable from block
//! padding and vanishes after a round trip. Characters outside the Basic
//! Multilingual Plane are truncated to their low 16 code-point bits.
//! Both behaviors match the original scheme and are intentional.

pub mod crypto;

pub use crypto::cipher_context::{CipherContext, decrypt, encrypt};
pub use crypto::error::FormatError;
