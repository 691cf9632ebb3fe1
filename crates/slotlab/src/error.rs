//! Error types for slot derivation.

use thiserror::Error;

/// A hex literal that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidHexError {
    #[error("odd number of hex digits: {len}")]
    OddLength { len: usize },

    #[error("invalid hex character {c:?} at position {index}")]
    InvalidCharacter { c: char, index: usize },
}

/// Errors that can occur while encoding or deriving a slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] InvalidHexError),

    #[error("encoding error: value needs {len} bytes, exceeds 32-byte word")]
    Encoding { len: usize },
}

/// Result type for slot operations.
pub type Result<T> = std::result::Result<T, SlotError>;
