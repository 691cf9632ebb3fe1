//! Keccak-256 hashing.
//!
//! Wraps the `alloy-primitives` implementation so every derivation hashes
//! through one function and gets a [`Hex256`] back.

use crate::word::Hex256;

/// Compute the Keccak-256 hash of the given data.
///
/// This is the pre-standard Keccak padding used by the EVM, not NIST SHA3-256.
pub fn keccak256(data: impl AsRef<[u8]>) -> Hex256 {
    Hex256(alloy_primitives::keccak256(data).0)
}
