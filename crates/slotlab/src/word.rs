//! 256-bit storage words.
//!
//! [`Hex256`] is the value type every derivation consumes and produces. Its
//! canonical text form is lowercase, `0x`-prefixed, and always 64 digits.
//! Arithmetic goes through [`U256`], so subtraction and addition wrap at
//! 256 bits instead of growing.

use alloy_primitives::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidHexError, Result, SlotError};

/// Width of a storage word in bytes.
pub const WORD_BYTES: usize = 32;

/// A 32-byte big-endian storage word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hex256(pub [u8; WORD_BYTES]);

impl Hex256 {
    /// The zero word.
    pub const ZERO: Self = Self([0u8; WORD_BYTES]);

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; WORD_BYTES] {
        &self.0
    }

    /// Create from a fixed-width integer, big-endian.
    pub fn from_u256(value: U256) -> Self {
        Self(encode_u256(value))
    }

    /// Read the word as a big-endian integer.
    pub fn to_u256(&self) -> U256 {
        U256::from_be_bytes(self.0)
    }

    /// Create from a small integer, e.g. a compiler-assigned slot number.
    pub fn from_u64(value: u64) -> Self {
        Self::from_u256(U256::from(value))
    }

    /// Canonical form: `0x` followed by 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse a hex literal, left-padding it to 32 bytes.
    ///
    /// The `0x` prefix is optional and digits may be upper case. Values whose
    /// minimal big-endian form is wider than 32 bytes are rejected.
    pub fn from_hex(s: &str) -> Result<Self> {
        encode32_hex(s).map(Self)
    }

    /// The least significant byte.
    pub const fn low_byte(&self) -> u8 {
        self.0[WORD_BYTES - 1]
    }
}

impl fmt::Debug for Hex256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex256({}...)", &self.to_hex()[..18])
    }
}

impl fmt::Display for Hex256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Hex256 {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Hex256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; WORD_BYTES]> for Hex256 {
    fn from(bytes: [u8; WORD_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<U256> for Hex256 {
    fn from(value: U256) -> Self {
        Self::from_u256(value)
    }
}

impl From<Hex256> for U256 {
    fn from(word: Hex256) -> Self {
        word.to_u256()
    }
}

impl Serialize for Hex256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hex256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Whether `s` carries a `0x` / `0X` prefix.
pub fn has_hex_prefix(s: &str) -> bool {
    s.starts_with("0x") || s.starts_with("0X")
}

/// Decode a hex literal into bytes.
///
/// Strips exactly one `0x` / `0X` prefix. `"0x"` decodes to an empty vector.
pub fn decode_hex(s: &str) -> std::result::Result<Vec<u8>, InvalidHexError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    if let Some((index, c)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        tracing::debug!(input = s, index, "rejected hex literal");
        return Err(InvalidHexError::InvalidCharacter { c, index });
    }

    // All digits are ASCII past this point, so byte length is digit count.
    if digits.len() % 2 != 0 {
        tracing::debug!(input = s, len = digits.len(), "rejected hex literal");
        return Err(InvalidHexError::OddLength { len: digits.len() });
    }

    hex::decode(digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            InvalidHexError::InvalidCharacter { c, index }
        }
        _ => InvalidHexError::OddLength { len: digits.len() },
    })
}

/// Left-pad a big-endian byte string to a 32-byte word.
///
/// Leading zero bytes are not counted: the value is reduced to its minimal
/// big-endian form first, and only that form must fit in 32 bytes.
pub fn encode32(bytes: &[u8]) -> Result<[u8; WORD_BYTES]> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let minimal = &bytes[start..];
    if minimal.len() > WORD_BYTES {
        return Err(SlotError::Encoding { len: minimal.len() });
    }

    let mut word = [0u8; WORD_BYTES];
    word[WORD_BYTES - minimal.len()..].copy_from_slice(minimal);
    Ok(word)
}

/// Parse a hex literal and left-pad it to a 32-byte word.
pub fn encode32_hex(s: &str) -> Result<[u8; WORD_BYTES]> {
    let bytes = decode_hex(s)?;
    encode32(&bytes)
}

/// Big-endian encoding of a fixed-width integer. Always fits.
pub fn encode_u256(value: U256) -> [u8; WORD_BYTES] {
    value.to_be_bytes::<WORD_BYTES>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_canonical_hex_is_padded_lowercase() {
        let word = Hex256::from_hex("0xABCD").unwrap();
        assert_eq!(
            word.to_hex(),
            "0x000000000000000000000000000000000000000000000000000000000000abcd"
        );
        assert_eq!(word.to_string().len(), 66);
    }

    #[test]
    fn test_prefix_is_normalized() {
        let a = Hex256::from_hex("0x01").unwrap();
        let b = Hex256::from_hex("0X01").unwrap();
        let c = Hex256::from_hex("01").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, Hex256::from_u64(1));
    }

    #[test]
    fn test_double_prefix_rejected() {
        let err = Hex256::from_hex("0x0x12").unwrap_err();
        assert_eq!(
            err,
            SlotError::InvalidHex(InvalidHexError::InvalidCharacter { c: 'x', index: 1 })
        );
    }

    #[test]
    fn test_odd_length_rejected() {
        let err = decode_hex("0x123").unwrap_err();
        assert_eq!(err, InvalidHexError::OddLength { len: 3 });
    }

    #[test]
    fn test_invalid_character_rejected() {
        let err = decode_hex("0xZZ").unwrap_err();
        assert_eq!(err, InvalidHexError::InvalidCharacter { c: 'Z', index: 0 });

        // Non-ASCII is reported as a bad character, not as a length problem.
        let err = decode_hex("0xé1").unwrap_err();
        assert_eq!(err, InvalidHexError::InvalidCharacter { c: 'é', index: 0 });
    }

    #[test]
    fn test_empty_digits_encode_to_zero() {
        assert_eq!(Hex256::from_hex("0x").unwrap(), Hex256::ZERO);
        assert_eq!(encode32(&[]).unwrap(), [0u8; 32]);
    }

    #[test]
    fn test_encode32_left_pads() {
        let word = encode32(&[0x12, 0x34]).unwrap();
        assert_eq!(&word[..30], &[0u8; 30]);
        assert_eq!(&word[30..], &[0x12, 0x34]);
    }

    #[test]
    fn test_encode32_ignores_leading_zeros() {
        let mut bytes = vec![0u8; 8];
        bytes.extend_from_slice(&[0xff; 32]);
        assert_eq!(encode32(&bytes).unwrap(), [0xff; 32]);
    }

    #[test]
    fn test_encode32_rejects_oversized() {
        let bytes = [0x01u8; 33];
        assert_eq!(encode32(&bytes), Err(SlotError::Encoding { len: 33 }));

        let literal = format!("0x01{}", "00".repeat(32));
        assert_eq!(
            encode32_hex(&literal),
            Err(SlotError::Encoding { len: 33 })
        );
    }

    #[test]
    fn test_u256_conversions() {
        let word = Hex256::from_u64(0x0102);
        assert_eq!(word.to_u256(), U256::from(0x0102u64));
        assert_eq!(word.low_byte(), 0x02);
        assert_eq!(Hex256::from(U256::MAX), Hex256([0xff; 32]));
        let zero: U256 = Hex256::ZERO.into();
        assert_eq!(zero, U256::ZERO);
    }

    #[test]
    fn test_serde_as_canonical_string() {
        let word = Hex256::from_u64(0xff);
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(
            json,
            "\"0x00000000000000000000000000000000000000000000000000000000000000ff\""
        );
        let back: Hex256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);

        assert!(serde_json::from_str::<Hex256>("\"0xZZ\"").is_err());
    }

    #[test]
    fn test_debug_is_truncated() {
        let debug = format!("{:?}", Hex256([0xab; 32]));
        assert_eq!(debug, "Hex256(0xabababababababab...)");
    }

    proptest! {
        #[test]
        fn test_encode32_preserves_value(bytes in prop::collection::vec(any::<u8>(), 0..=32)) {
            let word = encode32(&bytes).unwrap();
            prop_assert_eq!(U256::from_be_bytes(word), U256::from_be_slice(&bytes));
        }

        #[test]
        fn test_canonical_hex_reparses(bytes in any::<[u8; 32]>()) {
            let word = Hex256(bytes);
            prop_assert_eq!(Hex256::from_hex(&word.to_hex()).unwrap(), word);
        }
    }
}
