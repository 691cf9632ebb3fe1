//! Structural slot derivation: mappings, dynamic arrays, and struct fields.
//!
//! These follow the Solidity storage layout rules, addressed relative to a
//! base slot:
//!
//! - mapping entry: `keccak256(abi.encode(key, base))`, key first
//! - array data: `keccak256(abi.encode(base))`
//! - struct field: `base + offset`
//! - array element: `keccak256(abi.encode(base)) + index * element_words`
//!
//! Additions wrap at 256 bits.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::crypto::keccak256;
use crate::error::{Result, SlotError};
use crate::trace::{DerivationStep, Discard, StepSink};
use crate::word::{has_hex_prefix, Hex256, WORD_BYTES};

/// Number of steps in a mapping trace.
pub const MAPPING_STEPS: usize = 3;

/// Number of steps in an array trace.
pub const ARRAY_STEPS: usize = 2;

/// A mapping key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKey {
    /// A value that already fits a 32-byte word; used as-is.
    Raw(Hex256),
    /// A string key; its keccak256 hash is used as the word.
    Text(String),
}

impl SlotKey {
    /// Classify and parse a key as entered by a user.
    ///
    /// Input starting with `0x` / `0X` is a hex literal and must be valid;
    /// anything else is a text key.
    pub fn parse(input: &str) -> Result<Self> {
        if has_hex_prefix(input) {
            Ok(SlotKey::Raw(Hex256::from_hex(input)?))
        } else {
            Ok(SlotKey::Text(input.to_owned()))
        }
    }

    /// A text key, hashed before use.
    pub fn text(s: impl Into<String>) -> Self {
        SlotKey::Text(s.into())
    }

    /// The 32-byte word this key contributes to the mapping hash.
    pub fn encode(&self) -> Hex256 {
        match self {
            SlotKey::Raw(word) => *word,
            SlotKey::Text(s) => keccak256(s.as_bytes()),
        }
    }
}

impl FromStr for SlotKey {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Hex256> for SlotKey {
    fn from(word: Hex256) -> Self {
        SlotKey::Raw(word)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Raw(word) => write!(f, "{word}"),
            SlotKey::Text(s) => write!(f, "{s:?}"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mappings
// ─────────────────────────────────────────────────────────────────────────────

/// Slot of `mapping[key]` for a mapping declared at `base`.
pub fn derive_mapping_slot(key: &SlotKey, base: Hex256) -> Hex256 {
    mapping_slot_with(key, base, &mut Discard)
}

/// Like [`derive_mapping_slot`], returning the intermediate steps.
pub fn derive_mapping_slot_trace(key: &SlotKey, base: Hex256) -> Vec<DerivationStep> {
    let mut steps = Vec::with_capacity(MAPPING_STEPS);
    mapping_slot_with(key, base, &mut steps);
    steps
}

/// Mapping slot from raw user input.
///
/// `key` is classified by [`SlotKey::parse`]; `base` must be a hex literal.
pub fn derive_mapping_slot_str(key: &str, base: &str) -> Result<Hex256> {
    let key = SlotKey::parse(key)?;
    let base = Hex256::from_hex(base)?;
    Ok(derive_mapping_slot(&key, base))
}

fn mapping_slot_with<S: StepSink>(key: &SlotKey, base: Hex256, sink: &mut S) -> Hex256 {
    let encoded_key = key.encode();
    sink.record(|| {
        let (expression, explanation) = match key {
            SlotKey::Raw(word) => (
                format!("bytes32({word})"),
                "Left-pad the key to a 32-byte word",
            ),
            SlotKey::Text(s) => (
                format!("keccak256({s:?})"),
                "Hash the UTF-8 bytes of the string key with keccak256",
            ),
        };
        DerivationStep::new("Step 1: Encode Key", expression, encoded_key, explanation)
    });

    sink.record(|| {
        DerivationStep::new(
            "Step 2: Encode Base Slot",
            format!("bytes32({base})"),
            base,
            "Left-pad the mapping's base slot to a 32-byte word",
        )
    });

    let mut preimage = [0u8; 2 * WORD_BYTES];
    preimage[..WORD_BYTES].copy_from_slice(encoded_key.as_bytes());
    preimage[WORD_BYTES..].copy_from_slice(base.as_bytes());
    let slot = keccak256(preimage);
    sink.record(|| {
        DerivationStep::new(
            "Step 3: Hash Key and Slot",
            format!("keccak256(abi.encode({encoded_key}, {base}))"),
            slot,
            "Hash the key word followed by the base slot word",
        )
    });

    tracing::trace!(key = %key, base = %base, slot = %slot, "derived mapping slot");
    slot
}

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic arrays
// ─────────────────────────────────────────────────────────────────────────────

/// Slot of the first element of a dynamic array whose length lives at `base`.
pub fn derive_array_slot(base: Hex256) -> Hex256 {
    array_slot_with(base, &mut Discard)
}

/// Like [`derive_array_slot`], returning the intermediate steps.
pub fn derive_array_slot_trace(base: Hex256) -> Vec<DerivationStep> {
    let mut steps = Vec::with_capacity(ARRAY_STEPS);
    array_slot_with(base, &mut steps);
    steps
}

/// Array data slot from a hex literal.
pub fn derive_array_slot_str(base: &str) -> Result<Hex256> {
    Ok(derive_array_slot(Hex256::from_hex(base)?))
}

fn array_slot_with<S: StepSink>(base: Hex256, sink: &mut S) -> Hex256 {
    sink.record(|| {
        DerivationStep::new(
            "Step 1: Encode Base Slot",
            format!("abi.encode({base})"),
            base,
            "Left-pad the array's length slot to a 32-byte word",
        )
    });

    let slot = keccak256(base.as_bytes());
    sink.record(|| {
        DerivationStep::new(
            "Step 2: Hash Base Slot",
            format!("keccak256({base})"),
            slot,
            "Element data starts at the hash of the length slot",
        )
    });

    tracing::trace!(base = %base, slot = %slot, "derived array slot");
    slot
}

/// Slot of element `index` of a dynamic array at `base`.
///
/// `element_words` is the number of slots one element occupies (1 for any
/// value type of 32 bytes or less).
pub fn derive_array_element_slot(base: Hex256, index: u64, element_words: u64) -> Hex256 {
    let offset = U256::from(index).wrapping_mul(U256::from(element_words));
    Hex256::from_u256(derive_array_slot(base).to_u256().wrapping_add(offset))
}

// ─────────────────────────────────────────────────────────────────────────────
// Struct fields
// ─────────────────────────────────────────────────────────────────────────────

/// Slot of the struct member `offset` slots past `base`.
pub fn derive_field_slot(base: Hex256, offset: u64) -> Hex256 {
    Hex256::from_u256(base.to_u256().wrapping_add(U256::from(offset)))
}
