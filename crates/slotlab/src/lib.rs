//! # slotlab
//!
//! Deterministic storage slot derivation for upgradeable contracts.
//!
//! This crate contains no I/O, no global state, and no caching. Every function
//! is pure computation over Keccak-256 and 256-bit unsigned arithmetic, so the
//! same input yields the same slot on every platform and in every
//! implementation.
//!
//! ## Key Types
//!
//! - [`Hex256`] - A 32-byte storage word with a canonical `0x` + 64 digit form
//! - [`SlotKey`] - A mapping key: a raw word or a string to be hashed
//! - [`DerivationStep`] - One intermediate value of a derivation, for display
//!
//! ## Derivations
//!
//! - [`derive_namespace_slot`] - ERC-7201 namespaced storage root
//! - [`derive_mapping_slot`] - `mapping[key]` relative to a base slot
//! - [`derive_array_slot`] - data region of a dynamic array
//! - [`derive_field_slot`], [`derive_array_element_slot`] - offsets from those
//!
//! Each derivation that has a `_trace` variant runs the same routine for both,
//! so the last step of a trace is always the value the plain function returns.
//!
//! ```rust
//! use slotlab::{derive_namespace_slot, derive_namespace_slot_trace};
//!
//! let slot = derive_namespace_slot("terminus.TerminusDID");
//! assert_eq!(
//!     slot.to_hex(),
//!     "0x4666f7c9ed2861482dc7def82e62cce78d7520c45f1fbe5cf48442a77f54bb00"
//! );
//!
//! let steps = derive_namespace_slot_trace("terminus.TerminusDID");
//! assert_eq!(steps.last().map(|s| s.result), Some(slot));
//! ```

pub mod abi;
pub mod crypto;
pub mod display;
pub mod error;
pub mod namespace;
pub mod structural;
pub mod trace;
pub mod word;

pub use abi::{parse_solidity_type, SolidityType};
pub use crypto::keccak256;
pub use display::{format_hex, DisplayConfig, DEFAULT_DISPLAY_LEN};
pub use error::{InvalidHexError, Result, SlotError};
pub use namespace::{derive_namespace_slot, derive_namespace_slot_trace, NAMESPACE_STEPS};
pub use structural::{
    derive_array_element_slot, derive_array_slot, derive_array_slot_str, derive_array_slot_trace,
    derive_field_slot, derive_mapping_slot, derive_mapping_slot_str, derive_mapping_slot_trace,
    SlotKey, ARRAY_STEPS, MAPPING_STEPS,
};
pub use trace::{DerivationStep, Discard, StepSink};
pub use word::{decode_hex, encode32, encode32_hex, encode_u256, Hex256, WORD_BYTES};

// The arithmetic type used throughout, for callers that need it.
pub use alloy_primitives::U256;
