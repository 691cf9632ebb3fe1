//! ERC-7201 namespaced storage roots.
//!
//! ```text
//! keccak256(abi.encode(uint256(keccak256(namespace)) - 1)) & ~bytes32(uint256(0xff))
//! ```
//!
//! The subtraction wraps at 256 bits. A zero first hash would give
//! `2^256 - 1`, never an error.

use alloy_primitives::U256;

use crate::crypto::keccak256;
use crate::trace::{DerivationStep, Discard, StepSink};
use crate::word::{encode_u256, Hex256};

/// Number of steps in a namespace trace.
pub const NAMESPACE_STEPS: usize = 5;

/// Derive the ERC-7201 root slot for `namespace`.
///
/// Total over all UTF-8 strings, including the empty string.
pub fn derive_namespace_slot(namespace: &str) -> Hex256 {
    namespace_slot_with(namespace, &mut Discard)
}

/// Derive the root slot for `namespace`, returning every intermediate value.
///
/// The last step's result always equals [`derive_namespace_slot`].
pub fn derive_namespace_slot_trace(namespace: &str) -> Vec<DerivationStep> {
    let mut steps = Vec::with_capacity(NAMESPACE_STEPS);
    namespace_slot_with(namespace, &mut steps);
    steps
}

fn namespace_slot_with<S: StepSink>(namespace: &str, sink: &mut S) -> Hex256 {
    // 1: hash the raw UTF-8 bytes, no length prefix
    let h1 = keccak256(namespace.as_bytes());
    sink.record(|| {
        DerivationStep::new(
            "Step 1: Hash Namespace",
            format!("keccak256({namespace:?})"),
            h1,
            "Hash the UTF-8 bytes of the namespace string with keccak256",
        )
    });

    let slot = root_from_hash(h1, sink);
    tracing::trace!(namespace, slot = %slot, "derived namespace slot");
    slot
}

/// Steps 2 to 5, starting from the namespace hash.
fn root_from_hash<S: StepSink>(h1: Hex256, sink: &mut S) -> Hex256 {
    // 2: wrapping subtract
    let decremented = h1.to_u256().wrapping_sub(U256::from(1u64));
    sink.record(|| {
        DerivationStep::new(
            "Step 2: Subtract 1",
            format!("uint256({h1}) - 1"),
            Hex256::from_u256(decremented),
            "Read the hash as a uint256 and subtract 1",
        )
    });

    // 3
    let encoded = encode_u256(decremented);
    sink.record(|| {
        DerivationStep::new(
            "Step 3: Encode as bytes32",
            format!("abi.encode({decremented})"),
            Hex256(encoded),
            "ABI-encode the integer as a single 32-byte word",
        )
    });

    // 4
    let h2 = keccak256(encoded);
    sink.record(|| {
        DerivationStep::new(
            "Step 4: Hash Again",
            format!("keccak256({})", Hex256(encoded)),
            h2,
            "Hash the encoded word with keccak256",
        )
    });

    // 5: clear the low byte
    let slot = Hex256::from_u256(h2.to_u256() & !U256::from(0xffu64));
    sink.record(|| {
        DerivationStep::new(
            "Step 5: Clear Lowest 8 Bits",
            format!("{h2} & ~bytes32(uint256(0xff))"),
            slot,
            "Zero the last byte so the root is 256-slot aligned",
        )
    });

    slot
}
