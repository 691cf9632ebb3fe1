//! Proptest generators for property-based testing.

use proptest::prelude::*;

use slotlab::{Hex256, SlotKey};

/// Generate a random 32-byte word.
pub fn word() -> impl Strategy<Value = Hex256> {
    any::<[u8; 32]>().prop_map(Hex256::from_bytes)
}

/// Generate a small slot number, like the ones compilers assign to top-level
/// state variables.
pub fn small_slot() -> impl Strategy<Value = Hex256> {
    (0u64..1024).prop_map(Hex256::from_u64)
}

/// Generate a namespace in the usual `project.Contract` shape.
pub fn namespace() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,15}\\.[A-Z][A-Za-z0-9]{0,31}".prop_map(String::from)
}

/// Generate any UTF-8 string, including empty and non-ASCII.
pub fn any_namespace() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Generate a mapping key of either kind.
pub fn slot_key() -> impl Strategy<Value = SlotKey> {
    prop_oneof![
        word().prop_map(SlotKey::Raw),
        "[a-zA-Z0-9_]{0,32}".prop_map(SlotKey::Text),
    ]
}

/// Generate a hex literal for `word`, with a random prefix style and digit case.
pub fn hex_literal() -> impl Strategy<Value = (Hex256, String)> {
    (word(), 0u8..3, any::<bool>()).prop_map(|(w, prefix, upper)| {
        let digits = hex::encode(w.as_bytes());
        let digits = if upper { digits.to_uppercase() } else { digits };
        let literal = match prefix {
            0 => format!("0x{digits}"),
            1 => format!("0X{digits}"),
            _ => digits,
        };
        (w, literal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotlab::{
        derive_array_slot, derive_mapping_slot, derive_namespace_slot,
        derive_namespace_slot_trace, NAMESPACE_STEPS,
    };

    proptest! {
        #[test]
        fn test_namespace_slot_deterministic(ns in any_namespace()) {
            prop_assert_eq!(derive_namespace_slot(&ns), derive_namespace_slot(&ns));
        }

        #[test]
        fn test_trace_agrees_with_value(ns in any_namespace()) {
            let steps = derive_namespace_slot_trace(&ns);
            prop_assert_eq!(steps.len(), NAMESPACE_STEPS);
            prop_assert_eq!(steps[NAMESPACE_STEPS - 1].result, derive_namespace_slot(&ns));
        }

        #[test]
        fn test_namespace_low_byte_cleared(ns in namespace()) {
            prop_assert_eq!(derive_namespace_slot(&ns).low_byte(), 0);
        }

        #[test]
        fn test_trace_step_two_is_step_one_minus_one(ns in any_namespace()) {
            let steps = derive_namespace_slot_trace(&ns);
            let h1 = steps[0].result.to_u256();
            prop_assert_eq!(steps[1].result.to_u256(), h1.wrapping_sub(slotlab::U256::from(1u64)));
            prop_assert_eq!(steps[2].result, steps[1].result);
        }

        #[test]
        fn test_mapping_order_sensitive(a in word(), b in word()) {
            prop_assume!(a != b);
            prop_assert_ne!(
                derive_mapping_slot(&SlotKey::Raw(a), b),
                derive_mapping_slot(&SlotKey::Raw(b), a)
            );
        }

        #[test]
        fn test_mapping_distinct_keys(key in slot_key(), other in slot_key(), base in small_slot()) {
            prop_assume!(key.encode() != other.encode());
            prop_assert_ne!(derive_mapping_slot(&key, base), derive_mapping_slot(&other, base));
        }

        #[test]
        fn test_array_slots_distinct(b1 in word(), b2 in word()) {
            prop_assume!(b1 != b2);
            prop_assert_ne!(derive_array_slot(b1), derive_array_slot(b2));
        }

        #[test]
        fn test_hex_literal_parses((w, literal) in hex_literal()) {
            prop_assert_eq!(literal.parse::<Hex256>().unwrap(), w);
        }
    }
}
