//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the exact slots other implementations (Solidity, ethers,
//! viem) compute for the same inputs.

use serde::Serialize;
use slotlab::{derive_array_slot_str, derive_mapping_slot_str, derive_namespace_slot};

/// What a golden vector derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorKind {
    /// ERC-7201 root of `input`.
    Namespace,
    /// `mapping[input]` at `base`.
    Mapping,
    /// Data region of the array whose length lives at `input`.
    Array,
}

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub kind: VectorKind,
    /// Namespace, mapping key, or array base slot.
    pub input: &'static str,
    /// Base slot for mapping vectors, empty otherwise.
    pub base: &'static str,
    /// Expected slot (0x-prefixed hex).
    pub expected_slot: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "terminus DID namespace",
            kind: VectorKind::Namespace,
            input: "terminus.TerminusDID",
            base: "",
            expected_slot: "0x4666f7c9ed2861482dc7def82e62cce78d7520c45f1fbe5cf48442a77f54bb00",
        },
        GoldenVector {
            name: "terminus tag registry namespace",
            kind: VectorKind::Namespace,
            input: "terminus.TagRegistry",
            base: "",
            expected_slot: "0xc8ba1573a83064b637069eac29a25dd52440bc4f98f399766e0040c151cb1f00",
        },
        GoldenVector {
            name: "terminus ERC721 namespace",
            kind: VectorKind::Namespace,
            input: "terminus.ERC721",
            base: "",
            expected_slot: "0x04cc3b1160dff1f611a48ab325b162d9ef138626f346e30f670e6c29c03db600",
        },
        GoldenVector {
            name: "ERC-7201 reference namespace",
            kind: VectorKind::Namespace,
            input: "example.main",
            base: "",
            expected_slot: "0x183a6125c38840424c4a85fa12bab2ab606c4b6d0e7cc73c0c06ba5300eab500",
        },
        GoldenVector {
            name: "uint key at slot zero",
            kind: VectorKind::Mapping,
            input: "0x01",
            base: "0x00",
            expected_slot: "0xada5013122d395ba3c54772283fb069b10426056ef8ca54750cb9bb552a59e7d",
        },
        GoldenVector {
            name: "string key under DID namespace",
            kind: VectorKind::Mapping,
            input: "alice",
            base: "0x4666f7c9ed2861482dc7def82e62cce78d7520c45f1fbe5cf48442a77f54bb00",
            expected_slot: "0x4a12dc8a087a583ee642e1f13fe033d37c5c047ad9865cbca02472a1a3f95659",
        },
        GoldenVector {
            name: "array at slot zero",
            kind: VectorKind::Array,
            input: "0x00",
            base: "",
            expected_slot: "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563",
        },
        GoldenVector {
            name: "array at slot two",
            kind: VectorKind::Array,
            input: "0x02",
            base: "",
            expected_slot: "0x405787fa12a823e0f2b7631cc41b3ba8828b3321ca811111fa75cd3aa3bb5ace",
        },
    ]
}

/// Compute the slot a vector describes.
pub fn compute_vector(vector: &GoldenVector) -> slotlab::Result<String> {
    let slot = match vector.kind {
        VectorKind::Namespace => derive_namespace_slot(vector.input),
        VectorKind::Mapping => derive_mapping_slot_str(vector.input, vector.base)?,
        VectorKind::Array => derive_array_slot_str(vector.input)?,
    };
    Ok(slot.to_hex())
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, computed)` per vector. A vector whose inputs fail
/// to parse is reported as a mismatch with the error text.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match compute_vector(v) {
            Ok(hex) => (v.name.to_string(), hex == v.expected_slot, hex),
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}

/// Render all vectors as pretty JSON, for sharing with other implementations.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_verify() {
        for (name, matches, computed) in verify_all_vectors() {
            assert!(matches, "vector '{}' computed {}", name, computed);
        }
    }

    #[test]
    fn test_vectors_are_deterministic() {
        for vector in all_vectors() {
            let a = compute_vector(&vector).unwrap();
            let b = compute_vector(&vector).unwrap();
            assert_eq!(a, b, "vector '{}' changed on recomputation", vector.name);
        }
    }

    #[test]
    fn test_namespace_vectors_clear_low_byte() {
        for vector in all_vectors() {
            if vector.kind == VectorKind::Namespace {
                assert!(vector.expected_slot.ends_with("00"), "{}", vector.name);
            }
        }
    }

    #[test]
    fn test_bad_vector_reports_mismatch() {
        let bad = GoldenVector {
            name: "malformed key",
            kind: VectorKind::Mapping,
            input: "0xZZ",
            base: "0x00",
            expected_slot: "",
        };
        assert!(compute_vector(&bad).is_err());
    }

    #[test]
    fn test_vectors_json_lists_every_vector() {
        let json: serde_json::Value = serde_json::from_str(&vectors_json().unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(all_vectors().len()));
        assert_eq!(json[0]["kind"], "namespace");
    }
}
