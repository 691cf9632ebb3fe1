//! # slotlab testkit
//!
//! Testing utilities for slotlab.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known slots with expected outputs for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Golden Vectors
//!
//! ```rust
//! use slotlab_testkit::vectors::{all_vectors, compute_vector};
//!
//! for vector in all_vectors() {
//!     let slot = compute_vector(&vector).unwrap();
//!     assert_eq!(slot, vector.expected_slot);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use slotlab_testkit::generators::namespace;
//!
//! proptest! {
//!     #[test]
//!     fn root_is_aligned(ns in namespace()) {
//!         prop_assert_eq!(slotlab::derive_namespace_slot(&ns).low_byte(), 0);
//!     }
//! }
//! ```

pub mod generators;
pub mod vectors;

pub use generators::{any_namespace, hex_literal, namespace, slot_key, small_slot, word};
pub use vectors::{all_vectors, compute_vector, verify_all_vectors, GoldenVector, VectorKind};
