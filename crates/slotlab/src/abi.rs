//! Single-byte Solidity ABI type codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ABI type, keyed by its single-byte code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolidityType {
    Int,
    Uint,
    Bool,
    String,
    Array,
    FixedArray,
    Tuple,
    Address,
    FixedBytes,
    Bytes,
}

impl SolidityType {
    /// Every type, in code order.
    pub const ALL: [SolidityType; 10] = [
        SolidityType::Int,
        SolidityType::Uint,
        SolidityType::Bool,
        SolidityType::String,
        SolidityType::Array,
        SolidityType::FixedArray,
        SolidityType::Tuple,
        SolidityType::Address,
        SolidityType::FixedBytes,
        SolidityType::Bytes,
    ];

    /// Look up a type by its code, written exactly as `0x00` .. `0x09`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// The code string, `0x00` .. `0x09`.
    pub const fn code(&self) -> &'static str {
        match self {
            SolidityType::Int => "0x00",
            SolidityType::Uint => "0x01",
            SolidityType::Bool => "0x02",
            SolidityType::String => "0x03",
            SolidityType::Array => "0x04",
            SolidityType::FixedArray => "0x05",
            SolidityType::Tuple => "0x06",
            SolidityType::Address => "0x07",
            SolidityType::FixedBytes => "0x08",
            SolidityType::Bytes => "0x09",
        }
    }

    /// The readable type name, e.g. `fixedArray`.
    pub const fn name(&self) -> &'static str {
        match self {
            SolidityType::Int => "int",
            SolidityType::Uint => "uint",
            SolidityType::Bool => "bool",
            SolidityType::String => "string",
            SolidityType::Array => "array",
            SolidityType::FixedArray => "fixedArray",
            SolidityType::Tuple => "tuple",
            SolidityType::Address => "address",
            SolidityType::FixedBytes => "fixedBytes",
            SolidityType::Bytes => "bytes",
        }
    }
}

impl fmt::Display for SolidityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Readable name for an ABI type code, or `"unknown"`.
pub fn parse_solidity_type(code: &str) -> &'static str {
    SolidityType::from_code(code).map_or("unknown", |t| t.name())
}
