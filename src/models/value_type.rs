//! The closed set of reading value types.
//!
//! Tokens are matched case-insensitively and always come out in their
//! canonical casing, so `"int16"`, `"INT16"` and `"Int16"` are the same type.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{ErrKind, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    String,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Binary,
    BoolArray,
    StringArray,
    Uint8Array,
    Uint16Array,
    Uint32Array,
    Uint64Array,
    Int8Array,
    Int16Array,
    Int32Array,
    Int64Array,
    Float32Array,
    Float64Array,
    Object,
}

impl ValueType {
    pub const ALL: [ValueType; 26] = [
        ValueType::Bool,
        ValueType::String,
        ValueType::Uint8,
        ValueType::Uint16,
        ValueType::Uint32,
        ValueType::Uint64,
        ValueType::Int8,
        ValueType::Int16,
        ValueType::Int32,
        ValueType::Int64,
        ValueType::Float32,
        ValueType::Float64,
        ValueType::Binary,
        ValueType::BoolArray,
        ValueType::StringArray,
        ValueType::Uint8Array,
        ValueType::Uint16Array,
        ValueType::Uint32Array,
        ValueType::Uint64Array,
        ValueType::Int8Array,
        ValueType::Int16Array,
        ValueType::Int32Array,
        ValueType::Int64Array,
        ValueType::Float32Array,
        ValueType::Float64Array,
        ValueType::Object,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::String => "String",
            ValueType::Uint8 => "Uint8",
            ValueType::Uint16 => "Uint16",
            ValueType::Uint32 => "Uint32",
            ValueType::Uint64 => "Uint64",
            ValueType::Int8 => "Int8",
            ValueType::Int16 => "Int16",
            ValueType::Int32 => "Int32",
            ValueType::Int64 => "Int64",
            ValueType::Float32 => "Float32",
            ValueType::Float64 => "Float64",
            ValueType::Binary => "Binary",
            ValueType::BoolArray => "BoolArray",
            ValueType::StringArray => "StringArray",
            ValueType::Uint8Array => "Uint8Array",
            ValueType::Uint16Array => "Uint16Array",
            ValueType::Uint32Array => "Uint32Array",
            ValueType::Uint64Array => "Uint64Array",
            ValueType::Int8Array => "Int8Array",
            ValueType::Int16Array => "Int16Array",
            ValueType::Int32Array => "Int32Array",
            ValueType::Int64Array => "Int64Array",
            ValueType::Float32Array => "Float32Array",
            ValueType::Float64Array => "Float64Array",
            ValueType::Object => "Object",
        }
    }

    /// Element type of an array type; `None` for scalars.
    pub fn element_type(self) -> Option<ValueType> {
        match self {
            ValueType::BoolArray => Some(ValueType::Bool),
            ValueType::StringArray => Some(ValueType::String),
            ValueType::Uint8Array => Some(ValueType::Uint8),
            ValueType::Uint16Array => Some(ValueType::Uint16),
            ValueType::Uint32Array => Some(ValueType::Uint32),
            ValueType::Uint64Array => Some(ValueType::Uint64),
            ValueType::Int8Array => Some(ValueType::Int8),
            ValueType::Int16Array => Some(ValueType::Int16),
            ValueType::Int32Array => Some(ValueType::Int32),
            ValueType::Int64Array => Some(ValueType::Int64),
            ValueType::Float32Array => Some(ValueType::Float32),
            ValueType::Float64Array => Some(ValueType::Float64),
            _ => None,
        }
    }

    pub fn is_array(self) -> bool {
        self.element_type().is_some()
    }
}

/// Canonical spelling of a value type token, matched case-insensitively.
pub fn normalize_value_type(token: &str) -> Result<&'static str, Error> {
    token.parse::<ValueType>().map(ValueType::as_str)
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        ValueType::ALL
            .into_iter()
            .find(|vt| vt.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::new(
                    ErrKind::ContractInvalid,
                    format!("unable to normalize the unknown value type '{s}'"),
                )
            })
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ValueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_case_insensitive() {
        assert_eq!(normalize_value_type("int16").unwrap(), "Int16");
        assert_eq!(normalize_value_type("INT16").unwrap(), "Int16");
        assert_eq!(normalize_value_type("Int16").unwrap(), "Int16");
        assert_eq!(normalize_value_type("float64array").unwrap(), "Float64Array");
    }

    #[test]
    fn test_normalize_rejects_unknown() {
        for token in ["int128", "", " Int16", "Integer"] {
            let err = normalize_value_type(token).unwrap_err();
            assert_eq!(err.kind(), ErrKind::ContractInvalid, "{token:?}");
        }
    }

    #[test]
    fn test_serde_canonicalizes() {
        let vt: ValueType = serde_json::from_str("\"uINT8aRRAY\"").unwrap();
        assert_eq!(vt, ValueType::Uint8Array);
        assert_eq!(serde_json::to_string(&vt).unwrap(), "\"Uint8Array\"");
        assert!(serde_json::from_str::<ValueType>("\"Uint128\"").is_err());
    }

    #[test]
    fn test_element_types() {
        assert_eq!(ValueType::Float32Array.element_type(), Some(ValueType::Float32));
        assert!(ValueType::Binary.element_type().is_none());
        assert!(!ValueType::Object.is_array());
    }
}
