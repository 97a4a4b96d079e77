// SPDX-License-Identifier: MIT OR Apache-2.0
//! Values carried on graph edges.

use crate::attribute::AttributeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data stored in an attribute slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum TypedValue {
    /// Nothing has been produced yet
    #[default]
    Empty,
    /// Raw byte sequence
    Bytes(Vec<u8>),
    /// 64-bit unsigned integer
    UnsignedInt(u64),
    /// 32-bit float
    Float(f32),
}

impl TypedValue {
    /// Get the attribute type this value belongs to, `None` for [`TypedValue::Empty`]
    pub fn value_type(&self) -> Option<AttributeType> {
        match self {
            Self::Empty => None,
            Self::Bytes(_) => Some(AttributeType::Buffer),
            Self::UnsignedInt(_) => Some(AttributeType::Integer),
            Self::Float(_) => Some(AttributeType::Float),
        }
    }

    /// Check whether nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Get the bytes, if this is a buffer
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Get the integer, if this is one
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UnsignedInt(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the float, if this is one
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<Vec<u8>> for TypedValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<u64> for TypedValue {
    fn from(value: u64) -> Self {
        Self::UnsignedInt(value)
    }
}

impl From<f32> for TypedValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("<empty>"),
            Self::Bytes(bytes) => {
                f.write_str("[")?;
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{byte:02X}")?;
                }
                f.write_str("]")
            }
            Self::UnsignedInt(value) => write!(f, "0x{value:X}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type() {
        assert_eq!(TypedValue::Empty.value_type(), None);
        assert_eq!(TypedValue::Bytes(vec![1]).value_type(), Some(AttributeType::Buffer));
        assert_eq!(TypedValue::UnsignedInt(1).value_type(), Some(AttributeType::Integer));
        assert_eq!(TypedValue::Float(1.0).value_type(), Some(AttributeType::Float));
    }

    #[test]
    fn test_accessors_do_not_coerce() {
        let value = TypedValue::UnsignedInt(7);
        assert_eq!(value.as_u64(), Some(7));
        assert_eq!(value.as_f32(), None);
        assert_eq!(value.as_bytes(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TypedValue::Bytes(vec![0xDE, 0xAD, 0x01]).to_string(), "[DE AD 01]");
        assert_eq!(TypedValue::Bytes(vec![]).to_string(), "[]");
        assert_eq!(TypedValue::UnsignedInt(0xBEEF).to_string(), "0xBEEF");
        assert_eq!(TypedValue::Float(1.5).to_string(), "1.5");
        assert_eq!(TypedValue::Empty.to_string(), "<empty>");
    }
}
