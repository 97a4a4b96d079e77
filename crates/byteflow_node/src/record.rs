// SPDX-License-Identifier: MIT OR Apache-2.0
//! Structured records produced by `serialize` and consumed by `deserialize`.
//!
//! Records are plain JSON values. [`Fields`] gives strict, typed access to
//! the keys of an object record: a key that is absent is reported as
//! [`LoadError::MissingField`], a key holding the wrong kind of value as
//! [`LoadError::FieldTypeMismatch`]. Nothing is coerced.

use serde_json::{Map, Value};

/// Self-describing record capturing a node's internal state
pub type Record = Value;

/// Create an empty object record
pub fn empty_record() -> Record {
    Value::Object(Map::new())
}

/// Error when a record does not have the shape a node expects
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// Required key is absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Key is present but holds the wrong kind of value
    #[error("Field '{field}' must be {expected}")]
    FieldTypeMismatch {
        /// Path of the offending field
        field: String,
        /// Description of the expected value
        expected: &'static str,
    },
}

impl LoadError {
    /// Path of the field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) | Self::FieldTypeMismatch { field, .. } => field,
        }
    }
}

/// Typed view over the keys of an object record
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> Fields<'a> {
    /// View the top level of a record, which must be an object
    pub fn new(record: &'a Record) -> Result<Self, LoadError> {
        match record {
            Value::Object(map) => Ok(Self {
                map,
                path: String::new(),
            }),
            _ => Err(LoadError::FieldTypeMismatch {
                field: "<record>".to_string(),
                expected: "an object",
            }),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn mismatch(&self, key: &str, expected: &'static str) -> LoadError {
        LoadError::FieldTypeMismatch {
            field: self.path(key),
            expected,
        }
    }

    /// Raw value of a required key
    pub fn get(&self, key: &str) -> Result<&'a Value, LoadError> {
        self.map
            .get(key)
            .ok_or_else(|| LoadError::MissingField(self.path(key)))
    }

    /// Nested object under `key`
    pub fn object(&self, key: &str) -> Result<Fields<'a>, LoadError> {
        match self.get(key)? {
            Value::Object(map) => Ok(Fields {
                map,
                path: self.path(key),
            }),
            _ => Err(self.mismatch(key, "an object")),
        }
    }

    /// Unsigned 64-bit integer under `key`
    pub fn u64(&self, key: &str) -> Result<u64, LoadError> {
        self.get(key)?
            .as_u64()
            .ok_or_else(|| self.mismatch(key, "an unsigned integer"))
    }

    /// Unsigned 32-bit integer under `key`
    pub fn u32(&self, key: &str) -> Result<u32, LoadError> {
        self.get(key)?
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| self.mismatch(key, "an unsigned 32-bit integer"))
    }

    /// 32-bit float under `key`; any JSON number that fits a finite f32
    pub fn f32(&self, key: &str) -> Result<f32, LoadError> {
        self.get(key)?
            .as_f64()
            .map(|v| v as f32)
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.mismatch(key, "a finite 32-bit float"))
    }

    /// String under `key`
    pub fn string(&self, key: &str) -> Result<&'a str, LoadError> {
        self.get(key)?
            .as_str()
            .ok_or_else(|| self.mismatch(key, "a string"))
    }

    /// Byte array under `key`, stored as an array of integers in `0..=255`
    pub fn bytes(&self, key: &str) -> Result<Vec<u8>, LoadError> {
        let array = self
            .get(key)?
            .as_array()
            .ok_or_else(|| self.mismatch(key, "an array of bytes"))?;

        array
            .iter()
            .map(|v| v.as_u64().and_then(|b| u8::try_from(b).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| self.mismatch(key, "an array of bytes"))
    }
}
