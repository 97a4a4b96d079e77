// SPDX-License-Identifier: MIT OR Apache-2.0
//! Attribute (socket) definitions for node inputs/outputs.
//!
//! A node's attribute list is fixed at construction. Index order is the
//! socket address used by the graph engine and by saved graphs, so only the
//! values held in the slots ever change.

use crate::value::TypedValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeDirection {
    /// Input attribute
    Input,
    /// Output attribute
    Output,
}

/// Data type an attribute carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    /// Byte sequence
    Buffer,
    /// Unsigned 64-bit integer
    Integer,
    /// 32-bit float
    Float,
}

impl AttributeType {
    /// Get the color for this attribute type (for UI)
    pub fn color(&self) -> [u8; 3] {
        match self {
            Self::Buffer => [200, 180, 150],
            Self::Integer => [80, 200, 200],
            Self::Float => [80, 200, 80],
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer => f.write_str("buffer"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
        }
    }
}

/// A single typed socket on a node
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    direction: AttributeDirection,
    ty: AttributeType,
    name: String,
    value: TypedValue,
}

impl Attribute {
    /// Create a new attribute with an empty value
    pub fn new(direction: AttributeDirection, ty: AttributeType, name: impl Into<String>) -> Self {
        Self {
            direction,
            ty,
            name: name.into(),
            value: TypedValue::Empty,
        }
    }

    /// Create a new input attribute
    pub fn input(ty: AttributeType, name: impl Into<String>) -> Self {
        Self::new(AttributeDirection::Input, ty, name)
    }

    /// Create a new output attribute
    pub fn output(ty: AttributeType, name: impl Into<String>) -> Self {
        Self::new(AttributeDirection::Output, ty, name)
    }

    /// Attribute direction
    pub fn direction(&self) -> AttributeDirection {
        self.direction
    }

    /// Declared data type
    pub fn ty(&self) -> AttributeType {
        self.ty
    }

    /// Display name, for labeling only
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value currently held in the slot
    pub fn value(&self) -> &TypedValue {
        &self.value
    }
}

/// Error raised when writing into an attribute slot breaks its declaration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// No attribute at this index
    #[error("Attribute index {index} out of range (node has {len} attributes)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of attributes on the node
        len: usize,
    },

    /// Attribute exists but points the other way
    #[error("Attribute {index} is an {actual:?} attribute, expected {expected:?}")]
    DirectionMismatch {
        /// Attribute index
        index: usize,
        /// Direction the write required
        expected: AttributeDirection,
        /// Direction the attribute was declared with
        actual: AttributeDirection,
    },

    /// Value tag does not match the declared type
    #[error("Attribute {index} carries {expected} values, got {actual}")]
    TypeMismatch {
        /// Attribute index
        index: usize,
        /// Declared attribute type
        expected: AttributeType,
        /// Type of the rejected value, or "empty"
        actual: String,
    },
}

/// Ordered attribute list owned by a node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    slots: Vec<Attribute>,
}

impl Attributes {
    /// Create from a fixed list of attributes
    pub fn new(slots: Vec<Attribute>) -> Self {
        Self { slots }
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the node has no attributes
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Get an attribute by index
    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.slots.get(index)
    }

    /// Iterate attributes in socket order
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.slots.iter()
    }

    /// Iterate output attributes together with their socket index
    pub fn outputs(&self) -> impl Iterator<Item = (usize, &Attribute)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, a)| a.direction == AttributeDirection::Output)
    }

    /// Iterate input attributes together with their socket index
    pub fn inputs(&self) -> impl Iterator<Item = (usize, &Attribute)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, a)| a.direction == AttributeDirection::Input)
    }

    /// Value held by the attribute at `index`
    pub fn value(&self, index: usize) -> Option<&TypedValue> {
        self.slots.get(index).map(Attribute::value)
    }

    /// Store `value` into the output attribute at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range, the attribute is not an output,
    /// or the value does not match the declared type. These are bugs in the
    /// calling node, not runtime conditions.
    #[track_caller]
    pub fn set_on_output(&mut self, index: usize, value: impl Into<TypedValue>) {
        if let Err(e) = self.try_set_on_output(index, value) {
            panic!("{e}");
        }
    }

    /// Checked version of [`Attributes::set_on_output`]
    pub fn try_set_on_output(
        &mut self,
        index: usize,
        value: impl Into<TypedValue>,
    ) -> Result<(), AttributeError> {
        self.store(index, AttributeDirection::Output, value.into())
    }

    /// Feed a value into the input attribute at `index`.
    ///
    /// Used by the host engine before calling `process`.
    pub fn set_input(
        &mut self,
        index: usize,
        value: impl Into<TypedValue>,
    ) -> Result<(), AttributeError> {
        self.store(index, AttributeDirection::Input, value.into())
    }

    fn store(
        &mut self,
        index: usize,
        direction: AttributeDirection,
        value: TypedValue,
    ) -> Result<(), AttributeError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(AttributeError::IndexOutOfRange { index, len })?;

        if slot.direction != direction {
            return Err(AttributeError::DirectionMismatch {
                index,
                expected: direction,
                actual: slot.direction,
            });
        }

        if value.value_type() != Some(slot.ty) {
            return Err(AttributeError::TypeMismatch {
                index,
                expected: slot.ty,
                actual: value
                    .value_type()
                    .map_or_else(|| "empty".to_string(), |t| t.to_string()),
            });
        }

        slot.value = value;
        Ok(())
    }
}

/// Mutable handle to a node's attributes that can only change slot values.
///
/// Handed out by [`crate::Node::slots_mut`] so hosts can feed inputs
/// without being able to replace or resize the attribute list.
#[derive(Debug)]
pub struct SlotsMut<'a> {
    attributes: &'a mut Attributes,
}

impl<'a> SlotsMut<'a> {
    /// Wrap a node's attribute list
    pub fn new(attributes: &'a mut Attributes) -> Self {
        Self { attributes }
    }

    /// Feed a value into the input attribute at `index`
    pub fn set_input(
        &mut self,
        index: usize,
        value: impl Into<TypedValue>,
    ) -> Result<(), AttributeError> {
        self.attributes.set_input(index, value)
    }
}

impl std::ops::Deref for SlotsMut<'_> {
    type Target = Attributes;

    fn deref(&self) -> &Attributes {
        self.attributes
    }
}
