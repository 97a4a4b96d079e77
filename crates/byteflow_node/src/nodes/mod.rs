// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in node kinds.

pub mod constants;

pub use constants::{
    BufferNode, CommentNode, FloatNode, IntegerNode, NullptrNode, Rgba8Node, StringNode,
};

use crate::registry::{NodeRegistry, RegistryError};

/// Category label shared by the constant nodes
pub const CONSTANTS_CATEGORY: &str = "hex.builtin.nodes.constants";

/// Stable kind identifiers. These are persistence keys and must never change.
pub mod kinds {
    /// Constant integer
    pub const INTEGER: &str = "hex.builtin.nodes.constants.int";
    /// Constant float
    pub const FLOAT: &str = "hex.builtin.nodes.constants.float";
    /// Empty buffer
    pub const NULLPTR: &str = "hex.builtin.nodes.constants.nullptr";
    /// Sized byte buffer
    pub const BUFFER: &str = "hex.builtin.nodes.constants.buffer";
    /// Escaped byte string
    pub const STRING: &str = "hex.builtin.nodes.constants.string";
    /// RGBA8 color
    pub const RGBA8: &str = "hex.builtin.nodes.constants.rgba8";
    /// Annotation
    pub const COMMENT: &str = "hex.builtin.nodes.constants.comment";
}

/// Register the built-in constant nodes
pub fn register_basic_nodes(registry: &mut NodeRegistry) -> Result<(), RegistryError> {
    registry.register(kinds::INTEGER, CONSTANTS_CATEGORY, "Integer", || {
        Box::new(IntegerNode::new())
    })?;
    registry.register(kinds::FLOAT, CONSTANTS_CATEGORY, "Float", || {
        Box::new(FloatNode::new())
    })?;
    registry.register(kinds::NULLPTR, CONSTANTS_CATEGORY, "Nullptr", || {
        Box::new(NullptrNode::new())
    })?;
    registry.register(kinds::BUFFER, CONSTANTS_CATEGORY, "Buffer", || {
        Box::new(BufferNode::new())
    })?;
    registry.register(kinds::STRING, CONSTANTS_CATEGORY, "String", || {
        Box::new(StringNode::new())
    })?;
    registry.register(kinds::RGBA8, CONSTANTS_CATEGORY, "RGBA8 Color", || {
        Box::new(Rgba8Node::new())
    })?;
    registry.register(kinds::COMMENT, CONSTANTS_CATEGORY, "Comment", || {
        Box::new(CommentNode::new())
    })?;
    Ok(())
}
