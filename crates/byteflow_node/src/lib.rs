// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node contract for byteflow data processor graphs.
//!
//! This crate provides the pieces a graph engine needs to run and persist
//! individual nodes:
//! - Typed values and directional attributes
//! - The [`Node`] trait (process, serialize, deserialize, optional draw)
//! - Built-in constant nodes
//! - A registry keyed by stable kind identifiers
//! - Saved node sets in JSON or RON
//!
//! ## Architecture
//!
//! Graph topology, scheduling and the editor shell live in the host. Each
//! node owns its attributes and state; `process` touches nothing else.

pub mod value;
pub mod attribute;
pub mod record;
pub mod decode;
pub mod node;
pub mod nodes;
pub mod registry;
pub mod persist;
#[cfg(feature = "ui")]
pub mod ui;

pub use attribute::{
    Attribute, AttributeDirection, AttributeError, AttributeType, Attributes, SlotsMut,
};
pub use decode::{decode_byte_string, DecodeError};
pub use node::{BoxedNode, Node, NodeId};
pub use nodes::{kinds, register_basic_nodes, CONSTANTS_CATEGORY};
pub use persist::{GraphFormat, PersistError, SavedGraph, SavedNode, GRAPH_FORMAT_VERSION};
pub use record::{Fields, LoadError, Record};
pub use registry::{global_registry, NodeEntry, NodeRegistry, RegistryError};
pub use value::TypedValue;
