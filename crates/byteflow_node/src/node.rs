// SPDX-License-Identifier: MIT OR Apache-2.0
//! The node contract shared by every data processor node.

use crate::attribute::{AttributeError, Attributes, SlotsMut};
use crate::value::TypedValue;
use crate::record::{empty_record, LoadError, Record};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a node instance in a saved graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A unit of computation with typed attributes.
///
/// Implementors fix their attribute list in their constructor and never
/// change its length or per-slot type afterwards. `process` only touches
/// the node's own attributes and state, so distinct nodes can be processed
/// from different threads.
pub trait Node: Send + Sync {
    /// Stable kind identifier, used as the registry and persistence key
    fn kind(&self) -> &'static str;

    /// Attributes in socket order
    fn attributes(&self) -> &Attributes;

    /// Value-only mutable access to the attributes, for feeding inputs
    fn slots_mut(&mut self) -> SlotsMut<'_>;

    /// Feed a value into the input attribute at `index`
    fn set_input(&mut self, index: usize, value: TypedValue) -> Result<(), AttributeError> {
        self.slots_mut().set_input(index, value)
    }

    /// Compute outputs from the current internal state and inputs.
    ///
    /// Must be deterministic and must not block.
    fn process(&mut self);

    /// Capture the internal state needed to rebuild this node.
    ///
    /// Computed outputs are never included.
    fn serialize(&self) -> Record {
        empty_record()
    }

    /// Restore internal state from a record produced by [`Node::serialize`].
    ///
    /// On error the previous state is left as it was.
    fn deserialize(&mut self, _record: &Record) -> Result<(), LoadError> {
        Ok(())
    }

    /// Render editable widgets for the internal state
    #[cfg(feature = "ui")]
    fn draw(&mut self, _ui: &mut egui::Ui) {}
}

/// Boxed node, as created by the registry
pub type BoxedNode = Box<dyn Node>;

impl fmt::Debug for dyn Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind())
            .field("attributes", &self.attributes().len())
            .finish()
    }
}
