// SPDX-License-Identifier: MIT OR Apache-2.0
//! Saved node sets.
//!
//! A saved graph stores, for every node, its instance ID, its kind
//! identifier and the record returned by `serialize`. Outputs are never
//! saved; they are recomputed by `process` after loading.

use crate::node::{BoxedNode, Node, NodeId};
use crate::record::{LoadError, Record};
use crate::registry::{NodeRegistry, RegistryError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current saved graph format version
pub const GRAPH_FORMAT_VERSION: u32 = 1;

/// On-disk encoding of a saved graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormat {
    /// JSON text
    #[default]
    Json,
    /// RON text
    Ron,
}

impl GraphFormat {
    /// Pick the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Self::Ron,
            _ => Self::Json,
        }
    }

    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ron => "ron",
        }
    }
}

/// A node as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedNode {
    /// Instance ID
    pub id: NodeId,
    /// Kind identifier, the registry key
    pub kind: String,
    /// Record produced by the node's `serialize`
    pub data: Record,
}

/// A set of saved nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGraph {
    /// Format version
    pub version: u32,
    /// Nodes in insertion order
    pub nodes: Vec<SavedNode>,
}

impl SavedGraph {
    /// Create an empty saved graph
    pub fn new() -> Self {
        Self {
            version: GRAPH_FORMAT_VERSION,
            nodes: Vec::new(),
        }
    }

    /// Capture the state of a list of nodes
    pub fn capture<'a>(nodes: impl IntoIterator<Item = (NodeId, &'a dyn Node)>) -> Self {
        let mut graph = Self::new();
        for (id, node) in nodes {
            graph.push(id, node);
        }
        graph
    }

    /// Append a node's current state
    pub fn push(&mut self, id: NodeId, node: &dyn Node) {
        self.nodes.push(SavedNode {
            id,
            kind: node.kind().to_string(),
            data: node.serialize(),
        });
    }

    /// Number of saved nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Recreate every node through the registry
    pub fn restore(&self, registry: &NodeRegistry) -> Result<Vec<(NodeId, BoxedNode)>, PersistError> {
        self.nodes
            .iter()
            .map(|saved| {
                registry
                    .restore(&saved.kind, &saved.data)
                    .map(|node| (saved.id, node))
                    .map_err(|e| {
                        tracing::warn!(node = %saved.id, kind = %saved.kind, "Rejected saved node: {e}");
                        PersistError::from_registry(saved.id, e)
                    })
            })
            .collect()
    }

    /// Encode as text
    pub fn encode(&self, format: GraphFormat) -> Result<String, PersistError> {
        let text = match format {
            GraphFormat::Json => serde_json::to_string_pretty(self)?,
            GraphFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?,
        };
        Ok(text)
    }

    /// Decode from text, rejecting unsupported versions
    pub fn decode(text: &str, format: GraphFormat) -> Result<Self, PersistError> {
        let graph: Self = match format {
            GraphFormat::Json => serde_json::from_str(text)?,
            GraphFormat::Ron => ron::from_str(text)?,
        };

        if graph.version > GRAPH_FORMAT_VERSION {
            return Err(PersistError::UnsupportedVersion {
                found: graph.version,
                supported: GRAPH_FORMAT_VERSION,
            });
        }
        Ok(graph)
    }

    /// Save to a file, format chosen by extension
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        let text = self.encode(GraphFormat::from_path(path))?;
        std::fs::write(path, text)?;
        tracing::info!("Saved {} nodes to {:?}", self.nodes.len(), path);
        Ok(())
    }

    /// Load from a file, format chosen by extension
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let text = std::fs::read_to_string(path)?;
        let graph = Self::decode(&text, GraphFormat::from_path(path))?;
        tracing::info!("Loaded {} nodes from {:?}", graph.nodes.len(), path);
        Ok(graph)
    }
}

impl Default for SavedGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Error saving or restoring a graph
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Saved with a newer format
    #[error("Unsupported graph format version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },

    /// Kind identifier not registered
    #[error("Node {node} has unknown kind '{kind}'")]
    UnknownKind {
        /// Offending node
        node: NodeId,
        /// Unregistered kind
        kind: String,
    },

    /// Node rejected its record
    #[error("Node {node} ({kind}): {source}")]
    Load {
        /// Offending node
        node: NodeId,
        /// Node kind
        kind: String,
        /// Record error naming the field
        #[source]
        source: LoadError,
    },

    /// Registry error not tied to a record
    #[error("Registry error: {0}")]
    Registry(RegistryError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// RON parse error
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// RON encode error
    #[error("RON encode error: {0}")]
    RonEncode(#[from] ron::Error),
}

impl PersistError {
    fn from_registry(node: NodeId, error: RegistryError) -> Self {
        match error {
            RegistryError::UnknownKind(kind) => Self::UnknownKind { node, kind },
            RegistryError::Load { kind, source } => Self::Load { node, kind, source },
            other => Self::Registry(other),
        }
    }
}
