// SPDX-License-Identifier: MIT OR Apache-2.0
//! Registry mapping stable kind identifiers to node factories.

use crate::node::BoxedNode;
use crate::nodes::register_basic_nodes;
use crate::record::{LoadError, Record};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::LazyLock;

/// Factory producing a node with its default state
pub type NodeFactory = Box<dyn Fn() -> BoxedNode + Send + Sync>;

/// A registered node kind
pub struct NodeEntry {
    /// Stable kind identifier
    pub kind: String,
    /// Category label used to group kinds in menus
    pub category: String,
    /// Display name
    pub name: String,
    factory: NodeFactory,
}

impl NodeEntry {
    /// Create a fresh node of this kind
    pub fn create(&self) -> BoxedNode {
        (self.factory)()
    }
}

impl std::fmt::Debug for NodeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeEntry")
            .field("kind", &self.kind)
            .field("category", &self.category)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of available node kinds
#[derive(Debug)]
pub struct NodeRegistry {
    /// Registered kinds by identifier, in registration order
    entries: IndexMap<String, NodeEntry>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create a registry holding the built-in node kinds
    pub fn with_basic_nodes() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        register_basic_nodes(&mut registry)?;
        Ok(registry)
    }

    /// Register a node kind under a unique identifier
    pub fn register<F>(
        &mut self,
        kind: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn() -> BoxedNode + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.entries.contains_key(&kind) {
            return Err(RegistryError::DuplicateKind(kind));
        }

        let entry = NodeEntry {
            kind: kind.clone(),
            category: category.into(),
            name: name.into(),
            factory: Box::new(factory),
        };
        tracing::debug!(kind = %entry.kind, category = %entry.category, "Registered node kind");
        self.entries.insert(kind, entry);
        Ok(())
    }

    /// Get a registered kind by identifier
    pub fn get(&self, kind: &str) -> Option<&NodeEntry> {
        self.entries.get(kind)
    }

    /// Check if a kind is registered
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// Get all registered kinds
    pub fn entries(&self) -> impl Iterator<Item = &NodeEntry> {
        self.entries.values()
    }

    /// Get kinds by category label
    pub fn entries_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a NodeEntry> + 'a {
        self.entries.values().filter(move |e| e.category == category)
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Create a fresh node of the given kind
    pub fn create(&self, kind: &str) -> Result<BoxedNode, RegistryError> {
        self.get(kind)
            .map(NodeEntry::create)
            .ok_or_else(|| RegistryError::UnknownKind(kind.to_string()))
    }

    /// Create a node of the given kind and restore its state from `record`
    pub fn restore(&self, kind: &str, record: &Record) -> Result<BoxedNode, RegistryError> {
        let mut node = self.create(kind)?;
        node.deserialize(record)
            .map_err(|source| RegistryError::Load {
                kind: kind.to_string(),
                source,
            })?;
        Ok(node)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: LazyLock<RwLock<NodeRegistry>> = LazyLock::new(|| {
    let mut registry = NodeRegistry::new();
    if let Err(e) = register_basic_nodes(&mut registry) {
        tracing::error!("Failed to register built-in nodes: {e}");
    }
    RwLock::new(registry)
});

/// Process-wide registry, populated with the built-in nodes on first use
pub fn global_registry() -> &'static RwLock<NodeRegistry> {
    &GLOBAL_REGISTRY
}

/// Error from registry operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Kind identifier already registered
    #[error("Node kind already registered: {0}")]
    DuplicateKind(String),

    /// Kind identifier not registered
    #[error("Unknown node kind: {0}")]
    UnknownKind(String),

    /// Record rejected by the node
    #[error("Failed to load {kind}: {source}")]
    Load {
        /// Kind of the node being restored
        kind: String,
        /// Underlying record error
        #[source]
        source: LoadError,
    },
}
