// SPDX-License-Identifier: MIT OR Apache-2.0
//! Command parsing and execution.

use byteflow_node::nodes::{
    BufferNode, CommentNode, FloatNode, IntegerNode, NullptrNode, Rgba8Node, StringNode,
};
use byteflow_node::{global_registry, Node, NodeId, NodeRegistry, PersistError, SavedGraph};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command line of the `byteflow` binary
#[derive(Debug, Parser)]
#[clap(name = "byteflow", version)]
#[command(about = "Run saved byteflow node sets without the editor")]
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// A parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print registered node kinds
    List,
    /// Write a sample node set (`.json` or `.ron`)
    Init {
        /// Output file
        file: PathBuf,
    },
    /// Restore, process and print a node set
    Run {
        /// Saved node set
        file: PathBuf,
    },
}

/// Error running a command
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Saving or restoring failed
    #[error(transparent)]
    Persist(#[from] PersistError),

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Execute a command against the process-wide registry, printing to stdout
pub fn execute(command: Command) -> Result<(), RunError> {
    let registry = global_registry().read();
    let stdout = std::io::stdout();
    execute_with(&command, &registry, &mut stdout.lock())
}

/// Execute a command with an explicit registry and output sink
pub fn execute_with(
    command: &Command,
    registry: &NodeRegistry,
    out: &mut impl Write,
) -> Result<(), RunError> {
    match command {
        Command::List => list(registry, out),
        Command::Init { file } => init(file),
        Command::Run { file } => run(file, registry, out),
    }
}

fn list(registry: &NodeRegistry, out: &mut impl Write) -> Result<(), RunError> {
    for entry in registry.entries() {
        writeln!(out, "{:<40} {:<14} {}", entry.kind, entry.name, entry.category)?;
    }
    Ok(())
}

fn init(path: &Path) -> Result<(), RunError> {
    sample_graph().save(path)?;
    Ok(())
}

fn run(path: &Path, registry: &NodeRegistry, out: &mut impl Write) -> Result<(), RunError> {
    let graph = SavedGraph::load(path)?;
    for (id, mut node) in graph.restore(registry)? {
        node.process();
        write_outputs(out, id, node.as_ref())?;
    }
    Ok(())
}

fn write_outputs(out: &mut impl Write, id: NodeId, node: &dyn Node) -> std::io::Result<()> {
    writeln!(out, "{id} {}", node.kind())?;
    for (index, attribute) in node.attributes().outputs() {
        writeln!(out, "  [{index}] {}: {}", attribute.name(), attribute.value())?;
    }
    Ok(())
}

/// One node of every built-in kind, with non-default state
pub fn sample_graph() -> SavedGraph {
    let mut buffer = BufferNode::new();
    buffer.set_size(4);
    buffer.set_buffer(vec![0x7F, b'E', b'L', b'F']);

    let mut string = StringNode::new();
    string.set_value("PK\\x03\\x04");

    let mut integer = IntegerNode::new();
    integer.set_value(0x1000);

    let mut float = FloatNode::new();
    float.set_value(1.5);

    let mut color = Rgba8Node::new();
    color.set_color([1.0, 0.5, 0.0, 1.0]);

    let mut comment = CommentNode::new();
    comment.set_comment("Sample constants");

    let nullptr = NullptrNode::new();
    let nodes: [&dyn Node; 7] = [&nullptr, &buffer, &string, &integer, &float, &color, &comment];
    SavedGraph::capture(nodes.into_iter().map(|node| (NodeId::new(), node)))
}
