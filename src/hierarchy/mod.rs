//! Hierarchy module: turns the site graph into renderable structures
//!
//! This module contains:
//! - Root selection for a render pass
//! - Label composition, quote normalization and truncation
//! - The tree builder shared by the Mermaid and PlantUML renderers
//! - The interactive graph builder, which keeps true graph topology
//!
//! Every build owns its traversal state (visited set and edge counter), so
//! any number of builds may run over the same graph independently.

mod context;
mod label;
mod network;
mod root;
mod tree;

pub use label::{clean_label, format_label, truncate_chars, ELLIPSIS};
pub use network::{build_interactive_graph, GraphEdge, GraphNode, InteractiveGraph, NodeRole};
pub use root::select_root;
pub use tree::{build_tree, NodeKind, Tree, TreeNode};
