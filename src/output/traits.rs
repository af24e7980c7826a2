//! Renderer trait

use crate::config::RenderConfig;
use crate::graph::SiteGraph;
use crate::RenderError;

/// Trait for output renderers
///
/// A renderer treats the graph as read-only and rebuilds its own traversal
/// state on every call, so renderers can run in any order over the same
/// graph.
pub trait Renderer {
    /// Short format name used in log messages
    fn name(&self) -> &'static str;

    /// Renders the whole document
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The rendered document
    /// * `Err(RenderError::EmptyGraph)` - The graph has no pages
    fn render(&self, graph: &SiteGraph, config: &RenderConfig) -> Result<String, RenderError>;
}
