use crate::graph::SiteGraph;
use std::collections::HashSet;

/// Traversal state owned by a single build call
///
/// The visited set and the edge counter are global to the whole traversal,
/// not per branch.
pub(crate) struct TraversalContext<'g> {
    visited: HashSet<&'g str>,
    dangling_reported: HashSet<&'g str>,
    edges_used: usize,
    max_edges: Option<usize>,
}

impl<'g> TraversalContext<'g> {
    pub(crate) fn new(max_edges: Option<usize>) -> Self {
        Self {
            visited: HashSet::new(),
            dangling_reported: HashSet::new(),
            edges_used: 0,
            max_edges,
        }
    }

    /// Marks a URL visited; returns true the first time
    pub(crate) fn visit(&mut self, url: &'g str) -> bool {
        self.visited.insert(url)
    }

    /// Returns true once the edge budget is spent
    pub(crate) fn exhausted(&self) -> bool {
        matches!(self.max_edges, Some(max) if self.edges_used >= max)
    }

    pub(crate) fn spend_edge(&mut self) {
        self.edges_used += 1;
    }

    pub(crate) fn edges_used(&self) -> usize {
        self.edges_used
    }

    /// Logs a dangling target once per traversal
    pub(crate) fn check_dangling(&mut self, graph: &SiteGraph, source: &str, target: &'g str) {
        if graph.page(target).is_none() && self.dangling_reported.insert(target) {
            tracing::warn!(
                "Edge target {} (from {}) has no page entry, rendering it as a leaf",
                target,
                source
            );
        }
    }
}
