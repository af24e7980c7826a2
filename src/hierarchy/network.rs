use crate::graph::SiteGraph;
use crate::hierarchy::context::TraversalContext;
use crate::hierarchy::label::truncate_chars;
use crate::url::root_display_name;
use serde::Serialize;
use std::collections::VecDeque;

/// Role of a node in the interactive graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Root,
    Page,
}

/// A node of the interactive graph, identified by its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    /// Short label drawn on the node
    pub label: String,
    /// Full page title, shown on hover
    pub title: String,
    pub role: NodeRole,
    /// Screenshot path recorded for the page, if any
    pub screenshot: Option<String>,
}

/// A directed edge of the interactive graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    /// Link text, shown on hover
    pub title: String,
}

/// Node and edge lists for the interactive renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractiveGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub edges_used: usize,
}

/// Builds the interactive graph reachable from `root`
///
/// Nodes are discovered breadth-first. Each URL becomes exactly one node, but
/// every navigation edge is kept, including self-loops and edges into nodes
/// that were already added. Action edges have no target node and are skipped.
/// Each kept edge spends one unit of `max_edges`.
pub fn build_interactive_graph(
    graph: &SiteGraph,
    root: &str,
    max_edges: Option<usize>,
    title_width: usize,
) -> InteractiveGraph {
    let outgoing = graph.outgoing();
    let mut ctx = TraversalContext::new(max_edges);
    let mut result = InteractiveGraph::default();

    ctx.visit(root);
    result.nodes.push(GraphNode {
        id: root.to_string(),
        label: root_display_name(root),
        title: graph.title_of(root),
        role: NodeRole::Root,
        screenshot: screenshot_of(graph, root),
    });

    let mut queue = VecDeque::from([root]);

    'bfs: while let Some(parent) = queue.pop_front() {
        let edges = match outgoing.get(parent) {
            Some(edges) => edges,
            None => continue,
        };

        for edge in edges {
            if ctx.exhausted() {
                break 'bfs;
            }

            let target = match edge.target.as_deref() {
                Some(target) => target,
                None => continue,
            };

            ctx.check_dangling(graph, parent, target);

            if ctx.visit(target) {
                let title = graph.title_of(target);
                tracing::trace!("Adding node {} ({})", target, title);
                result.nodes.push(GraphNode {
                    id: target.to_string(),
                    label: truncate_chars(&title, title_width),
                    title,
                    role: NodeRole::Page,
                    screenshot: screenshot_of(graph, target),
                });
                queue.push_back(target);
            }

            result.edges.push(GraphEdge {
                from: parent.to_string(),
                to: target.to_string(),
                title: edge.text.clone(),
            });
            ctx.spend_edge();
        }
    }

    result.edges_used = ctx.edges_used();
    tracing::debug!(
        "Built interactive graph from {}: {} nodes, {} edges",
        root,
        result.nodes.len(),
        result.edges.len()
    );

    result
}

fn screenshot_of(graph: &SiteGraph, url: &str) -> Option<String> {
    graph.page(url).and_then(|page| page.screenshot.clone())
}
