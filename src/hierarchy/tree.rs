use crate::graph::{Edge, SiteGraph};
use crate::hierarchy::context::TraversalContext;
use crate::hierarchy::label::{clean_label, format_label};
use crate::url::root_display_name;
use std::collections::HashMap;

/// Kind of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Reached through a navigation edge
    Page,
    /// A standalone action ("Button: ...") leaf
    Action,
}

/// A node of the rendered hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub kind: NodeKind,
    /// Target URL for page nodes
    pub url: Option<String>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn page(label: String, url: &str, children: Vec<TreeNode>) -> Self {
        Self {
            label,
            kind: NodeKind::Page,
            url: Some(url.to_string()),
            children,
        }
    }

    fn action(label: String) -> Self {
        Self {
            label,
            kind: NodeKind::Action,
            url: None,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this node
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

/// Acyclic, rooted view of a site graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub root_url: String,
    /// Host of the root URL, used as the mind map's central node
    pub root_name: String,
    pub root_title: String,
    pub children: Vec<TreeNode>,
    /// Edges materialized into the tree (one per non-root node)
    pub edges_used: usize,
}

impl Tree {
    /// Number of nodes below the root
    pub fn node_count(&self) -> usize {
        self.children.iter().map(TreeNode::size).sum()
    }

    /// Visits every node depth-first, pre-order, with its depth (1 = root child)
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(usize, &TreeNode),
    {
        fn walk_nodes<F: FnMut(usize, &TreeNode)>(nodes: &[TreeNode], depth: usize, visit: &mut F) {
            for node in nodes {
                visit(depth, node);
                walk_nodes(&node.children, depth + 1, visit);
            }
        }
        walk_nodes(&self.children, 1, &mut visit);
    }
}

/// Builds the hierarchy tree rooted at `root`
///
/// Traversal is depth-first over each page's edges in edge-list order:
/// - Self-loops are skipped
/// - A page is expanded at most once anywhere in the tree; later edges into
///   it produce a leaf
/// - Action edges produce "Button: <text>" leaves
/// - Every produced node spends one unit of `max_edges`; once spent, no more
///   nodes are produced and the partial tree is returned
///
/// # Examples
///
/// ```
/// use site_mindmap::graph::{Page, SiteGraph};
/// use site_mindmap::hierarchy::build_tree;
///
/// let mut graph = SiteGraph::new();
/// graph.add_page("a", Page::new("a", "Home"));
/// graph.add_page("b", Page::new("b", "About"));
/// graph.add_link("a", "b", "About");
/// graph.add_link("b", "a", "Home");
///
/// let tree = build_tree(&graph, "a", None, 60);
/// assert_eq!(tree.children[0].label, "About → About");
/// assert_eq!(tree.children[0].children[0].label, "Home → Home");
/// assert!(tree.children[0].children[0].children.is_empty());
/// ```
pub fn build_tree(graph: &SiteGraph, root: &str, max_edges: Option<usize>, label_width: usize) -> Tree {
    let outgoing = graph.outgoing();
    let mut ctx = TraversalContext::new(max_edges);
    ctx.visit(root);

    let children = expand(graph, &outgoing, root, &mut ctx, label_width);

    tracing::debug!(
        "Built tree from {} with {} edges (limit {:?})",
        root,
        ctx.edges_used(),
        max_edges
    );

    Tree {
        root_url: root.to_string(),
        root_name: root_display_name(root),
        root_title: graph.title_of(root),
        children,
        edges_used: ctx.edges_used(),
    }
}

fn expand<'g>(
    graph: &'g SiteGraph,
    outgoing: &HashMap<&'g str, Vec<&'g Edge>>,
    parent: &str,
    ctx: &mut TraversalContext<'g>,
    label_width: usize,
) -> Vec<TreeNode> {
    let mut nodes = Vec::new();
    let edges = match outgoing.get(parent) {
        Some(edges) => edges,
        None => return nodes,
    };

    for edge in edges {
        if ctx.exhausted() {
            break;
        }

        match edge.target.as_deref() {
            None => {
                let label = clean_label(&format!("Button: {}", edge.text.trim()), label_width);
                nodes.push(TreeNode::action(label));
                ctx.spend_edge();
            }
            Some(target) if target == parent => continue,
            Some(target) => {
                ctx.check_dangling(graph, parent, target);
                let label = format_label(&edge.text, &graph.title_of(target), label_width);
                ctx.spend_edge();

                let children = if ctx.visit(target) {
                    expand(graph, outgoing, target, ctx, label_width)
                } else {
                    Vec::new()
                };
                nodes.push(TreeNode::page(label, target, children));
            }
        }
    }

    nodes
}
