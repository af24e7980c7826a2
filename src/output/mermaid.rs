//! Mermaid mind map renderer
//!
//! Produces a fenced Markdown block:
//!
//! ````text
//! ```mermaid
//! mindmap
//!   root((example.com))
//!     "About → About"
//!       "Home → Home"
//! ```
//! ````

use crate::config::RenderConfig;
use crate::graph::SiteGraph;
use crate::hierarchy::{build_tree, select_root};
use crate::output::traits::Renderer;
use crate::RenderError;

/// Renders the hierarchy tree as a Mermaid `mindmap`
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidRenderer;

impl Renderer for MermaidRenderer {
    fn name(&self) -> &'static str {
        "mermaid"
    }

    fn render(&self, graph: &SiteGraph, config: &RenderConfig) -> Result<String, RenderError> {
        let root = select_root(graph)?;
        let tree = build_tree(graph, root, config.max_edges, config.label_width);

        let mut out = String::new();
        out.push_str("```mermaid\n");
        out.push_str("mindmap\n");
        out.push_str(&format!("  root(({}))\n", tree.root_name));

        // Depth 1 sits at four spaces, each level adds two
        tree.walk(|depth, node| {
            let indent = 4 + (depth - 1) * 2;
            out.push_str(&format!("{}\"{}\"\n", " ".repeat(indent), node.label));
        });

        out.push_str("```\n");

        tracing::debug!("Mermaid mind map has {} nodes", tree.node_count());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Page;

    fn home_about_contact() -> SiteGraph {
        let mut graph = SiteGraph::new();
        for (url, title) in [
            ("https://site.test/home", "Home"),
            ("https://site.test/about", "About"),
            ("https://site.test/contact", "Contact"),
        ] {
            graph.add_page(url, Page::new(url, title));
        }
        graph.add_link("https://site.test/home", "https://site.test/about", "About");
        graph.add_link("https://site.test/home", "https://site.test/contact", "Contact");
        graph.add_link("https://site.test/about", "https://site.test/home", "Home");
        graph
    }

    #[test]
    fn test_render_mindmap() {
        let out = MermaidRenderer
            .render(&home_about_contact(), &RenderConfig::default())
            .unwrap();

        let expected = "```mermaid\n\
                        mindmap\n  \
                        root((site.test))\n    \
                        \"About → About\"\n      \
                        \"Home → Home\"\n    \
                        \"Contact → Contact\"\n\
                        ```\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_includes_buttons() {
        let mut graph = home_about_contact();
        graph.add_action("https://site.test/home", "Sign \"up\"");

        let out = MermaidRenderer.render(&graph, &RenderConfig::default()).unwrap();
        assert!(out.contains("    \"Button: Sign 'up'\"\n"));
    }

    #[test]
    fn test_render_respects_edge_budget() {
        let config = RenderConfig {
            max_edges: Some(1),
            ..RenderConfig::default()
        };
        let out = MermaidRenderer.render(&home_about_contact(), &config).unwrap();
        assert!(out.contains("\"About → About\""));
        assert!(!out.contains("Contact"));
        assert!(!out.contains("Home → Home"));
    }

    #[test]
    fn test_multiline_title_stays_on_one_line() {
        let mut graph = SiteGraph::new();
        graph.add_page("https://site.test/home", Page::new("https://site.test/home", "Home"));
        graph.add_page(
            "https://site.test/shop",
            Page::new("https://site.test/shop", "All products\n | Books"),
        );
        graph.add_link("https://site.test/home", "https://site.test/shop", "Shop");

        let out = MermaidRenderer.render(&graph, &RenderConfig::default()).unwrap();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("    \"Shop → All products | Books\"\n"));
    }

    #[test]
    fn test_render_empty_graph() {
        let result = MermaidRenderer.render(&SiteGraph::new(), &RenderConfig::default());
        assert!(matches!(result, Err(RenderError::EmptyGraph)));
    }
}
