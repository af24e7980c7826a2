//! PlantUML mind map renderer
//!
//! Depth is encoded by the number of leading `*` markers. Page nodes carry
//! the target's URL path, and a `[[<screenshot>]]` link when the screenshot
//! file exists on disk.

use crate::config::RenderConfig;
use crate::graph::SiteGraph;
use crate::hierarchy::{build_tree, select_root, NodeKind, TreeNode};
use crate::output::traits::Renderer;
use crate::RenderError;
use std::path::Path;
use url::Url;

/// Renders the hierarchy tree as a PlantUML `@startmindmap` document
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantUmlRenderer;

impl Renderer for PlantUmlRenderer {
    fn name(&self) -> &'static str {
        "plantuml"
    }

    fn render(&self, graph: &SiteGraph, config: &RenderConfig) -> Result<String, RenderError> {
        let root = select_root(graph)?;
        let tree = build_tree(graph, root, config.max_edges, config.label_width);

        let mut out = String::new();
        out.push_str("@startmindmap\n");
        out.push_str(&format!("* {}\n", tree.root_name));

        tree.walk(|depth, node| {
            out.push_str(&"*".repeat(depth + 1));
            out.push(' ');
            out.push_str(&node_text(graph, node));
            out.push('\n');
        });

        out.push_str("@endmindmap\n");
        Ok(out)
    }
}

fn node_text(graph: &SiteGraph, node: &TreeNode) -> String {
    let url = match (node.kind, node.url.as_deref()) {
        (NodeKind::Page, Some(url)) => url,
        _ => return node.label.clone(),
    };

    let mut text = node.label.clone();

    if let Ok(parsed) = Url::parse(url) {
        let path = match parsed.path() {
            "" => "/",
            path => path,
        };
        text.push_str(&format!(" ({})", path));
    }

    let screenshot = graph
        .page(url)
        .and_then(|page| page.screenshot.as_deref())
        .filter(|path| Path::new(path).exists());
    if let Some(screenshot) = screenshot {
        text.push_str(&format!(" [[{}]]", screenshot));
    }

    text
}
