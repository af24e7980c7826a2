//! Interactive HTML graph renderer
//!
//! Emits a standalone page that draws the graph with vis-network. Node and
//! edge lists, and the physics options, are embedded as JSON.

use crate::config::RenderConfig;
use crate::graph::SiteGraph;
use crate::hierarchy::{build_interactive_graph, select_root, GraphNode, NodeRole};
use crate::output::traits::Renderer;
use crate::RenderError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use std::fs;

const VIS_NETWORK_URL: &str = "https://unpkg.com/vis-network/standalone/umd/vis-network.min.js";

const ROOT_COLOR: &str = "#FFAA00";
const PAGE_COLOR: &str = "#4DA6FF";

/// Renders the interactive force-directed graph
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveRenderer;

impl Renderer for InteractiveRenderer {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn render(&self, graph: &SiteGraph, config: &RenderConfig) -> Result<String, RenderError> {
        let root = select_root(graph)?;
        let network = build_interactive_graph(graph, root, config.max_edges, config.title_width);

        let nodes: Vec<Value> = network.nodes.iter().map(node_json).collect();
        let edges: Vec<Value> = network
            .edges
            .iter()
            .map(|edge| {
                json!({
                    "from": edge.from,
                    "to": edge.to,
                    "title": edge.title,
                    "width": 1,
                    "arrows": "to",
                })
            })
            .collect();

        let page_title = network
            .nodes
            .first()
            .map(|node| node.label.as_str())
            .unwrap_or("Website");

        tracing::info!(
            "Interactive graph: {} nodes, {} edges",
            network.nodes.len(),
            network.edges.len()
        );

        Ok(format!(
            include_str!("interactive_template.html"),
            title = escape_html(page_title),
            vis_url = VIS_NETWORK_URL,
            nodes = script_json(&nodes)?,
            edges = script_json(&edges)?,
            options = script_json(&layout_options())?,
        ))
    }
}

fn node_json(node: &GraphNode) -> Value {
    let image = node.screenshot.as_deref().and_then(encode_image);

    let (shape, size, color) = match node.role {
        NodeRole::Root => ("star", 50, ROOT_COLOR),
        NodeRole::Page => ("dot", 30, PAGE_COLOR),
    };

    let mut value = json!({
        "id": node.id,
        "label": node.label,
        "title": node.title,
        "shape": shape,
        "size": size,
        "color": color,
    });

    if let Some(image) = image {
        value["shape"] = json!("image");
        value["image"] = json!(image);
    }

    value
}

/// Reads a PNG and returns it as a base64 data URL
///
/// Returns None when the file is missing or unreadable.
fn encode_image(path: &str) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(format!("data:image/png;base64,{}", STANDARD.encode(bytes))),
        Err(e) => {
            tracing::debug!("Screenshot {} not embedded: {}", path, e);
            None
        }
    }
}

/// Physics and styling options for the vis-network layout
fn layout_options() -> Value {
    json!({
        "nodes": { "font": { "size": 18, "color": "white" } },
        "edges": { "smooth": true, "color": { "inherit": true }, "width": 1 },
        "physics": {
            "enabled": true,
            "stabilization": { "enabled": true, "iterations": 2000, "updateInterval": 50 },
            "barnesHut": {
                "gravitationalConstant": -2000,
                "centralGravity": 0.2,
                "springLength": 500,
                "springConstant": 0.02,
                "damping": 0.25
            }
        }
    })
}

/// Serializes JSON for inclusion inside a `<script>` element
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
