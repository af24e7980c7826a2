//! Output module for rendering the site graph
//!
//! This module handles:
//! - The renderer interface shared by every output format
//! - Mermaid and PlantUML mind maps built from the hierarchy tree
//! - The interactive HTML graph built from the true graph topology
//! - Printing graph and crawl statistics

mod interactive;
mod mermaid;
mod plantuml;
pub mod stats;
mod traits;

pub use interactive::InteractiveRenderer;
pub use mermaid::MermaidRenderer;
pub use plantuml::PlantUmlRenderer;
pub use stats::{format_statistics, print_crawl_statistics, print_statistics};
pub use traits::Renderer;

use crate::config::RenderConfig;
use crate::graph::SiteGraph;
use crate::RenderError;
use std::fs;
use std::path::Path;

/// Renders a graph and writes the document to `path`
///
/// Parent directories are created as needed. Returns the number of bytes
/// written.
///
/// # Arguments
///
/// * `renderer` - The output format to produce
/// * `graph` - The site graph to render
/// * `config` - Edge budget and label widths
/// * `path` - Destination file
pub fn render_to_file(
    renderer: &dyn Renderer,
    graph: &SiteGraph,
    config: &RenderConfig,
    path: &Path,
) -> Result<usize, RenderError> {
    let document = renderer.render(graph, config)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document.as_bytes())?;

    tracing::info!(
        "Wrote {} output to {} ({} bytes)",
        renderer.name(),
        path.display(),
        document.len()
    );

    Ok(document.len())
}
