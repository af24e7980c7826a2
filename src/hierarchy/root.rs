use crate::graph::SiteGraph;
use crate::RenderError;

/// Selects the root page for a render pass
///
/// Scans pages in insertion order and picks the first URL whose lowercase
/// form contains "home"; otherwise the first-inserted page.
///
/// # Errors
///
/// Returns `RenderError::EmptyGraph` when the graph has no pages.
///
/// # Examples
///
/// ```
/// use site_mindmap::graph::{Page, SiteGraph};
/// use site_mindmap::hierarchy::select_root;
///
/// let mut graph = SiteGraph::new();
/// graph.add_page("https://x.test/", Page::new("https://x.test/", "Index"));
/// graph.add_page("https://x.test/Home.html", Page::new("https://x.test/Home.html", "Home"));
/// assert_eq!(select_root(&graph).unwrap(), "https://x.test/Home.html");
/// ```
pub fn select_root(graph: &SiteGraph) -> Result<&str, RenderError> {
    graph
        .pages
        .keys()
        .find(|url| url.to_lowercase().contains("home"))
        .or_else(|| graph.pages.keys().next())
        .map(String::as_str)
        .ok_or(RenderError::EmptyGraph)
}
