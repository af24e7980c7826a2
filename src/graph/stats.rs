/// Summary counts for a site graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    /// Number of visited pages
    pub pages: usize,

    /// Total number of edges (links and actions)
    pub edges: usize,

    /// Edges with a navigation target
    pub links: usize,

    /// Standalone action edges
    pub actions: usize,

    /// Links whose source and target are the same page
    pub self_loops: usize,

    /// Distinct edge targets with no page entry
    pub dangling_targets: usize,

    /// Pages that failed to load
    pub errored_pages: usize,

    /// Pages with a screenshot
    pub screenshots: usize,
}
