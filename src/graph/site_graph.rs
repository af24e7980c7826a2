use crate::graph::model::{Edge, Page};
use crate::graph::stats::GraphStats;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The directed multigraph produced by one crawl
///
/// Pages keep their insertion (visit) order, which root selection relies on.
/// Every edge source is a visited page; an edge target may name a URL that
/// was discovered but never visited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteGraph {
    #[serde(default)]
    pub pages: IndexMap<String, Page>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl SiteGraph {
    /// Creates an empty site graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the graph has no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Records a visited page
    ///
    /// Pages are never replaced once created; returns false if the URL was
    /// already present.
    pub fn add_page(&mut self, url: &str, page: Page) -> bool {
        if self.pages.contains_key(url) {
            return false;
        }
        self.pages.insert(url.to_string(), page);
        true
    }

    /// Attaches a screenshot path to an existing page
    ///
    /// Returns false if the page is unknown or already has a screenshot.
    pub fn attach_screenshot(&mut self, url: &str, path: &str) -> bool {
        match self.pages.get_mut(url) {
            Some(page) if page.screenshot.is_none() => {
                page.screenshot = Some(path.to_string());
                true
            }
            _ => false,
        }
    }

    /// Records that a URL failed to load
    ///
    /// An unknown URL gets a page titled by the URL itself; an existing page
    /// keeps its title and gains the error.
    pub fn mark_error(&mut self, url: &str, error: &str) {
        match self.pages.get_mut(url) {
            Some(page) => page.error = Some(error.to_string()),
            None => {
                self.pages.insert(url.to_string(), Page::failed(url, error));
            }
        }
    }

    /// Appends a navigation edge
    pub fn add_link(&mut self, source: &str, target: &str, text: &str) {
        self.edges.push(Edge::link(source, target, text));
    }

    /// Appends a standalone action edge
    pub fn add_action(&mut self, source: &str, text: &str) {
        self.edges.push(Edge::action(source, text));
    }

    /// Gets a page by URL
    pub fn page(&self, url: &str) -> Option<&Page> {
        self.pages.get(url)
    }

    /// Returns the display title of a URL
    ///
    /// Falls back to the URL itself when the page is unknown (a dangling
    /// target) or its title is blank.
    pub fn title_of(&self, url: &str) -> String {
        match self.pages.get(url) {
            Some(page) if !page.title.trim().is_empty() => page.title.trim().to_string(),
            _ => url.to_string(),
        }
    }

    /// Groups edges by source, preserving edge-list order within each group
    pub fn outgoing(&self) -> HashMap<&str, Vec<&Edge>> {
        let mut map: HashMap<&str, Vec<&Edge>> = HashMap::new();
        for edge in &self.edges {
            map.entry(edge.source.as_str()).or_default().push(edge);
        }
        map
    }

    /// Returns edge targets that have no page entry, in first-seen order
    pub fn dangling_targets(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .filter_map(|edge| edge.target.as_deref())
            .filter(|target| !self.pages.contains_key(*target))
            .filter(|target| seen.insert(*target))
            .collect()
    }

    /// Computes summary counts for the graph
    pub fn stats(&self) -> GraphStats {
        let actions = self.edges.iter().filter(|e| e.is_action()).count();
        GraphStats {
            pages: self.pages.len(),
            edges: self.edges.len(),
            links: self.edges.len() - actions,
            actions,
            self_loops: self.edges.iter().filter(|e| e.is_self_loop()).count(),
            dangling_targets: self.dangling_targets().len(),
            errored_pages: self.pages.values().filter(|p| p.is_error()).count(),
            screenshots: self
                .pages
                .values()
                .filter(|p| p.screenshot.is_some())
                .count(),
        }
    }
}
