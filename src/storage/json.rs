//! JSON graph file
//!
//! The file holds one object with a `pages` map (URL to page record) and an
//! `edges` list. Page records may also be bare title strings, as written by
//! older crawls.

use crate::graph::SiteGraph;
use crate::storage::traits::{GraphStore, StorageError, StorageResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Site graph stored as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GraphStore for JsonStore {
    fn save(&mut self, graph: &SiteGraph) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(graph)?;
        fs::write(&self.path, json)?;

        tracing::info!(
            "Saved site graph to {} ({} pages, {} edges)",
            self.path.display(),
            graph.pages.len(),
            graph.edges.len()
        );
        Ok(())
    }

    fn load(&self) -> StorageResult<SiteGraph> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StorageError::NotFound),
            Err(e) => return Err(e.into()),
        };

        let graph: SiteGraph = serde_json::from_str(&content)?;
        tracing::debug!(
            "Loaded site graph from {} ({} pages, {} edges)",
            self.path.display(),
            graph.pages.len(),
            graph.edges.len()
        );
        Ok(graph)
    }
}
