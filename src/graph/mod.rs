//! Site graph module
//!
//! The site graph is the hand-off artifact between crawling and rendering:
//! an insertion-ordered mapping of URL to [`Page`] and an append-only list of
//! [`Edge`]s. Edges are a multigraph: duplicates are kept as-is.
//!
//! # Components
//!
//! - `Page`: a visited page (title, optional screenshot, optional error)
//! - `Edge`: a navigation link or a standalone action (no target)
//! - `SiteGraph`: the pages and edges of one crawl
//! - `GraphStats`: counts used for logging and the `--stats` report

mod model;
mod site_graph;
mod stats;

// Re-export main types
pub use model::{Edge, Page};
pub use site_graph::SiteGraph;
pub use stats::GraphStats;
