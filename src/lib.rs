//! Site-Mindmap: a website structure mapper
//!
//! This crate drives a page driver across a single site, records the pages,
//! links and standalone controls it finds as a site graph, and renders that
//! graph as Mermaid and PlantUML mind maps and as an interactive HTML graph.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod hierarchy;
pub mod output;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Crawl-time errors
///
/// A navigation failure is only surfaced here when the crawler runs with
/// `continue-on-error = false`; otherwise it is logged and recorded on the page.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Navigation failed for {url}: {source}")]
    Navigation {
        url: String,
        source: crawler::DriverError,
    },

    #[error("Invalid start URL: {0}")]
    InvalidStartUrl(String),
}

/// Render-time errors
///
/// Structural anomalies other than an empty graph (dangling targets, missing
/// titles or screenshots) degrade to fallback values instead of failing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Site graph has no pages")]
    EmptyGraph,

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use graph::{Edge, Page, SiteGraph};
pub use crate::url::{classify_link, same_origin, LinkScope};
