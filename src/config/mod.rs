//! Configuration module for Site-Mindmap
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use site_mindmap::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mindmap.toml")).unwrap();
//! println!("Crawler will visit at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, DriverKind, FrontierOrder, OffDomainPolicy, OutputConfig, RenderConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
