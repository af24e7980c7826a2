//! Storage module for persisting the site graph
//!
//! This module handles:
//! - The JSON graph file handed from the crawler to the renderers
//! - An optional SQLite archive of finished crawls
//!
//! Both backends implement [`GraphStore`], so the binary can save to and load
//! from either one.

mod json;
mod schema;
mod sqlite;
mod traits;

pub use json::JsonStore;
pub use sqlite::SqliteStore;
pub use traits::{GraphStore, StorageError, StorageResult};
