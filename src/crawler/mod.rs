//! Crawler module for discovering site structure
//!
//! This module contains the crawl engine, including:
//! - The page driver interface with HTTP and WebDriver implementations
//! - HTML extraction of titles, links and controls
//! - The frontier (stack or queue ordered)
//! - Screenshot naming and storage
//! - Overall crawl coordination

mod coordinator;
mod driver;
mod fetcher;
mod frontier;
mod parser;
mod screenshot;
mod webdriver;

pub use coordinator::{crawl, CrawlStats, Crawler};
pub use driver::{DriverError, PageControl, PageDriver, PageLink};
pub use fetcher::{build_http_client, HttpPageDriver};
pub use frontier::Frontier;
pub use parser::{parse_html, ParsedPage};
pub use screenshot::{screenshot_file_name, write_screenshot};
pub use webdriver::WebDriverPageDriver;
