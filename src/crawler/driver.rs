//! Page driver interface
//!
//! The crawl engine never talks to the network directly. It drives a
//! [`PageDriver`], which loads one page at a time and answers questions about
//! the currently loaded page. The WebDriver browser backend, the built-in
//! HTTP driver, or a scripted driver in tests all fit behind this trait.

use async_trait::async_trait;
use thiserror::Error;

/// A hyperlink found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Absolute URL, resolved against the page's own URL
    pub href: String,

    /// Visible link text (may be empty)
    pub text: String,
}

/// A clickable control that does not navigate (button and similar)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    /// Best-effort label; empty when the control has none
    pub text: String,
}

/// Errors reported by a page driver
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Failed to load {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("Failed to extract {what} from {url}: {message}")]
    Extraction {
        url: String,
        what: &'static str,
        message: String,
    },

    #[error("No page is loaded")]
    NoPage,

    #[error("Failed to start browser session: {0}")]
    Session(String),

    #[error("Screenshot capture failed: {0}")]
    Screenshot(String),
}

/// Capability consumed by the crawl engine
///
/// Calls happen strictly in order for each page: `navigate`, then the
/// extraction methods, then optionally `screenshot`. Extraction methods
/// describe the page loaded by the most recent successful `navigate`.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Loads a URL, replacing the current page
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// Returns the current page's title (may be empty)
    async fn title(&self) -> Result<String, DriverError>;

    /// Returns all hyperlinks on the current page
    async fn links(&self) -> Result<Vec<PageLink>, DriverError>;

    /// Returns all clickable non-navigating controls on the current page
    async fn controls(&self) -> Result<Vec<PageControl>, DriverError>;

    /// Captures a full-page image of the current page
    ///
    /// Drivers that cannot render pages return `Ok(None)`.
    async fn screenshot(&mut self) -> Result<Option<Vec<u8>>, DriverError> {
        Ok(None)
    }
}
