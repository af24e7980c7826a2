//! HTTP page driver
//!
//! This module implements [`PageDriver`] on top of a plain HTTP client:
//! - Building the client with the configured user agent and timeout
//! - GET requests that follow redirects like a browser would
//! - Error classification for failed loads
//! - HTML extraction of the loaded page
//!
//! It does not execute scripts and cannot capture screenshots.

use crate::config::CrawlerConfig;
use crate::crawler::driver::{DriverError, PageControl, PageDriver, PageLink};
use crate::crawler::parser::{parse_html, ParsedPage};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use site_mindmap::crawler::build_http_client;
///
/// let client = build_http_client("site-mindmap/0.1", 30).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page driver that loads pages with HTTP GET and parses the returned HTML
pub struct HttpPageDriver {
    client: Client,
    current: Option<LoadedPage>,
}

/// Parsed copy of the page a driver currently has loaded
pub(crate) struct LoadedPage {
    pub(crate) url: String,
    pub(crate) parsed: ParsedPage,
}

impl HttpPageDriver {
    /// Creates a driver from the crawler configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.user_agent, config.request_timeout_secs)?;
        Ok(Self::with_client(client))
    }

    /// Creates a driver around an existing client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            current: None,
        }
    }

    fn loaded(&self) -> Result<&LoadedPage, DriverError> {
        self.current.as_ref().ok_or(DriverError::NoPage)
    }
}

#[async_trait]
impl PageDriver for HttpPageDriver {
    /// Fetches a URL
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx with HTML body | page loaded |
    /// | non-2xx status | `Navigation` error with the status |
    /// | non-HTML Content-Type | `Navigation` error |
    /// | timeout / connection refused | `Navigation` error |
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.current = None;

        let navigation_error = |message: String| DriverError::Navigation {
            url: url.to_string(),
            message,
        };

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                navigation_error("Request timeout".to_string())
            } else if e.is_connect() {
                navigation_error("Connection refused".to_string())
            } else {
                navigation_error(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(navigation_error(format!("HTTP {}", status.as_u16())));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("text/html") {
            return Err(navigation_error(format!(
                "Expected HTML, got '{}'",
                content_type
            )));
        }

        // Links resolve against where we ended up, not where we started
        let final_url: Url = response.url().clone();

        let body = response
            .text()
            .await
            .map_err(|e| navigation_error(format!("Failed to read body: {}", e)))?;

        tracing::trace!("Loaded {} ({} bytes)", final_url, body.len());

        self.current = Some(LoadedPage {
            url: url.to_string(),
            parsed: parse_html(&body, &final_url),
        });

        Ok(())
    }

    async fn title(&self) -> Result<String, DriverError> {
        Ok(self.loaded()?.parsed.title.clone().unwrap_or_default())
    }

    async fn links(&self) -> Result<Vec<PageLink>, DriverError> {
        let page = self.loaded()?;
        tracing::debug!("Extracted {} links from {}", page.parsed.links.len(), page.url);
        Ok(page.parsed.links.clone())
    }

    async fn controls(&self) -> Result<Vec<PageControl>, DriverError> {
        Ok(self.loaded()?.parsed.controls.clone())
    }
}
