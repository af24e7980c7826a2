//! WebDriver page driver
//!
//! Drives a real browser through a WebDriver server (chromedriver,
//! geckodriver, a Selenium grid). Pages are rendered with scripts enabled,
//! the rendered DOM is parsed with the same extraction rules as the HTTP
//! driver, and screenshots come from the browser.
//!
//! WebDriver does not expose HTTP status codes, so an error page that renders
//! is recorded like any other page.

use crate::config::CrawlerConfig;
use crate::crawler::driver::{DriverError, PageControl, PageDriver, PageLink};
use crate::crawler::fetcher::LoadedPage;
use crate::crawler::parser::parse_html;
use async_trait::async_trait;
use fantoccini::wd::TimeoutConfiguration;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;

/// Page driver backed by a WebDriver browser session
pub struct WebDriverPageDriver {
    client: Client,
    current: Option<LoadedPage>,
}

impl WebDriverPageDriver {
    /// Opens a browser session on the configured WebDriver server
    ///
    /// The page load timeout follows `request-timeout-secs`.
    pub async fn connect(config: &CrawlerConfig) -> Result<Self, DriverError> {
        let client = ClientBuilder::rustls()
            .map_err(|e| DriverError::Session(e.to_string()))?
            .connect(&config.webdriver_url)
            .await
            .map_err(|e| DriverError::Session(format!("{}: {}", config.webdriver_url, e)))?;

        let timeouts = TimeoutConfiguration::new(
            None,
            Some(Duration::from_secs(config.request_timeout_secs)),
            None,
        );
        client
            .update_timeouts(timeouts)
            .await
            .map_err(|e| DriverError::Session(format!("failed to set timeouts: {}", e)))?;

        tracing::info!("Connected to WebDriver at {}", config.webdriver_url);
        Ok(Self::with_client(client))
    }

    /// Wraps an existing session
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            current: None,
        }
    }

    /// Returns a handle to the browser session, e.g. to close it after a crawl
    pub fn session(&self) -> Client {
        self.client.clone()
    }

    fn loaded(&self) -> Result<&LoadedPage, DriverError> {
        self.current.as_ref().ok_or(DriverError::NoPage)
    }
}

#[async_trait]
impl PageDriver for WebDriverPageDriver {
    async fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        self.current = None;

        self.client
            .goto(url)
            .await
            .map_err(|e| DriverError::Navigation {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let extraction_error = |what: &'static str, message: String| DriverError::Extraction {
            url: url.to_string(),
            what,
            message,
        };

        // Links resolve against where the browser ended up
        let final_url = self
            .client
            .current_url()
            .await
            .map_err(|e| extraction_error("current URL", e.to_string()))?;

        let source = self
            .client
            .source()
            .await
            .map_err(|e| extraction_error("page source", e.to_string()))?;

        tracing::trace!("Rendered {} ({} bytes)", final_url, source.len());

        self.current = Some(LoadedPage {
            url: url.to_string(),
            parsed: parse_html(&source, &final_url),
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

    /// Captures the browser viewport as PNG
    async fn screenshot(&mut self) -> Result<Option<Vec<u8>>, DriverError> {
        self.loaded()?;
        self.client
            .screenshot()
            .await
            .map(Some)
            .map_err(|e| DriverError::Screenshot(e.to_string()))
    }
}
