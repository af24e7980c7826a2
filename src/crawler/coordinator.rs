//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that:
//! - Seeds the frontier with the start URL
//! - Drives the page driver one page at a time
//! - Scopes discovered links to the start URL's origin
//! - Emits navigation and action edges into the site graph
//! - Captures screenshots when enabled
//! - Isolates or propagates per-URL failures per configuration

use crate::config::{Config, CrawlerConfig, OffDomainPolicy};
use crate::crawler::driver::{DriverError, PageDriver, PageLink};
use crate::crawler::frontier::Frontier;
use crate::crawler::screenshot::write_screenshot;
use crate::graph::{Page, SiteGraph};
use crate::url::{classify_link, LinkScope};
use crate::CrawlError;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use url::Url;

/// Counters collected during a crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlStats {
    pub start_time: Option<Instant>,
    pub end_time: Option<Instant>,
    pub pages_visited: usize,
    pub pages_failed: usize,
    pub links_seen: usize,
    pub links_recorded: usize,
    pub actions_recorded: usize,
    pub off_domain_dropped: usize,
    pub off_domain_recorded: usize,
    pub screenshots_captured: usize,
}

impl CrawlStats {
    pub fn duration(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            _ => None,
        }
    }
}

/// Main crawl engine
///
/// Owns the frontier and the site graph under construction. Pages are
/// processed strictly one after another.
pub struct Crawler<D: PageDriver> {
    driver: D,
    config: CrawlerConfig,
    start_url: Url,
    screenshot_dir: Option<PathBuf>,
    frontier: Frontier,
    graph: SiteGraph,
    stats: CrawlStats,
}

impl<D: PageDriver> Crawler<D> {
    /// Creates a new crawler seeded with the configured start URL
    ///
    /// Screenshots are captured only when `crawler.screenshots` is set and an
    /// `output.screenshot-dir` is configured.
    pub fn new(driver: D, config: &Config) -> Result<Self, CrawlError> {
        let start_url = Url::parse(&config.crawler.start_url)
            .map_err(|e| CrawlError::InvalidStartUrl(format!("{}: {}", config.crawler.start_url, e)))?;

        let screenshot_dir = if config.crawler.screenshots {
            config.output.screenshot_dir.as_ref().map(PathBuf::from)
        } else {
            None
        };

        let mut frontier = Frontier::new(config.crawler.frontier_order);
        frontier.push(&config.crawler.start_url);

        Ok(Self {
            driver,
            config: config.crawler.clone(),
            start_url,
            screenshot_dir,
            frontier,
            graph: SiteGraph::new(),
            stats: CrawlStats::default(),
        })
    }

    /// Runs the crawl loop until the frontier is empty or the page limit is hit
    ///
    /// With `continue-on-error` a failed page is recorded with its error and
    /// the crawl continues; otherwise the first failure aborts the crawl.
    pub async fn run(&mut self) -> Result<(), CrawlError> {
        tracing::info!(
            "Starting crawl at {} (max pages: {}, frontier: {:?}, off-domain: {:?})",
            self.config.start_url,
            self.config.max_pages,
            self.frontier.order(),
            self.config.off_domain
        );

        let start_time = Instant::now();
        self.stats.start_time = Some(start_time);

        while self.frontier.visited_count() < self.config.max_pages {
            let url = match self.frontier.next_url() {
                Some(url) => url,
                None => {
                    tracing::info!("Frontier is empty, crawl complete");
                    break;
                }
            };

            tracing::debug!("Processing URL: {}", url);
            self.stats.pages_visited += 1;

            if let Err(e) = self.process_url(&url).await {
                if !self.config.continue_on_error {
                    tracing::error!("Error processing {}: {}", url, e);
                    self.stats.end_time = Some(Instant::now());
                    return Err(CrawlError::Navigation { url, source: e });
                }

                tracing::warn!("Error processing {}: {}", url, e);
                self.graph.mark_error(&url, &e.to_string());
                self.stats.pages_failed += 1;
            }

            if self.stats.pages_visited % 10 == 0 {
                let rate = self.stats.pages_visited as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages visited, {} in frontier, {:.2} pages/sec",
                    self.stats.pages_visited,
                    self.frontier.len(),
                    rate
                );
            }
        }

        if self.frontier.visited_count() >= self.config.max_pages {
            tracing::info!("Page limit of {} reached", self.config.max_pages);
        }

        self.stats.end_time = Some(Instant::now());

        tracing::info!(
            "Crawl completed: {} pages ({} failed), {} links, {} actions in {:?}",
            self.stats.pages_visited,
            self.stats.pages_failed,
            self.stats.links_recorded,
            self.stats.actions_recorded,
            start_time.elapsed()
        );

        Ok(())
    }

    /// Processes a single URL
    ///
    /// Extraction completes before anything is written to the graph, so a
    /// failing page never leaves half of its edges behind.
    async fn process_url(&mut self, url: &str) -> Result<(), DriverError> {
        self.driver.navigate(url).await?;

        let title = self.driver.title().await?;
        let links = self.driver.links().await?;
        let controls = self.driver.controls().await?;

        self.graph.add_page(url, Page::new(url, &title));

        for link in &links {
            self.handle_link(url, link);
        }

        for control in &controls {
            let text = control.text.trim();
            if text.is_empty() {
                continue;
            }
            self.graph.add_action(url, text);
            self.stats.actions_recorded += 1;
        }

        self.capture_screenshot(url).await;

        Ok(())
    }

    /// Records and queues a discovered link according to its scope
    fn handle_link(&mut self, source: &str, link: &PageLink) {
        self.stats.links_seen += 1;
        let text = link.text.trim();

        match classify_link(&link.href, &self.start_url) {
            scope if scope.should_follow() => {
                if !text.is_empty() {
                    self.graph.add_link(source, &link.href, text);
                    self.stats.links_recorded += 1;
                }
                if self.frontier.push(&link.href) {
                    tracing::trace!("Queued {}", link.href);
                }
            }

            LinkScope::OffDomain => match self.config.off_domain {
                OffDomainPolicy::Drop => {
                    tracing::trace!("Dropping off-domain link {}", link.href);
                    self.stats.off_domain_dropped += 1;
                }
                OffDomainPolicy::Record => {
                    if !text.is_empty() {
                        self.graph.add_link(source, &link.href, text);
                        self.stats.links_recorded += 1;
                        self.stats.off_domain_recorded += 1;
                    }
                }
            },

            _ => {
                tracing::trace!("Ignoring unsupported link {}", link.href);
            }
        }
    }

    /// Captures and stores a screenshot of the current page
    ///
    /// Failures are logged and never fail the page.
    async fn capture_screenshot(&mut self, url: &str) {
        let dir = match &self.screenshot_dir {
            Some(dir) => dir.clone(),
            None => return,
        };

        match self.driver.screenshot().await {
            Ok(Some(bytes)) => match write_screenshot(&dir, url, &bytes) {
                Ok(path) => {
                    let path = path.to_string_lossy();
                    if self.graph.attach_screenshot(url, &path) {
                        self.stats.screenshots_captured += 1;
                    }
                    tracing::debug!("Saved screenshot for {} to {}", url, path);
                }
                Err(e) => tracing::warn!("Failed to write screenshot for {}: {}", url, e),
            },
            Ok(None) => tracing::debug!("Page driver returned no screenshot for {}", url),
            Err(e) => tracing::warn!("Screenshot failed for {}: {}", url, e),
        }
    }

    /// Returns the crawl counters
    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    /// Returns the graph built so far
    pub fn graph(&self) -> &SiteGraph {
        &self.graph
    }

    /// Consumes the crawler, returning the finished site graph
    pub fn into_graph(self) -> SiteGraph {
        self.graph
    }
}

/// Runs a complete crawl and returns the site graph
///
/// # Example
///
/// ```no_run
/// use site_mindmap::config::load_config;
/// use site_mindmap::crawler::{crawl, HttpPageDriver};
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("mindmap.toml"))?;
/// let driver = HttpPageDriver::new(&config.crawler)?;
/// let graph = crawl(driver, &config).await?;
/// println!("{} pages", graph.pages.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl<D: PageDriver>(driver: D, config: &Config) -> Result<SiteGraph, CrawlError> {
    let mut crawler = Crawler::new(driver, config)?;
    crawler.run().await?;
    Ok(crawler.into_graph())
}
