use serde::Deserialize;

/// Main configuration structure for Site-Mindmap
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Order in which discovered URLs leave the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierOrder {
    /// Most recently discovered URL first (depth-first)
    #[default]
    Stack,
    /// Oldest discovered URL first (breadth-first)
    Queue,
}

/// What happens to links that leave the start URL's origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffDomainPolicy {
    /// Off-domain links are neither recorded nor followed
    #[default]
    Drop,
    /// Off-domain links are recorded as edges but never followed
    Record,
}

/// Page driver backing the crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    /// Plain HTTP GET with HTML parsing; no scripts, no screenshots
    #[default]
    Http,
    /// A browser session behind a WebDriver server
    WebDriver,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the crawl starts from; also defines the crawl origin
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Maximum number of pages to visit
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    #[serde(rename = "frontier-order", default)]
    pub frontier_order: FrontierOrder,

    #[serde(rename = "off-domain", default)]
    pub off_domain: OffDomainPolicy,

    /// Capture a full-page screenshot of every visited page
    #[serde(default)]
    pub screenshots: bool,

    #[serde(default)]
    pub driver: DriverKind,

    /// WebDriver server used when `driver = "webdriver"`
    #[serde(rename = "webdriver-url", default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Record failed pages and keep crawling instead of aborting
    #[serde(rename = "continue-on-error", default = "default_continue_on_error")]
    pub continue_on_error: bool,

    /// Per-request timeout for the HTTP page driver (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Hierarchy and renderer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Global cap on edges materialized per render pass (unbounded when absent)
    #[serde(rename = "max-edges", default)]
    pub max_edges: Option<usize>,

    /// Display budget for tree labels (characters)
    #[serde(rename = "label-width", default = "default_label_width")]
    pub label_width: usize,

    /// Display budget for interactive node labels (characters)
    #[serde(rename = "title-width", default = "default_title_width")]
    pub title_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_edges: None,
            label_width: default_label_width(),
            title_width: default_title_width(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the site graph JSON file
    #[serde(rename = "graph-path")]
    pub graph_path: String,

    /// Path to the Mermaid mind map (markdown)
    #[serde(rename = "mermaid-path")]
    pub mermaid_path: String,

    /// Path to the PlantUML mind map
    #[serde(rename = "plantuml-path")]
    pub plantuml_path: String,

    /// Path to the interactive HTML graph
    #[serde(rename = "interactive-path")]
    pub interactive_path: String,

    /// Directory for page screenshots
    #[serde(rename = "screenshot-dir", default)]
    pub screenshot_dir: Option<String>,

    /// Optional SQLite archive of the site graph
    #[serde(rename = "database-path", default)]
    pub database_path: Option<String>,
}

fn default_continue_on_error() -> bool {
    true
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("site-mindmap/{}", env!("CARGO_PKG_VERSION"))
}

fn default_label_width() -> usize {
    60
}

fn default_title_width() -> usize {
    30
}
