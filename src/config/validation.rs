use crate::config::types::{Config, CrawlerConfig, DriverKind, OutputConfig, RenderConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_render_config(&config.render)?;
    validate_output_config(&config.output)?;

    if config.crawler.screenshots && config.output.screenshot_dir.is_none() {
        return Err(ConfigError::Validation(
            "screenshot-dir is required when screenshots are enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.start_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid start-url '{}': {}", config.start_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "start-url '{}' must use http or https",
            config.start_url
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "start-url '{}' has no host",
            config.start_url
        )));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    match config.driver {
        DriverKind::Http if config.screenshots => {
            return Err(ConfigError::Validation(
                "screenshots require driver = \"webdriver\"; the HTTP driver cannot render pages"
                    .to_string(),
            ));
        }
        DriverKind::WebDriver => {
            let webdriver = Url::parse(&config.webdriver_url).map_err(|e| {
                ConfigError::InvalidUrl(format!(
                    "Invalid webdriver-url '{}': {}",
                    config.webdriver_url, e
                ))
            })?;
            if webdriver.scheme() != "http" && webdriver.scheme() != "https" {
                return Err(ConfigError::InvalidUrl(format!(
                    "webdriver-url '{}' must use http or https",
                    config.webdriver_url
                )));
            }
        }
        DriverKind::Http => {}
    }

    Ok(())
}

/// Validates render configuration
fn validate_render_config(config: &RenderConfig) -> Result<(), ConfigError> {
    if let Some(max_edges) = config.max_edges {
        if max_edges < 1 {
            return Err(ConfigError::Validation(format!(
                "max-edges must be >= 1 when set, got {}",
                max_edges
            )));
        }
    }

    if config.label_width < 1 {
        return Err(ConfigError::Validation(format!(
            "label-width must be >= 1, got {}",
            config.label_width
        )));
    }

    if config.title_width < 1 {
        return Err(ConfigError::Validation(format!(
            "title-width must be >= 1, got {}",
            config.title_width
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    let required = [
        ("graph-path", &config.graph_path),
        ("mermaid-path", &config.mermaid_path),
        ("plantuml-path", &config.plantuml_path),
        ("interactive-path", &config.interactive_path),
    ];

    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    if matches!(&config.screenshot_dir, Some(dir) if dir.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "screenshot-dir cannot be empty".to_string(),
        ));
    }

    if matches!(&config.database_path, Some(path) if path.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
