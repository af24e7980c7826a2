//! Site-Mindmap main entry point
//!
//! This is the command-line interface for the Site-Mindmap website structure mapper.

use anyhow::Context;
use clap::Parser;
use site_mindmap::config::{load_config_with_hash, Config, DriverKind};
use site_mindmap::crawler::{Crawler, HttpPageDriver, PageDriver, WebDriverPageDriver};
use site_mindmap::output::{
    print_crawl_statistics, print_statistics, render_to_file, InteractiveRenderer,
    MermaidRenderer, PlantUmlRenderer, Renderer,
};
use site_mindmap::storage::{GraphStore, JsonStore, SqliteStore};
use site_mindmap::SiteGraph;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Site-Mindmap: maps a website into mind maps
///
/// Site-Mindmap crawls a single site from a start URL, records its pages,
/// links and buttons as a site graph, and renders that graph as Mermaid and
/// PlantUML mind maps and as an interactive HTML graph.
#[derive(Parser, Debug)]
#[command(name = "site-mindmap")]
#[command(version)]
#[command(about = "Maps a website into mind maps", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with_all = ["stats", "crawl_only", "render_only"])]
    dry_run: bool,

    /// Crawl and save the site graph without rendering
    #[arg(long, conflicts_with_all = ["dry_run", "stats", "render_only"])]
    crawl_only: bool,

    /// Render from a previously saved site graph without crawling
    #[arg(long, conflicts_with_all = ["dry_run", "stats", "crawl_only"])]
    render_only: bool,

    /// Show statistics for the saved site graph and exit
    #[arg(long, conflicts_with_all = ["dry_run", "crawl_only", "render_only"])]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = match load_config_with_hash(&cli.config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context(format!("invalid configuration {}", cli.config.display()));
        }
    };
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else if cli.render_only {
        let graph = load_graph(&config)?;
        render_all(&graph, &config)?;
    } else {
        let graph = handle_crawl(&config).await?;
        if !cli.crawl_only {
            render_all(&graph, &config)?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_mindmap=info,warn"),
            1 => EnvFilter::new("site_mindmap=debug,info"),
            2 => EnvFilter::new("site_mindmap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the validated configuration
fn handle_dry_run(config: &Config) {
    println!("=== Site-Mindmap Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Start URL: {}", config.crawler.start_url);
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Frontier order: {:?}", config.crawler.frontier_order);
    println!("  Off-domain links: {:?}", config.crawler.off_domain);
    println!("  Continue on error: {}", config.crawler.continue_on_error);
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!("  User agent: {}", config.crawler.user_agent);
    println!("  Screenshots: {}", config.crawler.screenshots);
    match config.crawler.driver {
        DriverKind::Http => println!("  Driver: http"),
        DriverKind::WebDriver => {
            println!("  Driver: webdriver ({})", config.crawler.webdriver_url)
        }
    }

    println!("\nRendering:");
    match config.render.max_edges {
        Some(max) => println!("  Max edges: {}", max),
        None => println!("  Max edges: unbounded"),
    }
    println!("  Label width: {}", config.render.label_width);
    println!("  Title width: {}", config.render.title_width);

    println!("\nOutput:");
    println!("  Site graph: {}", config.output.graph_path);
    println!("  Mermaid: {}", config.output.mermaid_path);
    println!("  PlantUML: {}", config.output.plantuml_path);
    println!("  Interactive: {}", config.output.interactive_path);
    if let Some(dir) = &config.output.screenshot_dir {
        println!("  Screenshots: {}", dir);
    }
    if let Some(db) = &config.output.database_path {
        println!("  Archive database: {}", db);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would crawl up to {} pages starting at {}",
        config.crawler.max_pages, config.crawler.start_url
    );
}

/// Handles the --stats mode: shows statistics for the saved site graph
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Site graph: {}\n", config.output.graph_path);
    let graph = load_graph(config)?;
    print_statistics(&graph.stats());
    Ok(())
}

/// Crawls the site with the configured driver, then saves the graph file and
/// the optional archive
async fn handle_crawl(config: &Config) -> anyhow::Result<SiteGraph> {
    let graph = match config.crawler.driver {
        DriverKind::Http => {
            let driver =
                HttpPageDriver::new(&config.crawler).context("failed to build HTTP client")?;
            run_crawl(driver, config).await?
        }
        DriverKind::WebDriver => {
            let driver = WebDriverPageDriver::connect(&config.crawler)
                .await
                .context("failed to connect to WebDriver")?;
            let session = driver.session();
            let result = run_crawl(driver, config).await;
            if let Err(e) = session.close().await {
                tracing::warn!("Failed to close browser session: {}", e);
            }
            result?
        }
    };

    let mut store = JsonStore::new(&config.output.graph_path);
    store
        .save(&graph)
        .with_context(|| format!("failed to save site graph to {}", store.path().display()))?;

    if let Some(db) = &config.output.database_path {
        SqliteStore::new(Path::new(db))
            .and_then(|mut store| store.save(&graph))
            .with_context(|| format!("failed to archive site graph to {}", db))?;
    }

    let stats = graph.stats();
    tracing::info!(
        "Site graph: {} pages, {} links, {} actions, {} dangling targets",
        stats.pages,
        stats.links,
        stats.actions,
        stats.dangling_targets
    );

    Ok(graph)
}

async fn run_crawl<D: PageDriver>(driver: D, config: &Config) -> anyhow::Result<SiteGraph> {
    let mut crawler = Crawler::new(driver, config)?;

    if let Err(e) = crawler.run().await {
        tracing::error!("Crawl failed: {}", e);
        return Err(e.into());
    }

    print_crawl_statistics(crawler.stats());
    Ok(crawler.into_graph())
}

fn load_graph(config: &Config) -> anyhow::Result<SiteGraph> {
    let store = JsonStore::new(&config.output.graph_path);
    store
        .load()
        .with_context(|| format!("failed to load site graph from {}", store.path().display()))
}

/// Renders every output format
fn render_all(graph: &SiteGraph, config: &Config) -> anyhow::Result<()> {
    let outputs: [(&dyn Renderer, &str); 3] = [
        (&MermaidRenderer as &dyn Renderer, config.output.mermaid_path.as_str()),
        (&PlantUmlRenderer as &dyn Renderer, config.output.plantuml_path.as_str()),
        (&InteractiveRenderer as &dyn Renderer, config.output.interactive_path.as_str()),
    ];

    for (renderer, path) in outputs {
        render_to_file(renderer, graph, &config.render, Path::new(path))
            .with_context(|| format!("failed to render {} output", renderer.name()))?;
        println!("✓ {} written to: {}", renderer.name(), path);
    }

    Ok(())
}
