//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small site to the HTTP page driver
//! and run the full crawl cycle end-to-end.

use site_mindmap::config::{
    Config, CrawlerConfig, DriverKind, FrontierOrder, OffDomainPolicy, OutputConfig, RenderConfig,
};
use site_mindmap::crawler::{crawl, Crawler, HttpPageDriver};
use site_mindmap::{CrawlError, SiteGraph};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration starting at `start_url`
pub fn create_test_config(start_url: &str, max_pages: usize) -> Config {
    Config {
        crawler: CrawlerConfig {
            start_url: start_url.to_string(),
            max_pages,
            frontier_order: FrontierOrder::Queue,
            off_domain: OffDomainPolicy::Drop,
            screenshots: false,
            driver: DriverKind::Http,
            webdriver_url: "http://localhost:4444".to_string(),
            continue_on_error: true,
            request_timeout_secs: 5,
            user_agent: "TestBot/1.0".to_string(),
        },
        render: RenderConfig::default(),
        output: OutputConfig {
            graph_path: "site_structure.json".to_string(),
            mermaid_path: "mindmap.md".to_string(),
            plantuml_path: "mindmap.puml".to_string(),
            interactive_path: "site_graph.html".to_string(),
            screenshot_dir: None,
            database_path: None,
        },
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(body.to_string(), "text/html; charset=utf-8")
}

/// Mounts a three page site:
/// `/` links to `/about`, `/contact` and an external site and has a button,
/// `/about` links back home, `/contact` fails with HTTP 500.
pub async fn mount_small_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><head><title>Home</title></head><body>
            <a href="/about">About</a>
            <a href="/contact">Contact</a>
            <a href="https://elsewhere.test/">Partner site</a>
            <button>Subscribe</button>
            </body></html>"#,
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html(
            r#"<html><head><title>About us</title></head><body>
            <a href="/">Home</a>
            </body></html>"#,
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

fn edge_triples(graph: &SiteGraph) -> Vec<(String, Option<String>, String)> {
    graph
        .edges
        .iter()
        .map(|e| (e.source.clone(), e.target.clone(), e.text.clone()))
        .collect()
}

#[tokio::test]
async fn test_full_crawl_small_site() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let base = server.uri();
    let home = format!("{}/", base);
    let about = format!("{}/about", base);
    let contact = format!("{}/contact", base);

    let config = create_test_config(&home, 10);
    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let graph = crawl(driver, &config).await.unwrap();

    let visited: Vec<&str> = graph.pages.keys().map(String::as_str).collect();
    assert_eq!(visited, vec![home.as_str(), about.as_str(), contact.as_str()]);

    assert_eq!(graph.title_of(&home), "Home");
    assert_eq!(graph.title_of(&about), "About us");

    let failed = graph.page(&contact).unwrap();
    assert!(failed.is_error());
    assert_eq!(failed.title, contact);
    assert!(failed.error.as_deref().unwrap().contains("HTTP 500"));

    assert_eq!(
        edge_triples(&graph),
        vec![
            (home.clone(), Some(about.clone()), "About".to_string()),
            (home.clone(), Some(contact.clone()), "Contact".to_string()),
            (home.clone(), None, "Subscribe".to_string()),
            (about.clone(), Some(home.clone()), "Home".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_stack_order_visits_last_link_first() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let home = format!("{}/", server.uri());
    let mut config = create_test_config(&home, 10);
    config.crawler.frontier_order = FrontierOrder::Stack;

    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let graph = crawl(driver, &config).await.unwrap();

    let visited: Vec<String> = graph.pages.keys().cloned().collect();
    assert_eq!(
        visited,
        vec![
            home.clone(),
            format!("{}/contact", server.uri()),
            format!("{}/about", server.uri()),
        ]
    );
}

#[tokio::test]
async fn test_page_limit_counts_every_visit() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let home = format!("{}/", server.uri());
    let config = create_test_config(&home, 1);
    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let graph = crawl(driver, &config).await.unwrap();

    assert_eq!(graph.pages.len(), 1);
    assert!(graph.page(&home).is_some());
    // Edges from the only visited page are still recorded
    assert_eq!(graph.edges.len(), 3);
}

#[tokio::test]
async fn test_off_domain_links_recorded_when_configured() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let home = format!("{}/", server.uri());
    let mut config = create_test_config(&home, 10);
    config.crawler.off_domain = OffDomainPolicy::Record;

    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let mut crawler = Crawler::new(driver, &config).unwrap();
    crawler.run().await.unwrap();

    assert_eq!(crawler.stats().off_domain_recorded, 1);
    let graph = crawler.into_graph();
    assert!(graph.edges.iter().any(|e| {
        e.target.as_deref() == Some("https://elsewhere.test/") && e.text == "Partner site"
    }));
    assert!(graph.page("https://elsewhere.test/").is_none());
    assert_eq!(graph.dangling_targets(), vec!["https://elsewhere.test/"]);
}

#[tokio::test]
async fn test_failure_aborts_without_continue_on_error() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;

    let home = format!("{}/", server.uri());
    let mut config = create_test_config(&home, 10);
    config.crawler.continue_on_error = false;

    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let result = crawl(driver, &config).await;

    match result {
        Err(CrawlError::Navigation { url, .. }) => {
            assert_eq!(url, format!("{}/contact", server.uri()))
        }
        other => panic!("expected navigation error, got {:?}", other.map(|g| g.pages.len())),
    }
}

#[tokio::test]
async fn test_non_html_response_is_recorded_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><head><title>Home</title></head><body>
            <a href="/data.json">Data</a>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{}", "application/json"),
        )
        .mount(&server)
        .await;

    let home = format!("{}/", server.uri());
    let config = create_test_config(&home, 10);
    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let graph = crawl(driver, &config).await.unwrap();

    let data = graph.page(&format!("{}/data.json", server.uri())).unwrap();
    assert!(data.is_error());
    assert!(data.error.as_deref().unwrap().contains("application/json"));
    assert_eq!(graph.stats().errored_pages, 1);
}

#[tokio::test]
async fn test_links_resolve_against_redirect_target() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/docs/", server.uri()).as_str()),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/docs/"))
        .respond_with(html(
            r#"<html><head><title>Docs</title></head><body>
            <a href="intro">Intro</a>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let home = format!("{}/", server.uri());
    let config = create_test_config(&home, 1);
    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let graph = crawl(driver, &config).await.unwrap();

    // The page keeps the URL it was requested under
    assert_eq!(graph.title_of(&home), "Docs");
    assert_eq!(
        graph.edges[0].target.as_deref(),
        Some(format!("{}/docs/intro", server.uri()).as_str())
    );
}
