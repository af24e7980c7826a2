//! WebDriver page driver against a mocked WebDriver server
//!
//! The mock answers the W3C session endpoints the driver uses: new session,
//! timeouts, navigation, current URL, page source and screenshot.

use crate::crawl_tests::create_test_config;
use base64::Engine;
use serde_json::json;
use site_mindmap::config::DriverKind;
use site_mindmap::crawler::{crawl, screenshot_file_name, WebDriverPageDriver};
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SESSION: &str = "/session/test-session";
const PAGE_URL: &str = "https://shop.test/";

fn value(value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "value": value }))
}

async fn mount_browser(server: &MockServer, source: &str, png: &[u8]) {
    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(value(json!({
            "sessionId": "test-session",
            "capabilities": { "browserName": "mock" }
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{}/timeouts", SESSION)))
        .respond_with(value(json!(null)))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{}/url", SESSION)))
        .respond_with(value(json!(null)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/url", SESSION)))
        .respond_with(value(json!(PAGE_URL)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/source", SESSION)))
        .respond_with(value(json!(source)))
        .mount(server)
        .await;

    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    Mock::given(method("GET"))
        .and(path(format!("{}/screenshot", SESSION)))
        .respond_with(value(json!(encoded)))
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(SESSION))
        .respond_with(value(json!(null)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_webdriver_crawl_records_page_and_screenshot() {
    let server = MockServer::start().await;
    mount_browser(
        &server,
        r#"<html><head><title>Shop</title></head><body>
        <a href="/about">About</a>
        <button>Add to basket</button>
        </body></html>"#,
        b"rendered-png",
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let shots = temp_dir.path().join("shots");

    let mut config = create_test_config(PAGE_URL, 1);
    config.crawler.driver = DriverKind::WebDriver;
    config.crawler.webdriver_url = server.uri();
    config.crawler.screenshots = true;
    config.output.screenshot_dir = Some(shots.to_string_lossy().to_string());

    let driver = WebDriverPageDriver::connect(&config.crawler).await.unwrap();
    let graph = crawl(driver, &config).await.unwrap();

    assert_eq!(graph.title_of(PAGE_URL), "Shop");
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.edges[0].target.as_deref(), Some("https://shop.test/about"));
    assert_eq!(graph.edges[0].text, "About");
    assert!(graph.edges[1].target.is_none());
    assert_eq!(graph.edges[1].text, "Add to basket");

    let shot = shots.join(screenshot_file_name(PAGE_URL));
    assert_eq!(fs::read(&shot).unwrap(), b"rendered-png");
    assert_eq!(
        graph.page(PAGE_URL).and_then(|p| p.screenshot.clone()),
        Some(shot.to_string_lossy().to_string())
    );
}
