//! Integration tests for rendering and the graph file hand-off

use crate::crawl_tests::{create_test_config, mount_small_site};
use site_mindmap::config::RenderConfig;
use site_mindmap::crawler::{crawl, HttpPageDriver};
use site_mindmap::output::{
    render_to_file, InteractiveRenderer, MermaidRenderer, PlantUmlRenderer, Renderer,
};
use site_mindmap::storage::{GraphStore, JsonStore, SqliteStore};
use site_mindmap::{Page, SiteGraph};
use std::fs;
use tempfile::TempDir;
use wiremock::MockServer;

fn home_about_contact() -> SiteGraph {
    let mut graph = SiteGraph::new();
    graph.add_page("https://site.test/", Page::new("https://site.test/", "Home"));
    graph.add_page("https://site.test/about", Page::new("https://site.test/about", "About"));
    graph.add_page(
        "https://site.test/contact",
        Page::new("https://site.test/contact", "Contact"),
    );
    graph.add_link("https://site.test/", "https://site.test/about", "About");
    graph.add_link("https://site.test/", "https://site.test/contact", "Contact");
    graph.add_link("https://site.test/about", "https://site.test/", "Home");
    graph
}

#[test]
fn test_mermaid_home_about_contact() {
    let out = MermaidRenderer
        .render(&home_about_contact(), &RenderConfig::default())
        .unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "```mermaid",
            "mindmap",
            "  root((site.test))",
            "    \"About → About\"",
            "      \"Home → Home\"",
            "    \"Contact → Contact\"",
            "```",
        ]
    );
}

#[test]
fn test_submit_button_is_leaf_in_every_tree_renderer() {
    let mut graph = home_about_contact();
    graph.add_action("https://site.test/", "Submit");

    let mermaid = MermaidRenderer.render(&graph, &RenderConfig::default()).unwrap();
    assert!(mermaid.contains("\n    \"Button: Submit\"\n"));

    let plantuml = PlantUmlRenderer.render(&graph, &RenderConfig::default()).unwrap();
    assert!(plantuml.contains("\n** Button: Submit\n"));
}

#[test]
fn test_renderers_are_repeatable() {
    let graph = home_about_contact();
    let config = RenderConfig {
        max_edges: Some(2),
        ..RenderConfig::default()
    };

    let renderers: [&dyn Renderer; 3] = [&MermaidRenderer, &PlantUmlRenderer, &InteractiveRenderer];
    for renderer in renderers {
        let first = renderer.render(&graph, &config).unwrap();
        let second = renderer.render(&graph, &config).unwrap();
        assert_eq!(first, second, "{} output changed between runs", renderer.name());
    }
}

#[tokio::test]
async fn test_crawl_save_load_render() {
    let server = MockServer::start().await;
    mount_small_site(&server).await;
    let temp_dir = TempDir::new().unwrap();

    let home = format!("{}/", server.uri());
    let config = create_test_config(&home, 10);
    let driver = HttpPageDriver::new(&config.crawler).unwrap();
    let graph = crawl(driver, &config).await.unwrap();

    let mut store = JsonStore::new(temp_dir.path().join("site_structure.json"));
    store.save(&graph).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, graph);

    let mermaid_path = temp_dir.path().join("mindmap.md");
    let plantuml_path = temp_dir.path().join("mindmap.puml");
    let html_path = temp_dir.path().join("site_graph.html");

    render_to_file(&MermaidRenderer, &loaded, &config.render, &mermaid_path).unwrap();
    render_to_file(&PlantUmlRenderer, &loaded, &config.render, &plantuml_path).unwrap();
    render_to_file(&InteractiveRenderer, &loaded, &config.render, &html_path).unwrap();

    let mermaid = fs::read_to_string(&mermaid_path).unwrap();
    assert!(mermaid.contains("\"About → About us\""));
    assert!(mermaid.contains("\"Home → Home\""));
    // The failed page renders under its URL title
    assert!(mermaid.contains(&format!("\"Contact → {}/contact\"", server.uri())));
    assert!(mermaid.contains("\"Button: Subscribe\""));

    let plantuml = fs::read_to_string(&plantuml_path).unwrap();
    assert!(plantuml.starts_with("@startmindmap\n"));
    assert!(plantuml.contains("** About → About us (/about)\n"));
    assert!(plantuml.trim_end().ends_with("@endmindmap"));

    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("vis.Network"));
    assert!(html.contains("About us"));
}

#[test]
fn test_sqlite_archive_matches_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let graph = home_about_contact();

    let mut json = JsonStore::new(temp_dir.path().join("site.json"));
    let mut sqlite = SqliteStore::new(&temp_dir.path().join("site.db")).unwrap();
    json.save(&graph).unwrap();
    sqlite.save(&graph).unwrap();

    assert_eq!(json.load().unwrap(), sqlite.load().unwrap());
}

#[test]
fn test_render_from_legacy_graph_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"{
            "pages": {
                "https://site.test/home": "Welcome",
                "https://site.test/shop": "Shop"
            },
            "edges": [
                {"source": "https://site.test/home", "target": "https://site.test/shop", "text": "Shop"},
                {"source": "https://site.test/home", "target": null, "text": "Log in"}
            ]
        }"#,
    )
    .unwrap();

    let graph = JsonStore::new(&path).load().unwrap();
    let out = MermaidRenderer.render(&graph, &RenderConfig::default()).unwrap();

    assert!(out.contains("\"Shop → Shop\""));
    assert!(out.contains("\"Button: Log in\""));
}
