//! HTML parser for the HTTP page driver
//!
//! This module extracts from a loaded document:
//! - The page title
//! - Hyperlinks with their visible text
//! - Clickable controls that do not navigate (buttons)

use crate::crawler::driver::{PageControl, PageLink};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// All followable links found on the page (absolute URLs)
    pub links: Vec<PageLink>,

    /// All buttons and button-like inputs
    pub controls: Vec<PageControl>,
}

/// Parses HTML content and extracts the title, links and controls
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` tags anywhere in the document, resolved against
///   `<base href>` when present, otherwise against `page_url`
///
/// **Exclude:**
/// - `<a href="..." download>`
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
///
/// Fragment-only links resolve to the current page with the fragment kept.
///
/// # Control Extraction Rules
///
/// `<button>`, `<input type="button">` and `<input type="reset">`. Submit
/// inputs navigate and are not collected. The label is the visible text, then the `value`
/// attribute, then `aria-label`, falling back to an empty string.
///
/// # Example
///
/// ```
/// use site_mindmap::crawler::parse_html;
/// use url::Url;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a><button>Buy</button></body></html>"#;
/// let page_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &page_url);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.links[0].href, "https://example.com/page");
/// assert_eq!(parsed.controls[0].text, "Buy");
/// ```
pub fn parse_html(html: &str, page_url: &Url) -> ParsedPage {
    let document = Html::parse_document(html);
    let base_url = extract_base(&document, page_url);

    ParsedPage {
        title: extract_title(&document),
        links: extract_links(&document, &base_url),
        controls: extract_controls(&document),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| visible_text(&element))
        .filter(|s| !s.is_empty())
}

/// Resolves the document base URL, honoring `<base href>`
fn extract_base(document: &Html, page_url: &Url) -> Url {
    Selector::parse("base[href]")
        .ok()
        .and_then(|selector| {
            document
                .select(&selector)
                .next()
                .and_then(|element| element.value().attr("href"))
                .and_then(|href| page_url.join(href.trim()).ok())
        })
        .unwrap_or_else(|| page_url.clone())
}

/// Extracts all valid links from the HTML document
fn extract_links(document: &Html, base_url: &Url) -> Vec<PageLink> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if element.value().attr("download").is_some() {
                continue;
            }

            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    let mut text = visible_text(&element);
                    if text.is_empty() {
                        text = attr_text(&element, "aria-label")
                            .or_else(|| attr_text(&element, "title"))
                            .unwrap_or_default();
                    }
                    links.push(PageLink {
                        href: absolute_url,
                        text,
                    });
                }
            }
        }
    }

    links
}

/// Extracts buttons and button-like inputs
fn extract_controls(document: &Html) -> Vec<PageControl> {
    let selector = match Selector::parse(
        "button, input[type=button], input[type=reset]",
    ) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .map(|element| {
            let text = Some(visible_text(&element))
                .filter(|t| !t.is_empty())
                .or_else(|| attr_text(&element, "value"))
                .or_else(|| attr_text(&element, "aria-label"))
                .unwrap_or_default();
            PageControl { text }
        })
        .collect()
}

/// Collects an element's text with runs of whitespace collapsed
fn visible_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn attr_text(element: &ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(|value| value.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|value| !value.is_empty())
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
