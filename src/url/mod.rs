//! URL handling module for Site-Mindmap
//!
//! This module decides which discovered links belong to the crawl and
//! provides the display name used for the root of rendered mind maps.
//! URLs are never normalized: two strings that differ are two pages.

mod origin;

use ::url::Url;

// Re-export main functions
pub use origin::{root_display_name, same_origin};

/// Scope of a discovered link relative to the crawl origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkScope {
    /// Same scheme, host and port as the start URL - may be followed
    InScope,
    /// A web URL on another origin - dropped or recorded per configuration
    OffDomain,
    /// Not an absolute http(s) URL
    Unsupported,
}

impl LinkScope {
    /// Returns true if the link may be queued for crawling
    pub fn should_follow(&self) -> bool {
        matches!(self, Self::InScope)
    }
}

/// Classifies a discovered link against the crawl origin
///
/// # Arguments
///
/// * `href` - The absolute link as reported by the page driver
/// * `start` - The start URL that defines the crawl origin
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_mindmap::url::{classify_link, LinkScope};
///
/// let start = Url::parse("https://example.com/").unwrap();
/// assert_eq!(classify_link("https://example.com/about", &start), LinkScope::InScope);
/// assert_eq!(classify_link("https://other.com/", &start), LinkScope::OffDomain);
/// assert_eq!(classify_link("mailto:me@example.com", &start), LinkScope::Unsupported);
/// ```
pub fn classify_link(href: &str, start: &Url) -> LinkScope {
    let url = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => return LinkScope::Unsupported,
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return LinkScope::Unsupported;
    }

    if same_origin(&url, start) {
        LinkScope::InScope
    } else {
        LinkScope::OffDomain
    }
}
