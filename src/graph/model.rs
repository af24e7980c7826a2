//! Page and edge records of the site graph
use serde::{Deserialize, Serialize};

/// A visited page
///
/// Identity is the page's URL, which is the key of the owning map. Older graph
/// files store a bare title string instead of a record; both forms load into
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PageRecord")]
pub struct Page {
    /// Display title (never empty once created through the crawler)
    pub title: String,

    /// Path of the captured screenshot, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,

    /// Why the page could not be loaded, if it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Page {
    /// Creates a page, falling back to the URL when the title is blank
    pub fn new(url: &str, title: &str) -> Self {
        let title = title.trim();
        Self {
            title: if title.is_empty() {
                url.to_string()
            } else {
                title.to_string()
            },
            screenshot: None,
            error: None,
        }
    }

    /// Creates a page for a URL that failed to load
    pub fn failed(url: &str, error: impl Into<String>) -> Self {
        Self {
            title: url.to_string(),
            screenshot: None,
            error: Some(error.into()),
        }
    }

    /// Returns true if the page failed to load
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRecord {
    Title(String),
    Record {
        #[serde(default)]
        title: String,
        #[serde(default)]
        screenshot: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
}

impl From<PageRecord> for Page {
    fn from(record: PageRecord) -> Self {
        match record {
            PageRecord::Title(title) => Self {
                title,
                screenshot: None,
                error: None,
            },
            PageRecord::Record {
                title,
                screenshot,
                error,
            } => Self {
                title,
                screenshot,
                error,
            },
        }
    }
}

/// A directed edge of the site graph
///
/// A navigation edge has a target page; a standalone action (a button or
/// other non-navigating control) has `target = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl Edge {
    /// Creates a navigation edge
    pub fn link(source: &str, target: &str, text: &str) -> Self {
        Self {
            source: source.to_string(),
            target: Some(target.to_string()),
            text: text.to_string(),
        }
    }

    /// Creates a standalone action edge
    pub fn action(source: &str, text: &str) -> Self {
        Self {
            source: source.to_string(),
            target: None,
            text: text.to_string(),
        }
    }

    /// Returns true if this edge has no navigation target
    pub fn is_action(&self) -> bool {
        self.target.is_none()
    }

    /// Returns true if this edge points back at its own source
    pub fn is_self_loop(&self) -> bool {
        self.target.as_deref() == Some(self.source.as_str())
    }
}
