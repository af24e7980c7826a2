use url::Url;

/// Returns true when two URLs share scheme, host and port
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_mindmap::url::same_origin;
///
/// let a = Url::parse("https://example.com/a").unwrap();
/// let b = Url::parse("https://example.com:443/b?x=1").unwrap();
/// let c = Url::parse("https://sub.example.com/").unwrap();
/// assert!(same_origin(&a, &b));
/// assert!(!same_origin(&a, &c));
/// ```
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}

/// Returns the display name for the root of a rendered mind map
///
/// This is the URL's host (with a non-default port), or "Website" when the
/// URL cannot be parsed or has no host.
pub fn root_display_name(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return "Website".to_string(),
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => "Website".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_default_port() {
        let a = Url::parse("http://example.com/").unwrap();
        let b = Url::parse("http://example.com:80/page").unwrap();
        assert!(same_origin(&a, &b));
    }

    #[test]
    fn test_different_port_is_different_origin() {
        let a = Url::parse("http://127.0.0.1:8080/").unwrap();
        let b = Url::parse("http://127.0.0.1:9090/").unwrap();
        assert!(!same_origin(&a, &b));
    }

    #[test]
    fn test_root_display_name() {
        assert_eq!(root_display_name("https://books.toscrape.com/"), "books.toscrape.com");
        assert_eq!(root_display_name("http://127.0.0.1:4000/home"), "127.0.0.1:4000");
        assert_eq!(root_display_name("not a url"), "Website");
    }
}
