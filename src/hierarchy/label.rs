/// Marker appended to truncated labels
pub const ELLIPSIS: char = '…';

/// Composes a tree label for an edge
///
/// `"<edge text> → <target title>"` when the edge text is non-empty,
/// otherwise just the title, then cleaned with [`clean_label`].
///
/// # Examples
///
/// ```
/// use site_mindmap::hierarchy::format_label;
///
/// assert_eq!(format_label("About", "About us", 60), "About → About us");
/// assert_eq!(format_label("", "About us", 60), "About us");
/// ```
pub fn format_label(text: &str, title: &str, width: usize) -> String {
    let text = text.trim();
    if text.is_empty() {
        clean_label(title, width)
    } else {
        clean_label(&format!("{} → {}", text, title), width)
    }
}

/// Normalizes quotes and whitespace and truncates a label to `width` characters
///
/// Double quotes become single quotes and runs of whitespace, line breaks
/// included, become a single space so labels stay on one markup line.
/// A label longer than `width` keeps its first `width` characters followed by
/// a single ellipsis.
pub fn clean_label(label: &str, width: usize) -> String {
    let normalized = label
        .replace('"', "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.chars().count() > width {
        let mut truncated = truncate_chars(&normalized, width);
        truncated.push(ELLIPSIS);
        truncated
    } else {
        normalized
    }
}

/// Returns the first `width` characters of `text`
pub fn truncate_chars(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
