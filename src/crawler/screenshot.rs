//! Screenshot file naming and writing
//!
//! File names derive from a SHA-256 hash of the page URL, so re-running a
//! crawl overwrites the same files instead of accumulating new ones.

use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Length of the hex hash prefix used in screenshot file names
const NAME_HASH_LEN: usize = 16;

/// Returns the screenshot file name for a URL
///
/// # Examples
///
/// ```
/// use site_mindmap::crawler::screenshot_file_name;
///
/// let a = screenshot_file_name("https://example.com/");
/// assert_eq!(a, screenshot_file_name("https://example.com/"));
/// assert_ne!(a, screenshot_file_name("https://example.com/about"));
/// assert!(a.ends_with(".png"));
/// ```
pub fn screenshot_file_name(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let hash = hex::encode(digest);
    format!("{}.png", &hash[..NAME_HASH_LEN])
}

/// Writes a screenshot for a URL into `dir`, creating the directory if needed
///
/// # Returns
///
/// The path of the written file
pub fn write_screenshot(dir: &Path, url: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(screenshot_file_name(url));
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_name_shape() {
        let name = screenshot_file_name("https://books.toscrape.com/");
        assert_eq!(name.len(), NAME_HASH_LEN + ".png".len());
        assert!(name[..NAME_HASH_LEN].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_write_overwrites_same_file() {
        let dir = TempDir::new().unwrap();
        let shots = dir.path().join("shots");

        let first = write_screenshot(&shots, "https://example.com/", b"one").unwrap();
        let second = write_screenshot(&shots, "https://example.com/", b"two").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(&second).unwrap(), b"two");
        assert_eq!(fs::read_dir(&shots).unwrap().count(), 1);
    }
}
