//! Crawl frontier
//!
//! This module owns the crawl-time worklist and visited set:
//! - Explicit LIFO (stack) or FIFO (queue) ordering
//! - Marking a URL visited exactly when it leaves the frontier
//! - Skipping URLs that were already visited
//!
//! Frontier state lives only for the duration of one crawl.

use crate::config::FrontierOrder;
use std::collections::{HashSet, VecDeque};

/// Worklist of discovered URLs plus the set of URLs already visited
#[derive(Debug, Clone)]
pub struct Frontier {
    order: FrontierOrder,
    pending: VecDeque<String>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier with the given ordering
    pub fn new(order: FrontierOrder) -> Self {
        Self {
            order,
            pending: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    /// Adds a discovered URL
    ///
    /// URLs that were already visited are ignored. A URL may be pending more
    /// than once; the later copies are skipped when they come up.
    ///
    /// Returns true if the URL was queued.
    pub fn push(&mut self, url: &str) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.pending.push_back(url.to_string());
        true
    }

    /// Takes the next unvisited URL and marks it visited
    ///
    /// Returns None once no unvisited URL remains.
    pub fn next_url(&mut self) -> Option<String> {
        while let Some(url) = self.pop() {
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
            tracing::trace!("Skipping already visited URL: {}", url);
        }
        None
    }

    fn pop(&mut self) -> Option<String> {
        match self.order {
            FrontierOrder::Stack => self.pending.pop_back(),
            FrontierOrder::Queue => self.pending.pop_front(),
        }
    }

    /// Returns true if the URL has left the frontier
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs taken from the frontier so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of pending entries (including duplicates not yet skipped)
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// The configured ordering
    pub fn order(&self) -> FrontierOrder {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<String> {
        std::iter::from_fn(|| frontier.next_url()).collect()
    }

    #[test]
    fn test_stack_order_is_lifo() {
        let mut frontier = Frontier::new(FrontierOrder::Stack);
        for url in ["a", "b", "c"] {
            frontier.push(url);
        }
        assert_eq!(drain(&mut frontier), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_queue_order_is_fifo() {
        let mut frontier = Frontier::new(FrontierOrder::Queue);
        for url in ["a", "b", "c"] {
            frontier.push(url);
        }
        assert_eq!(drain(&mut frontier), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_visited_on_pop() {
        let mut frontier = Frontier::new(FrontierOrder::Stack);
        frontier.push("a");
        assert!(!frontier.is_visited("a"));

        assert_eq!(frontier.next_url().as_deref(), Some("a"));
        assert!(frontier.is_visited("a"));
        assert_eq!(frontier.visited_count(), 1);
    }

    #[test]
    fn test_push_ignores_visited() {
        let mut frontier = Frontier::new(FrontierOrder::Stack);
        frontier.push("a");
        frontier.next_url();
        assert!(!frontier.push("a"));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_duplicates_skipped_on_pop() {
        let mut frontier = Frontier::new(FrontierOrder::Queue);
        frontier.push("a");
        frontier.push("b");
        frontier.push("a");
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec!["a", "b"]);
        assert_eq!(frontier.visited_count(), 2);
    }

    #[test]
    fn test_urls_are_not_normalized() {
        let mut frontier = Frontier::new(FrontierOrder::Queue);
        frontier.push("https://example.com/a");
        frontier.push("https://example.com/a/");
        frontier.push("https://example.com/a#top");
        assert_eq!(drain(&mut frontier).len(), 3);
    }
}
