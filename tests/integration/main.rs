//! Integration tests for Site-Mindmap

mod crawl_tests;
mod render_tests;
mod webdriver_tests;
