//! Statistics display for site graphs and crawl runs

use crate::crawler::CrawlStats;
use crate::graph::GraphStats;

/// Formats graph statistics as a plain-text report
pub fn format_statistics(stats: &GraphStats) -> String {
    let mut out = String::new();

    out.push_str("=== Site Graph Statistics ===\n\n");

    out.push_str("Overview:\n");
    out.push_str(&format!("  Pages: {}\n", stats.pages));
    out.push_str(&format!("  Edges: {}\n", stats.edges));
    out.push_str(&format!("    Links: {}\n", stats.links));
    out.push_str(&format!("    Actions: {}\n", stats.actions));
    out.push_str(&format!("    Self-loops: {}\n", stats.self_loops));
    out.push('\n');

    out.push_str("Coverage:\n");
    out.push_str(&format!(
        "  Dangling targets (linked, never visited): {}\n",
        stats.dangling_targets
    ));
    out.push_str(&format!("  Pages with screenshots: {}\n", stats.screenshots));
    out.push_str(&format!("  Pages that failed to load: {}\n", stats.errored_pages));
    out.push('\n');

    let loaded = stats.pages - stats.errored_pages;
    let success_rate = if stats.pages > 0 {
        (loaded as f64 / stats.pages as f64) * 100.0
    } else {
        0.0
    };
    out.push_str(&format!(
        "Success Rate: {:.1}% ({} / {} pages loaded)\n",
        success_rate, loaded, stats.pages
    ));

    out
}

/// Prints graph statistics to stdout
pub fn print_statistics(stats: &GraphStats) {
    print!("{}", format_statistics(stats));
}

/// Prints the counters of a finished crawl to stdout
pub fn print_crawl_statistics(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");
    if let Some(duration) = stats.duration() {
        println!("  Duration: {:.2}s", duration.as_secs_f64());
    }
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  Pages failed: {}", stats.pages_failed);
    println!("  Links seen: {}", stats.links_seen);
    println!("  Links recorded: {}", stats.links_recorded);
    println!("  Actions recorded: {}", stats.actions_recorded);
    println!(
        "  Off-domain links: {} dropped, {} recorded",
        stats.off_domain_dropped, stats.off_domain_recorded
    );
    println!("  Screenshots captured: {}", stats.screenshots_captured);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_statistics() {
        let stats = GraphStats {
            pages: 4,
            edges: 7,
            links: 6,
            actions: 1,
            self_loops: 1,
            dangling_targets: 2,
            errored_pages: 1,
            screenshots: 3,
        };

        let report = format_statistics(&stats);
        assert!(report.contains("  Pages: 4\n"));
        assert!(report.contains("    Actions: 1\n"));
        assert!(report.contains("Dangling targets (linked, never visited): 2"));
        assert!(report.contains("Success Rate: 75.0% (3 / 4 pages loaded)"));
    }

    #[test]
    fn test_format_statistics_empty_graph() {
        let report = format_statistics(&GraphStats::default());
        assert!(report.contains("Success Rate: 0.0% (0 / 0 pages loaded)"));
    }
}
