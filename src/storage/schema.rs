//! Database schema definitions
//!
//! Each saved graph is one run; pages and edges carry an `ord` column so the
//! graph loads back in insertion order.

/// SQL schema for the archive database
pub const SCHEMA_SQL: &str = r#"
-- One row per saved site graph
CREATE TABLE IF NOT EXISTS runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    saved_at TEXT NOT NULL,
    page_count INTEGER NOT NULL,
    edge_count INTEGER NOT NULL
);

-- Visited pages, in visit order
CREATE TABLE IF NOT EXISTS pages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id INTEGER NOT NULL REFERENCES runs(id),
    ord INTEGER NOT NULL,
    url TEXT NOT NULL,
    title TEXT NOT NULL,
    screenshot TEXT,
    error_message TEXT,
    UNIQUE(run_id, url)
);

CREATE INDEX IF NOT EXISTS idx_pages_run ON pages(run_id, ord);

-- Links and standalone actions (target is NULL for actions)
CREATE TABLE IF NOT EXISTS edges (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id INTEGER NOT NULL REFERENCES runs(id),
    ord INTEGER NOT NULL,
    source TEXT NOT NULL,
    target TEXT,
    text TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_edges_run ON edges(run_id, ord);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
