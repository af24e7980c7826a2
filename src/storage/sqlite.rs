//! SQLite archive store
//!
//! Every `save` appends a new run; `load` returns the latest run's graph.

use crate::graph::{Edge, Page, SiteGraph};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{GraphStore, StorageError, StorageResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens or creates the archive database at `path`
    pub fn new(path: &Path) -> StorageResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns the ID of the most recent run
    pub fn latest_run(&self) -> StorageResult<Option<i64>> {
        let id = self
            .conn
            .query_row("SELECT id FROM runs ORDER BY id DESC LIMIT 1", [], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(id)
    }

    /// Returns the number of saved runs
    pub fn count_runs(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM runs", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn load_run(&self, run_id: i64) -> StorageResult<SiteGraph> {
        let mut graph = SiteGraph::new();

        let mut stmt = self.conn.prepare(
            "SELECT url, title, screenshot, error_message FROM pages
             WHERE run_id = ?1 ORDER BY ord",
        )?;
        let pages = stmt.query_map(params![run_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                Page {
                    title: row.get(1)?,
                    screenshot: row.get(2)?,
                    error: row.get(3)?,
                },
            ))
        })?;
        for page in pages {
            let (url, page) = page?;
            graph.pages.insert(url, page);
        }

        let mut stmt = self.conn.prepare(
            "SELECT source, target, text FROM edges WHERE run_id = ?1 ORDER BY ord",
        )?;
        let edges = stmt.query_map(params![run_id], |row| {
            Ok(Edge {
                source: row.get(0)?,
                target: row.get(1)?,
                text: row.get(2)?,
            })
        })?;
        for edge in edges {
            graph.edges.push(edge?);
        }

        Ok(graph)
    }
}

impl GraphStore for SqliteStore {
    fn save(&mut self, graph: &SiteGraph) -> StorageResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO runs (saved_at, page_count, edge_count) VALUES (?1, ?2, ?3)",
            params![
                Utc::now().to_rfc3339(),
                graph.pages.len() as i64,
                graph.edges.len() as i64
            ],
        )?;
        let run_id = tx.last_insert_rowid();

        {
            let mut insert_page = tx.prepare(
                "INSERT INTO pages (run_id, ord, url, title, screenshot, error_message)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (ord, (url, page)) in graph.pages.iter().enumerate() {
                insert_page.execute(params![
                    run_id,
                    ord as i64,
                    url,
                    page.title,
                    page.screenshot,
                    page.error
                ])?;
            }

            let mut insert_edge = tx.prepare(
                "INSERT INTO edges (run_id, ord, source, target, text) VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (ord, edge) in graph.edges.iter().enumerate() {
                insert_edge.execute(params![run_id, ord as i64, edge.source, edge.target, edge.text])?;
            }
        }

        tx.commit()?;

        tracing::info!(
            "Archived site graph as run {} ({} pages, {} edges)",
            run_id,
            graph.pages.len(),
            graph.edges.len()
        );
        Ok(())
    }

    fn load(&self) -> StorageResult<SiteGraph> {
        let run_id = self.latest_run()?.ok_or(StorageError::NotFound)?;
        self.load_run(run_id)
    }
}
