// crates/zk-image-core/src/store.rs - Metadata storage
//
// The catalogue only ever needs four things from its database: make sure the
// table exists, add a row, find rows by substring, drop a row. `ImageStore`
// is that seam; `SqliteStore` is the implementation the CLI ships with.

use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::record::{ImageRecord, NewImage};

/// Errors raised by a metadata store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Narrow interface over the metadata table
pub trait ImageStore {
    /// Create the `images` table if it does not exist yet
    fn ensure_schema(&self) -> StoreResult<()>;

    /// Insert one row; `created_at` is filled in by the store
    fn insert(&self, image: &NewImage) -> StoreResult<()>;

    /// Rows whose description or source contains `term`, in storage order
    fn search(&self, term: &str) -> StoreResult<Vec<ImageRecord>>;

    /// Delete the row with this id, returning how many rows went away
    fn delete(&self, id: &str) -> StoreResult<usize>;
}

const CREATE_IMAGES_TABLE: &str = "CREATE TABLE IF NOT EXISTS images (
    id TEXT PRIMARY KEY,
    description TEXT,
    source TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// SQLite-backed image metadata
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`
    ///
    /// The parent directory must already exist. The schema is not touched;
    /// call [`ImageStore::ensure_schema`] before use.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened image database");
        Ok(Self { conn })
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Look up one row by id
    pub fn get(&self, id: &str) -> StoreResult<Option<ImageRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT id, description, source, created_at FROM images WHERE id = ?1",
                [id],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Number of rows in the catalogue
    pub fn count(&self) -> StoreResult<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM images", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl ImageStore for SqliteStore {
    fn ensure_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(CREATE_IMAGES_TABLE)?;
        Ok(())
    }

    fn insert(&self, image: &NewImage) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO images (id, description, source) VALUES (?1, ?2, ?3)",
            params![image.id.as_str(), image.description, image.source],
        )?;
        Ok(())
    }

    // LIKE keeps SQLite's semantics: ASCII case-insensitive, and any `%` or
    // `_` in the term acts as a wildcard.
    fn search(&self, term: &str) -> StoreResult<Vec<ImageRecord>> {
        let pattern = format!("%{}%", term);
        let mut stmt = self.conn.prepare(
            "SELECT id, description, source, created_at FROM images \
             WHERE description LIKE ?1 OR source LIKE ?1",
        )?;

        let rows = stmt.query_map([&pattern], row_to_record)?;

        let mut records = Vec::new();
        for record in rows {
            records.push(record?);
        }

        tracing::debug!(term, matches = records.len(), "searched images");
        Ok(records)
    }

    fn delete(&self, id: &str) -> StoreResult<usize> {
        let deleted = self.conn.execute("DELETE FROM images WHERE id = ?1", [id])?;
        Ok(deleted)
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<ImageRecord> {
    Ok(ImageRecord {
        id: row.get(0)?,
        description: row.get(1)?,
        source: row.get(2)?,
        created_at: row.get(3)?,
    })
}
