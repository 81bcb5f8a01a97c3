//! Embedded relational connector backed by SQLite.

use std::fmt;
use std::path::Path;

use jiff::Timestamp;
use rusqlite::Connection;

use crate::connector::StorageConnector;
use crate::error::{StoreError, StoreResult};
use crate::row::Row;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS features (
    feature     TEXT NOT NULL,
    dtype       TEXT NOT NULL,
    payload     TEXT NOT NULL,
    inserted_at TEXT
);
CREATE INDEX IF NOT EXISTS features_by_name ON features (feature);
";

/// A connector persisting rows in a SQLite database.
pub struct SqliteConnector {
    conn: Option<Connection>,
}

impl SqliteConnector {
    /// Opens (or creates) the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn: Some(conn) })
    }

    fn conn(&self) -> StoreResult<&Connection> {
        self.conn.as_ref().ok_or(StoreError::Closed("sqlite"))
    }
}

impl StorageConnector for SqliteConnector {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn add(&mut self, row: Row) -> StoreResult<()> {
        self.conn()?.execute(
            "INSERT INTO features (feature, dtype, payload, inserted_at) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                row.feature,
                row.dtype,
                row.payload.to_string(),
                row.inserted_at.map(|ts| ts.to_string()),
            ],
        )?;
        Ok(())
    }

    fn query(&self, key: &str) -> StoreResult<Vec<Row>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT feature, dtype, payload, inserted_at FROM features \
             WHERE feature = ?1",
        )?;
        let mapped = stmt.query_map([key], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<String>>(3)?,
            ))
        })?;

        let mut rows = Vec::new();
        for item in mapped {
            let (feature, dtype, payload, inserted_at) = item?;
            let payload = serde_json::from_str(&payload)?;
            let inserted_at = inserted_at
                .map(|ts| ts.parse::<Timestamp>())
                .transpose()
                .map_err(|err| StoreError::serialization(err.to_string()))?;
            rows.push(Row {
                feature,
                dtype,
                payload,
                inserted_at,
            });
        }
        Ok(rows)
    }

    fn close(&mut self) -> StoreResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, err)| StoreError::from(err))?;
        }
        Ok(())
    }
}

impl fmt::Debug for SqliteConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteConnector")
            .field("closed", &self.conn.is_none())
            .finish()
    }
}
