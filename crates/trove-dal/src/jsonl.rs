//! File-backed connector storing one JSON row per line.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::connector::StorageConnector;
use crate::error::{StoreError, StoreResult};
use crate::row::Row;

/// An append-only JSON-lines connector.
///
/// Writes are flushed per row, so a query always observes every row added
/// before it. Queries scan the whole file; this connector trades lookup
/// speed for a durable, greppable on-disk format.
pub struct JsonlConnector {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl JsonlConnector {
    /// Opens (or creates) the file at the given path.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageConnector for JsonlConnector {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn add(&mut self, row: Row) -> StoreResult<()> {
        let writer = self.writer.as_mut().ok_or(StoreError::Closed("jsonl"))?;
        serde_json::to_writer(&mut *writer, &row)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    fn query(&self, key: &str) -> StoreResult<Vec<Row>> {
        if self.writer.is_none() {
            return Err(StoreError::Closed("jsonl"));
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let row: Row = serde_json::from_str(&line)?;
            if row.feature == key {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    fn close(&mut self) -> StoreResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for JsonlConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonlConnector")
            .field("path", &self.path)
            .field("closed", &self.writer.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_query_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.jsonl");

        let mut connector = JsonlConnector::open(&path).unwrap();
        connector
            .add(Row::new("step", "int64", serde_json::json!(1)))
            .unwrap();
        connector
            .add(Row::new("step", "int64", serde_json::json!(2)))
            .unwrap();
        connector
            .add(Row::new("reward", "float64", serde_json::json!(0.5)))
            .unwrap();

        let rows = connector.query("step").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].payload, serde_json::json!(2));
        assert!(connector.query("missing").unwrap().is_empty());
    }

    #[test]
    fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.jsonl");

        let mut connector = JsonlConnector::open(&path).unwrap();
        connector
            .add(Row::new("step", "int64", serde_json::json!(1)))
            .unwrap();
        connector.close().unwrap();

        let reopened = JsonlConnector::open(&path).unwrap();
        assert_eq!(reopened.query("step").unwrap().len(), 1);
    }

    #[test]
    fn test_operations_after_close_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.jsonl");

        let mut connector = JsonlConnector::open(&path).unwrap();
        connector.close().unwrap();
        connector.close().unwrap();
        assert!(matches!(
            connector.add(Row::new("step", "int64", serde_json::json!(1))),
            Err(StoreError::Closed("jsonl"))
        ));
        assert!(matches!(
            connector.query("step"),
            Err(StoreError::Closed("jsonl"))
        ));
    }
}
