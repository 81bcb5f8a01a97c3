//! In-memory connector for tests and ephemeral use.

use std::collections::HashMap;

use crate::connector::StorageConnector;
use crate::error::{StoreError, StoreResult};
use crate::row::Row;

/// A connector keeping all rows in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryConnector {
    rows: HashMap<String, Vec<Row>>,
    closed: bool,
}

impl MemoryConnector {
    /// Creates an empty in-memory connector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    /// Check if no rows are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(Vec::is_empty)
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.closed {
            return Err(StoreError::Closed("memory"));
        }
        Ok(())
    }
}

impl StorageConnector for MemoryConnector {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn add(&mut self, row: Row) -> StoreResult<()> {
        self.ensure_open()?;
        self.rows.entry(row.feature.clone()).or_default().push(row);
        Ok(())
    }

    fn query(&self, key: &str) -> StoreResult<Vec<Row>> {
        self.ensure_open()?;
        Ok(self.rows.get(key).cloned().unwrap_or_default())
    }

    fn close(&mut self) -> StoreResult<()> {
        self.closed = true;
        Ok(())
    }
}
