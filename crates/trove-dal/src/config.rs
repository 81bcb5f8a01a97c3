//! Connector configuration types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;
use crate::connector::StorageConnector;
use crate::error::StoreResult;
use crate::jsonl::JsonlConnector;
use crate::memory::MemoryConnector;
use crate::sqlite::SqliteConnector;

/// Configuration for the JSON-lines connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonlConfig {
    /// Path of the JSON-lines file.
    pub path: PathBuf,
}

/// Configuration for the SQLite connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// Path of the database file.
    pub path: PathBuf,
}

/// Storage connector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ConnectorConfig {
    /// In-memory connector.
    Memory,
    /// JSON-lines file connector.
    Jsonl(JsonlConfig),
    /// Embedded SQLite connector.
    Sqlite(SqliteConfig),
}

impl ConnectorConfig {
    /// Returns the backend name as a static string.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Jsonl(_) => "jsonl",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Constructs the connector this configuration describes.
    pub fn connect(&self) -> StoreResult<Box<dyn StorageConnector>> {
        let connector: Box<dyn StorageConnector> = match self {
            Self::Memory => Box::new(MemoryConnector::new()),
            Self::Jsonl(cfg) => Box::new(JsonlConnector::open(cfg.path.clone())?),
            Self::Sqlite(cfg) => Box::new(SqliteConnector::open(&cfg.path)?),
        };

        tracing::info!(
            target: TRACING_TARGET,
            backend = %self.backend_name(),
            "storage connector initialized"
        );

        Ok(connector)
    }
}
