#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod connector;
mod error;
mod jsonl;
mod manager;
mod memory;
mod row;
mod sqlite;

pub use config::{ConnectorConfig, JsonlConfig, SqliteConfig};
pub use connector::StorageConnector;
pub use error::{StoreError, StoreResult};
pub use jsonl::JsonlConnector;
pub use manager::StorageManager;
pub use memory::MemoryConnector;
pub use row::Row;
pub use sqlite::SqliteConnector;

/// Tracing target for storage operations.
pub const TRACING_TARGET: &str = "trove_dal";
