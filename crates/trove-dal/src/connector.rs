//! The storage connector contract.

use crate::error::StoreResult;
use crate::row::Row;

/// The capability set every storage backend must supply.
///
/// Connectors are synchronous and assume exclusive single-caller use; a
/// connector shared across threads must be serialized externally. Lookup
/// semantics are exact-match on the feature name for all shipped
/// connectors. `close` releases backend resources and is idempotent for the
/// connectors in this crate; any operation after `close` fails with
/// [`StoreError::Closed`](crate::StoreError::Closed).
pub trait StorageConnector: Send {
    /// The backend name, for logging and Debug output.
    fn name(&self) -> &'static str;

    /// Persists one row.
    fn add(&mut self, row: Row) -> StoreResult<()>;

    /// Returns the rows stored under the given key.
    fn query(&self, key: &str) -> StoreResult<Vec<Row>>;

    /// Releases all backend resources.
    fn close(&mut self) -> StoreResult<()>;
}
