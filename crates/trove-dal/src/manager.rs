//! The storage manager façade.

use std::fmt;

use jiff::Timestamp;
use trove_core::{Feature, FeatureType, FeatureValue};

use crate::TRACING_TARGET;
use crate::connector::StorageConnector;
use crate::error::{StoreError, StoreResult};
use crate::row::Row;

/// A façade routing persistence calls to exactly one connector.
///
/// The connector is constructed externally and handed over at creation;
/// `query` and `close` forward to it unchanged, and `add` builds a row from
/// a named feature and a value before forwarding.
pub struct StorageManager {
    connector: Box<dyn StorageConnector>,
}

impl StorageManager {
    /// Creates a manager over the given connector.
    pub fn new(connector: Box<dyn StorageConnector>) -> Self {
        tracing::info!(
            target: TRACING_TARGET,
            backend = %connector.name(),
            "storage manager initialized"
        );
        Self { connector }
    }

    /// Persists one observation of a feature.
    ///
    /// The value is validated against the feature's declared descriptor
    /// before anything reaches the backend: a kind or shape mismatch fails
    /// with [`StoreError::Incompatible`] and no row is written.
    pub fn add(&mut self, feature: &Feature, value: &FeatureValue) -> StoreResult<()> {
        let inferred = FeatureType::from_data(value)?;
        let declared = feature.dtype();
        if inferred.kind() != declared.kind() || inferred.shape() != declared.shape() {
            return Err(StoreError::Incompatible {
                feature: feature.name().to_owned(),
                expected: declared.to_string(),
                actual: inferred.to_string(),
            });
        }

        let row = Row::new(
            feature.name(),
            declared.to_columnar_type().to_string(),
            value.to_json()?,
        )
        .with_inserted_at(Timestamp::now());

        tracing::debug!(
            target: TRACING_TARGET,
            feature = %feature.name(),
            "adding row"
        );
        self.connector.add(row)
    }

    /// Returns the rows stored under the given key.
    pub fn query(&self, key: &str) -> StoreResult<Vec<Row>> {
        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            "querying rows"
        );
        self.connector.query(key)
    }

    /// Closes the underlying connector.
    pub fn close(&mut self) -> StoreResult<()> {
        tracing::debug!(
            target: TRACING_TARGET,
            backend = %self.connector.name(),
            "closing connector"
        );
        self.connector.close()
    }
}

impl fmt::Debug for StorageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageManager")
            .field("backend", &self.connector.name())
            .finish()
    }
}
