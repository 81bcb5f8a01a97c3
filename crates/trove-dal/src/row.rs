//! The row representation shared by all connectors.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored feature observation.
///
/// The feature name is the key column: `query` looks rows up by it. The
/// `dtype` field carries the columnar storage tag of the descriptor the row
/// was written under, and the payload is the JSON encoding of the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Feature name (the lookup key).
    pub feature: String,
    /// Columnar storage tag of the feature's descriptor.
    pub dtype: String,
    /// JSON-encoded feature value.
    pub payload: Value,
    /// When the row was handed to the connector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_at: Option<Timestamp>,
}

impl Row {
    /// Creates a row without an insertion timestamp.
    pub fn new(feature: impl Into<String>, dtype: impl Into<String>, payload: Value) -> Self {
        Self {
            feature: feature.into(),
            dtype: dtype.into(),
            payload,
            inserted_at: None,
        }
    }

    /// Sets the insertion timestamp.
    #[must_use]
    pub fn with_inserted_at(mut self, inserted_at: Timestamp) -> Self {
        self.inserted_at = Some(inserted_at);
        self
    }
}
