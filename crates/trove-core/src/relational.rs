//! Relational column types and the kind lookup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::DataKind;

/// A relational column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationalType {
    /// Boolean column.
    Boolean,
    /// 16-bit integer column.
    SmallInt,
    /// 32-bit integer column.
    Integer,
    /// 64-bit integer column.
    BigInt,
    /// Single-precision float column.
    Real,
    /// Double-precision float column.
    Double,
    /// Unlimited text column.
    Text,
    /// Variable-length binary column.
    Binary,
    /// Large opaque binary column.
    LargeBinary,
    /// Timestamp without timezone.
    Timestamp,
    /// Timestamp with timezone.
    TimestampTz,
}

impl RelationalType {
    /// The SQL rendering of this column type.
    #[must_use]
    pub fn sql_name(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::SmallInt => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE PRECISION",
            Self::Text => "TEXT",
            Self::Binary => "VARBINARY",
            Self::LargeBinary => "BLOB",
            Self::Timestamp => "TIMESTAMP",
            Self::TimestampTz => "TIMESTAMP WITH TIME ZONE",
        }
    }
}

impl fmt::Display for RelationalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// Looks up the relational column type for an elemental kind.
///
/// `null` has no column type, and `uint64` has no lossless signed-64
/// representation; both return `None` and take the large-binary fallback
/// at the descriptor level.
#[must_use]
pub fn relational_lookup(kind: DataKind) -> Option<RelationalType> {
    let mapped = match kind {
        DataKind::Bool => RelationalType::Boolean,
        DataKind::Int8 | DataKind::Int16 => RelationalType::SmallInt,
        DataKind::Int32 => RelationalType::Integer,
        DataKind::Int64 => RelationalType::BigInt,
        DataKind::Uint8 | DataKind::Uint16 => RelationalType::Integer,
        DataKind::Uint32 => RelationalType::BigInt,
        DataKind::Float16 | DataKind::Float32 => RelationalType::Real,
        DataKind::Float64 => RelationalType::Double,
        DataKind::String | DataKind::LargeString => RelationalType::Text,
        DataKind::Binary => RelationalType::Binary,
        DataKind::LargeBinary => RelationalType::LargeBinary,
        DataKind::TimestampS
        | DataKind::TimestampMs
        | DataKind::TimestampUs
        | DataKind::TimestampNs => RelationalType::Timestamp,
        DataKind::TimestampSTz
        | DataKind::TimestampMsTz
        | DataKind::TimestampUsTz
        | DataKind::TimestampNsTz => RelationalType::TimestampTz,
        DataKind::Null | DataKind::Uint64 => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_integer_widths() {
        assert_eq!(
            relational_lookup(DataKind::Int8),
            Some(RelationalType::SmallInt)
        );
        assert_eq!(
            relational_lookup(DataKind::Int32),
            Some(RelationalType::Integer)
        );
        assert_eq!(
            relational_lookup(DataKind::Uint16),
            Some(RelationalType::Integer)
        );
        assert_eq!(
            relational_lookup(DataKind::Uint32),
            Some(RelationalType::BigInt)
        );
    }

    #[test]
    fn test_lookup_misses() {
        assert_eq!(relational_lookup(DataKind::Null), None);
        assert_eq!(relational_lookup(DataKind::Uint64), None);
    }

    #[test]
    fn test_lookup_temporal() {
        assert_eq!(
            relational_lookup(DataKind::TimestampUs),
            Some(RelationalType::Timestamp)
        );
        assert_eq!(
            relational_lookup(DataKind::TimestampUsTz),
            Some(RelationalType::TimestampTz)
        );
    }

    #[test]
    fn test_sql_names() {
        assert_eq!(RelationalType::Double.sql_name(), "DOUBLE PRECISION");
        assert_eq!(RelationalType::LargeBinary.to_string(), "BLOB");
        assert_eq!(
            RelationalType::TimestampTz.sql_name(),
            "TIMESTAMP WITH TIME ZONE"
        );
    }
}
