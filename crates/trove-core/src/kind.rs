//! The closed vocabulary of elemental data kinds.
//!
//! Every feature element in trove is tagged with one [`DataKind`]. The set is
//! closed: typed construction cannot produce a kind outside it, and the
//! string boundary ([`DataKind::parse`]) rejects unknown tags.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{CoreError, CoreResult};

/// An elemental data kind.
///
/// The timestamp variants carry their resolution and timezone-awareness in
/// the tag itself, e.g. `timestamp(ms, tz)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, EnumIter)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    /// The null kind.
    Null,
    /// Boolean.
    Bool,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    Uint8,
    /// 16-bit unsigned integer.
    Uint16,
    /// 32-bit unsigned integer.
    Uint32,
    /// 64-bit unsigned integer.
    Uint64,
    /// 16-bit floating point.
    Float16,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Timestamp with second resolution.
    #[strum(serialize = "timestamp(s)")]
    #[serde(rename = "timestamp(s)")]
    TimestampS,
    /// Timestamp with millisecond resolution.
    #[strum(serialize = "timestamp(ms)")]
    #[serde(rename = "timestamp(ms)")]
    TimestampMs,
    /// Timestamp with microsecond resolution.
    #[strum(serialize = "timestamp(us)")]
    #[serde(rename = "timestamp(us)")]
    TimestampUs,
    /// Timestamp with nanosecond resolution.
    #[strum(serialize = "timestamp(ns)")]
    #[serde(rename = "timestamp(ns)")]
    TimestampNs,
    /// Timezone-aware timestamp with second resolution.
    #[strum(serialize = "timestamp(s, tz)")]
    #[serde(rename = "timestamp(s, tz)")]
    TimestampSTz,
    /// Timezone-aware timestamp with millisecond resolution.
    #[strum(serialize = "timestamp(ms, tz)")]
    #[serde(rename = "timestamp(ms, tz)")]
    TimestampMsTz,
    /// Timezone-aware timestamp with microsecond resolution.
    #[strum(serialize = "timestamp(us, tz)")]
    #[serde(rename = "timestamp(us, tz)")]
    TimestampUsTz,
    /// Timezone-aware timestamp with nanosecond resolution.
    #[strum(serialize = "timestamp(ns, tz)")]
    #[serde(rename = "timestamp(ns, tz)")]
    TimestampNsTz,
    /// Variable-length binary.
    Binary,
    /// Variable-length binary with 64-bit offsets.
    LargeBinary,
    /// Variable-length UTF-8 string.
    String,
    /// Variable-length UTF-8 string with 64-bit offsets.
    LargeString,
}

impl DataKind {
    /// Parses a vocabulary tag.
    ///
    /// This is the single place where free-form strings enter the closed
    /// set; anything not in the vocabulary is a validation error.
    pub fn parse(tag: &str) -> CoreResult<Self> {
        tag.parse()
            .map_err(|_| CoreError::validation(format!("unsupported dtype: {tag}")))
    }

    /// Check if this kind is a signed integer.
    #[must_use]
    pub fn is_signed_integer(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Check if this kind is an unsigned integer.
    #[must_use]
    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    /// Check if this kind is an integer of either signedness.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    /// Check if this kind is a floating point kind.
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float16 | Self::Float32 | Self::Float64)
    }

    /// Check if this kind is numeric.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Check if this kind is a timestamp kind.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::TimestampS
                | Self::TimestampMs
                | Self::TimestampUs
                | Self::TimestampNs
                | Self::TimestampSTz
                | Self::TimestampMsTz
                | Self::TimestampUsTz
                | Self::TimestampNsTz
        )
    }

    /// Check if this kind is a string kind.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String | Self::LargeString)
    }

    /// Check if this kind is a binary kind.
    #[must_use]
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary | Self::LargeBinary)
    }

    /// Check if this kind is a timezone-aware timestamp.
    #[must_use]
    pub fn has_timezone(&self) -> bool {
        matches!(
            self,
            Self::TimestampSTz | Self::TimestampMsTz | Self::TimestampUsTz | Self::TimestampNsTz
        )
    }

    /// Byte width of one element, for fixed-width kinds.
    ///
    /// Variable-width kinds (strings, binaries) and `null` return `None`.
    #[must_use]
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::Int8 | Self::Uint8 => Some(1),
            Self::Int16 | Self::Uint16 | Self::Float16 => Some(2),
            Self::Int32 | Self::Uint32 | Self::Float32 => Some(4),
            Self::Int64 | Self::Uint64 | Self::Float64 => Some(8),
            kind if kind.is_temporal() => Some(8),
            _ => None,
        }
    }
}
