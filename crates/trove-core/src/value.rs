//! Concrete feature values.
//!
//! These are the values descriptors are inferred from and the payloads rows
//! carry: a scalar, an ordered sequence of scalars, or an n-dimensional
//! tensor with a typed element buffer.

use bytes::Bytes;
use derive_more::From;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::kind::DataKind;
use crate::shape::Shape;

/// A single scalar value.
///
/// Each variant maps to exactly one [`DataKind`], so kind inference can
/// never produce a tag outside the vocabulary.
#[derive(Debug, Clone, PartialEq, From, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ScalarValue {
    /// The null value.
    #[from(ignore)]
    Null,
    /// Boolean.
    Bool(bool),
    /// 8-bit signed integer.
    Int8(i8),
    /// 16-bit signed integer.
    Int16(i16),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 8-bit unsigned integer.
    Uint8(u8),
    /// 16-bit unsigned integer.
    Uint16(u16),
    /// 32-bit unsigned integer.
    Uint32(u32),
    /// 64-bit unsigned integer.
    Uint64(u64),
    /// 32-bit floating point.
    Float32(f32),
    /// 64-bit floating point.
    Float64(f64),
    /// UTF-8 string.
    String(String),
    /// Raw binary.
    Binary(Bytes),
    /// An absolute instant with nanosecond precision.
    Timestamp(Timestamp),
}

impl ScalarValue {
    /// The vocabulary kind of this value.
    ///
    /// A [`Timestamp`] is a nanosecond-precision instant, so it maps to
    /// `timestamp(ns, tz)`.
    #[must_use]
    pub fn kind(&self) -> DataKind {
        match self {
            Self::Null => DataKind::Null,
            Self::Bool(_) => DataKind::Bool,
            Self::Int8(_) => DataKind::Int8,
            Self::Int16(_) => DataKind::Int16,
            Self::Int32(_) => DataKind::Int32,
            Self::Int64(_) => DataKind::Int64,
            Self::Uint8(_) => DataKind::Uint8,
            Self::Uint16(_) => DataKind::Uint16,
            Self::Uint32(_) => DataKind::Uint32,
            Self::Uint64(_) => DataKind::Uint64,
            Self::Float32(_) => DataKind::Float32,
            Self::Float64(_) => DataKind::Float64,
            Self::String(_) => DataKind::String,
            Self::Binary(_) => DataKind::Binary,
            Self::Timestamp(_) => DataKind::TimestampNsTz,
        }
    }

    /// Check if this value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the payload as JSON.
    ///
    /// Binary renders as a byte array, timestamps as RFC 3339 strings,
    /// non-finite floats as JSON null.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(v) => Value::from(*v),
            Self::Int8(v) => Value::from(*v),
            Self::Int16(v) => Value::from(*v),
            Self::Int32(v) => Value::from(*v),
            Self::Int64(v) => Value::from(*v),
            Self::Uint8(v) => Value::from(*v),
            Self::Uint16(v) => Value::from(*v),
            Self::Uint32(v) => Value::from(*v),
            Self::Uint64(v) => Value::from(*v),
            Self::Float32(v) => Value::from(*v),
            Self::Float64(v) => Value::from(*v),
            Self::String(v) => Value::from(v.clone()),
            Self::Binary(v) => Value::from(v.to_vec()),
            Self::Timestamp(v) => Value::from(v.to_string()),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

/// An n-dimensional array value: element kind, shape, raw element buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorValue {
    kind: DataKind,
    shape: Shape,
    #[serde(with = "serde_bytes")]
    data: Bytes,
}

impl TensorValue {
    /// Creates a tensor value, validating the buffer length against the
    /// shape for fixed-width element kinds.
    pub fn new(kind: DataKind, shape: impl Into<Shape>, data: Bytes) -> CoreResult<Self> {
        let shape = shape.into();
        if let Some(width) = kind.fixed_width() {
            let expected = shape.num_elements() * width;
            if data.len() != expected {
                return Err(CoreError::validation(format!(
                    "tensor buffer length {} does not match shape {shape} of {kind} \
                     (expected {expected} bytes)",
                    data.len(),
                )));
            }
        }
        Ok(Self { kind, shape, data })
    }

    /// The element kind.
    #[must_use]
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// The dimension shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The raw element buffer.
    #[must_use]
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

/// A concrete value a feature descriptor can be inferred from.
#[derive(Debug, Clone, PartialEq, From, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FeatureValue {
    /// An n-dimensional array.
    Tensor(TensorValue),
    /// An ordered sequence of scalars.
    Sequence(Vec<ScalarValue>),
    /// A single scalar.
    Scalar(ScalarValue),
}

impl FeatureValue {
    /// Renders the value as a JSON payload.
    pub fn to_json(&self) -> CoreResult<Value> {
        match self {
            Self::Tensor(tensor) => serde_json::to_value(tensor)
                .map_err(|err| CoreError::conversion(format!("tensor payload: {err}"))),
            Self::Sequence(items) => Ok(Value::from(
                items.iter().map(ScalarValue::to_json).collect::<Vec<_>>(),
            )),
            Self::Scalar(scalar) => Ok(scalar.to_json()),
        }
    }
}

mod serde_bytes {
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bytes: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bytes.as_ref().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        let vec = Vec::<u8>::deserialize(deserializer)?;
        Ok(Bytes::from(vec))
    }
}
