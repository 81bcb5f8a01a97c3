//! Feature descriptors.
//!
//! A [`FeatureType`] pairs one elemental kind with a dimension shape and is
//! immutable once built. It is produced by exactly one of three construction
//! paths (inference from a value, translation from an external spec, or an
//! explicit kind/shape pair) and renders itself into the external type
//! systems trove interoperates with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columnar::ColumnarType;
use crate::error::{CoreError, CoreResult};
use crate::kind::DataKind;
use crate::relational::{RelationalType, relational_lookup};
use crate::shape::Shape;
use crate::spec::FeatureSpec;
use crate::value::FeatureValue;

/// The descriptor of one feature: elemental kind plus shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureType {
    kind: DataKind,
    shape: Shape,
    /// Whether this descriptor was derived from an array-typed source.
    /// Array-origin features are stored opaquely in relational targets.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    array_origin: bool,
}

impl FeatureType {
    /// Creates a descriptor from an explicit kind and shape.
    ///
    /// An absent shape means scalar.
    #[must_use]
    pub fn new(kind: DataKind, shape: Option<Shape>) -> Self {
        Self {
            kind,
            shape: shape.unwrap_or_default(),
            array_origin: false,
        }
    }

    /// Creates a descriptor from a kind tag and shape.
    ///
    /// Fails with a validation error if the tag is outside the vocabulary.
    pub fn parse(tag: &str, shape: Option<Shape>) -> CoreResult<Self> {
        Ok(Self::new(DataKind::parse(tag)?, shape))
    }

    /// Infers a descriptor from a concrete value.
    ///
    /// Tensors contribute their element kind and shape and are flagged as
    /// array-origin; sequences infer the kind of their first element with a
    /// one-dimensional shape; scalars infer their own kind with the scalar
    /// shape.
    pub fn from_data(value: &FeatureValue) -> CoreResult<Self> {
        match value {
            FeatureValue::Tensor(tensor) => Ok(Self {
                kind: tensor.kind(),
                shape: tensor.shape().clone(),
                array_origin: true,
            }),
            FeatureValue::Sequence(items) => {
                let first = items.first().ok_or_else(|| {
                    CoreError::validation("cannot infer element kind from an empty sequence")
                })?;
                Ok(Self {
                    kind: first.kind(),
                    shape: Shape::from([items.len()]),
                    array_origin: false,
                })
            }
            FeatureValue::Scalar(scalar) => Ok(Self {
                kind: scalar.kind(),
                shape: Shape::scalar(),
                array_origin: false,
            }),
        }
    }

    /// Translates an external feature spec into a descriptor.
    ///
    /// Tensor specs are array-typed sources and are flagged as array-origin.
    #[must_use]
    pub fn from_spec(spec: &FeatureSpec) -> Self {
        Self {
            kind: spec.dtype(),
            shape: spec.shape(),
            array_origin: matches!(spec, FeatureSpec::Tensor { .. }),
        }
    }

    /// Returns a builder reproducing the priority dispatch over optional
    /// construction inputs.
    #[must_use]
    pub fn builder() -> FeatureTypeBuilder {
        FeatureTypeBuilder::default()
    }

    /// The elemental kind.
    #[must_use]
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// The dimension shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Whether this descriptor was derived from an array-typed source.
    #[must_use]
    pub fn is_array_origin(&self) -> bool {
        self.array_origin
    }

    /// Renders this descriptor as an external feature spec.
    ///
    /// Scalar strings become text features, other scalars become scalar
    /// specs, and anything of rank one or higher becomes a tensor spec.
    #[must_use]
    pub fn to_spec(&self) -> FeatureSpec {
        if self.shape.is_scalar() {
            if self.kind == DataKind::String {
                FeatureSpec::Text
            } else {
                FeatureSpec::Scalar { dtype: self.kind }
            }
        } else {
            FeatureSpec::Tensor {
                shape: self.shape.clone(),
                dtype: self.kind,
            }
        }
    }

    /// Renders this descriptor as a relational column type.
    ///
    /// Array-origin features are never decomposed into relational
    /// primitives; they map to the opaque large-binary column. Kinds the
    /// lookup has no mapping for take the same fallback, so this conversion
    /// never fails.
    #[must_use]
    pub fn to_relational_type(&self) -> RelationalType {
        if self.array_origin {
            return RelationalType::LargeBinary;
        }
        relational_lookup(self.kind).unwrap_or(RelationalType::LargeBinary)
    }

    /// Renders this descriptor as a columnar storage tag.
    ///
    /// Non-scalar features collapse to the opaque `object` tag.
    #[must_use]
    pub fn to_columnar_type(&self) -> ColumnarType {
        if self.shape.is_scalar() {
            ColumnarType::Scalar(self.kind)
        } else {
            ColumnarType::Object
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dtype={}, shape={}", self.kind, self.shape)
    }
}

/// Builder dispatching over the optional construction inputs in priority
/// order: concrete value, then external spec, then explicit kind/shape.
#[derive(Debug, Default)]
pub struct FeatureTypeBuilder {
    kind: Option<DataKind>,
    shape: Option<Shape>,
    spec: Option<FeatureSpec>,
    data: Option<FeatureValue>,
}

impl FeatureTypeBuilder {
    /// Sets the explicit kind.
    #[must_use]
    pub fn kind(mut self, kind: DataKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the explicit shape.
    #[must_use]
    pub fn shape(mut self, shape: impl Into<Shape>) -> Self {
        self.shape = Some(shape.into());
        self
    }

    /// Sets the external feature spec.
    #[must_use]
    pub fn spec(mut self, spec: FeatureSpec) -> Self {
        self.spec = Some(spec);
        self
    }

    /// Sets the concrete value to infer from.
    #[must_use]
    pub fn data(mut self, value: FeatureValue) -> Self {
        self.data = Some(value);
        self
    }

    /// Builds the descriptor from the highest-priority input present.
    ///
    /// With no input at all this is a configuration error.
    pub fn build(self) -> CoreResult<FeatureType> {
        if let Some(value) = self.data {
            FeatureType::from_data(&value)
        } else if let Some(spec) = self.spec {
            Ok(FeatureType::from_spec(&spec))
        } else if let Some(kind) = self.kind {
            Ok(FeatureType::new(kind, self.shape))
        } else {
            Err(CoreError::configuration(
                "either a kind/shape pair or a concrete value must be provided",
            ))
        }
    }
}

/// A named feature: the unit the storage manager persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    name: String,
    dtype: FeatureType,
}

impl Feature {
    /// Creates a named feature.
    pub fn new(name: impl Into<String>, dtype: FeatureType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }

    /// The feature name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The feature descriptor.
    #[must_use]
    pub fn dtype(&self) -> &FeatureType {
        &self.dtype
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::value::{ScalarValue, TensorValue};

    #[test]
    fn test_explicit_construction_covers_vocabulary() {
        let shapes = [None, Some(Shape::scalar()), Some(Shape::from([3, 4]))];
        for kind in DataKind::iter() {
            for shape in &shapes {
                let dtype = FeatureType::new(kind, shape.clone());
                assert_eq!(dtype.kind(), kind);
                assert_eq!(
                    dtype.shape(),
                    &shape.clone().unwrap_or_default(),
                );
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = FeatureType::parse("float128", None).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_from_data_sequence() {
        let value = FeatureValue::from(vec![
            ScalarValue::from(1i64),
            ScalarValue::from(2i64),
            ScalarValue::from(3i64),
        ]);
        let dtype = FeatureType::from_data(&value).unwrap();
        assert_eq!(dtype.kind(), DataKind::Int64);
        assert_eq!(dtype.shape(), &Shape::from([3]));
        assert!(!dtype.is_array_origin());
    }

    #[test]
    fn test_from_data_scalar() {
        let value = FeatureValue::from(ScalarValue::from(5i64));
        let dtype = FeatureType::from_data(&value).unwrap();
        assert_eq!(dtype.kind(), DataKind::Int64);
        assert!(dtype.shape().is_scalar());
    }

    #[test]
    fn test_from_data_tensor() {
        let tensor =
            TensorValue::new(DataKind::Float32, [2, 3], Bytes::from(vec![0u8; 24])).unwrap();
        let dtype = FeatureType::from_data(&tensor.into()).unwrap();
        assert_eq!(dtype.kind(), DataKind::Float32);
        assert_eq!(dtype.shape(), &Shape::from([2, 3]));
        assert!(dtype.is_array_origin());
    }

    #[test]
    fn test_from_data_empty_sequence() {
        let value = FeatureValue::Sequence(Vec::new());
        let err = FeatureType::from_data(&value).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_spec_round_trip_for_scalars() {
        for kind in DataKind::iter().filter(|k| *k != DataKind::String) {
            let dtype = FeatureType::new(kind, None);
            let rebuilt = FeatureType::from_spec(&dtype.to_spec());
            assert_eq!(rebuilt.kind(), dtype.kind());
            assert_eq!(rebuilt.shape(), dtype.shape());
        }
    }

    #[test]
    fn test_spec_round_trip_for_tensors() {
        let dtype = FeatureType::new(DataKind::Uint8, Some(Shape::from([28, 28])));
        let spec = dtype.to_spec();
        assert_eq!(
            spec,
            FeatureSpec::Tensor {
                shape: Shape::from([28, 28]),
                dtype: DataKind::Uint8,
            }
        );
        let rebuilt = FeatureType::from_spec(&spec);
        assert_eq!(rebuilt.kind(), dtype.kind());
        assert_eq!(rebuilt.shape(), dtype.shape());
    }

    #[test]
    fn test_scalar_string_renders_as_text_spec() {
        let dtype = FeatureType::new(DataKind::String, None);
        assert_eq!(dtype.to_spec(), FeatureSpec::Text);
    }

    #[test]
    fn test_columnar_conversion() {
        let string = FeatureType::new(DataKind::String, None);
        assert_eq!(string.to_columnar_type().to_string(), "string");

        let scalar = FeatureType::new(DataKind::Int16, None);
        assert_eq!(scalar.to_columnar_type().to_string(), "int16");

        let tensor = FeatureType::new(DataKind::Float64, Some(Shape::from([8])));
        assert_eq!(tensor.to_columnar_type().to_string(), "object");
    }

    #[test]
    fn test_relational_conversion_never_fails() {
        for kind in DataKind::iter() {
            let _ = FeatureType::new(kind, None).to_relational_type();
        }
        assert_eq!(
            FeatureType::new(DataKind::Uint64, None).to_relational_type(),
            RelationalType::LargeBinary
        );
        assert_eq!(
            FeatureType::new(DataKind::Null, None).to_relational_type(),
            RelationalType::LargeBinary
        );
    }

    #[test]
    fn test_array_origin_forces_large_binary() {
        let tensor =
            TensorValue::new(DataKind::Int32, [2], Bytes::from(vec![0u8; 8])).unwrap();
        let dtype = FeatureType::from_data(&tensor.into()).unwrap();
        assert_eq!(dtype.to_relational_type(), RelationalType::LargeBinary);

        // The same kind without array provenance maps through the lookup.
        let plain = FeatureType::new(DataKind::Int32, Some(Shape::from([2])));
        assert_eq!(plain.to_relational_type(), RelationalType::Integer);
    }

    #[test]
    fn test_builder_priority() {
        // Data wins over spec and kind.
        let dtype = FeatureType::builder()
            .kind(DataKind::Bool)
            .spec(FeatureSpec::Text)
            .data(FeatureValue::from(ScalarValue::from(1.5f64)))
            .build()
            .unwrap();
        assert_eq!(dtype.kind(), DataKind::Float64);

        // Spec wins over kind.
        let dtype = FeatureType::builder()
            .kind(DataKind::Bool)
            .spec(FeatureSpec::Scalar {
                dtype: DataKind::Int8,
            })
            .build()
            .unwrap();
        assert_eq!(dtype.kind(), DataKind::Int8);
    }

    #[test]
    fn test_builder_without_input_is_a_configuration_error() {
        let err = FeatureType::builder().build().unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
        assert!(
            err.to_string()
                .contains("either a kind/shape pair or a concrete value must be provided")
        );
    }

    #[test]
    fn test_display() {
        let dtype = FeatureType::new(DataKind::Float32, Some(Shape::from([2, 3])));
        assert_eq!(dtype.to_string(), "dtype=float32, shape=[2, 3]");
    }

    #[test]
    fn test_feature_accessors() {
        let feature = Feature::new("observation", FeatureType::new(DataKind::Float32, None));
        assert_eq!(feature.name(), "observation");
        assert_eq!(feature.dtype().kind(), DataKind::Float32);
    }
}
