//! External ML feature-spec boundary.

use serde::{Deserialize, Serialize};

use crate::kind::DataKind;
use crate::shape::Shape;

/// A feature spec as exchanged with ML dataset tooling.
///
/// Text is a scalar string feature; everything else is a scalar or tensor
/// carrying its element kind explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureSpec {
    /// A scalar text feature.
    Text,
    /// A scalar feature of the given kind.
    Scalar {
        /// Element kind.
        dtype: DataKind,
    },
    /// A fixed-shape tensor feature.
    Tensor {
        /// Dimension extents.
        shape: Shape,
        /// Element kind.
        dtype: DataKind,
    },
}

impl FeatureSpec {
    /// The element kind carried by this spec.
    #[must_use]
    pub fn dtype(&self) -> DataKind {
        match self {
            Self::Text => DataKind::String,
            Self::Scalar { dtype } | Self::Tensor { dtype, .. } => *dtype,
        }
    }

    /// The dimension shape carried by this spec.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Text | Self::Scalar { .. } => Shape::scalar(),
            Self::Tensor { shape, .. } => shape.clone(),
        }
    }
}
