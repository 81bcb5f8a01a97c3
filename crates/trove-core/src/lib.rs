#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod columnar;
mod error;
mod feature;
mod kind;
mod relational;
mod shape;
mod spec;
mod value;

pub use columnar::ColumnarType;
pub use error::{CoreError, CoreResult};
pub use feature::{Feature, FeatureType, FeatureTypeBuilder};
pub use kind::DataKind;
pub use relational::{RelationalType, relational_lookup};
pub use shape::Shape;
pub use spec::FeatureSpec;
pub use value::{FeatureValue, ScalarValue, TensorValue};
