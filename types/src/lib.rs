//! Shared type vocabulary for ormshape
//!
//! This crate provides the leaf layer every other ormshape crate builds on:
//!
//! - [`ScalarType`] - the base value types a storage type resolves to
//! - [`Driver`] - a named column-type table mapping storage type keys to scalars
//! - [`ValueType`] - a scalar wrapped in the array and nullable modifiers
//! - [`Literal`] - primitive default values (text, integer, real, boolean)
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

mod driver;
mod literal;
mod scalar;
mod value;

pub use driver::{Driver, DriverKind, DriverParseError};
pub use literal::{Literal, LiteralDef};
pub use scalar::ScalarType;
pub use value::ValueType;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Driver, DriverKind, Literal, LiteralDef, ScalarType, ValueType};
}
