//! Core of ormshape: entity descriptors and the shapes derived from them.
//!
//! Descriptors are walked once, when an entity is registered with a
//! [`DataSource`]; the resulting [`EntityShapes`] are cached and every later
//! lookup is a map read.

pub mod config;
pub mod data_source;
pub mod derived;
pub mod error;
pub mod model;
pub mod paths;
pub mod predicate;
pub mod primary_key;
pub mod resolve;
pub mod schema;
pub mod shape;
pub mod trace;
pub mod validate;
pub mod value_map;

// Re-export key types
pub use config::{ConfigError, OrmConfig};
pub use data_source::{DataSource, RegisteredEntity};
pub use derived::EntityShapes;
pub use error::{Result, SchemaError};
pub use predicate::Predicate;
pub use primary_key::MixedPrimaryKey;
pub use schema::{
    Column, ColumnDef, Embed, EmbedDef, Entity, EntityDef, EntityRef, Relation, RelationDef,
    RelationKind,
};
pub use shape::{FieldKind, MissingPath, Shape, ShapeField};
