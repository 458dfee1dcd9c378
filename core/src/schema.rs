//! Entity descriptors
//!
//! Every descriptor comes in two forms, following the same split as the DDL
//! types:
//! - `*Def` - const-friendly definitions over `&'static` data, so an entity
//!   can be written as a `const` item
//! - runtime types - owned, serde (de)serializable, produced from a `*Def`
//!   or loaded from configuration

mod column;
mod entity;
mod relation;

pub use column::{Column, ColumnDef, ColumnDefault, DefaultDef, Transform, TransformDef};
pub use entity::{Embed, EmbedDef, Entity, EntityDef, EntityRef};
pub use relation::{Relation, RelationDef, RelationKind};
