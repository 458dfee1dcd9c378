//! # ormshape
//!
//! Entity shape inference for an object-relational mapper.
//!
//! Describe an entity once (its columns, relations and embedded
//! sub-entities) and ormshape derives the shapes of every value that flows
//! through the ORM: the row model, the deep-partial insert/update payload,
//! the primary-key map and its mixed scalar-or-object form, the generated
//! and default maps, the post-insert row, and the dotted paths of every
//! column.
//!
//! ## Quick Start
//!
//! ```rust
//! use ormshape::prelude::*;
//!
//! const PROFILE: EntityDef = EntityDef::new("Profile").columns(&[
//!     ColumnDef::new("bio", "text").nullable(),
//!     ColumnDef::new("age", "integer"),
//! ]);
//!
//! const USER: EntityDef = EntityDef::new("User")
//!     .columns(&[
//!         ColumnDef::new("id", "integer").primary().generated(),
//!         ColumnDef::new("name", "text"),
//!         ColumnDef::new("role", "text").default_value(LiteralDef::Text("member")),
//!     ])
//!     .embeds(&[EmbedDef::new("profile", &PROFILE)]);
//!
//! # fn main() -> ormshape::Result<()> {
//! let mut source = DataSource::new(Driver::sqlite());
//! let shapes = source.register(USER)?;
//!
//! assert_eq!(shapes.all_paths, ["id", "name", "role", "profile.bio", "profile.age"]);
//! assert_eq!(shapes.mixed_primary_key.to_string(), "i32");
//!
//! let input = shapes.input(["name", "profile.age"])?;
//! let row = shapes.post_insert(&input)?;
//! assert!(row.is_required("id"));
//! assert!(row.is_required("role"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Drivers
//!
//! | Driver     | Aliases              |
//! |------------|----------------------|
//! | SQLite     | `turso`, `libsql`    |
//! | PostgreSQL | `postgres`, `pg`     |
//! | MySQL      | `mariadb`            |

pub use ormshape_core::error::Result;

/// Error types
pub mod error {
    pub use ormshape_core::config::ConfigError;
    pub use ormshape_core::error::SchemaError;
    pub use ormshape_types::DriverParseError;
}

/// Driver vocabulary
pub use ormshape_types as types;

pub use ormshape_core::{
    config, data_source, derived, model, paths, predicate, primary_key, resolve, schema, shape,
    validate, value_map,
};

pub use ormshape_core::{DataSource, EntityShapes, MixedPrimaryKey, OrmConfig, Predicate, Shape};

/// Prelude module for commonly used types
pub mod prelude {
    pub use ormshape_core::schema::{
        Column, ColumnDef, Embed, EmbedDef, Entity, EntityDef, EntityRef, Relation, RelationDef,
        RelationKind,
    };
    pub use ormshape_core::{
        DataSource, EntityShapes, FieldKind, MixedPrimaryKey, OrmConfig, Predicate, SchemaError,
        Shape, ShapeField,
    };
    pub use ormshape_types::{Driver, DriverKind, Literal, LiteralDef, ScalarType, ValueType};
}
