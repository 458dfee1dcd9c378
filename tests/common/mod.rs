#![allow(dead_code)]

use ormshape::prelude::*;

pub const ADDRESS: EntityDef = EntityDef::new("Address").columns(&[
    ColumnDef::new("street", "text"),
    ColumnDef::new("city", "text"),
    ColumnDef::new("zip", "varchar").nullable(),
]);

pub const PROFILE: EntityDef = EntityDef::new("Profile")
    .columns(&[
        ColumnDef::new("bio", "text").nullable(),
        ColumnDef::new("age", "integer").primary(),
        ColumnDef::new("score", "real").default_value(LiteralDef::Real(0.0)),
    ])
    .embeds(&[EmbedDef::new("address", &ADDRESS)]);

pub const USER: EntityDef = EntityDef::new("User")
    .columns(&[
        ColumnDef::new("id", "integer").primary().generated(),
        ColumnDef::new("name", "text"),
        ColumnDef::new("tags", "text").array().nullable(),
        ColumnDef::new("active", "boolean").default_value(LiteralDef::Bool(true)),
        ColumnDef::new("created_at", "timestamp").default_sql("now()"),
    ])
    .relations(&[RelationDef::one_to_many("posts", "Post", "author")])
    .embeds(&[EmbedDef::new("profile", &PROFILE)]);

pub const POST: EntityDef = EntityDef::new("Post")
    .columns(&[
        ColumnDef::new("id", "serial").primary().generated(),
        ColumnDef::new("title", "varchar"),
        ColumnDef::new("status", "text").default_value(LiteralDef::Text("draft")),
    ])
    .relations(&[RelationDef::many_to_one("author", "User")]);

/// A registry with `User` and `Post` on the postgres driver.
pub fn blog() -> DataSource {
    DataSource::new(Driver::postgres())
        .with_entity(USER)
        .and_then(|source| source.with_entity(POST))
        .and_then(DataSource::finish)
        .unwrap()
}
