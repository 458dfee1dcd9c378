//! Entity and embed descriptors

use std::borrow::Cow;

use ormshape_types::{Driver, ValueType};
use serde::{Deserialize, Serialize};

use super::{Column, ColumnDef, Relation, RelationDef};
use crate::{error::Result, resolve};

/// Const-friendly embed definition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmbedDef {
    pub name: &'static str,
    pub entity: &'static EntityDef,
}

impl EmbedDef {
    #[must_use]
    pub const fn new(name: &'static str, entity: &'static EntityDef) -> Self {
        Self { name, entity }
    }
}

/// Const-friendly entity definition.
///
/// # Examples
///
/// ```
/// use ormshape_core::schema::{ColumnDef, EmbedDef, EntityDef, RelationDef};
///
/// const PROFILE: EntityDef = EntityDef::new("Profile")
///     .columns(&[ColumnDef::new("bio", "text").nullable()]);
///
/// const USER: EntityDef = EntityDef::new("User")
///     .columns(&[
///         ColumnDef::new("id", "integer").primary().generated(),
///         ColumnDef::new("name", "text"),
///     ])
///     .relations(&[RelationDef::one_to_many("posts", "Post", "author")])
///     .embeds(&[EmbedDef::new("profile", &PROFILE)]);
///
/// assert_eq!(USER.columns.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
    pub relations: &'static [RelationDef],
    pub embeds: &'static [EmbedDef],
}

impl EntityDef {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            columns: &[],
            relations: &[],
            embeds: &[],
        }
    }

    #[must_use]
    pub const fn columns(self, columns: &'static [ColumnDef]) -> Self {
        Self { columns, ..self }
    }

    #[must_use]
    pub const fn relations(self, relations: &'static [RelationDef]) -> Self {
        Self { relations, ..self }
    }

    #[must_use]
    pub const fn embeds(self, embeds: &'static [EmbedDef]) -> Self {
        Self { embeds, ..self }
    }

    /// Convert to runtime [`Entity`] type
    #[must_use]
    pub fn into_entity(self) -> Entity {
        Entity {
            name: Cow::Borrowed(self.name),
            columns: self.columns.iter().map(|c| c.into_column()).collect(),
            relations: self.relations.iter().map(|r| r.into_relation()).collect(),
            embeds: self
                .embeds
                .iter()
                .map(|e| Embed {
                    name: Cow::Borrowed(e.name),
                    entity: e.entity.into_entity(),
                })
                .collect(),
        }
    }
}

/// Runtime embed descriptor: a named, nested entity whose columns are
/// addressed as `embed.column`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub name: Cow<'static, str>,
    pub entity: Entity,
}

impl Embed {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, entity: impl Into<Entity>) -> Self {
        Self {
            name: name.into(),
            entity: entity.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Runtime entity descriptor.
///
/// Columns, relations and embeds keep their declaration order; every
/// derived path list and shape follows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: Cow<'static, str>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl Entity {
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            relations: Vec::new(),
            embeds: Vec::new(),
        }
    }

    #[must_use]
    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    #[must_use]
    pub fn relation(mut self, relation: impl Into<Relation>) -> Self {
        self.relations.push(relation.into());
        self
    }

    #[must_use]
    pub fn embed(mut self, name: impl Into<Cow<'static, str>>, entity: impl Into<Entity>) -> Self {
        self.embeds.push(Embed::new(name, entity));
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    #[must_use]
    pub fn get_relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.name() == name)
    }

    #[must_use]
    pub fn get_embed(&self, name: &str) -> Option<&Embed> {
        self.embeds.iter().find(|e| e.name() == name)
    }

    /// Own field names in declaration order: columns, then relations, then embeds.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .map(Column::name)
            .chain(self.relations.iter().map(Relation::name))
            .chain(self.embeds.iter().map(Embed::name))
    }

    /// Value type of an own column under `driver`.
    pub fn column_type(&self, driver: &Driver, column: &str) -> Result<ValueType> {
        resolve::resolve_column(self, driver, column)
    }

    /// Value type of the column at a dotted path under `driver`.
    pub fn resolve_path(&self, driver: &Driver, path: &str) -> Result<ValueType> {
        resolve::resolve_path(self, driver, path)
    }
}

impl From<EntityDef> for Entity {
    fn from(def: EntityDef) -> Self {
        def.into_entity()
    }
}

impl From<&EntityDef> for Entity {
    fn from(def: &EntityDef) -> Self {
        def.into_entity()
    }
}

/// An entity named in a data source registry, or a descriptor used directly.
#[derive(Clone, Copy, Debug)]
pub enum EntityRef<'a> {
    Name(&'a str),
    Entity(&'a Entity),
}

impl<'a> From<&'a str> for EntityRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a Entity> for EntityRef<'a> {
    fn from(entity: &'a Entity) -> Self {
        Self::Entity(entity)
    }
}
