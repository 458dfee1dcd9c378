//! Mixed primary-key representation
//!
//! Callers may identify a row either by the bare value of its only primary
//! column or by an object of all primary values keyed by local column name.

use compact_str::CompactString;
use hashbrown::HashMap;
use ormshape_types::{Driver, ValueType};
use serde::Serialize;

use crate::{
    error::{Result, SchemaError},
    predicate::Predicate,
    schema::Entity,
    shape::{Shape, ShapeField},
    value_map::{self, FlatEntry},
};

/// The accepted identifier form for lookups by primary key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixedPrimaryKey {
    /// Exactly one primary column: its value alone identifies the row.
    Scalar { path: String, ty: ValueType },
    /// Several primary columns, flattened across embeds to their local names.
    Composite { shape: Shape, paths: Vec<String> },
}

impl MixedPrimaryKey {
    /// Derive the mixed key of `entity`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::AmbiguousPrimaryKeyShape`] when the entity has no
    /// primary column, or when two primary columns in different embeds share
    /// a local name.
    pub fn derive(entity: &Entity, driver: &Driver) -> Result<Self> {
        let mut entries = value_map::flatten(entity, driver, Predicate::Primary)?;
        match entries.len() {
            0 => Err(SchemaError::ambiguous_primary_key(
                entity.name(),
                "no primary column is declared",
            )),
            1 => {
                let FlatEntry { path, ty, .. } = entries.remove(0);
                Ok(Self::Scalar { path, ty })
            }
            _ => composite(entity, entries),
        }
    }

    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Composite { .. })
    }

    /// Dotted paths of the primary columns, in path order.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Self::Scalar { path, .. } => vec![path.as_str()],
            Self::Composite { paths, .. } => paths.iter().map(String::as_str).collect(),
        }
    }

    #[must_use]
    pub const fn as_scalar(&self) -> Option<&ValueType> {
        match self {
            Self::Scalar { ty, .. } => Some(ty),
            Self::Composite { .. } => None,
        }
    }

    #[must_use]
    pub const fn as_composite(&self) -> Option<&Shape> {
        match self {
            Self::Composite { shape, .. } => Some(shape),
            Self::Scalar { .. } => None,
        }
    }
}

fn composite(entity: &Entity, entries: Vec<FlatEntry>) -> Result<MixedPrimaryKey> {
    let mut seen: HashMap<CompactString, String> = HashMap::with_capacity(entries.len());
    let mut shape = Shape::new();
    let mut paths = Vec::with_capacity(entries.len());

    for entry in entries {
        if let Some(first) = seen.get(entry.name.as_str()) {
            return Err(SchemaError::ambiguous_primary_key(
                entity.name(),
                format!(
                    "primary columns '{first}' and '{}' both flatten to '{}'",
                    entry.path, entry.name
                ),
            ));
        }
        seen.insert(CompactString::from(entry.name.as_str()), entry.path.clone());
        shape.insert(ShapeField::value(entry.name.as_str(), entry.ty));
        paths.push(entry.path);
    }

    Ok(MixedPrimaryKey::Composite { shape, paths })
}

impl core::fmt::Display for MixedPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Scalar { ty, .. } => write!(f, "{ty}"),
            Self::Composite { shape, .. } => write!(f, "{shape}"),
        }
    }
}
