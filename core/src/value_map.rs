//! Value map derivation
//!
//! A value map keeps the columns that satisfy a [`Predicate`], keyed by their
//! local names, with embeds as nested objects. Non-matching columns are
//! absent, and an embed with no matching column anywhere below it is left
//! out of its parent entirely.

use ormshape_types::{Driver, ValueType};

use crate::{
    error::Result,
    paths,
    predicate::Predicate,
    resolve::column_value_type,
    schema::Entity,
    shape::{Shape, ShapeField},
};

/// Derive the value map of `entity` for `predicate`.
///
/// `entity` is expected to have passed [`validate_entity`]: a field name
/// declared twice is not detected here, and the later field replaces the
/// earlier one.
///
/// [`validate_entity`]: crate::validate::validate_entity
pub fn derive(entity: &Entity, driver: &Driver, predicate: Predicate) -> Result<Shape> {
    let mut shape = Shape::new();
    for column in &entity.columns {
        if predicate.matches(column) {
            let ty = column_value_type(entity, column, driver)?;
            shape.insert(ShapeField::value(column.name(), ty));
        }
    }
    for embed in &entity.embeds {
        let nested = derive(&embed.entity, driver, predicate)?;
        if !nested.is_empty() {
            shape.insert(ShapeField::object(embed.name(), nested));
        }
    }
    Ok(shape)
}

/// Primary-key value map
pub fn primary_map(entity: &Entity, driver: &Driver) -> Result<Shape> {
    derive(entity, driver, Predicate::Primary)
}

/// Store-generated value map
pub fn generated_map(entity: &Entity, driver: &Driver) -> Result<Shape> {
    derive(entity, driver, Predicate::Generated)
}

/// Literal-default value map
pub fn default_map(entity: &Entity, driver: &Driver) -> Result<Shape> {
    derive(entity, driver, Predicate::HasDefault)
}

/// A matching column seen through the whole embed tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatEntry {
    /// Dotted path from the root entity
    pub path: String,
    /// The column's own name
    pub name: String,
    pub ty: ValueType,
}

/// Every matching column across the embed tree, in path order.
pub fn flatten(entity: &Entity, driver: &Driver, predicate: Predicate) -> Result<Vec<FlatEntry>> {
    let mut out = Vec::new();
    flatten_into(entity, driver, predicate, "", &mut out)?;
    Ok(out)
}

fn flatten_into(
    entity: &Entity,
    driver: &Driver,
    predicate: Predicate,
    prefix: &str,
    out: &mut Vec<FlatEntry>,
) -> Result<()> {
    for column in &entity.columns {
        if predicate.matches(column) {
            out.push(FlatEntry {
                path: paths::join(prefix, column.name()),
                name: column.name().to_owned(),
                ty: column_value_type(entity, column, driver)?,
            });
        }
    }
    for embed in &entity.embeds {
        let nested = paths::join(prefix, embed.name());
        flatten_into(&embed.entity, driver, predicate, &nested, out)?;
    }
    Ok(())
}
