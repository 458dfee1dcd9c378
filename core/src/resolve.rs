//! Column type resolution

use ormshape_types::{Driver, ValueType};

use crate::{
    error::{Result, SchemaError},
    paths,
    schema::{Column, Entity},
};

/// Resolve the value type of an own column of `entity`.
pub fn resolve_column(entity: &Entity, driver: &Driver, column: &str) -> Result<ValueType> {
    let col = entity
        .get_column(column)
        .ok_or_else(|| SchemaError::unknown_column(entity.name(), column))?;
    column_value_type(entity, col, driver)
}

/// Resolve the value type of the column at a dotted path, descending
/// through embeds.
pub fn resolve_path(entity: &Entity, driver: &Driver, path: &str) -> Result<ValueType> {
    let segments = paths::split(path);
    let Some((column, embeds)) = segments.split_last() else {
        return Err(SchemaError::unknown_column(entity.name(), path));
    };

    let mut owner = entity;
    for name in embeds {
        owner = match owner.get_embed(name) {
            Some(embed) => &embed.entity,
            None => return Err(SchemaError::unknown_column(entity.name(), path)),
        };
    }

    let col = owner
        .get_column(column)
        .ok_or_else(|| SchemaError::unknown_column(entity.name(), path))?;
    column_value_type(owner, col, driver)
}

pub(crate) fn column_value_type(entity: &Entity, column: &Column, driver: &Driver) -> Result<ValueType> {
    column
        .value_type(driver)
        .ok_or_else(|| SchemaError::UnknownColumnType {
            entity: entity.name().into(),
            column: column.name().into(),
            ty: column.column_type().into(),
            driver: driver.kind(),
        })
}
