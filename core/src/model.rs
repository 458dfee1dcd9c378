//! Derived model shapes
//!
//! The full model is what a find with no selection returns; the partial model
//! is the deep-partial payload accepted by insert and update; the post-insert
//! model is a caller's payload merged with the values the store fills in.

use ormshape_types::Driver;

use crate::{
    error::{Result, SchemaError},
    paths,
    resolve::column_value_type,
    schema::{Column, Entity},
    shape::{FieldKind, Shape, ShapeField},
};

/// Every column as a required field, every embed as a nested object.
///
/// Nullable columns stay required keys; their value type carries the
/// `Nullable` wrapper instead. Like every derivation here, this expects an
/// entity accepted by [`validate_entity`](crate::validate::validate_entity);
/// duplicate field names collapse to the last one.
pub fn full_model(entity: &Entity, driver: &Driver) -> Result<Shape> {
    let mut shape = Shape::new();
    for column in &entity.columns {
        let ty = column_value_type(entity, column, driver)?;
        shape.insert(ShapeField::value(column.name(), ty));
    }
    for embed in &entity.embeds {
        shape.insert(ShapeField::object(embed.name(), full_model(&embed.entity, driver)?));
    }
    Ok(shape)
}

/// Deep-partial model: every field optional, at every depth.
pub fn partial_model(entity: &Entity, driver: &Driver) -> Result<Shape> {
    full_model(entity, driver).map(Shape::into_partial)
}

/// Paths the store fills in on insert: generated columns and columns with a
/// primitive literal default.
#[must_use]
pub fn inserted_paths(entity: &Entity) -> Vec<String> {
    paths::paths_where(entity, |column: &Column| {
        column.is_generated() || column.has_literal_default()
    })
}

/// The shape of a row right after inserting `input`.
///
/// `input` is kept as given and intersected with the full model projected
/// onto the generated and defaulted paths, so those become required.
///
/// # Errors
///
/// [`SchemaError::UnknownColumn`] if `input` names a field the entity lacks,
/// including an empty object, and [`SchemaError::InputMismatch`] if a field
/// holds a value where the model has an object (or the reverse) or a value
/// type other than the model's.
pub fn post_insert_model(entity: &Entity, driver: &Driver, input: &Shape) -> Result<Shape> {
    let full = full_model(entity, driver)?;
    post_insert_with(entity.name(), &full, &inserted_paths(entity), input)
}

pub(crate) fn post_insert_with(
    entity: &str,
    full: &Shape,
    inserted: &[String],
    input: &Shape,
) -> Result<Shape> {
    check_input(entity, "", full, input)?;
    let filled = full
        .pick(inserted.iter().map(String::as_str))
        .map_err(|missing| SchemaError::unknown_column(entity, &missing.0))?;
    Ok(input.intersect(&filled))
}

fn check_input(entity: &str, prefix: &str, full: &Shape, input: &Shape) -> Result<()> {
    for field in input {
        let path = paths::join(prefix, &field.name);
        let Some(expected) = full.get(&field.name) else {
            return Err(SchemaError::unknown_column(entity, &path));
        };
        match (&expected.kind, &field.kind) {
            (FieldKind::Object(model), FieldKind::Object(given)) => {
                check_input(entity, &path, model, given)?;
            }
            (FieldKind::Value(model), FieldKind::Value(given)) if model == given => {}
            (model, given) => {
                return Err(SchemaError::InputMismatch {
                    entity: entity.into(),
                    path,
                    expected: describe(model),
                    found: describe(given),
                });
            }
        }
    }
    Ok(())
}

fn describe(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Value(ty) => ty.to_string(),
        FieldKind::Object(_) => "an object".to_owned(),
    }
}
