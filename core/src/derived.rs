//! Per-entity derived shapes, computed once and cached by the data source.

use ormshape_types::Driver;
use serde::Serialize;

use crate::{
    error::{Result, SchemaError},
    model,
    paths,
    primary_key::MixedPrimaryKey,
    schema::Entity,
    shape::Shape,
    value_map,
};

/// Everything the runtime API needs to know about one entity's values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntityShapes {
    pub all_paths: Vec<String>,
    pub primary_paths: Vec<String>,
    /// Row returned by a find with no selection
    pub model: Shape,
    /// Insert/update payload
    pub partial: Shape,
    pub primary_map: Shape,
    pub generated_map: Shape,
    pub default_map: Shape,
    pub mixed_primary_key: MixedPrimaryKey,
    inserted_paths: Vec<String>,
    #[serde(skip)]
    entity: String,
}

impl EntityShapes {
    /// Walk `entity` once and derive every shape.
    pub fn derive(entity: &Entity, driver: &Driver) -> Result<Self> {
        let model = model::full_model(entity, driver)?;
        Ok(Self {
            all_paths: paths::all_paths(entity),
            primary_paths: paths::primary_paths(entity),
            partial: model.to_partial(),
            primary_map: value_map::primary_map(entity, driver)?,
            generated_map: value_map::generated_map(entity, driver)?,
            default_map: value_map::default_map(entity, driver)?,
            mixed_primary_key: MixedPrimaryKey::derive(entity, driver)?,
            inserted_paths: model::inserted_paths(entity),
            entity: entity.name().to_owned(),
            model,
        })
    }

    /// Paths filled in by the store on insert.
    #[must_use]
    pub fn inserted_paths(&self) -> &[String] {
        &self.inserted_paths
    }

    /// Select exactly `paths` from the full model.
    pub fn select<'p>(&self, paths: impl IntoIterator<Item = &'p str>) -> Result<Shape> {
        self.model
            .pick(paths)
            .map_err(|missing| SchemaError::unknown_column(&self.entity, &missing.0))
    }

    /// Build an insert payload shape from the given paths: each one
    /// optional, as in the partial model.
    pub fn input<'p>(&self, paths: impl IntoIterator<Item = &'p str>) -> Result<Shape> {
        self.partial
            .pick(paths)
            .map_err(|missing| SchemaError::unknown_column(&self.entity, &missing.0))
    }

    /// Shape of the row after inserting `input`.
    pub fn post_insert(&self, input: &Shape) -> Result<Shape> {
        model::post_insert_with(&self.entity, &self.model, &self.inserted_paths, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;

    fn user() -> Entity {
        Entity::new("User")
            .column(Column::new("id", "integer").primary().generated())
            .column(Column::new("email", "text"))
            .column(Column::new("active", "boolean").default_value(true))
            .embed(
                "profile",
                Entity::new("Profile").column(Column::new("bio", "text").nullable()),
            )
    }

    #[test]
    fn test_derive_all() {
        let shapes = EntityShapes::derive(&user(), &Driver::sqlite()).unwrap();
        assert_eq!(shapes.all_paths, vec!["id", "email", "active", "profile.bio"]);
        assert_eq!(shapes.primary_paths, vec!["id"]);
        assert_eq!(shapes.primary_map.to_string(), "{ id: i32 }");
        assert_eq!(shapes.generated_map.to_string(), "{ id: i32 }");
        assert_eq!(shapes.default_map.to_string(), "{ active: bool }");
        assert!(!shapes.mixed_primary_key.is_composite());
        assert_eq!(shapes.inserted_paths(), ["id", "active"]);
    }

    #[test]
    fn test_input_and_post_insert() {
        let shapes = EntityShapes::derive(&user(), &Driver::sqlite()).unwrap();
        let input = shapes.input(["email", "profile.bio"]).unwrap();
        let row = shapes.post_insert(&input).unwrap();

        let mut paths = row.paths();
        paths.sort();
        assert_eq!(paths, vec!["active", "email", "id", "profile.bio"]);
        assert!(row.is_required("id"));
        assert!(row.is_required("active"));
        assert!(!row.is_required("email"));
    }

    #[test]
    fn test_select_unknown_path() {
        let shapes = EntityShapes::derive(&user(), &Driver::sqlite()).unwrap();
        assert_eq!(
            shapes.select(["profile.avatar"]),
            Err(SchemaError::unknown_column("User", "profile.avatar"))
        );
    }
}
