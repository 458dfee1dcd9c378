//! Descriptor validation
//!
//! Local checks run per entity at registration. Relation references are a
//! separate pass since targets may be registered later.

use hashbrown::HashSet;
use ormshape_types::Driver;

use crate::{
    error::{Result, SchemaError},
    paths,
    schema::{Entity, RelationKind},
};

/// Validate one entity tree against `driver`.
pub fn validate_entity(entity: &Entity, driver: &Driver) -> Result<()> {
    // Phase 1: structural checks at every embed level.
    validate_level(entity, driver)?;

    // Phase 2: whole-tree path uniqueness.
    let mut seen = HashSet::new();
    for path in paths::all_paths(entity) {
        if seen.contains(path.as_str()) {
            return Err(SchemaError::DuplicatePath {
                entity: entity.name().into(),
                path,
            });
        }
        seen.insert(path);
    }

    Ok(())
}

// Names, field uniqueness, storage types and relation shape of one level.
fn validate_level(entity: &Entity, driver: &Driver) -> Result<()> {
    if entity.name().is_empty() {
        return Err(SchemaError::InvalidName {
            entity: entity.name().into(),
            name: entity.name().into(),
            reason: "entity names must not be empty",
        });
    }

    let mut fields = HashSet::new();
    for name in entity.field_names() {
        check_field_name(entity, name)?;
        if !fields.insert(name) {
            return Err(SchemaError::DuplicateField {
                entity: entity.name().into(),
                field: name.into(),
            });
        }
    }

    for column in &entity.columns {
        if !driver.supports(column.column_type()) {
            return Err(SchemaError::UnknownColumnType {
                entity: entity.name().into(),
                column: column.name().into(),
                ty: column.column_type().into(),
                driver: driver.kind(),
            });
        }
    }

    for relation in &entity.relations {
        if relation.reference().is_empty() {
            return Err(SchemaError::invalid_relation(
                entity.name(),
                relation.name(),
                "no target entity is named",
            ));
        }
        if relation.kind.requires_inverse() && relation.inverse_name().is_none() {
            return Err(SchemaError::invalid_relation(
                entity.name(),
                relation.name(),
                format!("{} relations must name an inverse", relation.kind),
            ));
        }
    }

    for embed in &entity.embeds {
        validate_level(&embed.entity, driver)?;
    }

    Ok(())
}

fn check_field_name(entity: &Entity, name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "field names must not be empty"
    } else if name.contains(paths::SEPARATOR) {
        "field names must not contain '.'"
    } else {
        return Ok(());
    };
    Err(SchemaError::InvalidName {
        entity: entity.name().into(),
        name: name.into(),
        reason,
    })
}

/// Check every relation reachable from `entity` against the registry.
///
/// The target must resolve through `lookup`. A declared inverse must be a
/// relation of the target that points back at `entity` with the pairing
/// kind.
pub fn validate_relations<'a>(
    entity: &Entity,
    lookup: impl Fn(&str) -> Option<&'a Entity>,
) -> Result<()> {
    relations_at(entity.name(), entity, &lookup)
}

fn relations_at<'a>(
    root: &str,
    entity: &Entity,
    lookup: &dyn Fn(&str) -> Option<&'a Entity>,
) -> Result<()> {
    for relation in &entity.relations {
        let Some(target) = lookup(relation.reference()) else {
            return Err(SchemaError::invalid_relation(
                root,
                relation.name(),
                format!("target entity '{}' is not registered", relation.reference()),
            ));
        };

        let Some(inverse_name) = relation.inverse_name() else {
            continue;
        };
        let Some(inverse) = target.get_relation(inverse_name) else {
            return Err(SchemaError::invalid_relation(
                root,
                relation.name(),
                format!(
                    "inverse '{inverse_name}' is not a relation of '{}'",
                    target.name()
                ),
            ));
        };
        if inverse.reference() != root {
            return Err(SchemaError::invalid_relation(
                root,
                relation.name(),
                format!(
                    "inverse '{}.{inverse_name}' references '{}', not '{root}'",
                    target.name(),
                    inverse.reference()
                ),
            ));
        }
        if !pairs_with(relation.kind, inverse.kind) {
            return Err(SchemaError::invalid_relation(
                root,
                relation.name(),
                format!(
                    "a {} relation cannot pair with the {} inverse '{inverse_name}'",
                    relation.kind, inverse.kind
                ),
            ));
        }
    }

    for embed in &entity.embeds {
        relations_at(root, &embed.entity, lookup)?;
    }
    Ok(())
}

fn pairs_with(kind: RelationKind, inverse: RelationKind) -> bool {
    kind.inverse_kind() == inverse
}
