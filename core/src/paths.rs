//! Dotted path enumeration
//!
//! Own columns yield their bare name; each embed contributes its columns
//! prefixed with `embed.`, recursively. Relations never yield paths. Own
//! columns come before embeds, each in declaration order.

use smallvec::SmallVec;

use crate::{predicate::Predicate, schema::Column, schema::Entity};

/// Separator between an embed name and the path below it.
pub const SEPARATOR: char = '.';

/// Every column path reachable from `entity`.
#[must_use]
pub fn all_paths(entity: &Entity) -> Vec<String> {
    paths_where(entity, |_| true)
}

/// Paths of primary columns only, at every embed depth.
#[must_use]
pub fn primary_paths(entity: &Entity) -> Vec<String> {
    paths_where(entity, Column::is_primary)
}

/// Paths of the columns satisfying `predicate`.
#[must_use]
pub fn paths_matching(entity: &Entity, predicate: Predicate) -> Vec<String> {
    paths_where(entity, |column| predicate.matches(column))
}

/// Paths of the columns for which `filter` holds.
///
/// No uniqueness check is made; an unvalidated entity with a repeated name
/// yields the path twice. [`validate_entity`](crate::validate::validate_entity)
/// rejects such entities.
pub fn paths_where(entity: &Entity, filter: impl Fn(&Column) -> bool) -> Vec<String> {
    let mut out = Vec::new();
    collect(entity, &filter, "", &mut out);
    out
}

fn collect(entity: &Entity, filter: &dyn Fn(&Column) -> bool, prefix: &str, out: &mut Vec<String>) {
    for column in &entity.columns {
        if filter(column) {
            out.push(join(prefix, column.name()));
        }
    }
    for embed in &entity.embeds {
        let nested = join(prefix, embed.name());
        collect(&embed.entity, filter, &nested, out);
    }
}

/// Append `name` below `prefix`; an empty prefix is the entity root.
#[must_use]
pub fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        let mut path = String::with_capacity(prefix.len() + 1 + name.len());
        path.push_str(prefix);
        path.push(SEPARATOR);
        path.push_str(name);
        path
    }
}

/// Split a dotted path into its segments.
#[must_use]
pub fn split(path: &str) -> SmallVec<[&str; 4]> {
    path.split(SEPARATOR).collect()
}
