//! Error types for descriptor validation and shape derivation

use compact_str::CompactString;
use ormshape_types::DriverKind;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// A column name or dotted path that the entity does not declare
    #[error("Unknown column '{column}' on entity '{entity}'")]
    UnknownColumn {
        entity: CompactString,
        column: CompactString,
    },

    /// An entity name missing from the data source registry
    #[error("Unknown entity '{0}'")]
    UnknownEntity(CompactString),

    /// A relation whose target, or whose inverse on the target, is unusable
    #[error("Invalid relation '{relation}' on entity '{entity}': {reason}")]
    InvalidRelationReference {
        entity: CompactString,
        relation: CompactString,
        reason: String,
    },

    /// The primary key cannot be given a mixed representation
    #[error("Ambiguous primary key shape for entity '{entity}': {reason}")]
    AmbiguousPrimaryKeyShape {
        entity: CompactString,
        reason: String,
    },

    /// A column storage type the driver does not know
    #[error("Column '{column}' on entity '{entity}' uses storage type '{ty}' unknown to the {driver} driver")]
    UnknownColumnType {
        entity: CompactString,
        column: CompactString,
        ty: CompactString,
        driver: DriverKind,
    },

    /// An entity registered twice under the same name
    #[error("Entity '{0}' is already registered")]
    DuplicateEntity(CompactString),

    /// A name used by more than one column, relation or embed of an entity
    #[error("Field '{field}' is declared more than once on entity '{entity}'")]
    DuplicateField {
        entity: CompactString,
        field: CompactString,
    },

    /// A dotted path reachable through more than one column
    #[error("Path '{path}' is reachable more than once from entity '{entity}'")]
    DuplicatePath { entity: CompactString, path: String },

    /// An empty name, or one containing the path separator
    #[error("Invalid name '{name}' on entity '{entity}': {reason}")]
    InvalidName {
        entity: CompactString,
        name: CompactString,
        reason: &'static str,
    },

    /// An input field whose kind or value type differs from the model
    #[error("Field '{path}' on entity '{entity}' is {found}, expected {expected}")]
    InputMismatch {
        entity: CompactString,
        path: String,
        expected: String,
        found: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SchemaError {
    pub(crate) fn unknown_column(entity: &str, column: &str) -> Self {
        Self::UnknownColumn {
            entity: entity.into(),
            column: column.into(),
        }
    }

    pub(crate) fn invalid_relation(entity: &str, relation: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRelationReference {
            entity: entity.into(),
            relation: relation.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn ambiguous_primary_key(entity: &str, reason: impl Into<String>) -> Self {
        Self::AmbiguousPrimaryKeyShape {
            entity: entity.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;
