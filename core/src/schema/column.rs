//! Column descriptors
//!
//! This module provides two complementary types:
//! - [`ColumnDef`] - A const-friendly definition type for compile-time entity definitions
//! - [`Column`] - A runtime type for serde serialization/deserialization

use std::borrow::Cow;

use ormshape_types::{Driver, Literal, LiteralDef, ValueType};
use serde::{Deserialize, Serialize};

// =============================================================================
// Default and Transform Types
// =============================================================================

/// Column default (const-friendly)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DefaultDef {
    /// A primitive literal applied when the caller omits the column
    Literal(LiteralDef),
    /// A store-side expression such as `CURRENT_TIMESTAMP`
    Expression(&'static str),
}

impl DefaultDef {
    /// Convert to runtime type
    #[must_use]
    pub const fn into_default(self) -> ColumnDefault {
        match self {
            Self::Literal(lit) => ColumnDefault::Literal(lit.into_literal()),
            Self::Expression(sql) => ColumnDefault::Expression {
                sql: Cow::Borrowed(sql),
            },
        }
    }
}

/// Column default (runtime)
///
/// Only [`ColumnDefault::Literal`] counts as a default when deriving the
/// default-value map; an expression's value is not known up front.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnDefault {
    Literal(Literal),
    Expression { sql: Cow<'static, str> },
}

impl ColumnDefault {
    #[must_use]
    pub const fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            Self::Expression { .. } => None,
        }
    }
}

/// Load/store converter names (const-friendly)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransformDef {
    pub load: &'static str,
    pub store: &'static str,
}

/// Load/store converter names (runtime)
///
/// The converters themselves live in the persistence layer; shape
/// derivation carries them but never looks at them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transform {
    pub load: Cow<'static, str>,
    pub store: Cow<'static, str>,
}

// =============================================================================
// Const-friendly Definition Type
// =============================================================================

/// Const-friendly column definition for compile-time entity definitions.
///
/// # Examples
///
/// ```
/// use ormshape_core::schema::ColumnDef;
///
/// const ID: ColumnDef = ColumnDef::new("id", "uuid").primary().generated();
///
/// const COLUMNS: &[ColumnDef] = &[
///     ColumnDef::new("id", "integer").primary(),
///     ColumnDef::new("name", "text"),
///     ColumnDef::new("tags", "text").array().nullable(),
/// ];
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnDef {
    /// Column name
    pub name: &'static str,
    /// Storage type key into the driver's column-type table
    pub column_type: &'static str,
    pub primary: bool,
    /// Is the value assigned by the store on insert?
    pub generated: bool,
    pub nullable: bool,
    pub array: bool,
    pub default: Option<DefaultDef>,
    pub transform: Option<TransformDef>,
}

impl ColumnDef {
    /// Create a new column definition
    #[must_use]
    pub const fn new(name: &'static str, column_type: &'static str) -> Self {
        Self {
            name,
            column_type,
            primary: false,
            generated: false,
            nullable: false,
            array: false,
            default: None,
            transform: None,
        }
    }

    #[must_use]
    pub const fn primary(self) -> Self {
        Self {
            primary: true,
            ..self
        }
    }

    #[must_use]
    pub const fn generated(self) -> Self {
        Self {
            generated: true,
            ..self
        }
    }

    #[must_use]
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    #[must_use]
    pub const fn array(self) -> Self {
        Self {
            array: true,
            ..self
        }
    }

    /// Set a literal default value
    #[must_use]
    pub const fn default_value(self, value: LiteralDef) -> Self {
        Self {
            default: Some(DefaultDef::Literal(value)),
            ..self
        }
    }

    /// Set a store-side default expression
    #[must_use]
    pub const fn default_sql(self, sql: &'static str) -> Self {
        Self {
            default: Some(DefaultDef::Expression(sql)),
            ..self
        }
    }

    #[must_use]
    pub const fn transform(self, load: &'static str, store: &'static str) -> Self {
        Self {
            transform: Some(TransformDef { load, store }),
            ..self
        }
    }

    /// Convert to runtime [`Column`] type
    #[must_use]
    pub const fn into_column(self) -> Column {
        Column {
            name: Cow::Borrowed(self.name),
            column_type: Cow::Borrowed(self.column_type),
            primary: self.primary,
            generated: self.generated,
            nullable: self.nullable,
            array: self.array,
            default: match self.default {
                Some(def) => Some(def.into_default()),
                None => None,
            },
            transform: match self.transform {
                Some(t) => Some(Transform {
                    load: Cow::Borrowed(t.load),
                    store: Cow::Borrowed(t.store),
                }),
                None => None,
            },
        }
    }
}

// =============================================================================
// Runtime Type for Serde
// =============================================================================

/// Runtime column descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: Cow<'static, str>,

    /// Storage type key into the driver's column-type table
    #[serde(rename = "type")]
    pub column_type: Cow<'static, str>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub generated: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub array: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ColumnDefault>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Column {
    /// Create a new column (runtime)
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        column_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            primary: false,
            generated: false,
            nullable: false,
            array: false,
            default: None,
            transform: None,
        }
    }

    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    #[must_use]
    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Set a literal default value
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Literal>) -> Self {
        self.default = Some(ColumnDefault::Literal(value.into()));
        self
    }

    /// Set a store-side default expression
    #[must_use]
    pub fn default_sql(mut self, sql: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(ColumnDefault::Expression { sql: sql.into() });
        self
    }

    #[must_use]
    pub fn transform(
        mut self,
        load: impl Into<Cow<'static, str>>,
        store: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.transform = Some(Transform {
            load: load.into(),
            store: store.into(),
        });
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the storage type key
    #[inline]
    #[must_use]
    pub fn column_type(&self) -> &str {
        &self.column_type
    }

    #[inline]
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.primary
    }

    #[inline]
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.generated
    }

    #[inline]
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.array
    }

    /// Check if this column has a primitive literal default
    #[must_use]
    pub fn has_literal_default(&self) -> bool {
        self.default
            .as_ref()
            .is_some_and(|default| default.as_literal().is_some())
    }

    /// Resolve the value type against a driver table.
    ///
    /// Returns `None` when the driver does not know the storage type.
    #[must_use]
    pub fn value_type(&self, driver: &Driver) -> Option<ValueType> {
        driver
            .lookup(&self.column_type)
            .map(|base| ValueType::resolve(base, self.array, self.nullable))
    }
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        def.into_column()
    }
}
