//! Driver column-type tables
//!
//! A [`Driver`] owns the table of storage types an entity's columns may
//! declare, each mapped to the [`ScalarType`] its values resolve to. The
//! built-in tables cover SQLite, PostgreSQL and MySQL; custom storage types
//! can be added on top of any of them.

use compact_str::{CompactString, ToCompactString};
use hashbrown::HashMap;

use crate::ScalarType;

/// Which built-in column-type table a driver starts from.
///
/// # Examples
///
/// ```
/// use ormshape_types::DriverKind;
///
/// assert_eq!(DriverKind::parse("sqlite"), Some(DriverKind::SQLite));
/// assert_eq!(DriverKind::parse("pg"), Some(DriverKind::PostgreSQL));
/// assert_eq!(DriverKind::parse("unknown"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DriverKind {
    /// Compatible with: rusqlite, libsql, turso
    #[default]
    SQLite,

    /// Compatible with: tokio-postgres, postgres, sqlx
    PostgreSQL,

    /// Compatible with: mysql, sqlx
    MySQL,
}

impl DriverKind {
    /// Parse a driver kind from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"turso"`, `"libsql"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("sqlite")
            || s.eq_ignore_ascii_case("turso")
            || s.eq_ignore_ascii_case("libsql")
        {
            Some(Self::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Self::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Self::MySQL)
        } else {
            None
        }
    }

    /// Get the driver name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SQLite => "sqlite",
            Self::PostgreSQL => "postgresql",
            Self::MySQL => "mysql",
        }
    }

    /// The built-in storage types for this driver.
    #[must_use]
    pub const fn column_types(&self) -> &'static [(&'static str, ScalarType)] {
        match self {
            Self::SQLite => SQLITE_TYPES,
            Self::PostgreSQL => POSTGRES_TYPES,
            Self::MySQL => MYSQL_TYPES,
        }
    }
}

impl core::fmt::Display for DriverKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for DriverKind {
    type Err = DriverParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DriverParseError(s.to_compact_string()))
    }
}

/// Error returned when parsing an unknown driver string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown driver '{0}'")]
pub struct DriverParseError(pub CompactString);

const SQLITE_TYPES: &[(&str, ScalarType)] = &[
    ("integer", ScalarType::Integer),
    ("int", ScalarType::Integer),
    ("bigint", ScalarType::BigInt),
    ("text", ScalarType::Text),
    ("varchar", ScalarType::Text),
    ("character", ScalarType::Text),
    ("clob", ScalarType::Text),
    ("real", ScalarType::Real),
    ("double", ScalarType::Real),
    ("float", ScalarType::Real),
    ("numeric", ScalarType::Decimal),
    ("decimal", ScalarType::Decimal),
    ("boolean", ScalarType::Boolean),
    ("date", ScalarType::Date),
    ("datetime", ScalarType::Timestamp),
    ("json", ScalarType::Json),
    ("uuid", ScalarType::Uuid),
    ("blob", ScalarType::Bytes),
];

const POSTGRES_TYPES: &[(&str, ScalarType)] = &[
    ("smallint", ScalarType::Integer),
    ("integer", ScalarType::Integer),
    ("int", ScalarType::Integer),
    ("int4", ScalarType::Integer),
    ("serial", ScalarType::Integer),
    ("bigint", ScalarType::BigInt),
    ("int8", ScalarType::BigInt),
    ("bigserial", ScalarType::BigInt),
    ("real", ScalarType::Real),
    ("double precision", ScalarType::Real),
    ("numeric", ScalarType::Decimal),
    ("decimal", ScalarType::Decimal),
    ("boolean", ScalarType::Boolean),
    ("bool", ScalarType::Boolean),
    ("text", ScalarType::Text),
    ("varchar", ScalarType::Text),
    ("char", ScalarType::Text),
    ("uuid", ScalarType::Uuid),
    ("json", ScalarType::Json),
    ("jsonb", ScalarType::Json),
    ("bytea", ScalarType::Bytes),
    ("date", ScalarType::Date),
    ("time", ScalarType::Time),
    ("timestamp", ScalarType::Timestamp),
    ("timestamptz", ScalarType::Timestamp),
];

const MYSQL_TYPES: &[(&str, ScalarType)] = &[
    ("tinyint", ScalarType::Integer),
    ("smallint", ScalarType::Integer),
    ("int", ScalarType::Integer),
    ("integer", ScalarType::Integer),
    ("bigint", ScalarType::BigInt),
    ("float", ScalarType::Real),
    ("double", ScalarType::Real),
    ("decimal", ScalarType::Decimal),
    ("boolean", ScalarType::Boolean),
    ("varchar", ScalarType::Text),
    ("char", ScalarType::Text),
    ("text", ScalarType::Text),
    ("json", ScalarType::Json),
    ("binary", ScalarType::Bytes),
    ("blob", ScalarType::Bytes),
    ("date", ScalarType::Date),
    ("time", ScalarType::Time),
    ("datetime", ScalarType::Timestamp),
    ("timestamp", ScalarType::Timestamp),
];

/// A named column-type table.
///
/// Keys are matched case-insensitively, and a parenthesised length or
/// precision suffix is ignored, so `VARCHAR(255)` resolves like `varchar`.
///
/// # Examples
///
/// ```
/// use ormshape_types::{Driver, ScalarType};
///
/// let driver = Driver::postgres().with_type("citext", ScalarType::Text);
/// assert_eq!(driver.lookup("VARCHAR(64)"), Some(ScalarType::Text));
/// assert_eq!(driver.lookup("citext"), Some(ScalarType::Text));
/// assert_eq!(driver.lookup("money"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    kind: DriverKind,
    types: HashMap<CompactString, ScalarType>,
}

impl Driver {
    /// Create a driver seeded with the built-in table of `kind`.
    #[must_use]
    pub fn new(kind: DriverKind) -> Self {
        let types = kind
            .column_types()
            .iter()
            .map(|&(name, scalar)| (CompactString::const_new(name), scalar))
            .collect();
        Self { kind, types }
    }

    #[must_use]
    pub fn sqlite() -> Self {
        Self::new(DriverKind::SQLite)
    }

    #[must_use]
    pub fn postgres() -> Self {
        Self::new(DriverKind::PostgreSQL)
    }

    #[must_use]
    pub fn mysql() -> Self {
        Self::new(DriverKind::MySQL)
    }

    /// Add or override a storage type
    #[must_use]
    pub fn with_type(mut self, name: &str, scalar: ScalarType) -> Self {
        self.insert_type(name, scalar);
        self
    }

    /// Add or override a storage type in place
    pub fn insert_type(&mut self, name: &str, scalar: ScalarType) {
        self.types.insert(normalize(name), scalar);
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> DriverKind {
        self.kind
    }

    /// Resolve a storage type key to its scalar.
    #[must_use]
    pub fn lookup(&self, storage_type: &str) -> Option<ScalarType> {
        self.types.get(&normalize(storage_type)).copied()
    }

    /// Whether `storage_type` resolves through this driver's table.
    #[must_use]
    pub fn supports(&self, storage_type: &str) -> bool {
        self.lookup(storage_type).is_some()
    }

    /// Number of storage types known to this driver
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DriverKind::default())
    }
}

impl From<DriverKind> for Driver {
    fn from(kind: DriverKind) -> Self {
        Self::new(kind)
    }
}

// Lowercase, trimmed, with any `(..)` parameter suffix removed.
fn normalize(storage_type: &str) -> CompactString {
    let base = match storage_type.find('(') {
        Some(idx) => &storage_type[..idx],
        None => storage_type,
    };
    base.trim().to_ascii_lowercase().to_compact_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_kind_parse() {
        assert_eq!(DriverKind::parse("SQLite"), Some(DriverKind::SQLite));
        assert_eq!(DriverKind::parse("turso"), Some(DriverKind::SQLite));
        assert_eq!(DriverKind::parse("postgres"), Some(DriverKind::PostgreSQL));
        assert_eq!(DriverKind::parse("PG"), Some(DriverKind::PostgreSQL));
        assert_eq!(DriverKind::parse("mariadb"), Some(DriverKind::MySQL));
        assert_eq!(DriverKind::parse(""), None);
        assert!("oracle".parse::<DriverKind>().is_err());
    }

    #[test]
    fn test_driver_kind_display() {
        assert_eq!(format!("{}", DriverKind::SQLite), "sqlite");
        assert_eq!(format!("{}", DriverKind::PostgreSQL), "postgresql");
        assert_eq!(format!("{}", DriverKind::MySQL), "mysql");
    }

    #[test]
    fn test_builtin_tables() {
        let sqlite = Driver::sqlite();
        assert_eq!(sqlite.lookup("integer"), Some(ScalarType::Integer));
        assert_eq!(sqlite.lookup("BLOB"), Some(ScalarType::Bytes));
        assert_eq!(sqlite.lookup("jsonb"), None);

        let pg = Driver::postgres();
        assert_eq!(pg.lookup("jsonb"), Some(ScalarType::Json));
        assert_eq!(pg.lookup("double precision"), Some(ScalarType::Real));
        assert_eq!(pg.lookup("numeric(10, 2)"), Some(ScalarType::Decimal));

        let mysql = Driver::mysql();
        assert_eq!(mysql.lookup("tinyint(1)"), Some(ScalarType::Integer));
        assert_eq!(mysql.kind(), DriverKind::MySQL);
    }

    #[test]
    fn test_custom_types_override() {
        let driver = Driver::sqlite()
            .with_type("money", ScalarType::Decimal)
            .with_type("INTEGER", ScalarType::BigInt);
        assert_eq!(driver.lookup("money"), Some(ScalarType::Decimal));
        assert_eq!(driver.lookup("integer"), Some(ScalarType::BigInt));
        assert_eq!(driver.len(), SQLITE_TYPES.len() + 1);
    }
}
