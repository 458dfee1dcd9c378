//! Configuration types for `ormshape.toml`
//!
//! A config file names the driver, optionally extends its column-type table,
//! and declares entities:
//!
//! ```toml
//! driver = "postgres"
//!
//! [column_types]
//! citext = "text"
//!
//! [[entity]]
//! name = "User"
//! columns = [
//!     { name = "id", type = "serial", primary = true, generated = true },
//!     { name = "email", type = "citext" },
//! ]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ormshape_types::{Driver, DriverKind, ScalarType};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::schema::Entity;

/// Main configuration struct for `ormshape.toml`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct OrmConfig {
    /// Database driver (sqlite, postgresql, mysql, or an alias)
    #[serde(default, deserialize_with = "driver_kind")]
    pub driver: DriverKind,
    /// Extra storage types on top of the driver's built-in table
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub column_types: BTreeMap<String, ScalarType>,
    /// Entity descriptors, in registration order
    #[serde(default, rename = "entity", skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
}

fn driver_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DriverKind, D::Error> {
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl OrmConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// The driver with any custom column types applied.
    #[must_use]
    pub fn driver(&self) -> Driver {
        self.column_types
            .iter()
            .fold(Driver::new(self.driver), |driver, (name, scalar)| {
                driver.with_type(name.as_str(), *scalar)
            })
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RelationKind;
    use ormshape_types::ValueType;

    const CONFIG: &str = r#"
driver = "pg"

[column_types]
citext = "text"

[[entity]]
name = "User"
columns = [
    { name = "id", type = "serial", primary = true, generated = true },
    { name = "email", type = "citext" },
    { name = "role", type = "text", default = "member" },
    { name = "joined", type = "timestamptz", default = { sql = "now()" } },
]
relations = [
    { name = "posts", kind = "one_to_many", reference = "Post", inverse = "author" },
]

[[entity.embeds]]
name = "profile"

[entity.embeds.entity]
name = "Profile"
columns = [{ name = "bio", type = "text", nullable = true }]

[[entity]]
name = "Post"
columns = [{ name = "id", type = "serial", primary = true }]
relations = [{ name = "author", kind = "many_to_one", reference = "User" }]
"#;

    #[test]
    fn test_parse_config() {
        let config = OrmConfig::parse(CONFIG).unwrap();
        assert_eq!(config.driver, DriverKind::PostgreSQL);
        assert_eq!(config.entities.len(), 2);

        let user = &config.entities[0];
        assert_eq!(user.columns.len(), 4);
        assert!(user.get_column("role").unwrap().has_literal_default());
        assert!(!user.get_column("joined").unwrap().has_literal_default());
        assert_eq!(user.get_relation("posts").unwrap().kind, RelationKind::OneToMany);
        assert!(user.get_embed("profile").unwrap().entity.get_column("bio").is_some());
    }

    #[test]
    fn test_custom_column_types() {
        let config = OrmConfig::parse(CONFIG).unwrap();
        let driver = config.driver();
        let user = &config.entities[0];
        assert_eq!(
            user.column_type(&driver, "email").unwrap(),
            ValueType::Scalar(ScalarType::Text)
        );
        assert!(Driver::postgres().lookup("citext").is_none());
    }

    #[test]
    fn test_defaults() {
        let config = OrmConfig::parse("").unwrap();
        assert_eq!(config.driver, DriverKind::SQLite);
        assert!(config.entities.is_empty());
    }

    #[test]
    fn test_unknown_driver() {
        let err = OrmConfig::parse("driver = \"oracle\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(ref msg) if msg.contains("oracle")));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ormshape.toml");
        std::fs::write(&path, CONFIG).unwrap();
        let config = OrmConfig::from_file(&path).unwrap();
        assert_eq!(config.entities[1].name(), "Post");

        let missing = OrmConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ConfigError::IoError(_))));
    }
}
