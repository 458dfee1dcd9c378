use ormshape::error::ConfigError;
use ormshape::prelude::*;

const BLOG: &str = r#"
driver = "turso"

[column_types]
"string" = "text"

[[entity]]
name = "User"
columns = [
    { name = "id", type = "integer", primary = true, generated = true },
    { name = "handle", type = "string" },
    { name = "karma", type = "integer", default = 0 },
]
relations = [
    { name = "posts", kind = "one_to_many", reference = "Post", inverse = "author" },
]

[[entity.embeds]]
name = "settings"

[entity.embeds.entity]
name = "Settings"
columns = [
    { name = "theme", type = "text", default = "dark" },
    { name = "beta", type = "boolean", nullable = true },
]

[[entity]]
name = "Post"
columns = [
    { name = "id", type = "integer", primary = true, generated = true },
    { name = "body", type = "text", transform = { load = "decompress", store = "compress" } },
]
relations = [{ name = "author", kind = "many_to_one", reference = "User" }]
"#;

#[test]
fn data_source_from_config() {
    let config = OrmConfig::parse(BLOG).unwrap();
    let source = DataSource::from_config(&config).unwrap();

    assert_eq!(source.driver().kind(), DriverKind::SQLite);
    assert_eq!(source.len(), 2);

    let user = source.shapes("User").unwrap();
    assert_eq!(
        user.all_paths,
        ["id", "handle", "karma", "settings.theme", "settings.beta"]
    );
    assert_eq!(
        user.default_map.to_string(),
        "{ karma: i32, settings: { theme: String } }"
    );
    assert_eq!(
        source.column_type("User", "handle").unwrap(),
        ValueType::Scalar(ScalarType::Text)
    );
}

#[test]
fn transform_is_carried_not_derived() {
    let config = OrmConfig::parse(BLOG).unwrap();
    let post = &config.entities[1];
    let body = post.get_column("body").unwrap();
    assert_eq!(body.transform.as_ref().unwrap().load, "decompress");

    let source = DataSource::from_config(&config).unwrap();
    assert_eq!(
        source.shapes("Post").unwrap().model.to_string(),
        "{ id: i32, body: String }"
    );
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ormshape.toml");
    let config = OrmConfig::parse(BLOG).unwrap();
    std::fs::write(&path, config.to_toml().unwrap()).unwrap();

    let reloaded = OrmConfig::from_file(&path).unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn broken_relation_in_config() {
    let config = OrmConfig::parse(
        r#"
[[entity]]
name = "User"
columns = [{ name = "id", type = "integer", primary = true }]
relations = [{ name = "posts", kind = "one_to_many", reference = "Post", inverse = "author" }]
"#,
    )
    .unwrap();
    assert!(matches!(
        DataSource::from_config(&config),
        Err(SchemaError::InvalidRelationReference { .. })
    ));
}

#[test]
fn malformed_config() {
    assert!(matches!(
        OrmConfig::parse("[[entity]]\ncolumns = 3"),
        Err(ConfigError::ParseError(_))
    ));

    let err: SchemaError = OrmConfig::parse("driver = 7").unwrap_err().into();
    assert!(err.to_string().starts_with("Configuration error"));
}
